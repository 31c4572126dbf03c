//! Line-oriented command payloads read by the engine.
//!
//! The stream starts with a count line followed by one command per line:
//!
//! ```text
//! P <instrumentId> <price> <secondary>
//! S <type> <subscriberId> <action> <instrumentId>
//! ```
//!
//! The subscriber type tag and the action are kept as raw tokens at this
//! layer: an unrecognized tag or action is still a well-formed command whose
//! handling (invalid-request output, silent ignore) belongs to the engine.
//! A line that matches neither shape, or carries the wrong number of tokens,
//! is rejected so it can never be misread as a different valid command.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::FeedError;
use crate::instrument::InstrumentId;

/// Discriminator token for price-update lines.
pub const PRICE_UPDATE: &str = "P";
/// Discriminator token for subscriber-action lines.
pub const SUBSCRIBER_ACTION: &str = "S";

/// Price update published for one instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceUpdate {
    /// Target instrument.
    pub instrument_id: InstrumentId,
    /// New last traded price.
    pub last_traded_price: f64,
    /// Domain-specific metric: volume for equities, yield for bonds.
    pub secondary_metric: f64,
}

/// Subscribe/query request issued on behalf of a subscriber identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriberAction {
    /// Requested subscriber type tag, exactly as given on the wire.
    pub requested_tag: String,
    /// Subscriber identity.
    pub subscriber_id: String,
    /// Requested action token, exactly as given on the wire.
    pub action: String,
    /// Target instrument.
    pub instrument_id: InstrumentId,
}

/// One line of the command stream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// `P ...` line. Publishing is silent.
    PriceUpdate(PriceUpdate),
    /// `S ...` line.
    SubscriberAction(SubscriberAction),
}

impl FromStr for Command {
    type Err = FeedError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        match tokens.as_slice() {
            [PRICE_UPDATE, id, price, secondary] => Ok(Command::PriceUpdate(PriceUpdate {
                instrument_id: id.parse()?,
                last_traded_price: price.parse()?,
                secondary_metric: secondary.parse()?,
            })),
            [SUBSCRIBER_ACTION, tag, subscriber, action, id] => {
                Ok(Command::SubscriberAction(SubscriberAction {
                    requested_tag: (*tag).to_string(),
                    subscriber_id: (*subscriber).to_string(),
                    action: (*action).to_string(),
                    instrument_id: id.parse()?,
                }))
            }
            [] => Err(FeedError::ParseCommand(String::from("empty command line"))),
            _ => Err(FeedError::ParseCommand(format!(
                "unrecognized command line: {:?}",
                line
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_price_update() {
        let command = "P 5 100.0 2000".parse::<Command>().unwrap();
        assert_eq!(
            command,
            Command::PriceUpdate(PriceUpdate {
                instrument_id: 5,
                last_traded_price: 100.0,
                secondary_metric: 2000.0,
            })
        );
    }

    #[test]
    fn parses_subscriber_action() {
        let command = "S F B1 subscribe 1500".parse::<Command>().unwrap();
        assert_eq!(
            command,
            Command::SubscriberAction(SubscriberAction {
                requested_tag: String::from("F"),
                subscriber_id: String::from("B1"),
                action: String::from("subscribe"),
                instrument_id: 1500,
            })
        );
    }

    #[test]
    fn unrecognized_tag_and_action_still_parse() {
        let command = "S X A1 fly 5".parse::<Command>().unwrap();
        let Command::SubscriberAction(action) = command else {
            panic!("expected a subscriber action");
        };
        assert_eq!(action.requested_tag, "X");
        assert_eq!(action.action, "fly");
    }

    #[test]
    fn rejects_wrong_token_counts() {
        assert!("P 5 100.0".parse::<Command>().is_err());
        assert!("P 5 100.0 2000 7".parse::<Command>().is_err());
        assert!("S P A1 get_data".parse::<Command>().is_err());
        assert!("S P A1 get_data 5 9".parse::<Command>().is_err());
        assert!("".parse::<Command>().is_err());
        assert!("   ".parse::<Command>().is_err());
    }

    #[test]
    fn rejects_non_numeric_fields() {
        assert!("P abc 100.0 2000".parse::<Command>().is_err());
        assert!("P 5 abc 2000".parse::<Command>().is_err());
        assert!("P 5 100.0 abc".parse::<Command>().is_err());
        assert!("S P A1 get_data abc".parse::<Command>().is_err());
        assert!("P -5 100.0 2000".parse::<Command>().is_err());
    }

    #[test]
    fn rejects_unknown_discriminators() {
        assert!("Q 1 2 3".parse::<Command>().is_err());
        assert!("p 5 100.0 2000".parse::<Command>().is_err());
    }

    #[test]
    fn tolerates_extra_whitespace_between_tokens() {
        let command = "  P   5  100.0   2000  ".parse::<Command>().unwrap();
        assert!(matches!(command, Command::PriceUpdate(_)));
    }
}
