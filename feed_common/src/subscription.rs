//! Subscriber kind and action vocabularies.
//!
//! Wire tags are exact: `P`/`F` for the kind, `subscribe`/`get_data` for the
//! action. Parsing is case-sensitive; any other token is unrecognized, and
//! what to do with an unrecognized token is the engine's decision, not a
//! parse failure.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Commercial tier of a subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum SubscriberKind {
    /// Paid tier: unlimited queries. Tag `P`.
    #[strum(serialize = "P")]
    Paid,
    /// Free tier: bounded query quota. Tag `F`.
    #[strum(serialize = "F")]
    Free,
}

/// Action requested by a subscriber command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString)]
pub enum Action {
    /// Register interest in an instrument.
    #[strum(serialize = "subscribe")]
    Subscribe,
    /// Read the current record of an instrument.
    #[strum(serialize = "get_data")]
    GetData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_tags_round_trip() {
        assert_eq!("P".parse::<SubscriberKind>().unwrap(), SubscriberKind::Paid);
        assert_eq!("F".parse::<SubscriberKind>().unwrap(), SubscriberKind::Free);
        assert_eq!(SubscriberKind::Paid.to_string(), "P");
        assert_eq!(SubscriberKind::Free.to_string(), "F");
    }

    #[test]
    fn kind_tags_are_case_sensitive() {
        assert!("p".parse::<SubscriberKind>().is_err());
        assert!("f".parse::<SubscriberKind>().is_err());
        assert!("X".parse::<SubscriberKind>().is_err());
        assert!("".parse::<SubscriberKind>().is_err());
    }

    #[test]
    fn action_tokens_parse_exactly() {
        assert_eq!("subscribe".parse::<Action>().unwrap(), Action::Subscribe);
        assert_eq!("get_data".parse::<Action>().unwrap(), Action::GetData);
        assert!("Subscribe".parse::<Action>().is_err());
        assert!("fly".parse::<Action>().is_err());
    }
}
