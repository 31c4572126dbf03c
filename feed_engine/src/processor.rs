//! Single-pass command stream processor.
//!
//! `CommandProcessor` owns the two registries and the subscriber directory
//! as plain values and drives the whole run: read the declared command
//! count, then handle exactly that many lines in input order, writing one
//! result line per data query. Malformed lines are logged and skipped, never
//! reinterpreted as a different valid command; unrecognized actions are
//! ignored before any state is touched.

use std::io::{BufRead, Write};

use log::{debug, info, warn};
use serde::Serialize;

use feed_common::command::{Command, PriceUpdate, SubscriberAction};
use feed_common::instrument::{InstrumentDomain, InstrumentId};
use feed_common::subscription::Action;
use feed_common::{FeedError, Result};

use crate::model::directory::SubscriberDirectory;
use crate::model::registry::InstrumentRegistry;

/// Counters accumulated over one run, logged as JSON when the run ends.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RunSummary {
    /// Well-formed command lines handled, including ignored actions.
    pub commands: u64,
    /// Price updates accepted by a registry.
    pub price_updates: u64,
    /// Price updates rejected for an out-of-range id.
    pub rejected_updates: u64,
    /// Subscriptions accepted by a registry.
    pub subscriptions: u64,
    /// Data queries answered with a record.
    pub queries_served: u64,
    /// Data queries answered with invalid_request.
    pub queries_rejected: u64,
    /// Commands ignored for an unrecognized action.
    pub ignored_actions: u64,
    /// Lines skipped as malformed.
    pub malformed_lines: u64,
}

/// Drives one batch run of the command stream.
#[derive(Debug)]
pub struct CommandProcessor {
    equities: InstrumentRegistry,
    bonds: InstrumentRegistry,
    directory: SubscriberDirectory,
    summary: RunSummary,
}

impl Default for CommandProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandProcessor {
    /// Create a processor with empty registries and an empty directory.
    pub fn new() -> Self {
        Self {
            equities: InstrumentRegistry::new(InstrumentDomain::Equity),
            bonds: InstrumentRegistry::new(InstrumentDomain::Bond),
            directory: SubscriberDirectory::new(),
            summary: RunSummary::default(),
        }
    }

    /// Process the whole stream from `input`, writing query results to `out`.
    ///
    /// The first line declares how many command lines follow; exactly that
    /// many are read, trailing input is never touched. Returns the
    /// accumulated run summary.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<RunSummary> {
        let mut lines = input.lines();
        let declared = match lines.next() {
            Some(first) => parse_command_count(&first?)?,
            None => return Err(FeedError::Format(String::from("empty command stream"))),
        };
        debug!("command stream declares {} lines", declared);

        for read in 0..declared {
            let Some(line) = lines.next() else {
                warn!("command stream ended after {} of {} lines", read, declared);
                break;
            };
            match line?.parse::<Command>() {
                Ok(command) => {
                    self.summary.commands += 1;
                    self.dispatch(command, out)?;
                }
                Err(err) => {
                    self.summary.malformed_lines += 1;
                    warn!("skipping malformed command line: {}", err);
                }
            }
        }

        info!("run complete: {}", serde_json::to_string(&self.summary)?);
        Ok(self.summary.clone())
    }

    fn dispatch<W: Write>(&mut self, command: Command, out: &mut W) -> Result<()> {
        match command {
            Command::PriceUpdate(update) => {
                self.publish(update);
                Ok(())
            }
            Command::SubscriberAction(action) => self.handle_action(action, out),
        }
    }

    /// Route the update to the registry answering for the id range.
    /// Publishing is silent; rejections only show up in the summary.
    fn publish(&mut self, update: PriceUpdate) {
        let registry = self.registry_for(update.instrument_id);
        if registry.update_price(
            update.instrument_id,
            update.last_traded_price,
            update.secondary_metric,
        ) {
            self.summary.price_updates += 1;
        } else {
            self.summary.rejected_updates += 1;
        }
    }

    fn handle_action<W: Write>(&mut self, action: SubscriberAction, out: &mut W) -> Result<()> {
        let Ok(verb) = action.action.parse::<Action>() else {
            debug!(
                "ignoring unrecognized action {:?} from {}",
                action.action, action.subscriber_id
            );
            self.summary.ignored_actions += 1;
            return Ok(());
        };

        // The registry is selected by the routing rule alone; whether the id
        // is valid for it is that registry's decision.
        let registry = match InstrumentDomain::route(action.instrument_id) {
            InstrumentDomain::Equity => &mut self.equities,
            InstrumentDomain::Bond => &mut self.bonds,
        };
        let resolved = self
            .directory
            .resolve(&action.subscriber_id, &action.requested_tag);

        match verb {
            Action::Subscribe => {
                if let Some(subscriber) = resolved {
                    if subscriber.subscribe_to(registry, action.instrument_id) {
                        self.summary.subscriptions += 1;
                    }
                }
            }
            Action::GetData => {
                let record = resolved
                    .and_then(|subscriber| subscriber.query(registry, action.instrument_id));
                match record {
                    Some(record) => {
                        writeln!(
                            out,
                            "{},{},{},{:.6},{:.6}",
                            action.requested_tag,
                            action.subscriber_id,
                            action.instrument_id,
                            record.last_traded_price,
                            record.secondary_metric,
                        )?;
                        self.summary.queries_served += 1;
                    }
                    None => {
                        writeln!(
                            out,
                            "{},{},{},invalid_request",
                            action.requested_tag, action.subscriber_id, action.instrument_id
                        )?;
                        self.summary.queries_rejected += 1;
                    }
                }
            }
        }
        Ok(())
    }

    fn registry_for(&mut self, id: InstrumentId) -> &mut InstrumentRegistry {
        match InstrumentDomain::route(id) {
            InstrumentDomain::Equity => &mut self.equities,
            InstrumentDomain::Bond => &mut self.bonds,
        }
    }
}

/// Parse the leading count line of the stream. A malformed count is fatal:
/// without it the rest of the stream cannot be framed.
fn parse_command_count(line: &str) -> Result<u64> {
    line.trim()
        .parse::<u64>()
        .map_err(|_| FeedError::Format(format!("invalid command count: {:?}", line)))
}
