//! Identity to subscriber mapping with the type-lock rule.
//!
//! Entries are created lazily the first time an identity appears together
//! with a recognized type tag, and persist for the rest of the run. Once an
//! identity is bound to a tier, a command naming the same identity with any
//! other tag resolves to nothing and mutates nothing.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::str::FromStr;

use log::debug;

use feed_common::subscription::SubscriberKind;

use crate::model::subscriber::Subscriber;

/// Process-wide directory of all subscribers seen so far.
#[derive(Debug, Default)]
pub struct SubscriberDirectory {
    entries: HashMap<String, Subscriber>,
}

impl SubscriberDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of known identities.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no identity has been seen yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolve `identity` under the requested type tag.
    ///
    /// An unrecognized tag never resolves and never creates an entry. A
    /// recognized tag creates the subscriber on first sight; afterwards it
    /// resolves only while it matches the tier the identity is locked to.
    pub fn resolve(&mut self, identity: &str, requested_tag: &str) -> Option<&mut Subscriber> {
        let requested = SubscriberKind::from_str(requested_tag).ok()?;
        match self.entries.entry(identity.to_string()) {
            Entry::Occupied(entry) => {
                let subscriber = entry.into_mut();
                if subscriber.kind() == requested {
                    Some(subscriber)
                } else {
                    debug!(
                        "identity {} is locked to {}, refusing tag {}",
                        identity,
                        subscriber.kind(),
                        requested_tag
                    );
                    None
                }
            }
            Entry::Vacant(slot) => Some(slot.insert(Subscriber::new(requested, identity))),
        }
    }
}
