//! Paid and free subscriber variants.
//!
//! Exactly two subscriber tiers exist, so they form a closed sum type. A
//! `Free` subscriber carries a bounded query quota: the quota is spent only
//! by successful queries and is never replenished. Subscribing never touches
//! local state on either variant.

use log::debug;

use feed_common::instrument::{InstrumentId, InstrumentRecord};
use feed_common::subscription::SubscriberKind;

use crate::model::registry::InstrumentRegistry;

/// Number of successful queries a free subscriber may make over a run.
pub const FREE_QUERY_QUOTA: u32 = 100;

/// A market-data subscriber.
#[derive(Debug)]
pub enum Subscriber {
    /// Paid tier: unlimited queries.
    Paid {
        /// Globally unique subscriber identity.
        identity: String,
    },
    /// Free tier: at most `FREE_QUERY_QUOTA` successful queries.
    Free {
        /// Globally unique subscriber identity.
        identity: String,
        /// Successful queries still available.
        remaining_quota: u32,
    },
}

impl Subscriber {
    /// Create a subscriber of the given kind with a fresh quota.
    pub fn new(kind: SubscriberKind, identity: &str) -> Self {
        match kind {
            SubscriberKind::Paid => Subscriber::Paid {
                identity: identity.to_string(),
            },
            SubscriberKind::Free => Subscriber::Free {
                identity: identity.to_string(),
                remaining_quota: FREE_QUERY_QUOTA,
            },
        }
    }

    /// Subscriber identity.
    pub fn identity(&self) -> &str {
        match self {
            Subscriber::Paid { identity } | Subscriber::Free { identity, .. } => identity,
        }
    }

    /// Fixed tier of this subscriber.
    pub fn kind(&self) -> SubscriberKind {
        match self {
            Subscriber::Paid { .. } => SubscriberKind::Paid,
            Subscriber::Free { .. } => SubscriberKind::Free,
        }
    }

    /// Successful queries still available, `None` for unmetered tiers.
    pub fn remaining_quota(&self) -> Option<u32> {
        match self {
            Subscriber::Paid { .. } => None,
            Subscriber::Free { remaining_quota, .. } => Some(*remaining_quota),
        }
    }

    /// Register interest in `id`. Forwards to the registry and returns its
    /// result unchanged.
    pub fn subscribe_to(&self, registry: &mut InstrumentRegistry, id: InstrumentId) -> bool {
        registry.subscribe(self.identity(), id)
    }

    /// Entitled read of the record for `id`.
    ///
    /// A free subscriber with an exhausted quota fails immediately, without
    /// reaching the registry. Otherwise the registry decides, and only a
    /// successful read spends quota.
    pub fn query(
        &mut self,
        registry: &InstrumentRegistry,
        id: InstrumentId,
    ) -> Option<InstrumentRecord> {
        match self {
            Subscriber::Paid { identity } => registry.query(identity, id).cloned(),
            Subscriber::Free {
                identity,
                remaining_quota,
            } => {
                if *remaining_quota == 0 {
                    debug!("free subscriber {} has exhausted its query quota", identity);
                    return None;
                }
                let record = registry.query(identity, id).cloned();
                if record.is_some() {
                    *remaining_quota -= 1;
                }
                record
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use feed_common::instrument::InstrumentDomain;

    fn equity_registry_with_record(subscriber_id: &str) -> InstrumentRegistry {
        let mut registry = InstrumentRegistry::new(InstrumentDomain::Equity);
        registry.update_price(5, 100.0, 2000.0);
        registry.subscribe(subscriber_id, 5);
        registry
    }

    #[test]
    fn paid_queries_are_unlimited() {
        let registry = equity_registry_with_record("A1");
        let mut paid = Subscriber::new(SubscriberKind::Paid, "A1");

        for _ in 0..150 {
            assert!(paid.query(&registry, 5).is_some());
        }
        assert_eq!(paid.remaining_quota(), None);
        assert_eq!(paid.kind(), SubscriberKind::Paid);
    }

    #[test]
    fn free_quota_spends_only_on_success() {
        let registry = equity_registry_with_record("F1");
        let mut free = Subscriber::new(SubscriberKind::Free, "F1");
        assert_eq!(free.remaining_quota(), Some(FREE_QUERY_QUOTA));

        // A failed query (no subscription for this id) leaves quota intact.
        assert!(free.query(&registry, 6).is_none());
        assert_eq!(free.remaining_quota(), Some(FREE_QUERY_QUOTA));

        assert!(free.query(&registry, 5).is_some());
        assert_eq!(free.remaining_quota(), Some(FREE_QUERY_QUOTA - 1));
    }

    #[test]
    fn free_quota_floors_at_zero() {
        let registry = equity_registry_with_record("F1");
        let mut free = Subscriber::new(SubscriberKind::Free, "F1");

        for _ in 0..FREE_QUERY_QUOTA {
            assert!(free.query(&registry, 5).is_some());
        }
        assert_eq!(free.remaining_quota(), Some(0));

        // The 101st otherwise-valid query is refused and quota stays at zero.
        assert!(free.query(&registry, 5).is_none());
        assert_eq!(free.remaining_quota(), Some(0));
    }

    #[test]
    fn repeated_failures_never_spend_quota() {
        let registry = InstrumentRegistry::new(InstrumentDomain::Equity);
        let mut free = Subscriber::new(SubscriberKind::Free, "F1");

        for _ in 0..200 {
            assert!(free.query(&registry, 5).is_none());
        }
        assert_eq!(free.remaining_quota(), Some(FREE_QUERY_QUOTA));
    }

    #[test]
    fn subscribe_forwards_without_touching_quota() {
        let mut registry = InstrumentRegistry::new(InstrumentDomain::Equity);
        registry.update_price(5, 100.0, 2000.0);
        let mut free = Subscriber::new(SubscriberKind::Free, "F1");

        assert!(free.subscribe_to(&mut registry, 5));
        assert!(!free.subscribe_to(&mut registry, 1500));
        assert_eq!(free.remaining_quota(), Some(FREE_QUERY_QUOTA));
        assert!(free.query(&registry, 5).is_some());
    }
}
