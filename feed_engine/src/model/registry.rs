//! Per-domain instrument registry.
//!
//! An `InstrumentRegistry` owns the market records and the per-instrument
//! subscriber sets for one id range. Domain partitioning is enforced purely
//! through range checks on every operation; the equity and bond registries
//! share no state.

use std::collections::{HashMap, HashSet};

use log::debug;

use feed_common::instrument::{InstrumentDomain, InstrumentId, InstrumentRecord};

/// Market records and subscriptions for a single instrument domain.
#[derive(Debug)]
pub struct InstrumentRegistry {
    domain: InstrumentDomain,
    records: HashMap<InstrumentId, InstrumentRecord>,
    subscriptions: HashMap<InstrumentId, HashSet<String>>,
}

impl InstrumentRegistry {
    /// Create an empty registry for `domain`.
    pub fn new(domain: InstrumentDomain) -> Self {
        Self {
            domain,
            records: HashMap::new(),
            subscriptions: HashMap::new(),
        }
    }

    /// Domain this registry answers for.
    pub fn domain(&self) -> InstrumentDomain {
        self.domain
    }

    /// Upsert the record for `id`. The stored record is fully replaced, not
    /// merged. Returns `false` when `id` lies outside the registry's range.
    pub fn update_price(
        &mut self,
        id: InstrumentId,
        last_traded_price: f64,
        secondary_metric: f64,
    ) -> bool {
        if InstrumentDomain::of(id) != Some(self.domain) {
            debug!("{} registry rejected update for instrument {}", self.domain, id);
            return false;
        }
        debug!(
            "instrument {} updated: price {}, {} {}",
            id,
            last_traded_price,
            self.domain.secondary_metric(),
            secondary_metric
        );
        self.records
            .insert(id, InstrumentRecord::new(last_traded_price, secondary_metric));
        true
    }

    /// Add `subscriber_id` to the subscriber set of `id`. Re-subscribing is
    /// a no-op, not an error. Returns `false` when `id` is out of range.
    pub fn subscribe(&mut self, subscriber_id: &str, id: InstrumentId) -> bool {
        if InstrumentDomain::of(id) != Some(self.domain) {
            debug!("{} registry rejected subscription for instrument {}", self.domain, id);
            return false;
        }
        self.subscriptions
            .entry(id)
            .or_default()
            .insert(subscriber_id.to_string());
        true
    }

    /// Current record of `id`, visible to `subscriber_id` only.
    ///
    /// `None` when the id is out of range, no record exists, or the
    /// subscriber is not in the id's set. Never mutates the registry.
    pub fn query(&self, subscriber_id: &str, id: InstrumentId) -> Option<&InstrumentRecord> {
        if InstrumentDomain::of(id) != Some(self.domain) {
            return None;
        }
        let record = self.records.get(&id)?;
        let subscribed = self
            .subscriptions
            .get(&id)
            .is_some_and(|set| set.contains(subscriber_id));
        subscribed.then_some(record)
    }
}
