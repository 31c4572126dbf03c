//! Instrument identity, domain partitioning and market records.
//!
//! Instrument ids are partitioned into two disjoint domains: equities occupy
//! `[0, 1000)` and bonds `[1000, 2000)`. Ids outside both ranges never carry
//! data. `InstrumentDomain` owns the partitioning rules; `InstrumentRecord`
//! is the market payload held per instrument.

use std::ops::Range;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// Identifier of a tradable instrument.
pub type InstrumentId = u64;

/// Market domain an instrument id belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[strum(serialize_all = "lowercase")]
pub enum InstrumentDomain {
    /// Equities, ids in `[0, 1000)`.
    Equity,
    /// Bonds, ids in `[1000, 2000)`.
    Bond,
}

impl InstrumentDomain {
    /// Id range carrying equity data.
    pub const EQUITY_IDS: Range<InstrumentId> = 0..1000;
    /// Id range carrying bond data.
    pub const BOND_IDS: Range<InstrumentId> = 1000..2000;

    /// Total routing rule: ids below the bond range go to the equity side,
    /// everything else to the bond side. Routing decides which registry
    /// answers for an id, not whether the id is valid.
    pub fn route(id: InstrumentId) -> Self {
        if id < Self::BOND_IDS.start {
            InstrumentDomain::Equity
        } else {
            InstrumentDomain::Bond
        }
    }

    /// Domain an id actually belongs to, `None` outside both ranges.
    pub fn of(id: InstrumentId) -> Option<Self> {
        let domain = Self::route(id);
        domain.contains(id).then_some(domain)
    }

    /// Whether `id` lies inside this domain's range.
    pub fn contains(&self, id: InstrumentId) -> bool {
        match self {
            InstrumentDomain::Equity => Self::EQUITY_IDS.contains(&id),
            InstrumentDomain::Bond => Self::BOND_IDS.contains(&id),
        }
    }

    /// Name of the secondary metric carried by records in this domain.
    pub fn secondary_metric(&self) -> &'static str {
        match self {
            InstrumentDomain::Equity => "lastDayVolume",
            InstrumentDomain::Bond => "bondYield",
        }
    }
}

/// Market data held for a single instrument.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstrumentRecord {
    /// Last traded price.
    pub last_traded_price: f64,
    /// Domain-specific metric: daily volume for equities, yield for bonds.
    pub secondary_metric: f64,
    /// UTC timestamp in milliseconds of the update that produced this record.
    pub updated_at: u64,
}

impl InstrumentRecord {
    /// Build a record stamped with the current UTC time.
    pub fn new(last_traded_price: f64, secondary_metric: f64) -> Self {
        InstrumentRecord {
            last_traded_price,
            secondary_metric,
            updated_at: Utc::now().timestamp_millis() as u64,
        }
    }
}
