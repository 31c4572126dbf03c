//! Synthetic workload generator for the feed engine.
//!
//! Emits a count line followed by that many syntactically valid commands:
//! price updates random-walking around per-instrument last prices, plus
//! subscribe/get_data actions from a fixed population of paid and free
//! subscribers. A small share of instrument ids falls outside both domain
//! ranges so the rejection paths get exercised too. Pipe the output into
//! `feed_engine`:
//!
//! ```bash
//! feed_gen --commands 10000 --seed 42 | feed_engine
//! ```
#![warn(missing_docs)]
mod args;

use std::collections::HashMap;
use std::io::{self, Write};

use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use feed_common::instrument::{InstrumentDomain, InstrumentId};
use feed_common::subscription::SubscriberKind;
use feed_common::{FeedError, Result};

use crate::args::Args;

/// Starting price for instruments that have not traded yet.
const INITIAL_PRICE: f64 = 100.0;

fn main() -> Result<(), FeedError> {
    init_logger();
    let args = Args::parse();

    let population = build_population(args.paid, args.free);
    if population.is_empty() {
        return Err(FeedError::Format(String::from(
            "at least one paid or free subscriber is required",
        )));
    }

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_stream(&mut out, &mut rng, args.commands, &population)?;

    info!(
        "generated {} commands over {} subscribers",
        args.commands,
        population.len()
    );
    Ok(())
}

/// Fixed subscriber population: `P1..Pn` paid, `F1..Fn` free.
fn build_population(paid: u32, free: u32) -> Vec<(SubscriberKind, String)> {
    let mut population = Vec::with_capacity((paid + free) as usize);
    for i in 0..paid {
        population.push((SubscriberKind::Paid, format!("P{}", i + 1)));
    }
    for i in 0..free {
        population.push((SubscriberKind::Free, format!("F{}", i + 1)));
    }
    population
}

/// Write the count line and `commands` random command lines to `out`.
///
/// The mix is roughly 40% price updates, 30% subscriptions, 30% queries.
/// Every emitted line is well-formed input for the engine.
fn write_stream<W: Write, R: Rng>(
    out: &mut W,
    rng: &mut R,
    commands: u64,
    population: &[(SubscriberKind, String)],
) -> Result<()> {
    writeln!(out, "{}", commands)?;

    let mut last_prices: HashMap<InstrumentId, f64> = HashMap::new();
    for _ in 0..commands {
        let id = next_instrument(rng);
        match rng.random_range(0..10) {
            0..=3 => {
                let price = next_price(rng, last_prices.get(&id).copied());
                last_prices.insert(id, price);
                let secondary = next_secondary(rng, id);
                writeln!(out, "P {} {:.4} {:.4}", id, price, secondary)?;
            }
            4..=6 => {
                let (kind, name) = &population[rng.random_range(0..population.len())];
                writeln!(out, "S {} {} subscribe {}", kind, name, id)?;
            }
            _ => {
                let (kind, name) = &population[rng.random_range(0..population.len())];
                writeln!(out, "S {} {} get_data {}", kind, name, id)?;
            }
        }
    }
    Ok(())
}

/// Mostly in-range ids with a small out-of-range share.
fn next_instrument<R: Rng>(rng: &mut R) -> InstrumentId {
    if rng.random_range(0..20) == 0 {
        rng.random_range(InstrumentDomain::BOND_IDS.end..InstrumentDomain::BOND_IDS.end + 100)
    } else {
        rng.random_range(0..InstrumentDomain::BOND_IDS.end)
    }
}

/// Small random walk around the last price, clamped away from zero.
fn next_price<R: Rng>(rng: &mut R, current: Option<f64>) -> f64 {
    let current = current.unwrap_or(INITIAL_PRICE);
    let change: f64 = rng.random_range(-0.01..0.01);
    (current * (1.0 + change)).max(0.01)
}

/// Secondary metric in a plausible range for the id's domain: volume for
/// equities, yield for bonds.
fn next_secondary<R: Rng>(rng: &mut R, id: InstrumentId) -> f64 {
    match InstrumentDomain::route(id) {
        InstrumentDomain::Equity => rng.random_range(100..10_000) as f64,
        InstrumentDomain::Bond => rng.random_range(0.5..8.0),
    }
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
