//! Market-data entitlement feed engine.
//!
//! This binary reads a line-oriented command stream (stdin by default, or a
//! file via `--path`), runs it through the `CommandProcessor`, and prints one
//! result line per data query on stdout. Internally it wires together three
//! building blocks:
//!
//! - two `InstrumentRegistry` instances — equity and bond — each owning the
//!   records and subscription sets for its own id range;
//! - a `SubscriberDirectory` — the identity to subscriber mapping enforcing
//!   the type-lock rule;
//! - the `CommandProcessor` — the single-pass dispatch loop over the stream.
//!
//! The run is strictly batch: commands are handled in input order, one at a
//! time, and the process exits when the declared count has been consumed.
//! Diagnostics go to stderr via `env_logger`; stdout carries nothing but the
//! query result lines.
//!
//! Usage example (CLI):
//! ```bash
//! feed_engine --path ./commands.txt
//! feed_gen --commands 1000 --seed 42 | feed_engine
//! ```
#![warn(missing_docs)]
mod args;
mod model;
mod processor;

use std::fs::File;
use std::io::{self, BufReader};

use clap::Parser;
use log::info;

use feed_common::FeedError;
use feed_common::Result;

use crate::args::Args;
use crate::processor::CommandProcessor;

fn main() -> Result<(), FeedError> {
    init_logger();
    let args = Args::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut processor = CommandProcessor::new();

    let summary = match args.path {
        Some(path) => {
            info!("reading command stream from {}", path.display());
            let file = File::open(&path)?;
            processor.run(BufReader::new(file), &mut out)?
        }
        None => {
            let stdin = io::stdin();
            let locked = stdin.lock();
            processor.run(locked, &mut out)?
        }
    };

    info!(
        "served {} queries out of {} commands",
        summary.queries_served, summary.commands
    );
    Ok(())
}

fn init_logger() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();
}
