//! Command-line arguments for the workload generator.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of command lines to generate.
    #[clap(long, default_value_t = 1000)]
    pub commands: u64,

    /// Number of paid subscribers in the population.
    #[clap(long, default_value_t = 5)]
    pub paid: u32,

    /// Number of free subscribers in the population.
    #[clap(long, default_value_t = 5)]
    pub free: u32,

    /// RNG seed for a reproducible stream. Seeded from the OS when omitted.
    #[clap(long)]
    pub seed: Option<u64>,
}
