//! Command-line arguments for the feed engine.
//!
//! This module defines the CLI interface using `clap`. See `main` for end-to-end usage.
use std::path::PathBuf;

use clap::Parser;

/// Parsed command-line arguments.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to a text file with the command stream.
    /// The stream is read from stdin when omitted.
    #[clap(long)]
    pub path: Option<PathBuf>,
}
