//! Error types shared across the workspace.
//!
//! The `FeedError` enum unifies common failure cases for I/O, numeric
//! parsing, and serialization, allowing crates to propagate a single error
//! type. Domain-level rejections (out-of-range ids, missing records,
//! exhausted quotas) are not errors; they are modeled as plain values by the
//! engine.
use std::io;
use std::num::{ParseFloatError, ParseIntError};

use thiserror::Error;

/// Unified error type shared by the engine and the generator.
#[derive(Error, Debug)]
pub enum FeedError {
    /// I/O error originating from the standard library.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Generic formatting/validation error with a human-readable message.
    #[error("Format error: {0}")]
    Format(String),

    /// A command line that does not match the wire grammar.
    #[error("Parse command error: {0}")]
    ParseCommand(String),

    /// An integer field that failed to parse.
    #[error("Integer parse error: {0}")]
    ParseInt(#[from] ParseIntError),

    /// A float field that failed to parse.
    #[error("Float parse error: {0}")]
    ParseFloat(#[from] ParseFloatError),

    /// Failure while encoding/decoding JSON via serde_json.
    #[error("JSON serialization/deserialization error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
