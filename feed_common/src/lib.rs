//!
//! Common types and utilities shared by the feed engine and the workload generator.
//!
//! This crate aggregates:
//! - `error` — unified error type `FeedError` used across the workspace.
//! - `result` — handy `Result<T, FeedError>` alias.
//! - `instrument` — instrument ids, domain partitioning and market records.
//! - `subscription` — subscriber kind and action vocabularies.
//! - `command` — line-oriented command payloads read by the engine.
#![warn(missing_docs)]
pub mod error;
pub mod result;
pub mod instrument;
pub mod subscription;
pub mod command;

pub use error::FeedError;
pub use result::Result;
pub use command::Command;
