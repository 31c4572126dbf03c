//! Domain models for the feed engine.
//!
//! This module groups the state owned by the command processor:
//! - `registry` — per-domain instrument records and subscription sets.
//! - `subscriber` — paid/free subscriber variants and quota bookkeeping.
//! - `directory` — identity to subscriber mapping with the type-lock rule.

pub mod directory;
pub mod registry;
pub mod subscriber;
