//! Onyx Core - Domain entities, services, and traits.
//!
//! This crate contains the core business logic for Onyx: the aggregation
//! and scoring engine, the wealth projection engine, and the goal-progress
//! resolver. It is storage-agnostic and defines repository traits that are
//! implemented by the `storage-memory` crate.

pub mod assets;
pub mod constants;
pub mod envelopes;
pub mod errors;
pub mod flows;
pub mod liabilities;
pub mod objectives;
pub mod projection;
pub mod stats;

// Re-export common types from the engine modules
pub use projection::*;
pub use stats::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
