//! Aggregation and scoring module.
//!
//! Derives the [`GlobalStats`] snapshot (net wealth, liquidity and debt
//! ratios, latent tax) and the explainable 0-100 score from a user's raw
//! collections.

mod audit;
mod stats_model;
mod stats_service;

pub use audit::{AuditEntry, AuditSeverity, ScoreCard};
pub use stats_model::{AssetAggregates, GlobalStats};
pub use stats_service::{compute_global_stats, StatsService, StatsServiceTrait};
