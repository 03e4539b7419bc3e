//! Projection module - multi-year compound wealth trajectory.

mod projection_model;
mod projection_service;

pub use projection_model::{
    CashEvent, CashEventKind, ProjectionParams, WealthProjection, YearSnapshot,
};
pub use projection_service::{project_from_year, project_wealth};
