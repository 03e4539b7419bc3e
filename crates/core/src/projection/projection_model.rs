//! Wealth projection domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Kind of a one-time future cash event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CashEventKind {
    /// Adds to wealth and to invested capital
    Deposit,
    /// Subtracts from wealth only
    Withdrawal,
}

/// A one-time future cash event, UI-local and never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CashEvent {
    pub id: String,
    pub name: String,
    /// In how many years the event occurs (0 = this year)
    pub year_offset: u32,
    pub amount: Decimal,
    pub kind: CashEventKind,
}

/// User-tunable simulation parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionParams {
    pub monthly_savings: Decimal,
    /// Expected annual return in percent
    pub annual_return_pct: Decimal,
    /// Whole years to simulate; the output has `years + 1` points
    pub years: u32,
}

/// Snapshot of one simulated year, taken after that year's events and
/// before that year's growth and contributions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct YearSnapshot {
    /// Calendar year
    pub year: i32,
    /// Wealth at the start of the year, rounded to whole units
    pub wealth: Decimal,
    /// Cumulative invested capital, rounded to whole units
    pub invested: Decimal,
    /// Events applied this year (chart markers)
    pub events: Vec<CashEvent>,
}

/// Full projection output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WealthProjection {
    pub points: Vec<YearSnapshot>,
    /// Wealth of the last snapshot
    pub final_wealth: Decimal,
    /// final_wealth minus the last snapshot's invested capital
    pub total_gain: Decimal,
}
