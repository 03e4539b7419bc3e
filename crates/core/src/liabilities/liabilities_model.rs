//! Liability domain models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing an outstanding debt.
///
/// Contributes to net worth (subtracted) and to the monthly outflow via its
/// `monthly_payment`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Liability {
    pub id: String,
    pub name: String,
    /// Principal still owed
    pub amount_remaining: Decimal,
    pub monthly_payment: Decimal,
    /// Annual interest rate in percent
    pub rate: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    pub end_date: NaiveDate,
}

/// Input model for creating a new liability.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewLiability {
    pub name: String,
    pub amount_remaining: Decimal,
    pub monthly_payment: Decimal,
    pub rate: Decimal,
    pub start_date: Option<NaiveDate>,
    pub end_date: NaiveDate,
}
