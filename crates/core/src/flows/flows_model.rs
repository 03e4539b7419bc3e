//! Recurring cash-flow domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Direction of a recurring monthly flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlowDirection {
    Income,
    Expense,
}

/// Domain model for a recurring monthly cash movement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FlowItem {
    pub id: String,
    pub name: String,
    pub amount: Decimal,
    pub direction: FlowDirection,
    /// Optional grouping label ("Salaire", "Logement", ...)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
}

/// Input model for creating a new flow item.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewFlowItem {
    pub name: String,
    pub amount: Decimal,
    pub direction: FlowDirection,
    pub group: Option<String>,
}
