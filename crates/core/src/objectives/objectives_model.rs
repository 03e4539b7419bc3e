//! Objective domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a savings goal.
///
/// Progress is derived from the current values of the envelopes/assets
/// referenced by `linked_ids`; stale ids are tolerated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    pub id: String,
    pub name: String,
    pub target_amount: Decimal,
    /// Ids of linked envelopes or assets
    pub linked_ids: Vec<String>,
}

/// Input model for creating a new objective.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewObjective {
    pub name: String,
    pub target_amount: Decimal,
    pub linked_ids: Vec<String>,
}

/// What a linked id resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    Envelope,
    Asset,
    /// The id matches neither collection (stale or deleted record)
    Unknown,
}

/// Per-id breakdown entry of an objective's progress.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LinkedValue {
    pub id: String,
    pub name: String,
    pub kind: LinkKind,
    pub value: Decimal,
}

/// Resolved progress of one objective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectiveProgress {
    pub objective_id: String,
    /// Sum of all resolved linked values
    pub current_value: Decimal,
    /// Progress toward `target_amount`, capped at 100
    pub percent: Decimal,
    pub breakdown: Vec<LinkedValue>,
}
