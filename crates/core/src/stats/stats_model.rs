//! Aggregation engine domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::audit::AuditEntry;

/// Derived snapshot of a user's whole financial situation.
///
/// Recomputed from scratch on every call; never persisted as a source of
/// truth.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GlobalStats {
    /// Sum of current asset values
    pub gross_assets: Decimal,
    /// Sum of liability principals
    pub total_debt: Decimal,
    /// Latent capital-gains tax if everything were sold today
    pub potential_tax: Decimal,
    /// gross_assets - total_debt - potential_tax
    pub net_wealth: Decimal,
    /// Annual interest earned by yielded savings books
    pub annual_interest: Decimal,
    /// Instantly-available cash
    pub liquid_cash: Decimal,
    /// Months of outflow covered by liquid cash (0 when there is no outflow)
    pub runway_months: Decimal,
    /// Monthly debt payments as a percentage of monthly income
    pub debt_ratio: Decimal,
    /// Monthly income minus monthly outflow
    pub savings_capacity: Decimal,
    pub total_monthly_income: Decimal,
    /// Fixed expenses plus debt payments
    pub total_monthly_out: Decimal,
    /// Financial health score in [0, 100]
    pub onyx_score: i32,
    /// Explainable observations behind the score
    pub audit_logs: Vec<AuditEntry>,
}

/// Internal accumulator for the single pass over assets.
#[derive(Debug, Clone, Default)]
pub struct AssetAggregates {
    pub gross_assets: Decimal,
    pub potential_tax: Decimal,
    pub annual_interest: Decimal,
    pub liquid_cash: Decimal,
    /// Value held in PEA envelopes
    pub total_pea: Decimal,
    /// Value held in Livret envelopes
    pub total_livrets: Decimal,
    /// Asset value grouped by asset-level category
    pub allocation: HashMap<String, Decimal>,
    /// Whether any PEA-eligible French large cap sits in a taxable CTO
    pub french_caps_in_cto: bool,
}
