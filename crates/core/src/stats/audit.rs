//! Audit rules behind the score.
//!
//! Each rule inspects the aggregated snapshot and may record a deduction
//! (or an informational note) on the [`ScoreCard`]. Rules are pure and run
//! in a fixed order; the final score is the clamped remainder of 100 minus
//! all penalties.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::constants::{
    CASH_DRAG_THRESHOLD, CONCENTRATION_THRESHOLD, EMERGENCY_RUNWAY_MONTHS, LIVRET_A_CEILING,
    PEA_CONTRIBUTION_CEILING,
};

use super::stats_model::AssetAggregates;

/// Severity of an audit observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditSeverity {
    Success,
    Warning,
    Danger,
    Info,
}

/// One explainable scoring observation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    /// Stable slug identifying the rule that fired
    pub id: String,
    #[serde(rename = "type")]
    pub severity: AuditSeverity,
    pub title: String,
    pub message: String,
    /// Score impact, negative for a deduction, 0 for informational entries
    pub impact: i32,
}

/// Accumulates deductions and observations while the rules run.
pub struct ScoreCard {
    score: i32,
    entries: Vec<AuditEntry>,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self {
            score: 100,
            entries: Vec::new(),
        }
    }

    /// Subtracts `penalty` points and records the matching entry.
    fn deduct(&mut self, penalty: i32, id: &str, severity: AuditSeverity, title: &str, message: String) {
        self.score -= penalty;
        self.entries.push(AuditEntry {
            id: id.to_string(),
            severity,
            title: title.to_string(),
            message,
            impact: -penalty,
        });
    }

    /// Records an observation without touching the score.
    fn note(&mut self, id: &str, severity: AuditSeverity, title: &str, message: String) {
        self.entries.push(AuditEntry {
            id: id.to_string(),
            severity,
            title: title.to_string(),
            message,
            impact: 0,
        });
    }

    /// Clamps the score to [0, 100] and returns it with the entries.
    pub fn finish(self) -> (i32, Vec<AuditEntry>) {
        (self.score.clamp(0, 100), self.entries)
    }
}

impl Default for ScoreCard {
    fn default() -> Self {
        Self::new()
    }
}

/// Too much of the portfolio sitting in cash loses to inflation.
/// Tiered penalty: 10/20/30 points above 40%/60%/80% liquid share.
pub fn check_cash_drag(card: &mut ScoreCard, cash_ratio: Decimal) {
    if cash_ratio <= CASH_DRAG_THRESHOLD {
        return;
    }
    let penalty = if cash_ratio > dec!(0.8) {
        30
    } else if cash_ratio > dec!(0.6) {
        20
    } else {
        10
    };
    let pct = (cash_ratio * dec!(100)).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    card.deduct(
        penalty,
        "cash-drag",
        AuditSeverity::Danger,
        "Érosion Monétaire",
        format!("Trop de cash ({}%). L'inflation vous appauvrit.", pct),
    );
}

/// A single category above 60% of gross assets is over-concentration,
/// unless that category is itself cash-like.
pub fn check_concentration(card: &mut ScoreCard, aggregates: &AssetAggregates) {
    if aggregates.gross_assets <= Decimal::ZERO {
        return;
    }

    let mut max_concentration = Decimal::ZERO;
    let mut dominant_category = "";
    for (category, amount) in &aggregates.allocation {
        let ratio = *amount / aggregates.gross_assets;
        if ratio > max_concentration {
            max_concentration = ratio;
            dominant_category = category.as_str();
        }
    }

    if max_concentration > CONCENTRATION_THRESHOLD
        && dominant_category != "Cash"
        && dominant_category != "Livret"
    {
        card.deduct(
            15,
            "concentration",
            AuditSeverity::Warning,
            "Diversification",
            format!("Trop exposé à {}.", dominant_category),
        );
    }
}

/// French large caps held in a taxable CTO while the PEA is not full
/// waste its tax shelter.
pub fn check_pea_headroom(card: &mut ScoreCard, aggregates: &AssetAggregates) {
    if aggregates.french_caps_in_cto && aggregates.total_pea < PEA_CONTRIBUTION_CEILING {
        card.deduct(
            10,
            "tax-placement",
            AuditSeverity::Danger,
            "Fiscalité",
            "Actions FR sur CTO alors que PEA non plein.".to_string(),
        );
    }
}

/// Less than three months of liquid runway is a thin safety cushion.
pub fn check_safety_cushion(card: &mut ScoreCard, runway_months: Decimal) {
    if runway_months < EMERGENCY_RUNWAY_MONTHS {
        card.deduct(
            10,
            "safety-cushion",
            AuditSeverity::Danger,
            "Sécurité",
            "Matelas < 3 mois.".to_string(),
        );
    }
}

/// Livret balances above twice the regulatory ceiling are worth a look;
/// informational only.
pub fn check_livret_ceiling(card: &mut ScoreCard, total_livrets: Decimal) {
    if total_livrets > LIVRET_A_CEILING * dec!(2) {
        card.note(
            "livret-ceiling",
            AuditSeverity::Info,
            "Plafonds Livrets",
            "Vérifiez les plafonds légaux.".to_string(),
        );
    }
}
