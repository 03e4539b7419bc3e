//! Aggregation and scoring engine.
//!
//! One pure pass over the raw collections produces [`GlobalStats`]. There
//! is no incremental state: callers re-run the computation on every edit.
//! The engine never fails; missing envelope references degrade to "no
//! envelope" and every ratio guards its denominator.

use std::collections::HashMap;
use std::sync::Arc;

use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::assets::{Asset, AssetRepositoryTrait};
use crate::constants::FRENCH_LARGE_CAP_KEYWORDS;
use crate::envelopes::{Envelope, EnvelopeKind, EnvelopeRepositoryTrait};
use crate::errors::Result;
use crate::flows::{FlowDirection, FlowItem, FlowRepositoryTrait};
use crate::liabilities::{Liability, LiabilityRepositoryTrait};

use super::audit::{
    check_cash_drag, check_concentration, check_livret_ceiling, check_pea_headroom,
    check_safety_cushion, ScoreCard,
};
use super::stats_model::{AssetAggregates, GlobalStats};

/// Trait for the aggregation service.
pub trait StatsServiceTrait: Send + Sync {
    /// Loads the owner's collections and derives the global snapshot.
    fn global_stats(&self, owner_id: &str) -> Result<GlobalStats>;
}

fn is_french_large_cap(asset_name: &str) -> bool {
    let name = asset_name.to_lowercase();
    FRENCH_LARGE_CAP_KEYWORDS.iter().any(|k| name.contains(k))
}

/// Single pass over the assets, resolving each one's envelope at most once.
///
/// The liquidity rule is an OR over three conditions evaluated per asset,
/// so a Livret asset categorized "Cash" is still counted exactly once.
fn aggregate_assets(envelopes: &[Envelope], assets: &[Asset]) -> AssetAggregates {
    let by_id: HashMap<&str, &Envelope> = envelopes.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut agg = AssetAggregates::default();
    for asset in assets {
        let envelope = by_id.get(asset.envelope_id.as_str()).copied();
        let value = asset.market_value();
        let gain = asset.unrealized_gain();

        agg.gross_assets += value;
        *agg.allocation.entry(asset.category.clone()).or_default() += value;

        match envelope.map(|e| e.kind) {
            Some(EnvelopeKind::Pea) => agg.total_pea += value,
            Some(EnvelopeKind::Livret) => agg.total_livrets += value,
            _ => {}
        }

        // Losses carry no tax credit; an unresolved envelope carries no tax.
        if let Some(envelope) = envelope {
            if gain > Decimal::ZERO {
                agg.potential_tax += gain * envelope.kind.preset().tax_rate;
            }

            if envelope.kind == EnvelopeKind::Livret {
                if let Some(yield_rate) = envelope.yield_rate {
                    agg.annual_interest += value * (yield_rate / dec!(100));
                }
            }

            if envelope.kind == EnvelopeKind::Cto && is_french_large_cap(&asset.name) {
                agg.french_caps_in_cto = true;
            }
        }

        let liquid = envelope.map(|e| e.kind.is_liquid()).unwrap_or(false)
            || asset.category == "Cash";
        if liquid {
            agg.liquid_cash += value;
        }
    }
    agg
}

/// Derives the full [`GlobalStats`] snapshot from the raw collections.
///
/// Deterministic, side-effect free, and independent of input iteration
/// order except for the ordering of the audit entries.
pub fn compute_global_stats(
    envelopes: &[Envelope],
    assets: &[Asset],
    liabilities: &[Liability],
    incomes: &[FlowItem],
    expenses: &[FlowItem],
) -> GlobalStats {
    let agg = aggregate_assets(envelopes, assets);

    let total_debt: Decimal = liabilities.iter().map(|l| l.amount_remaining).sum();
    let net_wealth = agg.gross_assets - total_debt - agg.potential_tax;

    let total_monthly_income: Decimal = incomes.iter().map(|f| f.amount).sum();
    let total_monthly_debt_payment: Decimal = liabilities.iter().map(|l| l.monthly_payment).sum();
    let total_monthly_fixed_expenses: Decimal = expenses.iter().map(|f| f.amount).sum();
    let total_monthly_out = total_monthly_fixed_expenses + total_monthly_debt_payment;

    let debt_ratio = if total_monthly_income > Decimal::ZERO {
        total_monthly_debt_payment / total_monthly_income * dec!(100)
    } else {
        Decimal::ZERO
    };
    let savings_capacity = total_monthly_income - total_monthly_out;
    let runway_months = if total_monthly_out > Decimal::ZERO {
        agg.liquid_cash / total_monthly_out
    } else {
        Decimal::ZERO
    };

    let cash_ratio = if agg.gross_assets > Decimal::ZERO {
        agg.liquid_cash / agg.gross_assets
    } else {
        Decimal::ZERO
    };

    let mut card = ScoreCard::new();
    check_cash_drag(&mut card, cash_ratio);
    check_concentration(&mut card, &agg);
    check_pea_headroom(&mut card, &agg);
    check_safety_cushion(&mut card, runway_months);
    check_livret_ceiling(&mut card, agg.total_livrets);
    let (onyx_score, audit_logs) = card.finish();

    GlobalStats {
        gross_assets: agg.gross_assets,
        total_debt,
        potential_tax: agg.potential_tax,
        net_wealth,
        annual_interest: agg.annual_interest,
        liquid_cash: agg.liquid_cash,
        runway_months,
        debt_ratio,
        savings_capacity,
        total_monthly_income,
        total_monthly_out,
        onyx_score,
        audit_logs,
    }
}

/// Repository-backed aggregation service.
pub struct StatsService {
    envelope_repository: Arc<dyn EnvelopeRepositoryTrait>,
    asset_repository: Arc<dyn AssetRepositoryTrait>,
    liability_repository: Arc<dyn LiabilityRepositoryTrait>,
    flow_repository: Arc<dyn FlowRepositoryTrait>,
}

impl StatsService {
    pub fn new(
        envelope_repository: Arc<dyn EnvelopeRepositoryTrait>,
        asset_repository: Arc<dyn AssetRepositoryTrait>,
        liability_repository: Arc<dyn LiabilityRepositoryTrait>,
        flow_repository: Arc<dyn FlowRepositoryTrait>,
    ) -> Self {
        Self {
            envelope_repository,
            asset_repository,
            liability_repository,
            flow_repository,
        }
    }
}

impl StatsServiceTrait for StatsService {
    fn global_stats(&self, owner_id: &str) -> Result<GlobalStats> {
        let envelopes = self.envelope_repository.list(owner_id)?;
        let assets = self.asset_repository.list(owner_id)?;
        let liabilities = self.liability_repository.list(owner_id)?;
        let flows = self.flow_repository.list(owner_id)?;

        let (incomes, expenses): (Vec<FlowItem>, Vec<FlowItem>) = flows
            .into_iter()
            .partition(|f| f.direction == FlowDirection::Income);

        debug!(
            "Computing global stats: {} envelopes, {} assets, {} liabilities",
            envelopes.len(),
            assets.len(),
            liabilities.len()
        );
        Ok(compute_global_stats(
            &envelopes,
            &assets,
            &liabilities,
            &incomes,
            &expenses,
        ))
    }
}
