//! Property-based tests for the aggregation and projection engines.
//!
//! These verify that universal invariants hold across randomized inputs,
//! using the `proptest` crate for test case generation.

use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use onyx_core::assets::Asset;
use onyx_core::envelopes::{Envelope, EnvelopeKind};
use onyx_core::flows::{FlowDirection, FlowItem};
use onyx_core::liabilities::Liability;
use onyx_core::objectives::{resolve_linked_value, LinkKind};
use onyx_core::projection::{CashEvent, CashEventKind, ProjectionParams};
use onyx_core::{compute_global_stats, project_from_year};

// =============================================================================
// Generators
// =============================================================================

fn arb_kind() -> impl Strategy<Value = EnvelopeKind> {
    prop_oneof![
        Just(EnvelopeKind::Pea),
        Just(EnvelopeKind::Cto),
        Just(EnvelopeKind::Crypto),
        Just(EnvelopeKind::Livret),
        Just(EnvelopeKind::Immo),
        Just(EnvelopeKind::Physical),
        Just(EnvelopeKind::Bank),
    ]
}

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000).prop_map(Decimal::from)
}

fn arb_envelopes(max: usize) -> impl Strategy<Value = Vec<Envelope>> {
    proptest::collection::vec((0usize..100, arb_kind(), proptest::option::of(0u32..10)), 0..=max)
        .prop_map(|entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(i, (n, kind, yield_pct))| Envelope {
                    id: format!("env-{}", n),
                    name: format!("Enveloppe {}", i),
                    kind,
                    yield_rate: yield_pct.map(Decimal::from),
                })
                .collect()
        })
}

fn arb_assets(max: usize) -> impl Strategy<Value = Vec<Asset>> {
    proptest::collection::vec(
        (
            0usize..150, // envelope ref, often dangling
            prop_oneof![
                Just("Actions"),
                Just("Crypto"),
                Just("Cash"),
                Just("Livret"),
                Just("Immobilier")
            ],
            prop_oneof![Just("LVMH"), Just("Amundi MSCI World"), Just("Bitcoin"), Just("Euros")],
            1i64..1000,
            arb_amount(),
            arb_amount(),
        ),
        0..=max,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (env_ref, category, name, amount, buy, unit))| Asset {
                id: format!("asset-{}", i),
                envelope_id: format!("env-{}", env_ref),
                name: name.to_string(),
                category: category.to_string(),
                amount: Decimal::from(amount),
                buy_price: buy,
                unit_price: unit,
            })
            .collect()
    })
}

fn arb_liabilities(max: usize) -> impl Strategy<Value = Vec<Liability>> {
    proptest::collection::vec((arb_amount(), arb_amount()), 0..=max).prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (remaining, payment))| Liability {
                id: format!("liab-{}", i),
                name: format!("Crédit {}", i),
                amount_remaining: remaining,
                monthly_payment: payment,
                rate: dec!(1.2),
                start_date: None,
                end_date: chrono::NaiveDate::from_ymd_opt(2040, 1, 1).unwrap(),
            })
            .collect()
    })
}

fn arb_flows(direction: FlowDirection, max: usize) -> impl Strategy<Value = Vec<FlowItem>> {
    proptest::collection::vec(0i64..20_000, 0..=max).prop_map(move |amounts| {
        amounts
            .into_iter()
            .enumerate()
            .map(|(i, amount)| FlowItem {
                id: format!("flow-{}", i),
                name: format!("Flux {}", i),
                amount: Decimal::from(amount),
                direction,
                group: None,
            })
            .collect()
    })
}

fn arb_events(max: usize) -> impl Strategy<Value = Vec<CashEvent>> {
    proptest::collection::vec(
        (
            0u32..40,
            1i64..500_000,
            prop_oneof![Just(CashEventKind::Deposit), Just(CashEventKind::Withdrawal)],
        ),
        0..=max,
    )
    .prop_map(|entries| {
        entries
            .into_iter()
            .enumerate()
            .map(|(i, (offset, amount, kind))| CashEvent {
                id: format!("evt-{}", i),
                name: format!("Événement {}", i),
                year_offset: offset,
                amount: Decimal::from(amount),
                kind,
            })
            .collect()
    })
}

// =============================================================================
// Aggregation & scoring properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// The score is always within [0, 100], whatever the inputs.
    #[test]
    fn prop_score_stays_in_bounds(
        envelopes in arb_envelopes(10),
        assets in arb_assets(25),
        liabilities in arb_liabilities(5),
        incomes in arb_flows(FlowDirection::Income, 5),
        expenses in arb_flows(FlowDirection::Expense, 8),
    ) {
        let stats = compute_global_stats(&envelopes, &assets, &liabilities, &incomes, &expenses);
        prop_assert!((0..=100).contains(&stats.onyx_score));
    }

    /// netWealth == grossAssets - totalDebt - potentialTax, exactly.
    #[test]
    fn prop_net_wealth_identity(
        envelopes in arb_envelopes(10),
        assets in arb_assets(25),
        liabilities in arb_liabilities(5),
    ) {
        let stats = compute_global_stats(&envelopes, &assets, &liabilities, &[], &[]);
        prop_assert_eq!(
            stats.net_wealth,
            stats.gross_assets - stats.total_debt - stats.potential_tax
        );
    }

    /// Latent tax never rewards losses and liquidity never exceeds gross.
    #[test]
    fn prop_tax_and_liquidity_are_sane(
        envelopes in arb_envelopes(10),
        assets in arb_assets(25),
    ) {
        let stats = compute_global_stats(&envelopes, &assets, &[], &[], &[]);
        prop_assert!(stats.potential_tax >= Decimal::ZERO);
        prop_assert!(stats.liquid_cash <= stats.gross_assets);
        prop_assert!(stats.gross_assets >= Decimal::ZERO);
    }

    /// With no income and no outflow the ratio fields are exactly zero.
    #[test]
    fn prop_zero_denominators_yield_zero(
        envelopes in arb_envelopes(10),
        assets in arb_assets(25),
    ) {
        let stats = compute_global_stats(&envelopes, &assets, &[], &[], &[]);
        prop_assert_eq!(stats.debt_ratio, Decimal::ZERO);
        prop_assert_eq!(stats.runway_months, Decimal::ZERO);
    }

    /// Every deduction is explained: the score equals 100 plus the summed
    /// (non-positive) impacts, before clamping.
    #[test]
    fn prop_score_matches_audit_impacts(
        envelopes in arb_envelopes(10),
        assets in arb_assets(25),
        liabilities in arb_liabilities(5),
        incomes in arb_flows(FlowDirection::Income, 5),
        expenses in arb_flows(FlowDirection::Expense, 8),
    ) {
        let stats = compute_global_stats(&envelopes, &assets, &liabilities, &incomes, &expenses);
        let total_impact: i32 = stats.audit_logs.iter().map(|e| e.impact).sum();
        prop_assert!(total_impact <= 0);
        prop_assert_eq!(stats.onyx_score, (100 + total_impact).clamp(0, 100));
    }
}

// =============================================================================
// Projection properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// A projection over D years has exactly D+1 points with consecutive years.
    #[test]
    fn prop_projection_length_and_years(
        initial in -1_000_000i64..10_000_000,
        monthly in 0i64..5000,
        rate in 0i64..15,
        years in 0u32..40,
        events in arb_events(6),
    ) {
        let params = ProjectionParams {
            monthly_savings: Decimal::from(monthly),
            annual_return_pct: Decimal::from(rate),
            years,
        };
        let projection = project_from_year(Decimal::from(initial), &params, &events, 2026);

        prop_assert_eq!(projection.points.len(), years as usize + 1);
        for (i, point) in projection.points.iter().enumerate() {
            prop_assert_eq!(point.year, 2026 + i as i32);
        }
        let last = projection.points.last().unwrap();
        prop_assert_eq!(projection.final_wealth, last.wealth);
        prop_assert_eq!(projection.total_gain, last.wealth - last.invested);
    }

    /// Without events, invested capital grows linearly by 12 x monthly savings.
    #[test]
    fn prop_invested_is_linear_without_events(
        initial in 0i64..10_000_000,
        monthly in 0i64..5000,
        rate in 0i64..15,
        years in 0u32..40,
    ) {
        let params = ProjectionParams {
            monthly_savings: Decimal::from(monthly),
            annual_return_pct: Decimal::from(rate),
            years,
        };
        let w0 = Decimal::from(initial);
        let projection = project_from_year(w0, &params, &[], 2026);

        let annual = Decimal::from(monthly) * dec!(12);
        for (i, point) in projection.points.iter().enumerate() {
            prop_assert_eq!(point.invested, w0 + annual * Decimal::from(i as u32));
        }
    }
}

// =============================================================================
// Goal resolver properties
// =============================================================================

proptest! {
    /// An id matching neither collection resolves to Unknown with value 0.
    #[test]
    fn prop_stale_link_never_fails(
        envelopes in arb_envelopes(10),
        assets in arb_assets(25),
    ) {
        let link = resolve_linked_value("definitely-not-a-real-id", &envelopes, &assets);
        prop_assert_eq!(link.kind, LinkKind::Unknown);
        prop_assert_eq!(link.value, Decimal::ZERO);
    }
}
