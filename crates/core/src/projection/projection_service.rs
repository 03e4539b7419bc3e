//! Compound wealth projection.
//!
//! Simulates `years + 1` calendar years starting from current net wealth.
//! Each iteration applies that year's one-time events, records the
//! snapshot, then grows wealth by the annual return and adds the
//! annualized monthly savings. The snapshot therefore shows the balance
//! at the start of the year including any event occurring then, but
//! excluding that year's growth. A growth-then-events ordering would
//! change every downstream number; the ordering here is contractual.
//!
//! Wealth is allowed to go negative when withdrawals exceed funds.

use chrono::{Datelike, Utc};
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use super::projection_model::{
    CashEvent, CashEventKind, ProjectionParams, WealthProjection, YearSnapshot,
};

fn round_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Projects wealth from an explicit starting calendar year.
pub fn project_from_year(
    initial_wealth: Decimal,
    params: &ProjectionParams,
    events: &[CashEvent],
    start_year: i32,
) -> WealthProjection {
    let mut wealth = initial_wealth;
    let mut invested = initial_wealth;
    let annual_savings = params.monthly_savings * dec!(12);

    let mut points = Vec::with_capacity(params.years as usize + 1);

    for offset in 0..=params.years {
        let year_events: Vec<CashEvent> = events
            .iter()
            .filter(|e| e.year_offset == offset)
            .cloned()
            .collect();

        for event in &year_events {
            match event.kind {
                CashEventKind::Withdrawal => wealth -= event.amount,
                CashEventKind::Deposit => {
                    wealth += event.amount;
                    invested += event.amount;
                }
            }
        }

        points.push(YearSnapshot {
            year: start_year + offset as i32,
            wealth: round_unit(wealth),
            invested: round_unit(invested),
            events: year_events,
        });

        // Growth and contributions feeding the next year's snapshot; the
        // last iteration's result is intentionally discarded.
        wealth += wealth * (params.annual_return_pct / dec!(100));
        wealth += annual_savings;
        invested += annual_savings;
    }

    // The loop runs at least once, so last() is always present.
    let (final_wealth, total_gain) = points
        .last()
        .map(|last| (last.wealth, last.wealth - last.invested))
        .unwrap_or((Decimal::ZERO, Decimal::ZERO));

    WealthProjection {
        points,
        final_wealth,
        total_gain,
    }
}

/// Projects wealth starting from the current UTC calendar year.
pub fn project_wealth(
    initial_wealth: Decimal,
    params: &ProjectionParams,
    events: &[CashEvent],
) -> WealthProjection {
    project_from_year(initial_wealth, params, events, Utc::now().year())
}
