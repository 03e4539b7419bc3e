//! Regulatory constants and scoring thresholds.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// PEA contribution ceiling (EUR). Below this, French large caps belong in
/// a PEA rather than a taxable CTO.
pub const PEA_CONTRIBUTION_CEILING: Decimal = dec!(150000);

/// Livret A regulatory deposit ceiling (EUR).
pub const LIVRET_A_CEILING: Decimal = dec!(22950);

/// Months of liquid runway below which the safety cushion is considered thin.
pub const EMERGENCY_RUNWAY_MONTHS: Decimal = dec!(3);

/// Liquid share of gross assets above which cash drag penalties kick in.
pub const CASH_DRAG_THRESHOLD: Decimal = dec!(0.4);

/// Share of gross assets above which a single category counts as
/// over-concentration.
pub const CONCENTRATION_THRESHOLD: Decimal = dec!(0.6);

/// Lowercase name fragments identifying French large caps (and the CW8
/// world ETF), all of which are PEA-eligible.
pub const FRENCH_LARGE_CAP_KEYWORDS: [&str; 8] = [
    "lvmh",
    "total",
    "air liquide",
    "bnp",
    "sanofi",
    "cw8",
    "vinci",
    "axa",
];
