//! Asset domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model representing a holding of `amount` units inside one envelope.
///
/// `envelope_id` may reference a deleted envelope; every consumer treats an
/// unresolved reference as "no envelope" rather than an error.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: String,
    pub envelope_id: String,
    pub name: String,
    /// Free-form category label ("Actions", "Crypto", "Cash", ...)
    pub category: String,
    /// Number of units held
    pub amount: Decimal,
    /// Unit price paid at acquisition
    pub buy_price: Decimal,
    /// Current unit price
    pub unit_price: Decimal,
}

impl Asset {
    /// Current market value of the holding.
    pub fn market_value(&self) -> Decimal {
        self.amount * self.unit_price
    }

    /// Unrealized gain (negative for a loss).
    pub fn unrealized_gain(&self) -> Decimal {
        self.amount * (self.unit_price - self.buy_price)
    }
}

/// Input model for creating a new asset.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewAsset {
    pub envelope_id: String,
    pub name: String,
    pub category: String,
    pub amount: Decimal,
    pub buy_price: Decimal,
    pub unit_price: Decimal,
}
