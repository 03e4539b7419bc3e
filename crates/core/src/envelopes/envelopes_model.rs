//! Envelope domain models.
//!
//! An envelope is a financial wrapper (brokerage account, savings book,
//! property, crypto wallet...) with a fixed French tax treatment. The tax
//! treatment is a static preset keyed by the closed [`EnvelopeKind`] enum,
//! so adding a kind without its preset is a compile error.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

/// The closed set of supported envelope kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EnvelopeKind {
    /// Plan d'Épargne en Actions - FR/EU equities, 17.2% social levies
    Pea,
    /// Compte-Titres Ordinaire - world equities, 30% flat tax
    Cto,
    /// Crypto wallet - 30% flat tax on gains
    Crypto,
    /// Livret A / LDDS - tax-free regulated savings
    Livret,
    /// Real estate - rental income / LMNP, 30%
    Immo,
    /// Physical goods - precious metals flat levy (TMP), 6.5%
    Physical,
    /// Current account - plain liquidity, untaxed
    Bank,
}

/// Broad bucket an envelope kind belongs to, used for display grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnvelopeBucket {
    Financial,
    Crypto,
    Banking,
    RealEstate,
    Physical,
}

impl EnvelopeBucket {
    /// Returns a human-friendly label for this bucket.
    pub fn label(&self) -> &'static str {
        match self {
            EnvelopeBucket::Financial => "Financial",
            EnvelopeBucket::Crypto => "Crypto",
            EnvelopeBucket::Banking => "Banking",
            EnvelopeBucket::RealEstate => "RealEstate",
            EnvelopeBucket::Physical => "Physical",
        }
    }
}

impl std::fmt::Display for EnvelopeBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Static tax/classification preset for an envelope kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnvelopePreset {
    /// Display name
    pub label: &'static str,
    /// Capital-gains tax rate applied to unrealized gains, as a fraction
    pub tax_rate: Decimal,
    /// Short description of the tax regime
    pub description: &'static str,
    /// Display bucket
    pub bucket: EnvelopeBucket,
    /// Default annual yield in percent, for kinds that carry one
    pub default_yield: Option<Decimal>,
}

impl EnvelopeKind {
    /// Returns the static preset for this kind.
    pub fn preset(&self) -> EnvelopePreset {
        match self {
            EnvelopeKind::Pea => EnvelopePreset {
                label: "PEA",
                tax_rate: dec!(0.172),
                description: "Actions FR/EU (17.2%)",
                bucket: EnvelopeBucket::Financial,
                default_yield: None,
            },
            EnvelopeKind::Cto => EnvelopePreset {
                label: "Compte Titres (CTO)",
                tax_rate: dec!(0.3),
                description: "Actions Monde (Flat Tax 30%)",
                bucket: EnvelopeBucket::Financial,
                default_yield: None,
            },
            EnvelopeKind::Crypto => EnvelopePreset {
                label: "Wallet Crypto",
                tax_rate: dec!(0.3),
                description: "Flat Tax 30% sur plus-value",
                bucket: EnvelopeBucket::Crypto,
                default_yield: None,
            },
            EnvelopeKind::Livret => EnvelopePreset {
                label: "Livret (A/LDDS)",
                tax_rate: Decimal::ZERO,
                description: "Net d'impôt (0%)",
                bucket: EnvelopeBucket::Banking,
                default_yield: Some(dec!(3.0)),
            },
            EnvelopeKind::Immo => EnvelopePreset {
                label: "Immobilier",
                tax_rate: dec!(0.3),
                description: "Revenus fonciers / LMNP",
                bucket: EnvelopeBucket::RealEstate,
                default_yield: None,
            },
            EnvelopeKind::Physical => EnvelopePreset {
                label: "Biens Physiques",
                tax_rate: dec!(0.065),
                description: "Taxe forfaitaire métaux (TMP)",
                bucket: EnvelopeBucket::Physical,
                default_yield: None,
            },
            EnvelopeKind::Bank => EnvelopePreset {
                label: "Compte Courant",
                tax_rate: Decimal::ZERO,
                description: "Liquidités",
                bucket: EnvelopeBucket::Banking,
                default_yield: None,
            },
        }
    }

    /// True when the envelope holds instantly-available cash.
    pub fn is_liquid(&self) -> bool {
        matches!(self, EnvelopeKind::Livret | EnvelopeKind::Bank)
    }
}

/// Domain model representing an envelope owned by a user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Envelope {
    pub id: String,
    pub name: String,
    pub kind: EnvelopeKind,
    /// Annual yield in percent; only meaningful for LIVRET envelopes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yield_rate: Option<Decimal>,
}

/// Input model for creating a new envelope.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewEnvelope {
    pub name: String,
    pub kind: EnvelopeKind,
    pub yield_rate: Option<Decimal>,
}

impl NewEnvelope {
    /// Creates an input with the kind's default yield filled in.
    pub fn with_preset_yield(name: impl Into<String>, kind: EnvelopeKind) -> Self {
        Self {
            name: name.into(),
            kind,
            yield_rate: kind.preset().default_yield,
        }
    }
}
