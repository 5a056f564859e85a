//! Currency codes for cash amounts.
//!
//! CRITICAL: Never use floating-point for money calculations. All amounts
//! in the system are `rust_decimal::Decimal`; this module only carries the
//! currency code and its Spanish spoken unit used on printed vouchers.

use serde::{Deserialize, Serialize};

/// ISO 4217 currency codes supported by the system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// Peruvian Sol (the company's functional currency).
    #[default]
    Pen,
    /// US Dollar.
    Usd,
}

impl Currency {
    /// Returns the plural spoken unit used on printed vouchers
    /// (e.g. `"CIEN SOLES"`).
    #[must_use]
    pub const fn spoken_unit(&self) -> &'static str {
        match self {
            Self::Pen => "SOLES",
            Self::Usd => "DÓLARES",
        }
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pen => write!(f, "PEN"),
            Self::Usd => write!(f, "USD"),
        }
    }
}

impl std::str::FromStr for Currency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "PEN" => Ok(Self::Pen),
            "USD" => Ok(Self::Usd),
            _ => Err(format!("Unknown currency: {s}")),
        }
    }
}
