//! Type-safe price representation in whole currency units.
//!
//! Prices are whole non-negative integers with no fractional part. Two
//! renderings exist:
//!
//! - [`Price`]'s `Display`: currency prefix and plain digits (`Ksh 3200`),
//!   used on catalog cards, the detail page and checkout rows.
//! - [`Price::grouped`]: digits grouped in threes with `,` (`3,200`), used for
//!   the checkout total.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// A price with currency information.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Price {
    /// Amount in whole currency units.
    pub amount: u64,
    /// ISO 4217 currency code.
    pub currency_code: CurrencyCode,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: u64, currency_code: CurrencyCode) -> Self {
        Self {
            amount,
            currency_code,
        }
    }

    /// A zero amount in the given currency.
    #[must_use]
    pub const fn zero(currency_code: CurrencyCode) -> Self {
        Self::new(0, currency_code)
    }

    /// Add two amounts of the same currency, saturating at `u64::MAX`.
    #[must_use]
    pub const fn saturating_add(self, other: u64) -> Self {
        Self::new(self.amount.saturating_add(other), self.currency_code)
    }

    /// The amount with digits grouped in threes (e.g., `7,700`).
    #[must_use]
    pub fn grouped(&self) -> String {
        group_digits(self.amount)
    }

    /// Prefix and grouped digits (e.g., `Ksh 7,700`).
    #[must_use]
    pub fn display_grouped(&self) -> String {
        format!("{}{}", self.currency_code.prefix(), self.grouped())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.currency_code.prefix(), self.amount)
    }
}

/// ISO 4217 currency codes the shop can price in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurrencyCode {
    /// Kenyan shilling.
    #[default]
    KES,
    USD,
}

impl CurrencyCode {
    /// Text printed before an amount.
    #[must_use]
    pub const fn prefix(&self) -> &'static str {
        match self {
            Self::KES => "Ksh ",
            Self::USD => "$",
        }
    }

    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::KES => "KES",
            Self::USD => "USD",
        }
    }
}

/// Error returned when a currency code is not supported.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unsupported currency code: {0}")]
pub struct UnknownCurrency(pub String);

impl FromStr for CurrencyCode {
    type Err = UnknownCurrency;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "KES" => Ok(Self::KES),
            "USD" => Ok(Self::USD),
            _ => Err(UnknownCurrency(s.to_string())),
        }
    }
}

/// Insert `,` between every group of three digits, counting from the right.
fn group_digits(amount: u64) -> String {
    let digits = amount.to_string();
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
