use crate::Result;

use std::fmt;

use rust_decimal::Decimal;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Money parse error: {0}, {1:?}")]
    Parse(&'static str, String),
}

/// Decimal monetary amount. Keeps the scale it was built with, so `500.00` stays `500.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        return Self(amount);
    }

    pub fn amount(&self) -> Decimal {
        return self.0;
    }

    /// Parses a plain decimal string such as `500.00` or `-12.5`. Surrounding whitespace is ignored.
    /// Digit separators and amounts that would need rounding to fit a `Decimal` are rejected.
    pub fn parse(string: &str) -> Result<Self> {
        let trimmed = string.trim();

        if trimmed.is_empty() {
            Err(MoneyError::Parse("Empty amount", string.to_string()))?
        }

        if trimmed.contains('_') {
            Err(MoneyError::Parse("Digit separators not supported", string.to_string()))?
        }

        let amount = Decimal::from_str_exact(trimmed)
            .map_err(|_| MoneyError::Parse("Not a decimal amount", string.to_string()))?;

        return Ok(Self(amount));
    }
}

impl From<Decimal> for Money {
    fn from(amount: Decimal) -> Self {
        return Self(amount);
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
