//! Decimal product price.

use core::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input is not a decimal number.
    #[error("price is not a number: {0}")]
    Invalid(String),
    /// The input is a negative amount.
    #[error("price cannot be negative")]
    Negative,
}

/// A product price in the store's single currency.
///
/// The backend serves prices as plain JSON numbers, so the wire format here
/// is a number rather than the decimal-as-string convention. Deserialization
/// passes backend values through unvalidated - [`Price::parse`] is for
/// locally entered amounts (the admin create form) and rejects negatives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Price(Decimal);

impl Price {
    /// Parse a locally entered price.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a decimal number or is negative.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let amount = Decimal::from_str(s).map_err(|_| PriceError::Invalid(s.to_owned()))?;
        if amount.is_sign_negative() {
            return Err(PriceError::Negative);
        }
        Ok(Self(amount))
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Price {
    /// Renders with two decimal places and a dollar sign, e.g. `$2.50`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        rust_decimal::serde::float::deserialize(deserializer).map(Self)
    }
}
