//! Amount type for expense quantities
//!
//! Expenses travel over the wire as plain JSON numbers, so the amount is kept
//! as an `f64`. Construction goes through validation: the value must be finite
//! and non-negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A non-negative expense amount
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Amount(f64);

impl Amount {
    /// Create an amount, rejecting negative and non-finite values
    pub fn new(value: f64) -> Result<Self, AmountParseError> {
        if !value.is_finite() {
            return Err(AmountParseError::NotFinite);
        }
        if value < 0.0 {
            return Err(AmountParseError::Negative(value));
        }
        Ok(Self(value))
    }

    /// A zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// The numeric value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Parse an amount from user input
    ///
    /// Accepts formats: "500", "12.5", " 12.50 "
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AmountParseError::Empty);
        }

        let value: f64 = s
            .parse()
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))?;

        Self::new(value)
    }

    /// Format with a currency prefix, e.g. `RS. 500.00`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

impl TryFrom<f64> for Amount {
    type Error = AmountParseError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Amount> for f64 {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, a| acc + a)
    }
}

impl<'a> Sum<&'a Amount> for Amount {
    fn sum<I: Iterator<Item = &'a Amount>>(iter: I) -> Self {
        iter.fold(Self::zero(), |acc, a| acc + *a)
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq)]
pub enum AmountParseError {
    Empty,
    InvalidFormat(String),
    Negative(f64),
    NotFinite,
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "amount is required"),
            Self::InvalidFormat(s) => write!(f, "'{}' is not a number", s),
            Self::Negative(v) => write!(f, "amount cannot be negative ({})", v),
            Self::NotFinite => write!(f, "amount must be a finite number"),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!(Amount::parse("500").unwrap().value(), 500.0);
        assert_eq!(Amount::parse(" 12.5 ").unwrap().value(), 12.5);
        assert_eq!(Amount::parse("0").unwrap().value(), 0.0);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(Amount::parse("").unwrap_err(), AmountParseError::Empty);
        assert!(matches!(
            Amount::parse("abc"),
            Err(AmountParseError::InvalidFormat(_))
        ));
        assert!(matches!(
            Amount::parse("-5"),
            Err(AmountParseError::Negative(_))
        ));
        assert_eq!(Amount::parse("NaN").unwrap_err(), AmountParseError::NotFinite);
        assert_eq!(Amount::parse("inf").unwrap_err(), AmountParseError::NotFinite);
    }

    #[test]
    fn test_display() {
        let amount = Amount::new(1234.5).unwrap();
        assert_eq!(amount.to_string(), "1234.50");
        assert_eq!(amount.format_with_symbol("RS. "), "RS. 1234.50");
    }

    #[test]
    fn test_sum() {
        let amounts = [100.0, 250.0, 50.0].map(|v| Amount::new(v).unwrap());
        let total: Amount = amounts.iter().sum();
        assert_eq!(total.value(), 400.0);
    }

    #[test]
    fn test_serialization_is_plain_number() {
        let amount = Amount::new(12.25).unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "12.25");
    }

    #[test]
    fn test_deserialize_rejects_negative() {
        assert!(serde_json::from_str::<Amount>("-1.0").is_err());
        assert_eq!(serde_json::from_str::<Amount>("7").unwrap().value(), 7.0);
    }
}
