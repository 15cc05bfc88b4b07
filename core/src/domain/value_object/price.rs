use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CURRENCY: &str = "R";

/// A finite amount greater than zero. Only built through [`Price::parse`] or
/// [`Price::new`], so a stored price is always valid.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Price(f64);

impl Price {
    pub fn new(amount: f64) -> Option<Self> {
        (amount.is_finite() && amount > 0.0).then_some(Price(amount))
    }

    /// Parse user-entered text. Leading/trailing whitespace is ignored; the
    /// remainder must be a plain decimal number.
    pub fn parse(text: &str) -> Option<Self> {
        text.trim().parse::<f64>().ok().and_then(Price::new)
    }

    pub fn amount(&self) -> f64 {
        self.0
    }

    /// Two-decimal rendering with the given currency symbol, e.g. `R55.00`.
    pub fn format(&self, currency_symbol: &str) -> String {
        format_amount(self.0, currency_symbol)
    }
}

pub fn format_amount(amount: f64, currency_symbol: &str) -> String {
    format!("{currency_symbol}{amount:.2}")
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(DEFAULT_CURRENCY))
    }
}

impl TryFrom<f64> for Price {
    type Error = String;

    fn try_from(amount: f64) -> Result<Self, Self::Error> {
        Price::new(amount)
            .ok_or_else(|| format!("price must be a finite amount above zero, got {amount}"))
    }
}

impl From<Price> for f64 {
    fn from(price: Price) -> Self {
        price.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_prices() {
        assert_eq!(Price::parse("55").map(|p| p.amount()), Some(55.0));
        assert_eq!(Price::parse(" 100.50 ").map(|p| p.amount()), Some(100.5));
        assert_eq!(Price::parse("0.01").map(|p| p.amount()), Some(0.01));
    }

    #[test]
    fn test_parse_rejects_non_positive() {
        assert!(Price::parse("0").is_none());
        assert!(Price::parse("-12").is_none());
        assert!(Price::parse("-0.0").is_none());
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(Price::parse("").is_none());
        assert!(Price::parse("   ").is_none());
        assert!(Price::parse("abc").is_none());
        assert!(Price::parse("12abc").is_none());
        assert!(Price::parse("R55").is_none());
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(Price::parse("inf").is_none());
        assert!(Price::parse("NaN").is_none());
        assert!(Price::parse("1e400").is_none());
    }

    #[test]
    fn test_display_uses_two_decimals() {
        let price = Price::new(55.0).unwrap();
        assert_eq!(price.to_string(), "R55.00");
        assert_eq!(price.format("$"), "$55.00");
    }

    #[test]
    fn test_deserialize_rejects_invalid_amount() {
        assert!(serde_json::from_str::<Price>("12.5").is_ok());
        assert!(serde_json::from_str::<Price>("-1.0").is_err());
    }
}
