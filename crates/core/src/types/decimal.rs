//! The `Decimal` scalar.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

use super::scalar::{Scalar, ScalarError};

/// A signed decimal number with arbitrary precision, serialized as a string.
///
/// Shopify sends money amounts as strings (`"29.99"`) so that no precision
/// is lost in transit. The value is backed by [`rust_decimal::Decimal`].
///
/// ```
/// use storefront_schema_core::Decimal;
///
/// let amount: Decimal = "29.99".parse().unwrap();
/// assert_eq!(amount.to_string(), "29.99");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal(rust_decimal::Decimal);

impl Decimal {
    /// Zero.
    pub const ZERO: Self = Self(rust_decimal::Decimal::ZERO);

    /// Parse a decimal string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a decimal number.
    pub fn parse(s: &str) -> Result<Self, ScalarError> {
        rust_decimal::Decimal::from_str(s.trim())
            .map(Self)
            .map_err(|e| ScalarError::invalid(Self::NAME, s, e))
    }

    /// Wrap a [`rust_decimal::Decimal`].
    #[must_use]
    pub const fn new(inner: rust_decimal::Decimal) -> Self {
        Self(inner)
    }

    /// Returns the underlying [`rust_decimal::Decimal`].
    #[must_use]
    pub const fn value(&self) -> rust_decimal::Decimal {
        self.0
    }

    /// Whether the value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Scalar for Decimal {
    const NAME: &'static str = "Decimal";

    fn parse_value(value: &Value) -> Result<Self, ScalarError> {
        match value {
            Value::String(s) => Self::parse(s),
            // Numbers are accepted as input; their text form keeps the precision
            Value::Number(n) => Self::parse(&n.to_string()),
            other => Err(ScalarError::unexpected(Self::NAME, other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_string())
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for Decimal {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<rust_decimal::Decimal> for Decimal {
    fn from(inner: rust_decimal::Decimal) -> Self {
        Self(inner)
    }
}

impl From<Decimal> for rust_decimal::Decimal {
    fn from(value: Decimal) -> Self {
        value.0
    }
}

impl Serialize for Decimal {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Decimal {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        <Self as Scalar>::parse_value(&value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_preserves_scale() {
        assert_eq!(Decimal::parse("29.90").unwrap().to_string(), "29.90");
        assert_eq!(Decimal::parse("-0.5").unwrap().to_string(), "-0.5");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(matches!(
            Decimal::parse("twelve"),
            Err(ScalarError::Invalid { scalar: "Decimal", .. })
        ));
    }

    #[test]
    fn test_parse_value_accepts_numbers() {
        let amount = Decimal::parse_value(&serde_json::json!(12.5)).unwrap();
        assert_eq!(amount.to_string(), "12.5");

        let amount = Decimal::parse_value(&serde_json::json!(3)).unwrap();
        assert_eq!(amount.to_string(), "3");
    }

    #[test]
    fn test_parse_value_rejects_bool() {
        assert!(Decimal::parse_value(&serde_json::json!(false)).is_err());
    }

    #[test]
    fn test_zero() {
        assert!(Decimal::ZERO.is_zero());
        assert!(Decimal::parse("0.00").unwrap().is_zero());
    }

    #[test]
    fn test_serializes_as_string() {
        let amount = Decimal::parse("19.99").unwrap();
        assert_eq!(serde_json::to_string(&amount).unwrap(), "\"19.99\"");
        assert_eq!(amount.to_value(), serde_json::json!("19.99"));
    }

    #[test]
    fn test_deserialize_string_and_number() {
        let from_str: Decimal = serde_json::from_str("\"10.00\"").unwrap();
        let from_num: Decimal = serde_json::from_str("10").unwrap();
        assert_eq!(from_str, from_num);
    }
}
