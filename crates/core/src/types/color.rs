//! The `Color` scalar.

use core::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::scalar::{Scalar, ScalarError, string_scalar_serde};

/// A hexadecimal color such as `#6A8D48`.
///
/// ## Constraints
///
/// - Must start with `#`
/// - Followed by exactly 3 or 6 hexadecimal digits
///
/// ## Examples
///
/// ```
/// use storefront_schema_core::Color;
///
/// let color = Color::parse("#6A8D48").unwrap();
/// assert_eq!(color.rgb(), (0x6A, 0x8D, 0x48));
///
/// assert_eq!(Color::parse("#fff").unwrap().rgb(), (255, 255, 255));
/// assert!(Color::parse("6A8D48").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color(String);

impl Color {
    /// Parse a `Color` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not `#` followed by 3 or 6 hex digits.
    pub fn parse(s: &str) -> Result<Self, ScalarError> {
        let digits = s
            .strip_prefix('#')
            .ok_or_else(|| ScalarError::invalid(Self::NAME, s, "must start with '#'"))?;

        if !matches!(digits.len(), 3 | 6) {
            return Err(ScalarError::invalid(
                Self::NAME,
                s,
                "must have 3 or 6 hex digits",
            ));
        }

        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ScalarError::invalid(
                Self::NAME,
                s,
                "contains a non-hex digit",
            ));
        }

        Ok(Self(s.to_owned()))
    }

    /// Returns the color as written (e.g. `#6A8D48`).
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the red, green and blue channels.
    ///
    /// Three-digit colors are expanded (`#fa0` is `#ffaa00`).
    #[must_use]
    pub fn rgb(&self) -> (u8, u8, u8) {
        let digits: Vec<u8> = self
            .0
            .chars()
            .skip(1)
            .filter_map(|c| c.to_digit(16))
            .filter_map(|d| u8::try_from(d).ok())
            .collect();

        let channel = |hi: Option<&u8>, lo: Option<&u8>| {
            hi.copied().unwrap_or(0) * 16 + lo.copied().unwrap_or(0)
        };

        if digits.len() == 3 {
            (
                channel(digits.first(), digits.first()),
                channel(digits.get(1), digits.get(1)),
                channel(digits.get(2), digits.get(2)),
            )
        } else {
            (
                channel(digits.first(), digits.get(1)),
                channel(digits.get(2), digits.get(3)),
                channel(digits.get(4), digits.get(5)),
            )
        }
    }
}

impl Scalar for Color {
    const NAME: &'static str = "Color";

    fn parse_value(value: &Value) -> Result<Self, ScalarError> {
        match value {
            Value::String(s) => Self::parse(s),
            other => Err(ScalarError::unexpected(Self::NAME, other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Color {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

string_scalar_serde!(Color);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_colors() {
        assert!(Color::parse("#6A8D48").is_ok());
        assert!(Color::parse("#6a8d48").is_ok());
        assert!(Color::parse("#FFF").is_ok());
    }

    #[test]
    fn test_parse_missing_hash() {
        assert!(matches!(
            Color::parse("6A8D48"),
            Err(ScalarError::Invalid { .. })
        ));
    }

    #[test]
    fn test_parse_wrong_length() {
        assert!(Color::parse("#12345").is_err());
        assert!(Color::parse("#").is_err());
    }

    #[test]
    fn test_parse_non_hex() {
        assert!(Color::parse("#GGGGGG").is_err());
    }

    #[test]
    fn test_rgb() {
        assert_eq!(Color::parse("#6A8D48").unwrap().rgb(), (106, 141, 72));
        assert_eq!(Color::parse("#fa0").unwrap().rgb(), (255, 170, 0));
    }

    #[test]
    fn test_parse_value_rejects_numbers() {
        assert!(matches!(
            Color::parse_value(&serde_json::json!(123)),
            Err(ScalarError::UnexpectedType { found: "number", .. })
        ));
    }

    #[test]
    fn test_serde() {
        let color: Color = serde_json::from_str("\"#000000\"").unwrap();
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#000000\"");
        assert!(serde_json::from_str::<Color>("\"black\"").is_err());
    }

    #[test]
    fn test_indented_block_string_literal() {
        let color = Color::parse_literal("\"\"\"\n    #FFF\n\"\"\"").unwrap();
        assert_eq!(color.as_str(), "#FFF");
    }
}
