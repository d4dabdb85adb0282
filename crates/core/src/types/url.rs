//! The `URL` scalar.

use core::fmt;
use std::str::FromStr;

use serde_json::Value;

use super::scalar::{Scalar, ScalarError, string_scalar_serde};

/// An RFC 3986 absolute URL, such as `https://example.myshopify.com/cart`.
///
/// ```
/// use storefront_schema_core::Url;
///
/// let url = Url::parse("https://shop.example.com/products/tee?variant=1").unwrap();
/// assert_eq!(url.host(), Some("shop.example.com"));
/// assert!(Url::parse("/relative/path").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Url(url::Url);

impl Url {
    /// Parse an absolute URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not an absolute URL.
    pub fn parse(s: &str) -> Result<Self, ScalarError> {
        url::Url::parse(s)
            .map(Self)
            .map_err(|e| ScalarError::invalid(Self::NAME, s, e))
    }

    /// Returns the URL as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the host, if any.
    #[must_use]
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Returns the underlying [`url::Url`].
    #[must_use]
    pub const fn as_url(&self) -> &url::Url {
        &self.0
    }
}

impl Scalar for Url {
    const NAME: &'static str = "URL";

    fn parse_value(value: &Value) -> Result<Self, ScalarError> {
        match value {
            Value::String(s) => Self::parse(s),
            other => Err(ScalarError::unexpected(Self::NAME, other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_string())
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl FromStr for Url {
    type Err = ScalarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<url::Url> for Url {
    fn from(url: url::Url) -> Self {
        Self(url)
    }
}

string_scalar_serde!(Url);

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_absolute() {
        let url = Url::parse("https://cdn.shopify.com/s/files/1/tee.jpg").unwrap();
        assert_eq!(url.host(), Some("cdn.shopify.com"));
    }

    #[test]
    fn test_parse_relative_fails() {
        assert!(matches!(
            Url::parse("products/tee"),
            Err(ScalarError::Invalid { scalar: "URL", .. })
        ));
    }

    #[test]
    fn test_serde() {
        let url: Url = serde_json::from_str("\"https://example.com/a\"").unwrap();
        assert_eq!(
            serde_json::to_string(&url).unwrap(),
            "\"https://example.com/a\""
        );
    }
}
