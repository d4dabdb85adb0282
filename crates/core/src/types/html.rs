//! The `HTML` scalar.

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::scalar::{Scalar, ScalarError};

/// An HTML string, such as a product's `descriptionHtml`.
///
/// The content is passed through untouched; callers are responsible for
/// sanitising it before rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Html(String);

impl Html {
    /// Wrap an HTML string.
    #[must_use]
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    /// Returns the HTML as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Html` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Whether the HTML is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Scalar for Html {
    const NAME: &'static str = "HTML";

    fn parse_value(value: &Value) -> Result<Self, ScalarError> {
        match value {
            Value::String(s) => Ok(Self(s.clone())),
            other => Err(ScalarError::unexpected(Self::NAME, other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

impl fmt::Display for Html {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Html {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for Html {
    fn from(html: &str) -> Self {
        Self(html.to_owned())
    }
}

impl AsRef<str> for Html {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_passes_markup_through() {
        let html = Html::parse_value(&serde_json::json!("<p>Hi &amp; bye</p>")).unwrap();
        assert_eq!(html.as_str(), "<p>Hi &amp; bye</p>");
    }

    #[test]
    fn test_rejects_non_strings() {
        assert!(Html::parse_value(&serde_json::json!(null)).is_err());
    }

    #[test]
    fn test_block_string_literal() {
        let html = Html::parse_literal("\"\"\"<b>bold</b>\"\"\"").unwrap();
        assert_eq!(html.as_str(), "<b>bold</b>");
    }
}
