//! The `ID` scalar and Shopify global IDs.
//!
//! Every object implementing `Node` is addressed by an opaque `ID`. Shopify
//! encodes these as global ID URIs of the form
//! `gid://shopify/<ResourceType>/<ResourceId>`, optionally followed by a
//! query string (cart IDs carry a `key` parameter).

use core::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::scalar::{Scalar, ScalarError};

/// Errors that can occur when reading a Shopify global ID.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The ID is not a URI at all.
    #[error("not a global ID: {0}")]
    NotAUri(String),
    /// The ID is a URI but not a `gid://` URI.
    #[error("global ID must use the gid scheme, found {0:?}")]
    WrongScheme(String),
    /// The resource type segment is missing.
    #[error("global ID {0} has no resource type")]
    MissingResourceType(String),
    /// The resource ID segment is missing.
    #[error("global ID {0} has no resource ID")]
    MissingResourceId(String),
}

/// A GraphQL `ID`.
///
/// Serialized as a plain string. Use [`Id::global_id`] to read the Shopify
/// resource it points at.
///
/// ```
/// use storefront_schema_core::Id;
///
/// let id = Id::new("gid://shopify/Product/7982853619");
/// let gid = id.global_id().unwrap();
/// assert_eq!(gid.resource_type(), "Product");
/// assert_eq!(gid.resource_id(), "7982853619");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// Create an ID from any string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Build a Shopify global ID (`gid://shopify/<type>/<id>`).
    #[must_use]
    pub fn from_global(resource_type: &str, resource_id: impl fmt::Display) -> Self {
        Self(format!("gid://shopify/{resource_type}/{resource_id}"))
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `Id` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Parse the ID as a Shopify global ID.
    ///
    /// # Errors
    ///
    /// Returns [`IdError`] if the ID is not of the form
    /// `gid://<namespace>/<ResourceType>/<ResourceId>`.
    pub fn global_id(&self) -> Result<GlobalId, IdError> {
        GlobalId::parse(&self.0)
    }
}

impl Scalar for Id {
    const NAME: &'static str = "ID";

    fn parse_value(value: &Value) -> Result<Self, ScalarError> {
        match value {
            Value::String(s) => Ok(Self(s.clone())),
            // GraphQL accepts integer input for ID and coerces it to a string
            Value::Number(n) if n.is_i64() || n.is_u64() => Ok(Self(n.to_string())),
            other => Err(ScalarError::unexpected(Self::NAME, other)),
        }
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.clone())
    }
}

impl fmt::Display for Id {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for Id {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for Id {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<Id> for String {
    fn from(id: Id) -> Self {
        id.0
    }
}

impl AsRef<str> for Id {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Id {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Id {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A parsed Shopify global ID.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GlobalId {
    namespace: String,
    resource_type: String,
    resource_id: String,
    params: Vec<(String, String)>,
}

impl GlobalId {
    /// Parse a `gid://` URI.
    ///
    /// # Errors
    ///
    /// Returns [`IdError`] if the input is not a global ID.
    pub fn parse(s: &str) -> Result<Self, IdError> {
        let uri = url::Url::parse(s).map_err(|_| IdError::NotAUri(s.to_owned()))?;

        if uri.scheme() != "gid" {
            return Err(IdError::WrongScheme(uri.scheme().to_owned()));
        }

        let namespace = uri.host_str().unwrap_or_default().to_owned();
        let mut segments = uri
            .path_segments()
            .into_iter()
            .flatten()
            .filter(|segment| !segment.is_empty());

        let resource_type = segments
            .next()
            .ok_or_else(|| IdError::MissingResourceType(s.to_owned()))?
            .to_owned();
        let resource_id = segments
            .next()
            .ok_or_else(|| IdError::MissingResourceId(s.to_owned()))?
            .to_owned();

        let params = uri
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();

        Ok(Self {
            namespace,
            resource_type,
            resource_id,
            params,
        })
    }

    /// The namespace (always `shopify` for Storefront API IDs).
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The resource type (e.g. `Product`, `Cart`).
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    /// The resource's own ID.
    #[must_use]
    pub fn resource_id(&self) -> &str {
        &self.resource_id
    }

    /// Look up a query parameter (e.g. a cart's `key`).
    #[must_use]
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether this ID points at a resource of the given type.
    #[must_use]
    pub fn is(&self, resource_type: &str) -> bool {
        self.resource_type == resource_type
    }
}

impl fmt::Display for GlobalId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "gid://{}/{}/{}",
            self.namespace, self.resource_type, self.resource_id
        )?;
        if self.params.is_empty() {
            return Ok(());
        }

        // Params were decoded by `parse`, so they are encoded again here
        let query = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(&self.params)
            .finish();
        write!(f, "?{query}")
    }
}

impl From<GlobalId> for Id {
    fn from(gid: GlobalId) -> Self {
        Self(gid.to_string())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_global() {
        let id = Id::from_global("ProductVariant", 42);
        assert_eq!(id, "gid://shopify/ProductVariant/42");
    }

    #[test]
    fn test_parse_product_gid() {
        let gid = GlobalId::parse("gid://shopify/Product/7982853619").unwrap();
        assert_eq!(gid.namespace(), "shopify");
        assert_eq!(gid.resource_type(), "Product");
        assert_eq!(gid.resource_id(), "7982853619");
        assert!(gid.is("Product"));
        assert!(gid.param("key").is_none());
    }

    #[test]
    fn test_parse_cart_gid_with_key() {
        let id = Id::new("gid://shopify/Cart/c1-abc123?key=deadbeef");
        let gid = id.global_id().unwrap();
        assert_eq!(gid.resource_type(), "Cart");
        assert_eq!(gid.resource_id(), "c1-abc123");
        assert_eq!(gid.param("key"), Some("deadbeef"));
        assert_eq!(gid.to_string(), "gid://shopify/Cart/c1-abc123?key=deadbeef");
    }

    #[test]
    fn test_encoded_param_round_trip() {
        let gid = GlobalId::parse("gid://shopify/Cart/c1?key=a%26b&note=x%3Dy+z%25").unwrap();
        assert_eq!(gid.param("key"), Some("a&b"));
        assert_eq!(gid.param("note"), Some("x=y z%"));

        let printed = gid.to_string();
        assert_eq!(printed, "gid://shopify/Cart/c1?key=a%26b&note=x%3Dy+z%25");
        assert_eq!(GlobalId::parse(&printed).unwrap(), gid);

        let id = Id::from(gid);
        assert_eq!(id.global_id().unwrap().param("key"), Some("a&b"));
    }

    #[test]
    fn test_not_a_uri() {
        assert!(matches!(
            GlobalId::parse("7982853619"),
            Err(IdError::NotAUri(_))
        ));
    }

    #[test]
    fn test_wrong_scheme() {
        assert!(matches!(
            GlobalId::parse("https://shopify/Product/1"),
            Err(IdError::WrongScheme(scheme)) if scheme == "https"
        ));
    }

    #[test]
    fn test_missing_resource_id() {
        assert!(matches!(
            GlobalId::parse("gid://shopify/Product"),
            Err(IdError::MissingResourceId(_))
        ));
        assert!(matches!(
            GlobalId::parse("gid://shopify/"),
            Err(IdError::MissingResourceType(_))
        ));
    }

    #[test]
    fn test_scalar_accepts_integers() {
        assert_eq!(Id::parse_value(&serde_json::json!(12)).unwrap(), "12");
        assert!(Id::parse_value(&serde_json::json!(1.5)).is_err());
    }

    #[test]
    fn test_serde_transparent() {
        let id = Id::new("gid://shopify/Shop/1");
        assert_eq!(
            serde_json::to_string(&id).unwrap(),
            "\"gid://shopify/Shop/1\""
        );
    }
}
