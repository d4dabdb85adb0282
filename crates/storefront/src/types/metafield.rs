//! Metafields and metaobjects: merchant-defined custom data.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use storefront_schema_core::{DateTime, Id, Url};

use crate::connection::MetafieldReferenceConnection;
use crate::enums::{MetafieldDeleteErrorCode, MetafieldsSetUserErrorCode};
use crate::unions::{MetafieldParentResource, MetafieldReference};

// =============================================================================
// Metafields
// =============================================================================

/// Metafields represent custom metadata attached to a resource. Metafields can be sorted into namespaces and are
/// comprised of keys, values, and value types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metafield {
    /// The date and time when the storefront metafield was created.
    pub created_at: DateTime,
    /// The description of a metafield.
    pub description: Option<String>,
    /// A globally-unique ID.
    pub id: Id,
    /// The unique identifier for the metafield within its namespace.
    pub key: String,
    /// The container for a group of metafields that the metafield is associated with.
    pub namespace: String,
    /// The type of resource that the metafield is attached to.
    pub parent_resource: MetafieldParentResource,
    /// Returns a reference object if the metafield's type is a resource reference.
    pub reference: Option<MetafieldReference>,
    /// A list of reference objects if the metafield's type is a resource reference list.
    pub references: Option<MetafieldReferenceConnection>,
    /// The type name of the metafield.
    /// Refer to the list of [supported types](https://shopify.dev/apps/metafields/definitions/types).
    #[serde(rename = "type")]
    pub kind: String,
    /// The date and time when the metafield was last updated.
    pub updated_at: DateTime,
    /// The data stored in the metafield. Always stored as a string, regardless of the metafield's type.
    pub value: String,
}

/// An error that occurs during the execution of cart metafield deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldDeleteUserError {
    /// The error code.
    pub code: Option<MetafieldDeleteErrorCode>,
    /// The path to the input field that caused the error.
    pub field: Option<Vec<String>>,
    /// The error message.
    pub message: String,
}

/// An error that occurs during the execution of `MetafieldsSet`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetafieldsSetUserError {
    /// The error code.
    pub code: Option<MetafieldsSetUserErrorCode>,
    /// The index of the array element that's causing the error.
    pub element_index: Option<i32>,
    /// The path to the input field that caused the error.
    pub field: Option<Vec<String>>,
    /// The error message.
    pub message: String,
}

// =============================================================================
// Metaobjects
// =============================================================================

/// An instance of a user-defined model based on a MetaobjectDefinition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metaobject {
    /// Accesses a field of the object by key.
    pub field: Option<MetaobjectField>,
    /// All object fields with defined values.
    /// Omitted object keys can be assumed null, and no guarantees are made about field order.
    pub fields: Vec<MetaobjectField>,
    /// The unique handle of the metaobject. Useful as a custom ID.
    pub handle: String,
    /// A globally-unique ID.
    pub id: Id,
    /// The URL used for viewing the metaobject on the shop's Online Store. Returns `null` if the metaobject definition doesn't have the `online_store` capability.
    pub online_store_url: Option<Url>,
    /// The metaobject's SEO information. Returns `null` if the metaobject definition
    /// doesn't have the `renderable` capability.
    pub seo: Option<MetaobjectSeo>,
    /// The type of the metaobject. Defines the namespace of its associated metafields.
    #[serde(rename = "type")]
    pub kind: String,
    /// The date and time when the metaobject was last updated.
    pub updated_at: DateTime,
}

/// Provides the value of a Metaobject field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaobjectField {
    /// The field key.
    pub key: String,
    /// A referenced object if the field type is a resource reference.
    pub reference: Option<MetafieldReference>,
    /// A list of referenced objects if the field type is a resource reference list.
    pub references: Option<MetafieldReferenceConnection>,
    /// The type name of the field.
    /// See the list of [supported types](https://shopify.dev/apps/metafields/definitions/types).
    #[serde(rename = "type")]
    pub kind: String,
    /// The field value.
    pub value: Option<String>,
}

/// SEO information for a metaobject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaobjectSeo {
    /// The meta description.
    pub description: Option<MetaobjectField>,
    /// The SEO title.
    pub title: Option<MetaobjectField>,
}

impl Metafield {
    /// Whether the metafield holds a list type (e.g. `list.product_reference`).
    #[must_use]
    pub fn is_list(&self) -> bool {
        self.kind.starts_with("list.")
    }

    /// Decode the stored value as JSON.
    ///
    /// Every metafield value arrives as a string; `json`, `list.*`,
    /// `dimension`, `rating` and friends hold JSON text.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is not valid JSON for `T`.
    pub fn parse_value<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.value)
    }

    /// Whether the metafield is `namespace.key`.
    #[must_use]
    pub fn is(&self, namespace: &str, key: &str) -> bool {
        self.namespace == namespace && self.key == key
    }
}

impl Metaobject {
    /// Value of the field with the given key, if it is set.
    #[must_use]
    pub fn field_value(&self, key: &str) -> Option<&str> {
        self.field
            .iter()
            .chain(&self.fields)
            .find(|field| field.key == key)
            .and_then(|field| field.value.as_deref())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn metaobject() -> Metaobject {
        serde_json::from_value(serde_json::json!({
            "field": null,
            "fields": [
                { "key": "title", "reference": null, "references": null, "type": "single_line_text_field", "value": "Pineapple Care" },
                { "key": "rating", "reference": null, "references": null, "type": "rating", "value": null }
            ],
            "handle": "pineapple-care",
            "id": "gid://shopify/Metaobject/12",
            "onlineStoreUrl": null,
            "seo": null,
            "type": "guide",
            "updatedAt": "2024-06-01T12:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_type_field_renamed() {
        let guide = metaobject();
        assert_eq!(guide.kind, "guide");
        let value = serde_json::to_value(&guide).unwrap();
        assert_eq!(value["type"], "guide");
        assert!(value.get("kind").is_none());
    }

    #[test]
    fn test_field_value() {
        let guide = metaobject();
        assert_eq!(guide.field_value("title"), Some("Pineapple Care"));
        assert_eq!(guide.field_value("rating"), None);
        assert_eq!(guide.field_value("missing"), None);
    }
}
