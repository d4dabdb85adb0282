//! Navigation menus.

use serde::{Deserialize, Serialize};
use storefront_schema_core::{Id, Url};

use crate::enums::MenuItemType;
use crate::unions::MenuItemResource;

/// A [navigation menu](https://help.shopify.com/manual/online-store/menus-and-links) representing a hierarchy
/// of hyperlinks (items).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Menu {
    /// The menu's handle.
    pub handle: String,
    /// A globally-unique ID.
    pub id: Id,
    /// The menu's child items.
    pub items: Vec<MenuItem>,
    /// The count of items on the menu.
    pub items_count: i32,
    /// The menu's title.
    pub title: String,
}

/// A menu item within a parent menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    /// A globally-unique ID.
    pub id: Id,
    /// The menu item's child items.
    pub items: Vec<MenuItem>,
    /// The linked resource.
    pub resource: Option<MenuItemResource>,
    /// The ID of the linked resource.
    pub resource_id: Option<Id>,
    /// The menu item's tags to filter a collection.
    pub tags: Vec<String>,
    /// The menu item's title.
    pub title: String,
    /// The menu item's type.
    #[serde(rename = "type")]
    pub kind: MenuItemType,
    /// The menu item's URL.
    pub url: Option<Url>,
}

impl Menu {
    /// Every item in the menu, depth-first, paired with its nesting depth.
    #[must_use]
    pub fn flatten(&self) -> Vec<(usize, &MenuItem)> {
        let mut out = Vec::new();
        for item in &self.items {
            item.collect(0, &mut out);
        }
        out
    }
}

impl MenuItem {
    fn collect<'a>(&'a self, depth: usize, out: &mut Vec<(usize, &'a Self)>) {
        out.push((depth, self));
        for child in &self.items {
            child.collect(depth + 1, out);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn item(id: u32, title: &str, items: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": format!("gid://shopify/MenuItem/{id}"),
            "items": items,
            "resource": null,
            "resourceId": null,
            "tags": [],
            "title": title,
            "type": "HTTP",
            "url": null
        })
    }

    #[test]
    fn test_flatten_depth_first() {
        let menu: Menu = serde_json::from_value(serde_json::json!({
            "handle": "main-menu",
            "id": "gid://shopify/Menu/1",
            "items": [
                item(1, "Shop", serde_json::json!([
                    item(2, "Shirts", serde_json::json!([])),
                    item(3, "Hats", serde_json::json!([]))
                ])),
                item(4, "About", serde_json::json!([]))
            ],
            "itemsCount": 4,
            "title": "Main menu"
        }))
        .unwrap();

        let titles: Vec<(usize, &str)> = menu
            .flatten()
            .into_iter()
            .map(|(depth, item)| (depth, item.title.as_str()))
            .collect();
        assert_eq!(
            titles,
            vec![(0, "Shop"), (1, "Shirts"), (1, "Hats"), (0, "About")]
        );
        assert_eq!(menu.items[0].kind, MenuItemType::Http);
    }
}
