//! Per-field resolution metadata.

use core::fmt;

use super::directives::InContextDirectiveArgs;
use crate::enums::{CountryCode, LanguageCode};

/// One step of a response path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSegment {
    /// A field (or alias) name.
    Field(String),
    /// A position in a list.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Field(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

/// What a resolver knows about the field it is resolving.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolveInfo {
    /// Schema name of the parent type (`QueryRoot`, `Product`, ...).
    pub parent_type: String,
    /// Schema name of the field.
    pub field_name: String,
    /// Response path from the root to this field.
    pub path: Vec<PathSegment>,
    /// Values of the operation's `@inContext` directive, if any.
    pub in_context: Option<InContextDirectiveArgs>,
}

impl ResolveInfo {
    /// Info for a root field.
    #[must_use]
    pub fn root(parent_type: &str, field_name: &str) -> Self {
        Self {
            parent_type: parent_type.to_owned(),
            field_name: field_name.to_owned(),
            path: vec![PathSegment::Field(field_name.to_owned())],
            in_context: None,
        }
    }

    /// Info for a field of the value this field resolved to.
    #[must_use]
    pub fn child(&self, parent_type: &str, field_name: &str) -> Self {
        let mut path = self.path.clone();
        path.push(PathSegment::Field(field_name.to_owned()));
        Self {
            parent_type: parent_type.to_owned(),
            field_name: field_name.to_owned(),
            path,
            in_context: self.in_context.clone(),
        }
    }

    /// Info for the item at `index` of a list field.
    #[must_use]
    pub fn item(&self, index: usize) -> Self {
        let mut info = self.clone();
        info.path.push(PathSegment::Index(index));
        info
    }

    /// Attach `@inContext` values.
    #[must_use]
    pub fn with_in_context(mut self, in_context: InContextDirectiveArgs) -> Self {
        self.in_context = Some(in_context);
        self
    }

    /// The `@inContext` country.
    #[must_use]
    pub fn country(&self) -> Option<CountryCode> {
        self.in_context.as_ref().and_then(|ctx| ctx.country)
    }

    /// The `@inContext` language.
    #[must_use]
    pub fn language(&self) -> Option<LanguageCode> {
        self.in_context.as_ref().and_then(|ctx| ctx.language)
    }

    /// The response path joined with dots (`products.edges.0.node`).
    #[must_use]
    pub fn path_string(&self) -> String {
        self.path
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(".")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_tracking() {
        let root = ResolveInfo::root("QueryRoot", "products");
        let node = root.child("ProductConnection", "edges").item(2);
        let title = node.child("ProductEdge", "node").child("Product", "title");

        assert_eq!(title.parent_type, "Product");
        assert_eq!(title.field_name, "title");
        assert_eq!(title.path_string(), "products.edges.2.node.title");
    }

    #[test]
    fn test_in_context_inherited() {
        let root = ResolveInfo::root("QueryRoot", "product").with_in_context(
            InContextDirectiveArgs {
                country: Some(CountryCode::De),
                language: Some(LanguageCode::De),
                ..InContextDirectiveArgs::default()
            },
        );
        let price = root.child("Product", "priceRange");

        assert_eq!(price.country(), Some(CountryCode::De));
        assert_eq!(price.language(), Some(LanguageCode::De));
        assert_eq!(ResolveInfo::default().country(), None);
    }
}
