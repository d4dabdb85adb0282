//! Scalar types for the Storefront API schema.
//!
//! The built-in GraphQL scalars map to Rust primitives (`String`, `i32`,
//! `f64`, `bool`). Everything else lives here.

pub mod color;
pub mod datetime;
pub mod decimal;
pub mod html;
pub mod id;
pub mod json;
pub mod scalar;
pub mod unsigned;
pub mod url;

pub use color::Color;
pub use datetime::{DateTime, Iso8601DateTime};
pub use decimal::Decimal;
pub use html::Html;
pub use id::{GlobalId, Id, IdError};
pub use json::Json;
pub use scalar::{Scalar, ScalarError, json_type_name, literal_value};
pub use unsigned::UnsignedInt64;
pub use self::url::Url;

/// Schema names of every custom scalar, in schema order.
pub const CUSTOM_SCALARS: &[&str] = &[
    "Color",
    "DateTime",
    "Decimal",
    "HTML",
    "ISO8601DateTime",
    "JSON",
    "URL",
    "UnsignedInt64",
];

/// Schema names of the built-in GraphQL scalars.
pub const BUILT_IN_SCALARS: &[&str] = &["Boolean", "Float", "ID", "Int", "String"];
