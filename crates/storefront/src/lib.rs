//! Storefront Schema - Typed catalogue of the Shopify Storefront API.
//!
//! This crate models the Storefront GraphQL schema as Rust types and
//! provides the scaffold a server needs to resolve it:
//!
//! - [`types`] - One struct per schema object
//! - [`interfaces`] - Interface traits and `Any*` value enums
//! - [`unions`] - Unions tagged by `__typename`
//! - [`enums`] - Closed value sets with their schema literals
//! - [`inputs`] - Input objects for arguments
//! - [`args`] - Typed arguments of every field that takes them
//! - [`connection`] - Relay connections and pagination
//! - [`resolvers`] - Resolver traits, directives and the root-field executor
//! - [`registry`] - Runtime catalogue of every named type and directive
//!
//! Scalars live in `storefront-schema-core` and are re-exported as
//! [`scalars`].
//!
//! # Example
//!
//! ```
//! use storefront_schema::registry::{self, TypeKind};
//! use storefront_schema::types::MoneyV2;
//! use storefront_schema::unions::PricingValue;
//!
//! let value: PricingValue = serde_json::from_value(serde_json::json!({
//!     "__typename": "MoneyV2",
//!     "amount": "12.50",
//!     "currencyCode": "CAD"
//! }))
//! .unwrap();
//!
//! assert!(matches!(value, PricingValue::MoneyV2(MoneyV2 { .. })));
//! assert_eq!(registry::lookup("MoneyV2").unwrap().kind, TypeKind::Object);
//! ```

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod args;
pub mod config;
pub mod connection;
pub mod enums;
pub mod inputs;
pub mod interfaces;
pub mod registry;
pub mod resolvers;
pub mod types;
pub mod unions;

pub use storefront_schema_core as scalars;
