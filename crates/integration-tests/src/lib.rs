//! Integration tests for the Storefront schema crates.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p storefront-schema-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `resolver_map` - Root fields dispatched through the executor
//! - `directives` - `@inContext`, `@accessRestricted` and `@defer` chains
//! - `registry` - Consistency of the runtime catalogue with the Rust types
//! - `product_fixture` - Variant selection on a decoded product
//!
//! The library half holds what the tests share: JSON builders for
//! schema-complete objects ([`fixtures`]) and an in-memory resolver map
//! ([`store`]).

pub mod fixtures;
pub mod store;
