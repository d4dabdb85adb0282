//! Storefront Schema Core - Scalar types for the Shopify Storefront API.
//!
//! This crate provides the leaf types every other crate in the workspace
//! builds on:
//! - `storefront-schema` - The schema type catalogue and resolver scaffold
//! - `storefront-schema-cli` - Registry inspection tools
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP clients,
//! no GraphQL execution. Each custom scalar of the schema is a newtype with
//! its own parse and serialize rules, exposed through the [`Scalar`] trait.
//!
//! # Modules
//!
//! - [`types`] - Scalar newtypes, the `ID` type and Shopify global IDs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
