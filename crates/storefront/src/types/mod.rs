//! Object types of the Storefront API.
//!
//! One struct per schema object, grouped by area. Field names follow the
//! schema in `snake_case`; the schema field `type` is exposed as `kind`.
//! Interfaces implemented by these types live in [`crate::interfaces`],
//! unions in [`crate::unions`].

pub mod cart;
pub mod checkout;
pub mod collection;
pub mod common;
pub mod content;
pub mod customer;
pub mod discount;
pub mod localization;
pub mod media;
pub mod menu;
pub mod metafield;
pub mod order;
pub mod payloads;
pub mod product;
pub mod search;
pub mod selling_plan;
pub mod shop;
pub mod shop_pay;

pub use cart::*;
pub use checkout::*;
pub use collection::*;
pub use common::*;
pub use content::*;
pub use customer::*;
pub use discount::*;
pub use localization::*;
pub use media::*;
pub use menu::*;
pub use metafield::*;
pub use order::*;
pub use payloads::*;
pub use product::*;
pub use search::*;
pub use selling_plan::*;
pub use shop::*;
pub use shop_pay::*;
