//! Typed field arguments.
//!
//! One `<Type><Field>Args` struct per schema field that takes arguments.
//! Arguments with a schema default deserialize to that default when
//! absent; connection fields flatten in [`PaginationArgs`] and implement
//! [`PaginatedArgs`] so the executor can validate the cursor window.
//!
//! # Example
//!
//! ```
//! use storefront_schema::args::{PaginatedArgs, QueryRootCollectionsArgs};
//! use storefront_schema::enums::CollectionSortKeys;
//!
//! let args: QueryRootCollectionsArgs =
//!     serde_json::from_value(serde_json::json!({ "first": 25 })).unwrap();
//!
//! assert_eq!(args.sort_key, CollectionSortKeys::Id);
//! assert!(args.pagination().validate(250).is_ok());
//! ```

use crate::connection::{PaginationArgs, PaginationError};

/// Implement [`PaginatedArgs`] for argument structs with a flattened
/// `pagination` field.
macro_rules! impl_paginated_args {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::args::PaginatedArgs for $ty {
                fn pagination(&self) -> &$crate::connection::PaginationArgs {
                    &self.pagination
                }
            }
        )+
    };
}

pub(crate) use impl_paginated_args;

pub mod fields;
pub mod mutation;
pub mod query;

pub use fields::*;
pub use mutation::*;
pub use query::*;

/// Arguments of a connection field.
pub trait PaginatedArgs {
    /// The `first`/`last`/`after`/`before` window.
    fn pagination(&self) -> &PaginationArgs;

    /// Validate the window against a maximum page size.
    ///
    /// # Errors
    ///
    /// Returns the [`PaginationError`] for the first rule broken.
    fn validate_pagination(&self, max_page_size: i32) -> Result<(), PaginationError> {
        self.pagination().validate(max_page_size)
    }
}
