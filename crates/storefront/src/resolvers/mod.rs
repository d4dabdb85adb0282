//! Resolver-typing scaffold.
//!
//! The contracts a GraphQL server implementing the Storefront schema
//! resolves against:
//!
//! - [`QueryRootResolvers`] and [`MutationResolvers`] - one async method
//!   per root field, typed arguments in, typed values out
//! - [`FieldResolver`] - a field below the root
//! - [`SubscriptionResolver`] - a stream of values
//! - [`TypeResolver`] - `__resolveType` for unions and interfaces
//! - [`DirectiveResolver`] - a wrapper around field resolution
//!
//! [`Executor`] dispatches root fields by name to a resolver map.

mod directives;
mod error;
mod executor;
mod field;
mod info;
mod mutation;
mod query;
mod subscription;
mod type_resolver;

pub use directives::{
    AccessRestrictedDirectiveArgs, DeferDirectiveArgs, DirectiveResolver, InContextDirectiveArgs,
    Next, ResolverFuture, parse_directive_args,
};
pub use error::{ResolverError, ResolverResult};
pub use executor::{
    DirectiveInvocation, Executor, FieldRequest, OperationType, Unimplemented, parse_args,
};
pub use field::FieldResolver;
pub use info::{PathSegment, ResolveInfo};
pub use mutation::MutationResolvers;
pub use query::QueryRootResolvers;
pub use subscription::{ResolverStream, SubscriptionResolver, json_stream};
pub use type_resolver::TypeResolver;
