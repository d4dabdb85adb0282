//! Resolvers for fields below the root.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ResolverResult;
use super::executor::parse_args;
use super::info::ResolveInfo;

/// Resolve one field of parent type `P`.
///
/// Used for fields whose value is not already on the parent struct, such
/// as `Product.variants` with its own arguments.
#[async_trait::async_trait]
pub trait FieldResolver<P: Sync, C: Send + Sync>: Send + Sync {
    /// Typed field arguments.
    type Args: DeserializeOwned + Send;

    /// The field's value.
    type Output: Serialize + Send;

    /// Resolve the field.
    async fn resolve(
        &self,
        parent: &P,
        args: Self::Args,
        ctx: &C,
        info: &ResolveInfo,
    ) -> ResolverResult<Self::Output>;

    /// Resolve from JSON arguments to a JSON value.
    async fn resolve_json(
        &self,
        parent: &P,
        args: Value,
        ctx: &C,
        info: &ResolveInfo,
    ) -> ResolverResult<Value> {
        let args = parse_args::<Self::Args>(&info.field_name, args)?;
        let output = self.resolve(parent, args, ctx, info).await?;
        Ok(serde_json::to_value(output)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::args::ProductVariantsArgs;
    use crate::connection::{Connection, Paginated};
    use crate::resolvers::ResolverError;
    use crate::types::{Product, ProductVariant};

    struct VariantTitles;

    #[async_trait::async_trait]
    impl FieldResolver<Vec<String>, ()> for VariantTitles {
        type Args = ProductVariantsArgs;
        type Output = Connection<String>;

        async fn resolve(
            &self,
            parent: &Vec<String>,
            args: ProductVariantsArgs,
            _ctx: &(),
            _info: &ResolveInfo,
        ) -> ResolverResult<Connection<String>> {
            let first = args.pagination.first.unwrap_or(0);
            let mut titles = parent.clone();
            if args.reverse {
                titles.reverse();
            }
            titles.truncate(usize::try_from(first).map_err(ResolverError::custom)?);
            Ok(Connection::from_nodes(titles))
        }
    }

    #[tokio::test]
    async fn test_resolve_json() {
        let parent = vec!["Small".to_owned(), "Medium".to_owned(), "Large".to_owned()];
        let info = ResolveInfo::root("Product", "variants");

        let value = VariantTitles
            .resolve_json(
                &parent,
                serde_json::json!({ "first": 2, "reverse": true }),
                &(),
                &info,
            )
            .await
            .unwrap();
        let connection: Connection<String> = serde_json::from_value(value).unwrap();

        assert_eq!(connection.len(), 2);
        assert_eq!(connection.nodes, vec!["Large", "Medium"]);
    }

    #[tokio::test]
    async fn test_resolve_json_bad_args() {
        let err = VariantTitles
            .resolve_json(
                &Vec::new(),
                serde_json::json!({ "sortKey": "COLOR" }),
                &(),
                &ResolveInfo::root("Product", "variants"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, ResolverError::InvalidArguments(_)));
    }

    #[test]
    fn test_parent_types_are_sync() {
        fn assert_sync<T: Sync>() {}
        assert_sync::<Product>();
        assert_sync::<ProductVariant>();
    }
}
