//! Subscription resolvers.
//!
//! The Storefront API has no subscription root. The contract is kept so a
//! resolver map built on this crate has the same shape as any other
//! GraphQL server's.

use futures::StreamExt;
use futures::stream::BoxStream;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use super::error::ResolverResult;
use super::info::ResolveInfo;

/// A stream of subscription events.
pub type ResolverStream<'a, T> = BoxStream<'a, ResolverResult<T>>;

/// Resolve a subscription field to a stream of values.
#[async_trait::async_trait]
pub trait SubscriptionResolver<C: Send + Sync>: Send + Sync {
    /// Typed field arguments.
    type Args: DeserializeOwned + Send;

    /// One event of the stream.
    type Item: Serialize + Send;

    /// Start the subscription.
    async fn subscribe<'a>(
        &'a self,
        args: Self::Args,
        ctx: &'a C,
        info: &'a ResolveInfo,
    ) -> ResolverResult<ResolverStream<'a, Self::Item>>;
}

/// Serialize every event of a stream to JSON.
pub fn json_stream<'a, T>(stream: ResolverStream<'a, T>) -> ResolverStream<'a, Value>
where
    T: Serialize + Send + 'a,
{
    stream
        .map(|event| event.and_then(|item| Ok(serde_json::to_value(item)?)))
        .boxed()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use futures::stream;

    use super::*;
    use crate::resolvers::ResolverError;

    struct Countdown;

    #[async_trait::async_trait]
    impl SubscriptionResolver<()> for Countdown {
        type Args = Value;
        type Item = u32;

        async fn subscribe<'a>(
            &'a self,
            args: Value,
            _ctx: &'a (),
            _info: &'a ResolveInfo,
        ) -> ResolverResult<ResolverStream<'a, u32>> {
            let from = args["from"]
                .as_u64()
                .and_then(|n| u32::try_from(n).ok())
                .ok_or_else(|| ResolverError::InvalidArguments("from is required".to_owned()))?;
            Ok(stream::iter((1..=from).rev().map(Ok)).boxed())
        }
    }

    #[tokio::test]
    async fn test_stream_events_serialized() {
        let info = ResolveInfo::root("Subscription", "countdown");
        let events = Countdown
            .subscribe(serde_json::json!({ "from": 3 }), &(), &info)
            .await
            .unwrap();

        let values: Vec<Value> = json_stream(events)
            .map(Result::unwrap)
            .collect()
            .await;
        assert_eq!(values, vec![serde_json::json!(3), serde_json::json!(2), serde_json::json!(1)]);
    }

    #[tokio::test]
    async fn test_subscribe_rejects_args() {
        let info = ResolveInfo::root("Subscription", "countdown");
        let result = Countdown.subscribe(serde_json::json!({}), &(), &info).await;
        assert!(matches!(result, Err(ResolverError::InvalidArguments(_))));
    }
}
