//! GraphQL subscription resolvers.

use async_graphql::Subscription;
use futures_util::Stream;

use crate::ticker;

/// Root subscription type for the GraphQL schema.
pub struct SubscriptionRoot;

#[Subscription]
impl SubscriptionRoot {
    /// Emit an incrementing counter, one value per second.
    ///
    /// Every subscription gets its own counter starting at 1. The backing
    /// timer is torn down when the client unsubscribes.
    async fn increment_counter(&self) -> impl Stream<Item = i32> {
        ticker::tick_stream(ticker::TICK_PERIOD)
    }
}
