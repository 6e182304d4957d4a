//! GraphQL schema definition.
//!
//! This module contains the GraphQL schema, including:
//! - [`query`] - Query resolvers (helloWorld)
//! - [`subscription`] - Subscription resolvers (incrementCounter)

mod query;
mod subscription;

use async_graphql::{EmptyMutation, Schema};

pub use query::QueryRoot;
pub use subscription::SubscriptionRoot;

/// The GraphQL schema type for the counter server.
pub type AppSchema = Schema<QueryRoot, EmptyMutation, SubscriptionRoot>;

/// Create a new GraphQL schema.
pub fn create_schema() -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, SubscriptionRoot).finish()
}
