//! GraphQL query resolvers.

use async_graphql::Object;

/// Root query type for the GraphQL schema.
pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// Returns the fixed greeting string.
    async fn hello_world(&self) -> &'static str {
        "Hello, World!"
    }
}
