//! HTTP server setup and routing.

use anyhow::Result;
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse, GraphQLSubscription};
use axum::{
    response::{Html, IntoResponse},
    routing::{get, post},
    Extension, Router,
};
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use crate::schema::{create_schema, AppSchema};

async fn graphql_handler(
    Extension(schema): Extension<AppSchema>,
    req: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphql_playground() -> impl IntoResponse {
    Html(playground_source(
        GraphQLPlaygroundConfig::new("/graphql").subscription_endpoint("/graphql"),
    ))
}

/// Build the application router.
///
/// `POST /graphql` serves queries, `GET /graphql` carries the
/// GraphQL-over-WebSocket subscription protocol, and `GET /` serves the
/// playground. Cross-origin requests are permitted from any origin.
pub fn app(schema: AppSchema) -> Router {
    Router::new()
        .route("/", get(graphql_playground))
        .route(
            "/graphql",
            post(graphql_handler).get_service(GraphQLSubscription::new(schema.clone())),
        )
        .layer(Extension(schema))
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Run the GraphQL server until a shutdown signal arrives.
pub async fn run(host: &str, port: u16) -> Result<()> {
    let schema = create_schema();

    let addr = format!("{}:{}", host, port);
    info!("GraphQL endpoint: http://{}/graphql", addr);
    info!("Subscriptions: ws://{}/graphql", addr);
    info!("Playground: http://{}/", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app(schema))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("shutdown signal received");
}
