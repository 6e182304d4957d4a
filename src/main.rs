//! Counter demo GraphQL server.
//!
//! Serves a `helloWorld` query over HTTP and an `incrementCounter`
//! subscription over WebSocket.

use anyhow::Result;
use clap::Parser;

#[derive(Parser)]
#[command(name = "counter-server")]
#[command(about = "GraphQL demo server with a per-second counter subscription")]
struct Args {
    /// Port to listen on
    #[arg(short, long, default_value = "4000")]
    port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("counter_server=info".parse()?),
        )
        .init();

    let args = Args::parse();
    counter_server::server::run(&args.host, args.port).await
}
