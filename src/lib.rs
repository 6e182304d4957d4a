//! Minimal GraphQL demonstration server.
//!
//! This crate exposes a tiny GraphQL API over HTTP and WebSocket:
//! a `helloWorld` query and an `incrementCounter` subscription that
//! delivers an integer once per second.
//!
//! # Modules
//!
//! - [`schema`] - GraphQL schema definition (query and subscription roots)
//! - [`ticker`] - Per-subscription counter stream
//! - [`server`] - HTTP/WebSocket server implementation

#![deny(clippy::unwrap_used)]

pub mod schema;
pub mod server;
pub mod ticker;

pub use schema::{create_schema, AppSchema};
