//! HTTP adapters - REST API implementations.
//!
//! `build_router` assembles the chat routes with request tracing and CORS.
//! The request timeout covers the read-only routes only.

pub mod chat;

use axum::http::HeaderValue;
use axum::Router;
use std::time::Duration;
use tower_http::cors::{Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;

pub use chat::ChatAppState;

/// Full application router.
pub fn build_router(state: ChatAppState, server: &ServerConfig) -> Router {
    let catalog = chat::catalog_routes().layer(TimeoutLayer::new(Duration::from_secs(
        server.request_timeout_secs,
    )));

    chat::turn_routes()
        .merge(catalog)
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(server))
}

/// Any origin unless origins are configured. Unparseable origins are skipped.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let cors = CorsLayer::new().allow_methods(Any).allow_headers(Any);
    if origins.is_empty() {
        cors.allow_origin(Any)
    } else {
        cors.allow_origin(origins)
    }
}
