//! Route definitions for chat endpoints

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{chat_turn, health, list_products, ChatAppState};

/// Conversation endpoint
///
/// - `POST /api/chat/turn` - Run one conversation turn
///
/// A turn is bounded by the generation backend's per-call timeout, not by a
/// request timeout, so it always ends with an answer.
pub fn turn_routes() -> Router<ChatAppState> {
    Router::new().route("/api/chat/turn", post(chat_turn))
}

/// Read-only endpoints
///
/// - `GET /api/catalog/products` - Catalog listing
/// - `GET /health` - Liveness probe
pub fn catalog_routes() -> Router<ChatAppState> {
    Router::new()
        .route("/api/catalog/products", get(list_products))
        .route("/health", get(health))
}

/// Create chat router with all endpoints
pub fn routes() -> Router<ChatAppState> {
    turn_routes().merge(catalog_routes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_creates_valid_router() {
        let _routes = routes();
    }
}
