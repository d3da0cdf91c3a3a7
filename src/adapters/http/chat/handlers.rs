//! HTTP handlers for chat endpoints

use std::sync::Arc;

use axum::extract::{Json, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

use crate::application::Assistant;

use super::dto::{CatalogResponse, ChatTurnRequest, ChatTurnResponse, ErrorResponse};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct ChatAppState {
    pub assistant: Arc<Assistant>,
}

impl ChatAppState {
    pub fn new(assistant: Arc<Assistant>) -> Self {
        Self { assistant }
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Handlers
// ════════════════════════════════════════════════════════════════════════════════

/// Run one conversation turn
///
/// POST /api/chat/turn
pub async fn chat_turn(
    State(app_state): State<ChatAppState>,
    Json(req): Json<ChatTurnRequest>,
) -> Result<impl IntoResponse, impl IntoResponse> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::bad_request("message must not be empty")),
        ));
    }

    let state = req.state.unwrap_or_default();
    let state = app_state.assistant.converse(state, message).await;

    Ok((StatusCode::OK, Json(ChatTurnResponse::from(state))))
}

/// Catalog listing
///
/// GET /api/catalog/products
pub async fn list_products(State(app_state): State<ChatAppState>) -> impl IntoResponse {
    let text = app_state.assistant.tools().list_products().await;
    Json(CatalogResponse { text })
}

/// Liveness probe
///
/// GET /health
pub async fn health() -> &'static str {
    "ok"
}
