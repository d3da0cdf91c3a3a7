//! HTTP DTOs for chat endpoints
//!
//! The server keeps no session: clients send the conversation state with
//! every turn and receive the updated state back.

use serde::{Deserialize, Serialize};

use crate::domain::assistant::{ConversationState, Intent};

// ════════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Request to run one chat turn
#[derive(Debug, Clone, Deserialize)]
pub struct ChatTurnRequest {
    /// State returned by the previous turn. Absent for a new conversation.
    #[serde(default)]
    pub state: Option<ConversationState>,
    pub message: String,
}

// ════════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════════

/// Response for a chat turn
#[derive(Debug, Clone, Serialize)]
pub struct ChatTurnResponse {
    pub state: ConversationState,
    pub answer: String,
    pub intent: Option<Intent>,
    /// Trace entries written by this turn only.
    pub trace: Vec<String>,
}

impl From<ConversationState> for ChatTurnResponse {
    fn from(state: ConversationState) -> Self {
        Self {
            answer: state.answer().unwrap_or_default().to_string(),
            intent: state.intent(),
            trace: state.turn_trace().to_vec(),
            state,
        }
    }
}

/// Catalog listing as rendered for the customer
#[derive(Debug, Clone, Serialize)]
pub struct CatalogResponse {
    pub text: String,
}

/// Standard error response
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            code: "BAD_REQUEST".to_string(),
            message: message.into(),
        }
    }
}
