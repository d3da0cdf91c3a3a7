//! Assistant Domain Module
//!
//! Everything the dialogue orchestrator reasons about without touching an
//! external service: intents and their keyword recognition, routing, the
//! per-conversation state, tool directives, prompts and canned replies.

mod canned;
mod conversation_state;
mod directive;
mod intent;
mod prompts;
mod route;

pub use canned::{CannedReply, HANDOVER_ANSWER};
pub use conversation_state::{ConversationState, Role, Turn};
pub use directive::{Directive, OrderReference};
pub use intent::Intent;
pub use prompts::Prompt;
pub use route::Route;
