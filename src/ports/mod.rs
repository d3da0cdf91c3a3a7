//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Text-generation backend
//! - `ContextProvider` - Document retrieval for grounding answers
//! - `ToolStore` - Inventory and order persistence

mod ai_provider;
mod context_provider;
mod tool_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, Message,
    MessageRole, RequestMetadata, TokenUsage,
};
pub use context_provider::{ContextPassage, ContextProvider, RetrievalError};
pub use tool_store::{StoreError, ToolStore};
