//! Application handlers.
//!
//! Handlers that orchestrate domain operations for a conversation turn.

pub mod assistant;
