//! Foundation module - Shared domain primitives.
//!
//! Identifiers that form the vocabulary of the catalog and the assistant.

mod ids;

pub use ids::{OrderId, ProductId, TurnId};
