//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (identifiers)
//! - `catalog` - Products, orders and order request validation
//! - `assistant` - Intents, routing, conversation state and tool directives

pub mod assistant;
pub mod catalog;
pub mod foundation;
