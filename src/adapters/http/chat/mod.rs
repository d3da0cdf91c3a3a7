//! HTTP adapters for the chat assistant
//!
//! Exposes the conversation turn, the catalog listing and a health probe.

pub mod dto;
pub mod handlers;
pub mod routes;

pub use dto::*;
pub use handlers::ChatAppState;
pub use routes::{catalog_routes, routes, turn_routes};
