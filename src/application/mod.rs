//! Application layer - Handlers and tools.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The assistant handlers decide what to say; the inventory tools turn store
//! results into text the customer can read.

pub mod handlers;
pub mod tools;

pub use handlers::assistant::Assistant;
pub use tools::InventoryTools;
