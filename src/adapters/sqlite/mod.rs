//! SQLite adapters - Persistence for the catalog and orders.
//!
//! - `SqliteToolStore` - ToolStore over a `SqlitePool`
//! - `connect` / `migrate` - Pool construction and schema migrations
//! - `seed_demo_catalog` - Demo products for local runs

mod pool;
mod seed;
mod tool_store;

pub use pool::{connect, migrate, DatabaseSetupError};
pub use seed::seed_demo_catalog;
pub use tool_store::SqliteToolStore;
