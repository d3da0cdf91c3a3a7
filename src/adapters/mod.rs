//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `ai` - Generation backends (OpenAI, mock)
//! - `retrieval` - Documentation context providers
//! - `sqlite` - Catalog and order persistence
//! - `http` - REST API

pub mod ai;
pub mod http;
pub mod retrieval;
pub mod sqlite;

pub use ai::{MockAIProvider, OpenAIConfig, OpenAIProvider};
pub use http::{build_router, ChatAppState};
pub use retrieval::{DirectoryContextConfig, DirectoryContextProvider, StaticContextProvider};
pub use sqlite::SqliteToolStore;
