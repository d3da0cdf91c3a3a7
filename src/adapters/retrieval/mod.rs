//! Context Provider Adapters.
//!
//! - `DirectoryContextProvider` - Term-overlap search over a documentation directory
//! - `StaticContextProvider` - Fixed passages, for tests and document-less setups

mod directory_context;
mod static_context;

pub use directory_context::{DirectoryContextConfig, DirectoryContextProvider};
pub use static_context::StaticContextProvider;
