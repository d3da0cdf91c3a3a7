//! Assistant Handlers
//!
//! The classify, route and answer pipeline for one user turn.
//!
//! ## Components
//! - `IntentClassifier` - Backend-assisted keyword classification
//! - `SupportHandler` - Documentation-grounded answers
//! - `SalesHandler` - Free text or inventory lookups
//! - `OrderingHandler` - Order creation with status lookup fallback
//! - `CannedHandler` - Fixed replies
//! - `Assistant` - The orchestrator tying them together

#[allow(clippy::module_inception)]
mod assistant;
mod canned;
mod classifier;
mod generation;
mod ordering;
mod sales;
mod support;

pub use assistant::Assistant;
pub use canned::CannedHandler;
pub use classifier::IntentClassifier;
pub use generation::Generator;
pub use ordering::OrderingHandler;
pub use sales::SalesHandler;
pub use support::SupportHandler;
