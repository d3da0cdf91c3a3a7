//! Tool store port - inventory and order persistence.
//!
//! Typed operations over the product catalog and orders. Rendering results
//! as customer-facing text is the caller's concern, not the store's.
//!
//! # Consistency
//!
//! - Reads may run concurrently with each other and with unrelated orders.
//! - `create_order` validates and commits as one atomic unit. Two concurrent
//!   orders can never both pass the stock check for the same units.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::catalog::{OrderError, OrderRequest, OrderSummary, PlacedOrder, Product};
use crate::domain::foundation::OrderId;

#[async_trait]
pub trait ToolStore: Send + Sync {
    /// All products, ordered by name ascending.
    async fn list_products(&self) -> Result<Vec<Product>, StoreError>;

    /// Products whose name contains `name_query`, ordered by name ascending.
    ///
    /// Matching is case-insensitive for ASCII letters.
    async fn search_products(&self, name_query: &str) -> Result<Vec<Product>, StoreError>;

    /// Order header by exact id. `None` if no such order exists.
    async fn find_order(&self, id: OrderId) -> Result<Option<OrderSummary>, StoreError>;

    /// Validates every line against the current catalog, then inserts the
    /// order and its items and decrements stock, all or nothing.
    async fn create_order(&self, request: &OrderRequest) -> Result<PlacedOrder, OrderError>;
}

/// Read-path storage faults.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StoreError {
    #[error("database unavailable: {0}")]
    Unavailable(String),

    #[error("query failed: {0}")]
    Query(String),

    #[error("unexpected row data: {0}")]
    Decode(String),
}

impl StoreError {
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query(message.into())
    }
}
