//! Catalog products.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::ProductId;

/// A product offered by the shop.
///
/// Stock is only ever decremented by order creation; the catalog itself
/// is provisioned outside the assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: Option<String>,
    /// Unit price in euros, never negative.
    pub price: f64,
    /// Units on hand, never negative.
    pub stock: i64,
}

impl Product {
    /// One-line rendering used by the catalog listing.
    pub fn summary_line(&self) -> String {
        format!(
            "{}: {} — {} — stock : {}",
            self.id,
            self.name,
            format_amount(self.price),
            self.stock
        )
    }

    /// Multi-line rendering used by inventory search results.
    pub fn detail_block(&self) -> String {
        format!(
            "{}: {}\n  Description : {}\n  Prix : {}\n  Stock : {}",
            self.id,
            self.name,
            self.description.as_deref().unwrap_or(""),
            format_amount(self.price),
            self.stock
        )
    }
}

/// Formats an amount in euros with two decimals.
pub fn format_amount(amount: f64) -> String {
    format!("{:.2} €", amount)
}
