//! Orders and their lines.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{OrderId, ProductId};

use super::product::format_amount;

/// Lifecycle status of an order. Only the initial status exists in-core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    Pending,
}

impl OrderStatus {
    /// Value stored in the `orders.status` column.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "PENDING",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line of a placed order.
///
/// `price_each` is the product price observed when the order was validated
/// and is never updated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub product_id: ProductId,
    pub quantity: i64,
    pub price_each: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price_each * self.quantity as f64
    }
}

/// Sum of `quantity × price_each` over the given lines.
pub fn order_total(items: &[OrderItem]) -> f64 {
    items.iter().map(OrderItem::line_total).sum()
}

/// Result of a successful order creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub id: OrderId,
    pub total_amount: f64,
    pub items: Vec<OrderItem>,
}

impl PlacedOrder {
    /// Confirmation shown to the customer.
    pub fn confirmation(&self) -> String {
        format!(
            "✅ Commande créée avec succès. ID de commande : {}.\n\
             Montant total : {}.\n\
             Vous recevrez bientôt un email de confirmation.",
            self.id,
            format_amount(self.total_amount)
        )
    }
}

/// Order header as read back for a status lookup.
///
/// Columns are nullable in the persisted schema, hence the options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSummary {
    pub id: OrderId,
    pub customer_name: Option<String>,
    pub total_amount: Option<f64>,
    pub status: Option<String>,
}

impl OrderSummary {
    pub fn describe(&self) -> String {
        format!(
            "Commande ID {}\nClient : {}\nMontant : {}\nStatut : {}",
            self.id,
            self.customer_name.as_deref().unwrap_or(""),
            format_amount(self.total_amount.unwrap_or_default()),
            self.status.as_deref().unwrap_or(OrderStatus::Pending.as_str())
        )
    }
}
