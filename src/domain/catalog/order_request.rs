//! Validation of untrusted order details.
//!
//! Order details arrive as JSON emitted by the generation backend. This is the
//! single place where their shape and nested field types are checked; nothing
//! here touches storage.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::domain::foundation::ProductId;

use super::errors::OrderError;

/// One requested line: a product and a positive quantity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

/// A structurally valid order creation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    pub customer_name: String,
    pub customer_email: String,
    pub address: String,
    lines: Vec<OrderLine>,
}

impl OrderRequest {
    /// Builds a request from typed parts. `lines` must not be empty.
    pub fn new(
        customer_name: impl Into<String>,
        customer_email: impl Into<String>,
        address: impl Into<String>,
        lines: Vec<OrderLine>,
    ) -> Result<Self, OrderError> {
        if lines.is_empty() {
            return Err(OrderError::InvalidDetails);
        }
        if let Some(bad) = lines.iter().find(|line| line.quantity <= 0) {
            return Err(OrderError::InvalidItem {
                item: serde_json::json!({
                    "product_id": bad.product_id,
                    "quantity": bad.quantity,
                })
                .to_string(),
            });
        }
        Ok(Self {
            customer_name: customer_name.into(),
            customer_email: customer_email.into(),
            address: address.into(),
            lines,
        })
    }

    /// Parses the `order_details` object of a `create_order` directive.
    ///
    /// # Errors
    ///
    /// - `InvalidDetails` if `items` is missing, not an array, or empty
    /// - `InvalidItem` naming the first item without an integer `product_id`
    ///   or without a positive integer `quantity`
    pub fn from_details(details: &Value) -> Result<Self, OrderError> {
        let items = details
            .get("items")
            .and_then(Value::as_array)
            .filter(|items| !items.is_empty())
            .ok_or(OrderError::InvalidDetails)?;

        let lines = items
            .iter()
            .map(parse_line)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            customer_name: text_field(details, "customer_name"),
            customer_email: text_field(details, "customer_email"),
            address: text_field(details, "address"),
            lines,
        })
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }
}

fn parse_line(item: &Value) -> Result<OrderLine, OrderError> {
    let invalid = || OrderError::InvalidItem {
        item: item.to_string(),
    };

    let product_id = item
        .get("product_id")
        .and_then(integer_value)
        .ok_or_else(invalid)?;
    let quantity = item
        .get("quantity")
        .and_then(Value::as_i64)
        .filter(|quantity| *quantity > 0)
        .ok_or_else(invalid)?;

    Ok(OrderLine {
        product_id: ProductId::new(product_id),
        quantity,
    })
}

// Product ids are commonly emitted as strings by the model; quantities are not.
fn integer_value(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn text_field(details: &Value, key: &str) -> String {
    details
        .get(key)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}
