//! Tool directives emitted by the generation backend.
//!
//! The backend asks for a tool by answering with a literal JSON object instead
//! of prose. That output is untrusted: it is parsed strictly into one of the
//! known shapes, and anything else means the model chose to answer in free
//! text. There is no extraction of JSON embedded in surrounding prose.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A structured tool invocation requested by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "tool", rename_all = "snake_case")]
pub enum Directive {
    /// `{"tool":"check_product_inventory","name":"<product_name>"}`
    CheckProductInventory { name: String },
    /// `{"tool":"create_order","order_details":{...}}`
    ///
    /// Details stay raw here; they are validated by the order request parser.
    CreateOrder { order_details: Value },
    /// `{"tool":"get_order_status","order_id":<int-or-string>}`
    GetOrderStatus { order_id: OrderReference },
}

impl Directive {
    /// Parses trimmed backend output as a directive.
    ///
    /// Returns `None` for prose, for JSON that is not an object of a known
    /// shape, and for known shapes with missing or mistyped fields.
    pub fn parse(text: &str) -> Option<Directive> {
        let value: Value = serde_json::from_str(text.trim()).ok()?;
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Literal JSON form, as the backend is asked to emit it.
    pub fn to_json(&self) -> String {
        // A tagged enum of strings and JSON values always serializes.
        serde_json::to_string(self).unwrap_or_default()
    }

    pub fn tool_name(&self) -> &'static str {
        match self {
            Directive::CheckProductInventory { .. } => "check_product_inventory",
            Directive::CreateOrder { .. } => "create_order",
            Directive::GetOrderStatus { .. } => "get_order_status",
        }
    }
}

/// Order id as emitted by the backend: an integer, or any other JSON value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OrderReference {
    Id(i64),
    Raw(Value),
}

impl OrderReference {
    /// Best-effort integer coercion.
    ///
    /// Integral numbers and integer strings resolve to an id. Anything else
    /// comes back as its raw text so callers can report it unchanged.
    pub fn resolve(&self) -> Result<i64, String> {
        match self {
            OrderReference::Id(id) => Ok(*id),
            OrderReference::Raw(Value::String(s)) => s.trim().parse().map_err(|_| s.clone()),
            OrderReference::Raw(Value::Number(n)) => n
                .as_f64()
                .filter(|f| f.fract() == 0.0 && f.abs() < i64::MAX as f64)
                .map(|f| f as i64)
                .ok_or_else(|| n.to_string()),
            OrderReference::Raw(other) => Err(other.to_string()),
        }
    }
}

impl fmt::Display for OrderReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderReference::Id(id) => write!(f, "{}", id),
            OrderReference::Raw(Value::String(s)) => f.write_str(s),
            OrderReference::Raw(other) => write!(f, "{}", other),
        }
    }
}
