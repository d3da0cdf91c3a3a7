//! Catalog Domain Module
//!
//! Products, orders and order lines, plus the validation applied to order
//! details before any storage access.

mod errors;
mod order;
mod order_request;
mod product;

pub use errors::OrderError;
pub use order::{order_total, OrderItem, OrderStatus, OrderSummary, PlacedOrder};
pub use order_request::{OrderLine, OrderRequest};
pub use product::{format_amount, Product};
