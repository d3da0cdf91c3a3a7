//! SQLite implementation of ToolStore.
//!
//! Order creation is the only writer. It runs its validate-then-commit
//! sequence inside one transaction, serialised in-process by an async mutex,
//! and decrements stock with a guarded update so the `stock >= 0` invariant
//! holds even against writers outside this process.

use async_trait::async_trait;
use sqlx::{Sqlite, SqlitePool, Transaction};
use std::collections::HashMap;
use tokio::sync::Mutex;

use crate::domain::catalog::{
    order_total, OrderError, OrderItem, OrderRequest, OrderStatus, OrderSummary, PlacedOrder,
    Product,
};
use crate::domain::foundation::{OrderId, ProductId};
use crate::ports::{StoreError, ToolStore};

/// SQLite implementation of the ToolStore port.
pub struct SqliteToolStore {
    pool: SqlitePool,
    /// Held for the whole of `create_order`.
    order_lock: Mutex<()>,
}

impl SqliteToolStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self {
            pool,
            order_lock: Mutex::new(()),
        }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

/// Database row representation of a product.
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    name: String,
    description: Option<String>,
    price: f64,
    stock: i64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::new(row.id),
            name: row.name,
            description: row.description,
            price: row.price,
            stock: row.stock,
        }
    }
}

#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    customer_name: Option<String>,
    total_amount: Option<f64>,
    status: Option<String>,
}

impl From<OrderRow> for OrderSummary {
    fn from(row: OrderRow) -> Self {
        OrderSummary {
            id: OrderId::new(row.id),
            customer_name: row.customer_name,
            total_amount: row.total_amount,
            status: row.status,
        }
    }
}

fn read_error(operation: &'static str, err: sqlx::Error) -> StoreError {
    tracing::error!(operation, error = %err, "Catalog read failed");
    match err {
        sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
            StoreError::Unavailable(err.to_string())
        }
        sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => {
            StoreError::Decode(err.to_string())
        }
        other => StoreError::query(other.to_string()),
    }
}

fn write_error(err: sqlx::Error) -> OrderError {
    tracing::error!(error = %err, "Order transaction failed, rolling back");
    OrderError::storage(err.to_string())
}

/// Escapes `%`, `_` and the escape character itself for a `LIKE ... ESCAPE '\'` pattern.
fn like_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

async fn price_and_stock(
    tx: &mut Transaction<'_, Sqlite>,
    product_id: ProductId,
) -> Result<Option<(f64, i64)>, OrderError> {
    sqlx::query_as("SELECT price, stock FROM products WHERE id = ?")
        .bind(product_id.get())
        .fetch_optional(&mut **tx)
        .await
        .map_err(write_error)
}

#[async_trait]
impl ToolStore for SqliteToolStore {
    async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            "SELECT id, name, description, price, stock FROM products ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error("list_products", e))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn search_products(&self, name_query: &str) -> Result<Vec<Product>, StoreError> {
        let rows: Vec<ProductRow> = sqlx::query_as(
            r#"
            SELECT id, name, description, price, stock
            FROM products
            WHERE name LIKE ? ESCAPE '\'
            ORDER BY name
            "#,
        )
        .bind(like_pattern(name_query))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| read_error("search_products", e))?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    async fn find_order(&self, id: OrderId) -> Result<Option<OrderSummary>, StoreError> {
        let row: Option<OrderRow> = sqlx::query_as(
            "SELECT id, customer_name, total_amount, status FROM orders WHERE id = ?",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| read_error("find_order", e))?;

        Ok(row.map(OrderSummary::from))
    }

    async fn create_order(&self, request: &OrderRequest) -> Result<PlacedOrder, OrderError> {
        let _serialised = self.order_lock.lock().await;
        // Dropping the transaction on any early return rolls it back.
        let mut tx = self.pool.begin().await.map_err(write_error)?;

        // Validation: every line, before any write.
        let mut requested: HashMap<ProductId, i64> = HashMap::new();
        let mut items = Vec::with_capacity(request.lines().len());
        for line in request.lines() {
            let (price, stock) = price_and_stock(&mut tx, line.product_id)
                .await?
                .ok_or(OrderError::ProductNotFound {
                    product_id: line.product_id,
                })?;

            // Saturates so an absurd total is still rejected below.
            let wanted = requested.entry(line.product_id).or_insert(0);
            *wanted = wanted.saturating_add(line.quantity);
            if *wanted > stock {
                return Err(OrderError::InsufficientStock {
                    product_id: line.product_id,
                    available: stock,
                    requested: *wanted,
                });
            }

            items.push(OrderItem {
                product_id: line.product_id,
                quantity: line.quantity,
                price_each: price,
            });
        }

        // Execution.
        let total_amount = order_total(&items);
        let order_id = sqlx::query(
            r#"
            INSERT INTO orders (customer_name, customer_email, address, total_amount, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&request.customer_name)
        .bind(&request.customer_email)
        .bind(&request.address)
        .bind(total_amount)
        .bind(OrderStatus::Pending.as_str())
        .execute(&mut *tx)
        .await
        .map_err(write_error)?
        .last_insert_rowid();

        for item in &items {
            sqlx::query(
                "INSERT INTO order_items (order_id, product_id, quantity, price_each) VALUES (?, ?, ?, ?)",
            )
            .bind(order_id)
            .bind(item.product_id.get())
            .bind(item.quantity)
            .bind(item.price_each)
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;

            let updated = sqlx::query(
                "UPDATE products SET stock = stock - ? WHERE id = ? AND stock >= ?",
            )
            .bind(item.quantity)
            .bind(item.product_id.get())
            .bind(item.quantity)
            .execute(&mut *tx)
            .await
            .map_err(write_error)?
            .rows_affected();

            if updated != 1 {
                // Another writer took the units after validation.
                let available = price_and_stock(&mut tx, item.product_id)
                    .await?
                    .map(|(_, stock)| stock)
                    .unwrap_or(0);
                tracing::warn!(
                    product_id = %item.product_id,
                    available,
                    "Stock changed during order creation"
                );
                return Err(OrderError::InsufficientStock {
                    product_id: item.product_id,
                    available,
                    requested: item.quantity,
                });
            }
        }

        tx.commit().await.map_err(write_error)?;

        let order = PlacedOrder {
            id: OrderId::new(order_id),
            total_amount,
            items,
        };
        tracing::info!(
            order_id = %order.id,
            total_amount = order.total_amount,
            lines = order.items.len(),
            "Order created"
        );
        Ok(order)
    }
}
