//! InventoryTools - Text-rendering facade over the tool store.
//!
//! Tool results are always shown to the customer, so every operation returns
//! a displayable string, success or failure. Typed store errors are turned
//! into text here and nowhere else.

use serde_json::Value;
use std::sync::Arc;

use crate::domain::catalog::{OrderRequest, Product};
use crate::domain::foundation::OrderId;
use crate::ports::ToolStore;

pub const EMPTY_QUERY_MESSAGE: &str = "Veuillez préciser le nom du produit à rechercher.";
pub const NO_PRODUCTS_MESSAGE: &str = "Aucun produit trouvé.";

/// The four tools the assistant can invoke.
#[derive(Clone)]
pub struct InventoryTools {
    store: Arc<dyn ToolStore>,
}

impl InventoryTools {
    pub fn new(store: Arc<dyn ToolStore>) -> Self {
        Self { store }
    }

    /// Whole catalog, one line per product, ordered by name.
    pub async fn list_products(&self) -> String {
        match self.store.list_products().await {
            Ok(products) if products.is_empty() => NO_PRODUCTS_MESSAGE.to_string(),
            Ok(products) => products
                .iter()
                .map(Product::summary_line)
                .collect::<Vec<_>>()
                .join("\n"),
            Err(e) => format!("Erreur dans list_products : {e}"),
        }
    }

    /// Products whose name contains `name`. A blank query is rejected
    /// without touching the store.
    pub async fn check_product_inventory(&self, name: &str) -> String {
        let query = name.trim();
        if query.is_empty() {
            return EMPTY_QUERY_MESSAGE.to_string();
        }

        match self.store.search_products(query).await {
            Ok(products) if products.is_empty() => {
                format!("Aucun produit trouvé pour « {query} ».")
            }
            Ok(products) => products
                .iter()
                .map(Product::detail_block)
                .collect::<Vec<_>>()
                .join("\n\n"),
            Err(e) => format!("Erreur dans check_product_inventory : {e}"),
        }
    }

    pub async fn get_order_status(&self, order_id: i64) -> String {
        match self.store.find_order(OrderId::new(order_id)).await {
            Ok(Some(order)) => order.describe(),
            Ok(None) => not_found_message(order_id),
            Err(e) => format!("Erreur dans get_order_status : {e}"),
        }
    }

    /// Validates raw `order_details` and places the order.
    ///
    /// Malformed details are rejected before any storage access.
    pub async fn create_order(&self, order_details: &Value) -> String {
        let request = match OrderRequest::from_details(order_details) {
            Ok(request) => request,
            Err(e) => {
                tracing::info!(reason = %e, "Order details rejected");
                return e.to_string();
            }
        };

        match self.store.create_order(&request).await {
            Ok(order) => order.confirmation(),
            Err(e) => {
                if e.is_rejection() {
                    tracing::info!(reason = %e, "Order rejected");
                }
                e.to_string()
            }
        }
    }
}

/// Shown when no order matches, including ids that are not numbers at all.
pub fn not_found_message(order_id: impl std::fmt::Display) -> String {
    format!("Aucune commande trouvée pour l'ID {order_id}.")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::catalog::{OrderError, OrderSummary, PlacedOrder};
    use crate::domain::foundation::ProductId;
    use crate::ports::StoreError;
    use async_trait::async_trait;
    use serde_json::json;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Scripted store that counts every call.
    #[derive(Default)]
    struct FakeStore {
        products: Vec<Product>,
        order: Option<OrderSummary>,
        fail_reads: bool,
        calls: AtomicUsize,
    }

    impl FakeStore {
        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn read<T>(&self, value: T) -> Result<T, StoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_reads {
                Err(StoreError::Unavailable("disk gone".to_string()))
            } else {
                Ok(value)
            }
        }
    }

    #[async_trait]
    impl ToolStore for FakeStore {
        async fn list_products(&self) -> Result<Vec<Product>, StoreError> {
            self.read(self.products.clone())
        }

        async fn search_products(&self, name_query: &str) -> Result<Vec<Product>, StoreError> {
            let found = self
                .products
                .iter()
                .filter(|p| p.name.contains(name_query))
                .cloned()
                .collect();
            self.read(found)
        }

        async fn find_order(&self, id: OrderId) -> Result<Option<OrderSummary>, StoreError> {
            self.read(self.order.clone().filter(|o| o.id == id))
        }

        async fn create_order(&self, request: &OrderRequest) -> Result<PlacedOrder, OrderError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            let line = request.lines()[0];
            Err(OrderError::ProductNotFound {
                product_id: line.product_id,
            })
        }
    }

    fn product(id: i64, name: &str, price: f64, stock: i64) -> Product {
        Product {
            id: ProductId::new(id),
            name: name.to_string(),
            description: None,
            price,
            stock,
        }
    }

    fn tools(store: FakeStore) -> (InventoryTools, Arc<FakeStore>) {
        let store = Arc::new(store);
        (InventoryTools::new(store.clone()), store)
    }

    #[tokio::test]
    async fn blank_query_is_rejected_without_store_call() {
        let (tools, store) = tools(FakeStore::default());

        assert_eq!(tools.check_product_inventory("").await, EMPTY_QUERY_MESSAGE);
        assert_eq!(tools.check_product_inventory("   ").await, EMPTY_QUERY_MESSAGE);
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn unmatched_query_is_named_in_the_answer() {
        let (tools, _) = tools(FakeStore::default());

        assert_eq!(
            tools.check_product_inventory("Imprimante").await,
            "Aucun produit trouvé pour « Imprimante »."
        );
    }

    #[tokio::test]
    async fn matches_are_rendered_as_detail_blocks() {
        let (tools, _) = tools(FakeStore {
            products: vec![
                product(4, "SSD 1To NVMe", 100.0, 20),
                product(5, "SSD 2To NVMe", 180.0, 10),
            ],
            ..Default::default()
        });

        let answer = tools.check_product_inventory("NVMe").await;

        let blocks: Vec<&str> = answer.split("\n\n").collect();
        assert_eq!(blocks.len(), 2);
        assert!(blocks[0].starts_with("4: SSD 1To NVMe"));
        assert!(blocks[0].contains("100.00 €"));
        assert!(blocks[1].starts_with("5: SSD 2To NVMe"));
    }

    #[tokio::test]
    async fn empty_catalog_is_reported_explicitly() {
        let (tools, _) = tools(FakeStore::default());

        assert_eq!(tools.list_products().await, NO_PRODUCTS_MESSAGE);
    }

    #[tokio::test]
    async fn read_faults_become_text() {
        let (tools, _) = tools(FakeStore {
            products: vec![product(1, "PC Basic 8 Go", 250.0, 15)],
            fail_reads: true,
            ..Default::default()
        });

        assert!(tools
            .list_products()
            .await
            .starts_with("Erreur dans list_products : database unavailable"));
        assert!(tools
            .get_order_status(1)
            .await
            .starts_with("Erreur dans get_order_status"));
    }

    #[tokio::test]
    async fn unknown_order_is_not_found() {
        let (tools, _) = tools(FakeStore::default());

        assert_eq!(
            tools.get_order_status(999999).await,
            "Aucune commande trouvée pour l'ID 999999."
        );
    }

    #[tokio::test]
    async fn known_order_is_described() {
        let (tools, _) = tools(FakeStore {
            order: Some(OrderSummary {
                id: OrderId::new(7),
                customer_name: Some("Awa".to_string()),
                total_amount: Some(1700.0),
                status: Some("PENDING".to_string()),
            }),
            ..Default::default()
        });

        let answer = tools.get_order_status(7).await;

        assert!(answer.contains("Awa"));
        assert!(answer.contains("1700.00 €"));
        assert!(answer.contains("PENDING"));
    }

    #[tokio::test]
    async fn malformed_details_never_reach_the_store() {
        let (tools, store) = tools(FakeStore::default());

        let answer = tools.create_order(&json!({ "customer_name": "Awa" })).await;

        assert_eq!(answer, OrderError::InvalidDetails.to_string());
        assert_eq!(store.calls(), 0);
    }

    #[tokio::test]
    async fn store_rejection_is_returned_as_text() {
        let (tools, store) = tools(FakeStore::default());

        let answer = tools
            .create_order(&json!({ "items": [{ "product_id": 42, "quantity": 1 }] }))
            .await;

        assert_eq!(answer, "Produit ID 42 non trouvé.");
        assert_eq!(store.calls(), 1);
    }
}
