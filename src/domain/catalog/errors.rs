//! Order creation errors.
//!
//! Display strings are user-facing: tool results are always shown to the
//! customer as text, success or failure.

use thiserror::Error;

use crate::domain::foundation::ProductId;

/// Why an order was not created. No stock is ever decremented when one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrderError {
    #[error("Détails de commande invalides : 'items' manquant ou mal formé.")]
    InvalidDetails,

    #[error("Quantité ou ID invalide dans : {item}")]
    InvalidItem { item: String },

    #[error("Produit ID {product_id} non trouvé.")]
    ProductNotFound { product_id: ProductId },

    #[error(
        "Pas assez de stock pour le produit ID {product_id}. Disponible : {available}, demandé : {requested}"
    )]
    InsufficientStock {
        product_id: ProductId,
        available: i64,
        requested: i64,
    },

    /// The transaction failed mid-flight and was rolled back.
    #[error("Erreur lors de la création de la commande : {0}")]
    Storage(String),
}

impl OrderError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Validation and stock failures, as opposed to storage faults.
    pub fn is_rejection(&self) -> bool {
        !matches!(self, OrderError::Storage(_))
    }
}
