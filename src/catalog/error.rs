//! Error types for catalog loading.

use thiserror::Error;

/// Errors that can occur while building a [`Catalog`](super::Catalog).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("Failed to read catalog {path}: {reason}")]
    Io { path: String, reason: String },

    /// The catalog document is not valid JSON or has the wrong shape.
    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    /// A product has a negative or non-finite unit price.
    #[error("Invalid unit price for {product_id}: {price}")]
    InvalidPrice { product_id: String, price: f64 },

    /// A product lists no eligible suppliers.
    #[error("Product {0} has no suppliers")]
    NoSuppliers(String),

    /// A supplier is listed more than once for the same product.
    #[error("Supplier {supplier_id} listed twice for {product_id}")]
    DuplicateSupplier {
        product_id: String,
        supplier_id: String,
    },

    /// The same product identifier appears twice.
    #[error("Duplicate product: {0}")]
    DuplicateProduct(String),
}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e.to_string())
    }
}
