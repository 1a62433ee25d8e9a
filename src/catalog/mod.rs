//! Read-only product catalog.
//!
//! The [`Catalog`] maps a product identifier to its unit price and the ordered
//! list of suppliers allowed to fulfill it. It is built once at startup, wrapped
//! in an `Arc` and shared by every allocation task. Nothing mutates it afterwards,
//! so concurrent lookups need no locking.
//!
//! ## Sources
//!
//! - [`Catalog::builtin`] - the fixture catalog used when no file is configured
//! - [`Catalog::from_json_file`] / [`Catalog::from_json_str`] - a JSON document:
//!
//! ```json
//! {"products": [{"productId": "P001", "unitPrice": 50.0, "supplierIds": ["S1", "S2"]}]}
//! ```
//!
//! - [`Catalog::new`] - in-memory entries, mostly for tests

pub mod error;

pub use error::*;

use crate::model::CatalogEntry;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// Immutable lookup table from product identifier to [`CatalogEntry`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: HashMap<String, CatalogEntry>,
}

#[derive(Deserialize)]
struct CatalogDocument {
    products: Vec<CatalogEntry>,
}

impl Catalog {
    /// Builds a catalog from in-memory entries.
    ///
    /// # Errors
    /// Fails if a price is negative or not finite, a product has no suppliers
    /// or repeats one, or a product identifier is repeated.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self, CatalogError> {
        let mut map = HashMap::new();
        for entry in entries {
            if !entry.unit_price.is_finite() || entry.unit_price < 0.0 {
                return Err(CatalogError::InvalidPrice {
                    product_id: entry.product_id,
                    price: entry.unit_price,
                });
            }
            if entry.supplier_ids.is_empty() {
                return Err(CatalogError::NoSuppliers(entry.product_id));
            }
            if let Some(supplier_id) = first_repeated(&entry.supplier_ids) {
                return Err(CatalogError::DuplicateSupplier {
                    product_id: entry.product_id,
                    supplier_id,
                });
            }
            if map.contains_key(&entry.product_id) {
                return Err(CatalogError::DuplicateProduct(entry.product_id));
            }
            map.insert(entry.product_id.clone(), entry);
        }
        Ok(Self { entries: map })
    }

    /// The fixture catalog served when no catalog file is configured.
    pub fn builtin() -> Self {
        let entries = [
            CatalogEntry::new("P001", 50.0, ["S1", "S2", "S3"]),
            CatalogEntry::new("P002", 30.0, ["S1", "S3"]),
        ];
        Self {
            entries: entries
                .into_iter()
                .map(|entry| (entry.product_id.clone(), entry))
                .collect(),
        }
    }

    /// Parses a catalog from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::new(document.products)
    }

    /// Reads and parses a catalog file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "Loading catalog");
        let json = std::fs::read_to_string(path).map_err(|e| CatalogError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let catalog = Self::from_json_str(&json)?;
        info!(path = %path.display(), products = catalog.len(), "Catalog loaded");
        Ok(catalog)
    }

    /// Looks up a product. An unknown product is `None`, not an error.
    pub fn lookup(&self, product_id: &str) -> Option<&CatalogEntry> {
        self.entries.get(product_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn first_repeated(ids: &[String]) -> Option<String> {
    let mut seen = HashSet::new();
    ids.iter().find(|id| !seen.insert(id.as_str())).cloned()
}
