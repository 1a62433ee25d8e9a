use serde::{Deserialize, Serialize};

/// Identifier of an orderable product (e.g. `"P001"`).
pub type ProductId = String;

/// Identifier of a supplier (e.g. `"S1"`).
pub type SupplierId = String;

/// A product as listed in the [`Catalog`](crate::catalog::Catalog).
///
/// The order of `supplier_ids` is the allocation priority: the first supplier
/// is offered its share of a line before the second, and so on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogEntry {
    pub product_id: ProductId,
    pub unit_price: f64,
    pub supplier_ids: Vec<SupplierId>,
}

impl CatalogEntry {
    /// Creates a new catalog entry.
    ///
    /// # Arguments
    /// * `product_id` - Product identifier used for lookups
    /// * `unit_price` - Price of a single unit
    /// * `supplier_ids` - Eligible suppliers, in priority order
    pub fn new<S: Into<SupplierId>>(
        product_id: impl Into<ProductId>,
        unit_price: f64,
        supplier_ids: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            unit_price,
            supplier_ids: supplier_ids.into_iter().map(Into::into).collect(),
        }
    }
}
