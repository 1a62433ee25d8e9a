use crate::model::ProductId;
use serde::{Deserialize, Serialize};

/// Represents an inbound customer order.
///
/// Orders are decoded at the HTTP boundary and handed to the
/// [`OrderAllocator`](crate::allocator::OrderAllocator). The identifier is opaque:
/// it is echoed back in the [`OrderResult`](crate::model::OrderResult) and never
/// checked for uniqueness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order_date: Option<String>,
    #[serde(rename = "products")]
    pub lines: Vec<OrderLine>,
}

/// One requested product within an [`Order`].
///
/// `quantity` is unsigned, so negative quantities are rejected while decoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: u64,
}

impl Order {
    /// Creates a new Order without an order date.
    ///
    /// # Arguments
    /// * `order_id` - Caller supplied identifier
    /// * `lines` - Requested products
    pub fn new(order_id: impl Into<String>, lines: Vec<OrderLine>) -> Self {
        Self {
            order_id: order_id.into(),
            order_date: None,
            lines,
        }
    }
}

impl OrderLine {
    pub fn new(product_id: impl Into<ProductId>, quantity: u64) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}
