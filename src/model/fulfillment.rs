//! Allocation results, from a single supplier share up to the whole order.

use crate::model::{ProductId, SupplierId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Quantity of one product assigned to one supplier.
///
/// Zero-quantity allocations are never produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplierAllocation {
    pub product_id: ProductId,
    pub supplier_id: SupplierId,
    pub quantity_fulfilled: u64,
    /// `quantity_fulfilled × unit price`.
    pub individual_cost: f64,
}

/// Outcome of allocating a single order line.
///
/// `remaining > 0` means the line was only partially fulfilled (or not at all).
#[derive(Debug, Clone, PartialEq)]
pub struct LineResult {
    pub product_id: ProductId,
    pub allocations: Vec<SupplierAllocation>,
    pub remaining: u64,
}

impl LineResult {
    /// Quantity placed with suppliers for this line.
    pub fn fulfilled(&self) -> u64 {
        self.allocations.iter().map(|a| a.quantity_fulfilled).sum()
    }

    pub fn is_complete(&self) -> bool {
        self.remaining == 0
    }

    /// Sum of the allocation costs of this line.
    pub fn cost(&self) -> f64 {
        self.allocations.iter().map(|a| a.individual_cost).sum()
    }
}

/// Order-level status.
///
/// Starts as `Fulfilled` and moves to `Failed` as soon as any line has a
/// non-zero remainder. There is no way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Fulfilled,
    Failed,
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderStatus::Fulfilled => write!(f, "FULFILLED"),
            OrderStatus::Failed => write!(f, "FAILED"),
        }
    }
}

/// The allocator's answer for a whole order.
///
/// Allocations from every line are reported, including lines of a `Failed`
/// order. `order_total_cost` is the sum of all allocation costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResult {
    pub order_id: String,
    pub order_status: OrderStatus,
    #[serde(rename = "orderDetails")]
    pub allocations: Vec<SupplierAllocation>,
    pub order_total_cost: f64,
}

impl OrderResult {
    /// Folds per-line results, in the order given, into an order result.
    pub fn from_lines(order_id: impl Into<String>, lines: impl IntoIterator<Item = LineResult>) -> Self {
        let mut result = Self {
            order_id: order_id.into(),
            order_status: OrderStatus::Fulfilled,
            allocations: Vec::new(),
            order_total_cost: 0.0,
        };

        for line in lines {
            if !line.is_complete() {
                result.order_status = OrderStatus::Failed;
            }
            for allocation in line.allocations {
                result.order_total_cost += allocation.individual_cost;
                result.allocations.push(allocation);
            }
        }

        result
    }

    pub fn is_fulfilled(&self) -> bool {
        self.order_status == OrderStatus::Fulfilled
    }
}
