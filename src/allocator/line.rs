//! Allocation of a single order line across its eligible suppliers.

use crate::model::{CatalogEntry, LineResult, OrderLine, SupplierAllocation};

/// Upper bound on the quantity any single supplier may take for one line.
pub const MAX_UNITS_PER_SUPPLIER: u64 = 100_000;

/// Maximum quantity one supplier may be assigned for a line of `requested` units:
/// `min(100000, floor(requested × 0.40))`.
///
/// Computed in integer arithmetic. Anything below 3 units yields a cap of 0.
pub fn per_supplier_cap(requested: u64) -> u64 {
    (requested.saturating_mul(2) / 5).min(MAX_UNITS_PER_SUPPLIER)
}

/// Distributes `line.quantity` across the suppliers of `entry`.
///
/// Suppliers are visited once each, in catalog order, and each takes at most
/// [`per_supplier_cap`] units. Whatever is left after the last supplier is
/// reported as `remaining`. An unknown product (`entry == None`) fulfills nothing.
pub fn allocate_line(line: &OrderLine, entry: Option<&CatalogEntry>) -> LineResult {
    let mut result = LineResult {
        product_id: line.product_id.clone(),
        allocations: Vec::new(),
        remaining: line.quantity,
    };

    let Some(entry) = entry else {
        return result;
    };

    let cap = per_supplier_cap(line.quantity);
    if cap == 0 {
        return result;
    }

    for supplier_id in &entry.supplier_ids {
        if result.remaining == 0 {
            break;
        }
        let quantity_supplied = result.remaining.min(cap);
        result.allocations.push(SupplierAllocation {
            product_id: line.product_id.clone(),
            supplier_id: supplier_id.clone(),
            quantity_fulfilled: quantity_supplied,
            individual_cost: quantity_supplied as f64 * entry.unit_price,
        });
        result.remaining -= quantity_supplied;
    }

    result
}
