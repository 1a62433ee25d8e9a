use order_fulfillment::allocator::{allocate_line, OrderAllocator};
use order_fulfillment::catalog::Catalog;
use order_fulfillment::lifecycle::FulfillmentSystem;
use order_fulfillment::model::{CatalogEntry, Order, OrderLine, OrderResult, OrderStatus};
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

fn fixture_catalog() -> Catalog {
    Catalog::new([
        CatalogEntry::new("P1", 10.0, ["S1", "S2"]),
        CatalogEntry::new("P2", 2.0, ["S1", "S2", "S3"]),
        CatalogEntry::new("P3", 7.5, ["S4"]),
    ])
    .expect("valid fixture catalog")
}

/// Quantity per (product, supplier), ignoring list order.
fn quantities(result: &OrderResult) -> HashMap<(String, String), u64> {
    let mut map = HashMap::new();
    for a in &result.allocations {
        *map.entry((a.product_id.clone(), a.supplier_id.clone())).or_insert(0) += a.quantity_fulfilled;
    }
    map
}

/// Scenario A: the 40% cap leaves 20 of 100 units unplaced.
#[tokio::test]
async fn test_capped_line_fails_order() {
    let system = FulfillmentSystem::new(fixture_catalog(), 8);

    let order = Order::new("scenario-a", vec![OrderLine::new("P1", 100)]);
    let result = system.client.fulfill_order(order).await.expect("allocation");

    assert_eq!(result.order_id, "scenario-a");
    assert_eq!(result.order_status, OrderStatus::Failed);
    assert_eq!(result.allocations.len(), 2);
    assert_eq!(result.allocations[0].supplier_id, "S1");
    assert_eq!(result.allocations[0].quantity_fulfilled, 40);
    assert_eq!(result.allocations[0].individual_cost, 400.0);
    assert_eq!(result.allocations[1].supplier_id, "S2");
    assert_eq!(result.allocations[1].quantity_fulfilled, 40);
    assert_eq!(result.allocations[1].individual_cost, 400.0);
    assert_eq!(result.order_total_cost, 800.0);

    system.shutdown().await.expect("shutdown");
}

/// Scenario B: a zero-quantity line contributes nothing and does not fail the order.
#[tokio::test]
async fn test_zero_quantity_line() {
    let system = FulfillmentSystem::new(fixture_catalog(), 8);

    let alone = Order::new("scenario-b", vec![OrderLine::new("P1", 0)]);
    let result = system.client.fulfill_order(alone).await.unwrap();
    assert_eq!(result.order_status, OrderStatus::Fulfilled);
    assert!(result.allocations.is_empty());
    assert_eq!(result.order_total_cost, 0.0);

    // P2 x 5 -> 2 + 2 + 1, fully placed
    let mixed = Order::new("scenario-b2", vec![OrderLine::new("P1", 0), OrderLine::new("P2", 5)]);
    let result = system.client.fulfill_order(mixed).await.unwrap();
    assert_eq!(result.order_status, OrderStatus::Fulfilled);
    assert_eq!(result.allocations.len(), 3);
    assert_eq!(result.order_total_cost, 10.0);

    system.shutdown().await.unwrap();
}

/// Scenario C: an unknown product places nothing and fails the order.
#[tokio::test]
async fn test_unknown_product() {
    let system = FulfillmentSystem::new(fixture_catalog(), 8);

    let order = Order::new("scenario-c", vec![OrderLine::new("PX", 5)]);
    let result = system.client.fulfill_order(order).await.unwrap();

    assert_eq!(result.order_status, OrderStatus::Failed);
    assert!(result.allocations.is_empty());
    assert_eq!(result.order_total_cost, 0.0);

    system.shutdown().await.unwrap();
}

/// Scenario D: floor(3 × 0.4) = 1, so a single supplier cannot cover 3 units.
#[tokio::test]
async fn test_truncated_cap_with_single_supplier() {
    let system = FulfillmentSystem::new(fixture_catalog(), 8);

    let order = Order::new("scenario-d", vec![OrderLine::new("P3", 3)]);
    let result = system.client.fulfill_order(order).await.unwrap();

    assert_eq!(result.order_status, OrderStatus::Failed);
    assert_eq!(result.allocations.len(), 1);
    assert_eq!(result.allocations[0].supplier_id, "S4");
    assert_eq!(result.allocations[0].quantity_fulfilled, 1);
    assert_eq!(result.order_total_cost, 7.5);

    system.shutdown().await.unwrap();
}

/// Scenario E: the satisfiable line is still reported and costed when the order fails.
#[tokio::test]
async fn test_partial_work_is_reported() {
    let system = FulfillmentSystem::new(fixture_catalog(), 8);

    let order = Order::new(
        "scenario-e",
        vec![OrderLine::new("P2", 5), OrderLine::new("P1", 100)],
    );
    let result = system.client.fulfill_order(order).await.unwrap();

    assert_eq!(result.order_status, OrderStatus::Failed);
    let q = quantities(&result);
    assert_eq!(q[&("P2".to_string(), "S1".to_string())], 2);
    assert_eq!(q[&("P2".to_string(), "S2".to_string())], 2);
    assert_eq!(q[&("P2".to_string(), "S3".to_string())], 1);
    assert_eq!(q[&("P1".to_string(), "S1".to_string())], 40);
    assert_eq!(q[&("P1".to_string(), "S2".to_string())], 40);
    assert_eq!(result.order_total_cost, 10.0 + 800.0);

    system.shutdown().await.unwrap();
}

/// Orders submitted concurrently through one system each get their own result.
#[tokio::test]
async fn test_concurrent_orders() {
    let system = FulfillmentSystem::new(fixture_catalog(), 4);

    let mut handles = vec![];
    for i in 0..20u64 {
        let client = system.client.clone();
        handles.push(tokio::spawn(async move {
            let order = Order::new(format!("order_{i}"), vec![OrderLine::new("P2", 5 + i)]);
            (i, client.fulfill_order(order).await)
        }));
    }

    for handle in handles {
        let (i, result) = handle.await.unwrap();
        let result = result.expect("allocation");
        assert_eq!(result.order_id, format!("order_{i}"));
        let placed: u64 = result.allocations.iter().map(|a| a.quantity_fulfilled).sum();
        assert!(placed <= 5 + i);
        assert_eq!(result.order_total_cost, placed as f64 * 2.0);
    }

    system.shutdown().await.unwrap();
}

/// The catalog is shared, not consumed: identical orders give identical results.
#[tokio::test]
async fn test_repeated_orders_are_independent() {
    let system = FulfillmentSystem::new(fixture_catalog(), 8);
    // P2 x 10 -> 4 + 4 + 2, P2 x 50 -> 20 + 20 + 10
    let order = Order::new("repeat", vec![OrderLine::new("P2", 10), OrderLine::new("P2", 50)]);

    let first = system.client.fulfill_order(order.clone()).await.unwrap();
    let second = system.client.fulfill_order(order).await.unwrap();
    assert_eq!(first, second);
    assert_eq!(first.order_status, OrderStatus::Fulfilled);
    assert_eq!(first.order_total_cost, 120.0);

    system.shutdown().await.unwrap();
}

fn line_strategy() -> impl Strategy<Value = OrderLine> {
    (
        prop::sample::select(vec!["P1", "P2", "P3", "PX"]),
        prop_oneof![0u64..10, 0u64..1_000, 0u64..600_000],
    )
        .prop_map(|(product, quantity)| OrderLine::new(product, quantity))
}

fn allocate_blocking(allocator: &OrderAllocator, order: Order) -> OrderResult {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    runtime.block_on(allocator.allocate(order)).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    /// Property: the order result is the in-order fold of the per-line results.
    #[test]
    fn order_result_matches_line_fold(lines in prop::collection::vec(line_strategy(), 0..6)) {
        let catalog = Arc::new(fixture_catalog());
        let allocator = OrderAllocator::new(Arc::clone(&catalog));
        let order = Order::new("prop", lines.clone());

        let result = allocate_blocking(&allocator, order.clone());
        let line_results: Vec<_> = lines
            .iter()
            .map(|line| allocate_line(line, catalog.lookup(&line.product_id)))
            .collect();

        let all_complete = line_results.iter().all(|l| l.remaining == 0);
        prop_assert_eq!(result.order_status == OrderStatus::Fulfilled, all_complete);

        let sum: f64 = result.allocations.iter().map(|a| a.individual_cost).sum();
        prop_assert_eq!(result.order_total_cost, sum);

        for a in &result.allocations {
            let price = catalog.lookup(&a.product_id).unwrap().unit_price;
            prop_assert!(a.quantity_fulfilled > 0);
            prop_assert_eq!(a.individual_cost, a.quantity_fulfilled as f64 * price);
        }

        let expected = OrderResult::from_lines("prop", line_results);
        prop_assert_eq!(&result, &expected);

        // Idempotence
        prop_assert_eq!(allocate_blocking(&allocator, order), result);
    }
}

/// The sample catalog shipped in `demos/` loads and allocates.
#[tokio::test]
async fn test_demo_catalog_file() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/demos/catalog.json");
    let catalog = Catalog::from_json_file(path).expect("demo catalog");
    assert_eq!(catalog.len(), 3);

    let system = FulfillmentSystem::new(catalog, 8);
    // P003 x 10 -> cap 4 over four suppliers: 4 + 4 + 2
    let order = Order::new("demo", vec![OrderLine::new("P003", 10)]);
    let result = system.client.fulfill_order(order).await.unwrap();

    assert_eq!(result.order_status, OrderStatus::Fulfilled);
    let suppliers: Vec<&str> = result.allocations.iter().map(|a| a.supplier_id.as_str()).collect();
    assert_eq!(suppliers, vec!["S2", "S4", "S5"]);
    assert_eq!(result.order_total_cost, 122.5);

    system.shutdown().await.unwrap();
}
