//! Order-level allocation: one task per line, then a single-threaded fold.

use super::error::AllocatorError;
use super::line::allocate_line;
use crate::catalog::Catalog;
use crate::framework::ActorService;
use crate::model::{LineResult, Order, OrderResult};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Allocates whole orders against a shared, read-only [`Catalog`].
///
/// Stateless apart from the catalog handle: two calls with the same order
/// produce the same result.
#[derive(Debug, Clone)]
pub struct OrderAllocator {
    catalog: Arc<Catalog>,
}

impl OrderAllocator {
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Allocates every line of `order` and assembles the [`OrderResult`].
    ///
    /// Each line runs on its own tokio task. All tasks are awaited, in line
    /// order, before aggregation, so lines that succeed are reported even
    /// when another line fails.
    ///
    /// # Errors
    /// Returns [`AllocatorError::LineTaskFailed`] only if a line task panics.
    #[instrument(skip(self, order), fields(order_id = %order.order_id, lines = order.lines.len()))]
    pub async fn allocate(&self, order: Order) -> Result<OrderResult, AllocatorError> {
        debug!(?order, "allocate called");
        let Order { order_id, lines, .. } = order;

        let tasks: Vec<_> = lines
            .into_iter()
            .map(|line| {
                let catalog = Arc::clone(&self.catalog);
                let product_id = line.product_id.clone();
                let handle = tokio::spawn(async move {
                    allocate_line(&line, catalog.lookup(&line.product_id))
                });
                (product_id, handle)
            })
            .collect();

        let mut line_results: Vec<LineResult> = Vec::with_capacity(tasks.len());
        for (product_id, handle) in tasks {
            match handle.await {
                Ok(line) => {
                    if !line.is_complete() {
                        warn!(product_id = %line.product_id, remaining = line.remaining, "Line not fully allocated");
                    }
                    line_results.push(line);
                }
                Err(e) => {
                    error!(%product_id, error = %e, "Line task failed");
                    return Err(AllocatorError::LineTaskFailed {
                        product_id,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let result = OrderResult::from_lines(order_id, line_results);
        info!(
            status = %result.order_status,
            total_cost = result.order_total_cost,
            allocations = result.allocations.len(),
            "Order processed"
        );
        Ok(result)
    }
}

#[async_trait]
impl ActorService for OrderAllocator {
    type Request = Order;
    type Response = OrderResult;
    type Error = AllocatorError;

    async fn handle(&self, request: Order) -> Result<OrderResult, AllocatorError> {
        self.allocate(request).await
    }
}
