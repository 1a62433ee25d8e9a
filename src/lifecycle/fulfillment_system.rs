use crate::allocator::OrderAllocator;
use crate::catalog::Catalog;
use crate::clients::FulfillmentClient;
use crate::framework::ServiceActor;
use std::sync::Arc;
use tracing::{error, info};

/// The runtime orchestrator for the order fulfillment service.
///
/// `FulfillmentSystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping the allocator actor
/// - **Dependency Wiring**: Handing the shared, read-only [`Catalog`] to the allocator
///
/// # Example
///
/// ```ignore
/// let system = FulfillmentSystem::new(Catalog::builtin(), 32);
///
/// let result = system.client.fulfill_order(order).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct FulfillmentSystem {
    /// Client for submitting orders to the allocator actor
    pub client: FulfillmentClient,

    catalog: Arc<Catalog>,

    /// Task handle of the allocator actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl FulfillmentSystem {
    /// Creates the allocator actor over `catalog` and spawns it.
    ///
    /// `buffer_size` is the capacity of the actor's request channel; values
    /// below 1 are raised to 1. Must be called from within a tokio runtime.
    pub fn new(catalog: Catalog, buffer_size: usize) -> Self {
        let catalog = Arc::new(catalog);
        let allocator = OrderAllocator::new(Arc::clone(&catalog));

        let (actor, service_client) = ServiceActor::new(buffer_size.max(1), allocator);
        let handle = tokio::spawn(actor.run());
        info!(products = catalog.len(), buffer_size, "Fulfillment system started");

        Self {
            client: FulfillmentClient::new(service_client),
            catalog,
            handle,
        }
    }

    /// The catalog shared with the allocator.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Gracefully shuts down the system.
    ///
    /// Drops the system's client and waits for the actor to finish every
    /// in-flight order. Clones of the client held elsewhere (e.g. by the HTTP
    /// router) keep the actor alive, so drop them first.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down fulfillment system...");

        // Closing the last sender makes the actor's receiver return None.
        drop(self.client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Fulfillment system shutdown complete.");
        Ok(())
    }
}
