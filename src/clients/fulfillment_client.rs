use crate::allocator::OrderAllocator;
use crate::clients::FulfillmentError;
use crate::framework::{FrameworkError, ServiceClient};
use crate::model::{Order, OrderResult};
use tracing::{debug, info, instrument};

/// Client for submitting orders to the allocator actor.
///
/// This is the only way the HTTP boundary talks to the allocator; it hides the
/// message passing and maps framework errors to [`FulfillmentError`].
#[derive(Clone)]
pub struct FulfillmentClient {
    inner: ServiceClient<OrderAllocator>,
}

impl FulfillmentClient {
    pub fn new(inner: ServiceClient<OrderAllocator>) -> Self {
        Self { inner }
    }

    #[instrument(skip(self, order), fields(order_id = %order.order_id))]
    pub async fn fulfill_order(&self, order: Order) -> Result<OrderResult, FulfillmentError> {
        debug!(?order, "fulfill_order called");
        info!("Sending order to allocator");

        self.inner.call(order).await.map_err(Self::map_error)
    }

    fn map_error(e: FrameworkError) -> FulfillmentError {
        match e {
            FrameworkError::ActorClosed => FulfillmentError::Unavailable(e.to_string()),
            FrameworkError::ActorDropped => FulfillmentError::Allocation(e.to_string()),
            FrameworkError::Service(msg) => FulfillmentError::Allocation(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::framework::mock::{create_mock_client, MockService};
    use crate::model::{OrderLine, OrderStatus};

    #[tokio::test]
    async fn test_fulfill_order_forwards_order() {
        let mut mock = MockService::<OrderAllocator>::new();
        mock.expect_call()
            .return_ok(OrderResult::from_lines("order_1", Vec::new()));

        let client = FulfillmentClient::new(mock.client());
        let order = Order::new("order_1", vec![OrderLine::new("P001", 10)]);
        let result = client.fulfill_order(order.clone()).await.unwrap();

        assert_eq!(result.order_status, OrderStatus::Fulfilled);
        assert_eq!(mock.received(), vec![order]);
        mock.verify();
    }

    #[tokio::test]
    async fn test_error_mapping() {
        let mut mock = MockService::<OrderAllocator>::new();
        mock.expect_call()
            .return_err(FrameworkError::Service("task panicked".into()));
        mock.expect_call().return_err(FrameworkError::ActorDropped);

        let client = FulfillmentClient::new(mock.client());

        let err = client.fulfill_order(Order::new("a", Vec::new())).await.unwrap_err();
        assert_eq!(err, FulfillmentError::Allocation("task panicked".into()));

        let err = client.fulfill_order(Order::new("b", Vec::new())).await.unwrap_err();
        assert!(matches!(err, FulfillmentError::Allocation(_)));

        mock.verify();
    }

    #[tokio::test]
    async fn test_unavailable_when_actor_gone() {
        let (inner, receiver) = create_mock_client::<OrderAllocator>(1);
        drop(receiver);

        let client = FulfillmentClient::new(inner);
        let err = client.fulfill_order(Order::new("c", Vec::new())).await.unwrap_err();
        assert!(matches!(err, FulfillmentError::Unavailable(_)));
    }
}
