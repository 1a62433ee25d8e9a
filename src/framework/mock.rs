//! # Mock Framework
//!
//! Utilities for testing clients in isolation from the real service.
//!
//! Use [`MockService`] to script responses with [`MockService::expect_call`],
//! or [`create_mock_client`] to get a client and the raw receiver and answer
//! requests by hand with [`expect_call`].

use crate::framework::{ActorService, FrameworkError, ServiceClient, ServiceRequest};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::{mpsc, oneshot};

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

type Expectations<S> =
    Arc<Mutex<VecDeque<Result<<S as ActorService>::Response, FrameworkError>>>>;

/// A mock service with expectation tracking for fluent testing.
///
/// Responses are returned in the order they were scripted. Every request the
/// mock receives is recorded and can be inspected with [`MockService::received`].
///
/// # Example
/// ```ignore
/// let mut mock = MockService::<OrderAllocator>::new();
/// mock.expect_call().return_ok(result);
///
/// let client = FulfillmentClient::new(mock.client());
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockService<S: ActorService> {
    client: ServiceClient<S>,
    expectations: Expectations<S>,
    received: Arc<Mutex<Vec<S::Request>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<S: ActorService> MockService<S> {
    /// Creates a new mock with no expectations.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ServiceRequest<S>>(100);
        let expectations: Expectations<S> = Arc::new(Mutex::new(VecDeque::new()));
        let received = Arc::new(Mutex::new(Vec::new()));
        let expectations_clone = expectations.clone();
        let received_clone = received.clone();

        // Spawn background task to handle requests
        let handle = tokio::spawn(async move {
            while let Some(ServiceRequest { request, respond_to }) = receiver.recv().await {
                received_clone.lock().unwrap().push(request);
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match expectation {
                    Some(response) => {
                        let _ = respond_to.send(response);
                    }
                    None => panic!("Unexpected request: no expectation left"),
                }
            }
        });

        Self {
            client: ServiceClient::new(sender),
            expectations,
            received,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ServiceClient<S> {
        self.client.clone()
    }

    /// Expects a `call`.
    pub fn expect_call(&mut self) -> CallExpectationBuilder<S> {
        CallExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Requests received so far, in arrival order.
    pub fn received(&self) -> Vec<S::Request>
    where
        S::Request: Clone,
    {
        self.received.lock().unwrap().clone()
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

impl<S: ActorService> Default for MockService<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `call` expectations.
pub struct CallExpectationBuilder<S: ActorService> {
    expectations: Expectations<S>,
}

impl<S: ActorService> CallExpectationBuilder<S> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, response: S::Response) {
        self.expectations.lock().unwrap().push_back(Ok(response));
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        self.expectations.lock().unwrap().push_back(Err(error));
    }
}

// =============================================================================
// MANUAL HELPERS
// =============================================================================

/// Creates a client and the receiver its requests arrive on.
///
/// Useful when a test needs to control *when* a response is sent, e.g. to
/// exercise timeouts. See [`MockService`] for a more fluent API.
pub fn create_mock_client<S: ActorService>(
    buffer_size: usize,
) -> (ServiceClient<S>, mpsc::Receiver<ServiceRequest<S>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ServiceClient::new(sender), receiver)
}

/// Helper to take the next request and its responder from the receiver.
pub async fn expect_call<S: ActorService>(
    receiver: &mut mpsc::Receiver<ServiceRequest<S>>,
) -> Option<(S::Request, oneshot::Sender<Result<S::Response, FrameworkError>>)> {
    receiver
        .recv()
        .await
        .map(|ServiceRequest { request, respond_to }| (request, respond_to))
}
