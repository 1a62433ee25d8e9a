//! # Core Actor Framework
//!
//! This module defines the generic building blocks for hosting a service behind
//! a message-passing actor.
//!
//! ## Key Types
//!
//! - [`ActorService`]: The trait a service implements to be hosted by an actor.
//! - [`ServiceActor`]: The generic actor that receives requests and runs them.
//! - [`ServiceClient`]: The generic client for communicating with the actor.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, ActorDropped).

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::sync::Arc;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinSet;
use tracing::{debug, error, info, warn};

// =============================================================================
// 1. THE ABSTRACTION
// =============================================================================

/// Trait that any service must implement to be hosted by a [`ServiceActor`].
///
/// # Architecture Note
/// The actor owns the plumbing (channel, message loop, task tracking, error
/// mapping); the service only says how to turn one request into one response.
/// Associated types keep the pairing type-safe: a client for a service that
/// takes an `Order` cannot be handed anything else.
///
/// `handle` takes `&self` because requests run concurrently on separate tasks
/// that share the service through an `Arc`. Services therefore hold no
/// per-request mutable state.
#[async_trait]
pub trait ActorService: Send + Sync + 'static {
    /// The request payload.
    type Request: Send + Debug + 'static;

    /// The successful response payload.
    type Response: Send + Debug + 'static;

    /// The service's own error type.
    type Error: Send + Display + Debug + 'static;

    /// Handles a single request.
    async fn handle(&self, request: Self::Request) -> Result<Self::Response, Self::Error>;
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, Clone, thiserror::Error, PartialEq)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Service error: {0}")]
    Service(String),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to the actor: the request plus the channel to answer on.
#[derive(Debug)]
pub struct ServiceRequest<S: ActorService> {
    pub request: S::Request,
    pub respond_to: Response<S::Response>,
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor hosting an [`ActorService`].
///
/// **Concurrency Model**:
/// The actor drains its channel in a single loop, but every request is handled
/// on its own task tracked in a `JoinSet`, so a slow request never blocks the
/// next one. When all clients are dropped the channel closes, the loop stops
/// accepting work, and `run` returns once every in-flight request has finished.
pub struct ServiceActor<S: ActorService> {
    receiver: mpsc::Receiver<ServiceRequest<S>>,
    service: Arc<S>,
}

impl<S: ActorService> ServiceActor<S> {
    /// Creates the actor and its client.
    ///
    /// `buffer_size` is the channel capacity and must be at least 1.
    pub fn new(buffer_size: usize, service: S) -> (Self, ServiceClient<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            service: Arc::new(service),
        };
        (actor, ServiceClient::new(sender))
    }

    /// Runs the actor's event loop until the channel closes and all in-flight
    /// requests have completed.
    pub async fn run(mut self) {
        // e.g. "OrderAllocator" instead of "order_fulfillment::allocator::order::OrderAllocator"
        let service_type = std::any::type_name::<S>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(service_type, "Actor started");

        let mut in_flight = JoinSet::new();
        let mut handled: u64 = 0;

        loop {
            tokio::select! {
                msg = self.receiver.recv() => {
                    let Some(ServiceRequest { request, respond_to }) = msg else {
                        break;
                    };
                    debug!(service_type, ?request, "Request");
                    handled += 1;

                    let service = Arc::clone(&self.service);
                    in_flight.spawn(async move {
                        let result = service.handle(request).await.map_err(|e| {
                            warn!(service_type, error = %e, "Request failed");
                            FrameworkError::Service(e.to_string())
                        });
                        let _ = respond_to.send(result);
                    });
                }
                Some(joined) = in_flight.join_next(), if !in_flight.is_empty() => {
                    if let Err(e) = joined {
                        error!(service_type, error = %e, "Request task failed");
                    }
                }
            }
        }

        while let Some(joined) = in_flight.join_next().await {
            if let Err(e) = joined {
                error!(service_type, error = %e, "Request task failed");
            }
        }

        info!(service_type, handled, "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a [`ServiceActor`].
///
/// Holds only a sender, so cloning is cheap.
pub struct ServiceClient<S: ActorService> {
    sender: mpsc::Sender<ServiceRequest<S>>,
}

impl<S: ActorService> Clone for ServiceClient<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ActorService> ServiceClient<S> {
    pub fn new(sender: mpsc::Sender<ServiceRequest<S>>) -> Self {
        Self { sender }
    }

    pub async fn call(&self, request: S::Request) -> Result<S::Response, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender.send(ServiceRequest { request, respond_to })
            .await.map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================
