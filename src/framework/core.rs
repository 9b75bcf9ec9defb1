//! # Core Actor Framework
//!
//! This module defines the generic building blocks for the actor system.
//!
//! ## Key Types
//!
//! - [`ActorEntity`]: The trait that all resource types must implement.
//! - [`ResourceActor`]: The generic actor that owns the entity table.
//! - [`ResourceClient`]: The generic client for communicating with actors.
//! - [`FrameworkError`]: Common errors (e.g., ActorClosed, ActorDropped).

use async_trait::async_trait;
use std::collections::HashMap;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info, warn};

// =============================================================================
// 1. THE ABSTRACTION (Trait with Hooks and DTOs)
// =============================================================================

/// Trait that any resource entity must implement to be managed by [`ResourceActor`].
///
/// Associated types pin every request to its entity: an `Order` actor only accepts an
/// `OrderCreate` payload, and the compiler rejects anything else.
///
/// # Async & Context
/// The trait is `#[async_trait]` so the `on_create` hook may await other actors. The `Context`
/// type is injected into every hook at `run()` time rather than at construction time.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Built from the actor's `u64` counter, so it must be convertible from one.
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug + From<u64>;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called after the entity is built and before it is stored.
    /// Returning an error discards the entity and leaves the counter untouched.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }
}

// =============================================================================
// 2. THE GENERIC MESSAGES & ERRORS
// =============================================================================

/// Errors that can occur within the actor framework itself.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Entity error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// Entities are created once and read many times; there is no update or delete path.
///
/// - **Create**: Uses [`ActorEntity::Create`] to initialize and store a new resource.
/// - **Get**: Fetches a clone of the stored resource by ID.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    Create {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
}

// =============================================================================
// 3. THE GENERIC ACTOR SERVER
// =============================================================================

/// The generic actor that manages a collection of entities.
///
/// # Architecture Note
/// This struct is the "Server" half of the actor. It owns the state (`store`, `next_id`) and
/// the receiver end of the channel.
///
/// **Concurrency Model**:
/// Requests are processed *sequentially* in a single task, so two concurrent creates can never
/// be handed the same id and no `Mutex` is needed around the table.
///
/// ## Operations
///
/// * **Create**:
///     1. Converts the current `next_id` into `T::Id`.
///     2. Calls `T::from_create_params` and then the `on_create` hook.
///     3. Inserts the entity and only then advances `next_id`.
///     4. Returns the new ID.
///
/// * **Get**:
///     1. Looks up the entity in the `store` by ID.
///     2. Returns a clone of the entity if found, or `None`.
pub struct ResourceActor<T: ActorEntity> {
    receiver: mpsc::Receiver<ResourceRequest<T>>,
    store: HashMap<T::Id, T>,
    next_id: u64,
}

impl<T: ActorEntity> ResourceActor<T> {
    /// Creates a new `ResourceActor` and its associated `ResourceClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, ResourceClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            store: HashMap::new(),
            next_id: 1,
        };
        let client = ResourceClient::new(sender);
        (actor, client)
    }

    /// Runs the actor's event loop, processing messages until every client is dropped.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every entity hook.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "Order" instead of "order_service::model::order::Order")
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Actor started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ResourceRequest::Create { params, respond_to } => {
                    debug!(entity_type, ?params, "Create");
                    let id = T::Id::from(self.next_id);

                    match T::from_create_params(id.clone(), params) {
                        Ok(mut item) => {
                            if let Err(e) = item.on_create(&context).await {
                                warn!(entity_type, error = %e, "on_create failed");
                                let _ =
                                    respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                                continue;
                            }
                            self.store.insert(id.clone(), item);
                            self.next_id += 1;
                            info!(entity_type, %id, size = self.store.len(), "Created");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Create failed");
                            let _ = respond_to.send(Err(FrameworkError::EntityError(Box::new(e))));
                        }
                    }
                }
                ResourceRequest::Get { id, respond_to } => {
                    let item = self.store.get(&id).cloned();
                    let found = item.is_some();
                    debug!(entity_type, %id, found, "Get");
                    let _ = respond_to.send(Ok(item));
                }
            }
        }

        info!(entity_type, size = self.store.len(), "Shutdown");
    }
}

// =============================================================================
// 4. THE GENERIC CLIENT
// =============================================================================

/// A type-safe client for interacting with a `ResourceActor`.
///
/// Holds only a sender, so cloning is cheap and clones can be shared across tasks.
#[derive(Clone)]
pub struct ResourceClient<T: ActorEntity> {
    sender: mpsc::Sender<ResourceRequest<T>>,
}

impl<T: ActorEntity> ResourceClient<T> {
    pub fn new(sender: mpsc::Sender<ResourceRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn create(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Create { params, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ResourceRequest::Get { id, respond_to })
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }
}

// =============================================================================
// 5. EXAMPLE USAGE (Test)
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // --- Domain Definition ---

    #[derive(Clone, Debug, PartialEq)]
    struct Ticket {
        id: u64,
        seat: String,
    }

    #[derive(Debug)]
    struct TicketCreate {
        seat: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Invalid seat: {0}")]
    struct TicketError(String);

    #[async_trait]
    impl ActorEntity for Ticket {
        type Id = u64;
        type Create = TicketCreate;
        /// Seats that are already sold.
        type Context = Vec<String>;
        type Error = TicketError;

        fn from_create_params(id: u64, params: TicketCreate) -> Result<Self, TicketError> {
            if params.seat.is_empty() {
                return Err(TicketError(params.seat));
            }
            Ok(Self {
                id,
                seat: params.seat,
            })
        }

        async fn on_create(&mut self, sold: &Vec<String>) -> Result<(), TicketError> {
            if sold.contains(&self.seat) {
                return Err(TicketError(self.seat.clone()));
            }
            Ok(())
        }
    }

    fn ticket(seat: &str) -> TicketCreate {
        TicketCreate { seat: seat.into() }
    }

    // --- Tests ---

    #[tokio::test]
    async fn test_ids_are_sequential_from_one() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(Vec::new()));

        for expected in 1..=5u64 {
            let id = client.create(ticket("A1")).await.unwrap();
            assert_eq!(id, expected);
        }
    }

    #[tokio::test]
    async fn test_get_returns_stored_entity() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(Vec::new()));

        let first = client.create(ticket("A1")).await.unwrap();
        let second = client.create(ticket("B2")).await.unwrap();

        let fetched = client.get(second).await.unwrap().unwrap();
        assert_eq!(fetched.seat, "B2");
        assert_eq!(fetched.id, second);

        // The earlier entity is untouched
        let fetched = client.get(first).await.unwrap().unwrap();
        assert_eq!(fetched.seat, "A1");
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(Vec::new()));

        assert!(client.get(0).await.unwrap().is_none());
        assert!(client.get(1).await.unwrap().is_none());

        client.create(ticket("A1")).await.unwrap();
        assert!(client.get(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rejected_create_does_not_consume_id() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(Vec::new()));

        let err = client.create(ticket("")).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));

        let id = client.create(ticket("A1")).await.unwrap();
        assert_eq!(id, 1);
    }

    #[tokio::test]
    async fn test_failed_on_create_hook_does_not_consume_id() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        tokio::spawn(actor.run(vec!["A1".to_string()]));

        let err = client.create(ticket("A1")).await.unwrap_err();
        assert!(matches!(err, FrameworkError::EntityError(_)));
        assert!(client.get(1).await.unwrap().is_none());

        let id = client.create(ticket("B2")).await.unwrap();
        assert_eq!(id, 1);
        assert_eq!(client.get(1).await.unwrap().unwrap().seat, "B2");
    }

    #[tokio::test]
    async fn test_client_fails_once_actor_is_gone() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        drop(actor);

        let err = client.create(ticket("A1")).await.unwrap_err();
        assert!(matches!(err, FrameworkError::ActorClosed));
    }

    #[tokio::test]
    async fn test_actor_stops_when_clients_dropped() {
        let (actor, client) = ResourceActor::<Ticket>::new(10);
        let handle = tokio::spawn(actor.run(Vec::new()));

        client.create(ticket("A1")).await.unwrap();
        drop(client);

        handle.await.unwrap();
    }
}
