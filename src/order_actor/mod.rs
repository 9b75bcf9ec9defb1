//! # Order Actor
//!
//! Owns every order the service has accepted, plus the id counter.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`Order`]
//! - [`error`] - [`OrderError`] type shared by the client and the HTTP layer
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use order_service::model::OrderCreate;
//! use order_service::order_actor;
//! use serde_json::json;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = order_actor::new(32);
//!
//!     // No dependencies, so the context is ()
//!     tokio::spawn(actor.run(()));
//!
//!     let params = OrderCreate {
//!         items: json!(["apple", "bread"]),
//!         total_cost: serde_json::Number::from(7u64),
//!     };
//!     let id = client.create_order(params).await?;
//!     assert_eq!(id.0, 1);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::OrderClient;
use crate::framework::ResourceActor;
use crate::model::Order;

/// Creates a new Order actor and its client.
///
/// `buffer_size` bounds the mailbox; callers wait for space once it is full.
pub fn new(buffer_size: usize) -> (ResourceActor<Order>, OrderClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size);
    let client = OrderClient::new(generic_client);

    (actor, client)
}
