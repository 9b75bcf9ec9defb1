//! Error types for the Order actor.

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum OrderError {
    /// The requested order was not found.
    #[error("Order not found: {0}")]
    NotFound(String),

    /// The order payload failed the boundary schema check.
    #[error("Order validation error: {0}")]
    Validation(String),

    /// The path segment is not an order id at all.
    #[error("Invalid order id: {0}")]
    InvalidId(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
