//! Generic actor framework for resource management.
//!
//! This module provides the building blocks for a single task that exclusively owns a table of
//! entities and serves create/read requests sequentially.
//!
//! # Main Components
//!
//! - [`ActorEntity`] - Trait that resource types implement to be managed by an actor
//! - [`ResourceActor`] - Generic actor that owns the table and the id counter
//! - [`ResourceClient`] - Type-safe, cloneable handle used to talk to the actor
//! - [`FrameworkError`] - Common error types
//!
//! # Testing
//!
//! See [`mock`] module for utilities to test clients without spawning full actors.

pub mod core;
pub mod mock;

// Re-export core types for convenience
pub use core::*;
