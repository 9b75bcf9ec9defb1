//! # System Lifecycle & Orchestration
//!
//! Starting, wiring and stopping the order actor, plus the process-level plumbing around it.
//!
//! - [`OrderSystem`] spawns the order actor and hands out its client
//! - [`setup_tracing`] initialises structured logging
//! - [`shutdown_signal`] resolves when the process is asked to stop
//!
//! ## Graceful Shutdown
//!
//! 1. The HTTP server stops accepting connections and drains in-flight requests.
//! 2. Dropping the router drops every handler's client clone.
//! 3. [`OrderSystem::shutdown`] drops the last client; the actor sees its channel close,
//!    logs its final size and exits.
//! 4. The actor task is awaited so a panic inside it is reported rather than lost.

pub mod order_system;
pub mod signal;
pub mod tracing;

pub use self::order_system::*;
pub use self::signal::*;
pub use self::tracing::*;
