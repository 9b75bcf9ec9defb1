//! # Observability & Tracing
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` formatter filtered by `RUST_LOG`.
//! When `RUST_LOG` is unset the filter passed in (usually `LOG_LEVEL` from the config) applies.
//!
//! ## What Gets Traced
//!
//! - **HTTP requests**: one span per request from `tower-http`'s `TraceLayer`
//! - **Client calls**: `create_order` / `get` spans from `#[instrument]`
//! - **Actor events**: startup, `Created` with the new id and table size, `Get` with `found`,
//!   and the final size at shutdown
//!
//! ## Usage Examples
//!
//! ```bash
//! # Compact logs (default)
//! RUST_LOG=info cargo run
//!
//! # Show full create payloads
//! RUST_LOG=debug cargo run
//!
//! # Quiet the HTTP layer, keep the actor
//! RUST_LOG=tower_http=warn,order_service=debug cargo run
//! ```
//!
//! **With `RUST_LOG=info`** a create followed by a lookup reads:
//!
//! ```text
//! INFO Actor started entity_type="Order"
//! INFO create_order: Sending create_order to actor
//! INFO Created entity_type="Order" id=1 size=1
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // Don't show module paths - we use entity_type instead
        .compact() // Compact format shows spans inline (e.g., "create_order: ...")
        .init();
}
