//! # HTTP Surface
//!
//! | Method | Path | Handler |
//! |--------|------|---------|
//! | POST | `/api/orders` | [`orders::create_order`] |
//! | GET | `/api/orders/{order_id}` | [`orders::get_order`] |
//! | GET | `/health` | [`health::health`] |
//!
//! Handlers never touch the order table directly; they go through the [`OrderClient`] held in
//! [`AppState`], and the actor behind it serialises every access.

pub mod error;
pub mod health;
pub mod orders;

use crate::clients::OrderClient;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub orders: OrderClient,
}

impl AppState {
    pub fn new(orders: OrderClient) -> Self {
        Self { orders }
    }
}

/// Build a router with all routes registered (no middleware, no state)
pub fn build_router() -> Router<AppState> {
    Router::new()
        .merge(orders::router())
        .merge(health::router())
}

/// Build the fully configured application: routes, middleware and state.
pub fn build_app(state: AppState) -> Router {
    build_router()
        // Any origin may call the API; the browser frontend is served elsewhere
        .layer(CorsLayer::permissive())
        // Request spans and status/latency logging
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
