#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # Order Service
//!
//! > **A tiny order store behind a JSON API.**
//!
//! Clients `POST` an order's items and total cost, receive a sequential id, and later `GET` the
//! order back by that id. Everything lives in memory for the lifetime of the process.
//!
//! ## 🏗️ Design
//!
//! ### One owner for the table
//! The order table and the id counter belong to a single Tokio task, a generic
//! [`ResourceActor`](framework::ResourceActor). HTTP handlers hold a cloneable
//! [`OrderClient`](clients::OrderClient) and talk to the actor over a channel. The actor
//! handles one request at a time, so concurrent creates are serialised and ids never collide,
//! without a lock around the table.
//!
//! ### Validate at the edge
//! Request bodies are decoded into a loose [`CreateOrderRequest`](model::CreateOrderRequest)
//! and then converted into a strict [`OrderCreate`](model::OrderCreate). Anything that fails the
//! conversion is answered with `400` and never reaches the actor.
//!
//! ### Typed errors
//! [`OrderError`](order_actor::OrderError) is the single error type of the service; the
//! [`api`] layer maps each variant to a status code and a `{"error": ...}` body.
//!
//! ## 🗺️ Module Tour
//!
//! - [`framework`]: the generic actor, client and mock.
//! - [`model`]: [`Order`](model::Order), [`OrderId`](model::OrderId) and the request shapes.
//! - [`order_actor`]: the `ActorEntity` impl for orders and [`OrderError`](order_actor::OrderError).
//! - [`clients`]: [`OrderClient`](clients::OrderClient).
//! - [`api`]: axum routes, CORS and request tracing.
//! - [`lifecycle`]: [`OrderSystem`](lifecycle::OrderSystem), tracing setup, shutdown signal.
//! - [`config`]: environment-driven [`Config`](config::Config).
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//!
//! curl -s -X POST localhost:5000/api/orders \
//!      -H 'content-type: application/json' \
//!      -d '{"items": ["apple", "bread"], "totalCost": 5.50}'
//! # {"order_id":1}
//!
//! curl -s localhost:5000/api/orders/1
//! # {"items":["apple","bread"],"totalCost":5.5}
//! ```

pub mod api;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod order_actor;
