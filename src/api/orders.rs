//! Order routes.

use crate::api::AppState;
use crate::model::{CreateOrderRequest, Order, OrderCreate, OrderId};
use crate::order_actor::OrderError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/orders", post(create_order))
        .route("/api/orders/{order_id}", get(get_order))
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CreateOrderResponse {
    pub order_id: OrderId,
}

/// `POST /api/orders`
///
/// A body that is not JSON, or that fails the schema check, is rejected before the actor sees
/// it, so no id is consumed.
pub async fn create_order(
    State(state): State<AppState>,
    payload: Result<Json<CreateOrderRequest>, JsonRejection>,
) -> Result<Json<CreateOrderResponse>, OrderError> {
    let Json(request) = payload.map_err(|rejection| OrderError::Validation(rejection.body_text()))?;
    let params = OrderCreate::try_from(request)?;

    let order_id = state.orders.create_order(params).await?;
    Ok(Json(CreateOrderResponse { order_id }))
}

/// `GET /api/orders/{order_id}`
pub async fn get_order(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Order>, OrderError> {
    let id = OrderId::from_path(&raw_id)?;
    let order = state.orders.get_order(id).await?;
    Ok(Json(order))
}
