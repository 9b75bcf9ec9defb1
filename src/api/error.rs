//! HTTP mapping for [`OrderError`].
//!
//! | Variant | Status | Body |
//! |---------|--------|------|
//! | `NotFound` | 404 | `{"error": "Order not found"}` |
//! | `Validation` | 400 | `{"error": "<reason>"}` |
//! | `InvalidId` | 400 | `{"error": "Invalid order id: <raw>"}` |
//! | `ActorCommunicationError` | 503 | `{"error": "Order store unavailable"}` |

use crate::order_actor::OrderError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

/// JSON error body returned by every failing route.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl IntoResponse for OrderError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            OrderError::NotFound(id) => {
                debug!(%id, "Order not found");
                (StatusCode::NOT_FOUND, "Order not found".to_string())
            }
            OrderError::Validation(reason) => {
                debug!(%reason, "Rejected order payload");
                (StatusCode::BAD_REQUEST, reason)
            }
            OrderError::InvalidId(raw) => {
                debug!(%raw, "Rejected order id");
                (StatusCode::BAD_REQUEST, format!("Invalid order id: {raw}"))
            }
            OrderError::ActorCommunicationError(e) => {
                error!(error = %e, "Order store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Order store unavailable".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
