//! Order records and the wire shapes around them.
//!
//! [`Order`] is what the actor stores. [`CreateOrderRequest`] is what arrives over HTTP, and
//! [`OrderCreate`] is the validated payload the actor accepts. The conversion between the last
//! two is the only schema check the service performs.

use crate::order_actor::OrderError;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::fmt::Display;

/// Type-safe identifier for Orders.
///
/// Serialised as a bare JSON integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub u64);

impl From<u64> for OrderId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl OrderId {
    /// Classifies a raw `{order_id}` path segment.
    ///
    /// - not an integer at all → [`OrderError::InvalidId`]
    /// - an integer no order can have (negative, or beyond `u64`) → [`OrderError::NotFound`]
    /// - otherwise the id, which may still be absent from the store (e.g. `0`)
    pub fn from_path(raw: &str) -> Result<Self, OrderError> {
        let digits = raw.strip_prefix('-').unwrap_or(raw);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(OrderError::InvalidId(raw.to_string()));
        }

        raw.parse::<u64>()
            .map(OrderId)
            .map_err(|_| OrderError::NotFound(raw.to_string()))
    }
}

/// A stored order.
///
/// The id is the table key and is not part of the record, so a lookup returns exactly the two
/// values the caller supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub items: Value,
    #[serde(rename = "totalCost")]
    pub total_cost: Number,
}

impl Order {
    pub fn new(items: Value, total_cost: Number) -> Self {
        Self { items, total_cost }
    }
}

/// Payload for creating a new order, already checked at the boundary.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub items: Value,
    pub total_cost: Number,
}

/// Body of `POST /api/orders` exactly as received.
///
/// Both fields are optional here so a missing field surfaces as a named
/// [`OrderError::Validation`] instead of a generic decode failure. JSON `null` also lands as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub items: Option<Value>,
    #[serde(default, rename = "totalCost")]
    pub total_cost: Option<Value>,
}

impl TryFrom<CreateOrderRequest> for OrderCreate {
    type Error = OrderError;

    fn try_from(request: CreateOrderRequest) -> Result<Self, Self::Error> {
        let items = request
            .items
            .ok_or_else(|| OrderError::Validation("missing field `items`".to_string()))?;

        let total_cost = match request.total_cost {
            Some(Value::Number(n)) => n,
            Some(other) => {
                return Err(OrderError::Validation(format!(
                    "field `totalCost` must be a number, got {}",
                    json_kind(&other)
                )))
            }
            None => {
                return Err(OrderError::Validation(
                    "missing field `totalCost`".to_string(),
                ))
            }
        };

        Ok(Self { items, total_cost })
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request(body: Value) -> CreateOrderRequest {
        serde_json::from_value(body).unwrap()
    }

    #[test]
    fn test_valid_request_is_accepted_verbatim() {
        let create = OrderCreate::try_from(request(json!({
            "items": {"Pizza": 2, "Salad": 1},
            "totalCost": 27
        })))
        .unwrap();

        assert_eq!(create.items, json!({"Pizza": 2, "Salad": 1}));
        assert_eq!(create.total_cost, Number::from(27u64));
    }

    #[test]
    fn test_missing_items_is_rejected() {
        let err = OrderCreate::try_from(request(json!({"totalCost": 5.5}))).unwrap_err();
        assert_eq!(
            err,
            OrderError::Validation("missing field `items`".to_string())
        );
    }

    #[test]
    fn test_null_items_is_rejected() {
        let err =
            OrderCreate::try_from(request(json!({"items": null, "totalCost": 1}))).unwrap_err();
        assert!(matches!(err, OrderError::Validation(_)));
    }

    #[test]
    fn test_missing_total_cost_is_rejected() {
        let err = OrderCreate::try_from(request(json!({"items": []}))).unwrap_err();
        assert_eq!(
            err,
            OrderError::Validation("missing field `totalCost`".to_string())
        );
    }

    #[test]
    fn test_non_numeric_total_cost_is_rejected() {
        let err =
            OrderCreate::try_from(request(json!({"items": [], "totalCost": "5.50"}))).unwrap_err();
        assert_eq!(
            err,
            OrderError::Validation("field `totalCost` must be a number, got a string".to_string())
        );
    }

    #[test]
    fn test_order_serializes_with_wire_names() {
        let order = Order::new(json!(["apple", "bread"]), Number::from_f64(5.5).unwrap());
        let value = serde_json::to_value(&order).unwrap();
        assert_eq!(value, json!({"items": ["apple", "bread"], "totalCost": 5.5}));
    }

    #[test]
    fn test_object_key_order_survives_a_round_trip() {
        let raw = r#"{"items":{"Samosa":3,"Custard":1,"Pasta":2},"totalCost":29}"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(serde_json::to_string(&order).unwrap(), raw);
    }

    #[test]
    fn test_number_text_is_preserved() {
        let raw = r#"{"items":[1.10,-0.0,99999999999999999999999],"totalCost":5.50}"#;
        let order: Order = serde_json::from_str(raw).unwrap();
        assert_eq!(order.total_cost.to_string(), "5.50");
        assert_eq!(serde_json::to_string(&order).unwrap(), raw);
    }

    #[test]
    fn test_order_id_from_path() {
        assert_eq!(OrderId::from_path("42").unwrap(), OrderId(42));
        assert_eq!(OrderId::from_path("0").unwrap(), OrderId(0));
        assert_eq!(
            OrderId::from_path("-1").unwrap_err(),
            OrderError::NotFound("-1".to_string())
        );
        assert_eq!(
            OrderId::from_path("99999999999999999999999").unwrap_err(),
            OrderError::NotFound("99999999999999999999999".to_string())
        );
        assert_eq!(
            OrderId::from_path("abc").unwrap_err(),
            OrderError::InvalidId("abc".to_string())
        );
        assert!(matches!(
            OrderId::from_path("-"),
            Err(OrderError::InvalidId(_))
        ));
        assert!(matches!(
            OrderId::from_path("1.5"),
            Err(OrderError::InvalidId(_))
        ));
    }

    #[test]
    fn test_order_id_is_a_bare_integer_on_the_wire() {
        assert_eq!(serde_json::to_value(OrderId(3)).unwrap(), json!(3));
    }
}
