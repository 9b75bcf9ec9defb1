use order_service::clients::OrderClient;
use order_service::framework::mock::MockClient;
use order_service::framework::FrameworkError;
use order_service::lifecycle::OrderSystem;
use order_service::model::{Order, OrderCreate, OrderId};
use order_service::order_actor::{self, OrderError};
use serde_json::{json, Number};
use std::collections::HashSet;

fn params(items: serde_json::Value, total_cost: f64) -> OrderCreate {
    OrderCreate {
        items,
        total_cost: Number::from_f64(total_cost).unwrap(),
    }
}

/// Real Order actor driven through its client.
#[tokio::test]
async fn test_orders_round_trip_through_actor() {
    let (actor, client) = order_actor::new(8);
    let handle = tokio::spawn(actor.run(()));

    let first = client
        .create_order(params(json!(["apple", "bread"]), 5.5))
        .await
        .unwrap();
    let second = client
        .create_order(params(json!({"Pizza": 2}), 20.0))
        .await
        .unwrap();
    assert_eq!(first, OrderId(1));
    assert_eq!(second, OrderId(2));

    let order = client.get_order(second).await.unwrap();
    assert_eq!(order.items, json!({"Pizza": 2}));
    assert_eq!(order.total_cost, Number::from_f64(20.0).unwrap());

    // The first order was not overwritten by the second
    let order = client.get_order(first).await.unwrap();
    assert_eq!(order.items, json!(["apple", "bread"]));

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_unknown_ids_are_not_found() {
    let system = OrderSystem::new(8);

    for id in [0, 1, 2, u64::MAX] {
        let err = system.order_client.get_order(OrderId(id)).await.unwrap_err();
        assert_eq!(err, OrderError::NotFound(id.to_string()));
    }

    system.shutdown().await.unwrap();
}

/// Many tasks creating at once still get 1..=N with no repeats.
#[tokio::test]
async fn test_concurrent_creates_get_unique_sequential_ids() {
    let system = OrderSystem::new(4);
    let total = 64u64;

    let tasks: Vec<_> = (0..total)
        .map(|n| {
            let client = system.order_client.clone();
            tokio::spawn(async move {
                client
                    .create_order(params(json!([n]), n as f64))
                    .await
                    .unwrap()
            })
        })
        .collect();

    let mut ids = HashSet::new();
    for task in tasks {
        assert!(ids.insert(task.await.unwrap()));
    }
    let expected: HashSet<_> = (1..=total).map(OrderId).collect();
    assert_eq!(ids, expected);

    // Each id maps back to the payload of the task that received it
    for id in 1..=total {
        let order = system.order_client.get_order(OrderId(id)).await.unwrap();
        let n = order.items[0].as_u64().unwrap();
        assert_eq!(order.total_cost.as_f64(), Some(n as f64));
    }

    system.shutdown().await.unwrap();
}

/// OrderClient against a mocked actor: the store going away surfaces as a communication error.
#[tokio::test]
async fn test_order_client_maps_framework_errors() {
    let mut mock = MockClient::<Order>::new();
    mock.expect_create().return_err(FrameworkError::ActorClosed);
    mock.expect_get(OrderId(1))
        .return_err(FrameworkError::ActorDropped);

    let client = OrderClient::new(mock.client());

    let err = client
        .create_order(params(json!([]), 0.0))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        OrderError::ActorCommunicationError("Actor closed".to_string())
    );

    let err = client.get_order(OrderId(1)).await.unwrap_err();
    assert!(matches!(err, OrderError::ActorCommunicationError(_)));

    mock.verify();
}

#[tokio::test]
async fn test_shutdown_waits_for_actor() {
    let system = OrderSystem::new(8);
    system
        .order_client
        .create_order(params(json!(["tea"]), 1.25))
        .await
        .unwrap();

    assert!(system.shutdown().await.is_ok());
}
