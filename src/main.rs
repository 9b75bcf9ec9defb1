use order_service::api::{build_app, AppState};
use order_service::config::Config;
use order_service::lifecycle::{setup_tracing, shutdown_signal, OrderSystem};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), String> {
    let config = Config::from_env();
    setup_tracing(&config.log_level);

    info!(?config, "Starting order service");

    let system = OrderSystem::new(config.actor_buffer);
    let app = build_app(AppState::new(system.order_client.clone()));

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind {}: {}", addr, e))?;
    info!(%addr, "Listening");

    // `app` is moved in and dropped when serve returns, releasing its client clones
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    system.shutdown().await?;

    info!("Order service stopped");
    Ok(())
}
