use crate::clients::OrderClient;
use crate::order_actor;
use tracing::{error, info};

/// The runtime orchestrator for the order store.
///
/// # Example
///
/// ```ignore
/// let system = OrderSystem::new(32);
///
/// let order_id = system.order_client.create_order(params).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct OrderSystem {
    /// Client for interacting with the Order actor
    pub order_client: OrderClient,

    /// Task handle of the running actor (used for graceful shutdown)
    handle: tokio::task::JoinHandle<()>,
}

impl OrderSystem {
    /// Spawns the Order actor and returns a system ready to accept requests.
    ///
    /// `buffer_size` is the capacity of the actor's mailbox.
    pub fn new(buffer_size: usize) -> Self {
        let (order_actor, order_client) = order_actor::new(buffer_size);

        // Orders have no dependencies, so the context is ()
        let handle = tokio::spawn(order_actor.run(()));

        Self {
            order_client,
            handle,
        }
    }

    /// Gracefully shuts down the actor.
    ///
    /// The actor only exits once *every* client clone is gone, so callers must drop the
    /// router (and anything else holding an [`OrderClient`]) before awaiting this.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if the actor shut down cleanly
    /// - `Err(String)` if the actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down order system...");

        // Closing our sender lets the actor's receiver return None
        drop(self.order_client);

        if let Err(e) = self.handle.await {
            error!("Actor task failed: {:?}", e);
            return Err(format!("Actor task failed: {:?}", e));
        }

        info!("Order system shutdown complete.");
        Ok(())
    }
}
