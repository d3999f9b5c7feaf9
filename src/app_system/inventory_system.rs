use tracing::{error, info, warn};

use super::{SystemConfig, SystemError};
use crate::clients::InventoryClient;
use crate::inventory_service::InventoryService;

/// Owns the running inventory service for the lifetime of the process.
///
/// Responsible for starting the service, handing out its client, and shutdown.
pub struct InventorySystem {
    pub inventory_client: InventoryClient,
    handle: tokio::task::JoinHandle<()>,
}

impl InventorySystem {
    pub fn new(config: &SystemConfig) -> Self {
        info!(buffer_size = config.buffer_size, "Starting inventory system");

        let (service, inventory_client) = InventoryService::new(config.buffer_size);
        let handle = tokio::spawn(service.run());

        Self {
            inventory_client,
            handle,
        }
    }

    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        // A service that already stopped has nothing left to drain.
        if let Err(e) = self.inventory_client.shutdown().await {
            warn!(error = %e, "Shutdown request not delivered");
        }
        drop(self.inventory_client);

        if let Err(e) = self.handle.await {
            error!("Service task failed: {:?}", e);
            return Err(SystemError::ServiceTask(e.to_string()));
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
