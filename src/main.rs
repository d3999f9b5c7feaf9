mod domain;
mod error;
mod store;
mod messages;
mod clients;
mod inventory_service;
mod menu;

mod app_system;

#[cfg(test)]
mod mock_framework;

use tokio::io::BufReader;
use tracing::info;

use crate::app_system::{setup_tracing, InventorySystem, SystemConfig, SystemError};
use crate::menu::MenuController;

#[tokio::main]
async fn main() -> Result<(), SystemError> {
    let config = SystemConfig::default();

    // Setup tracing once for the entire application
    setup_tracing(&config);

    info!("Starting inventory tracker");

    // Created here, discarded on exit: the store lives only inside this system
    let system = InventorySystem::new(&config);

    let menu = MenuController::new(
        system.inventory_client.clone(),
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    );
    let session = menu.run().await;

    // Shutdown system gracefully even if the console failed
    system.shutdown().await?;
    session?;

    info!("Inventory tracker exited");
    Ok(())
}
