//! The actor that owns the inventory store and serves requests one at a time.

use tokio::sync::mpsc;
use tracing::{debug, info, instrument, warn};

use crate::clients::InventoryClient;
use crate::domain::{
    InventoryStats, LowStockAlert, Product, ProductCreate, SortKey, TransactionRecord,
};
use crate::error::InventoryError;
use crate::messages::{InventoryRequest, ServiceResponse};
use crate::store::{AddOutcome, InventoryStore, QuantityChange, UndoOutcome};

pub struct InventoryService {
    receiver: mpsc::Receiver<InventoryRequest>,
    store: InventoryStore,
}

impl InventoryService {
    pub fn new(buffer_size: usize) -> (Self, InventoryClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let service = Self {
            receiver,
            store: InventoryStore::new(),
        };
        (service, InventoryClient::new(sender))
    }

    /// Main actor loop. Runs until `Shutdown` arrives or every client is gone.
    #[instrument(name = "inventory_service", skip(self))]
    pub async fn run(mut self) {
        info!("InventoryService starting");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                InventoryRequest::AddProduct {
                    product,
                    respond_to,
                } => self.handle_add_product(product, respond_to),
                InventoryRequest::UpdateQuantity {
                    sku,
                    quantity,
                    respond_to,
                } => self.handle_update_quantity(sku, quantity, respond_to),
                InventoryRequest::UndoLastUpdate { respond_to } => {
                    self.handle_undo_last_update(respond_to)
                }
                InventoryRequest::ViewProducts {
                    sort_key,
                    respond_to,
                } => self.handle_view_products(sort_key, respond_to),
                InventoryRequest::SearchProduct { sku, respond_to } => {
                    self.handle_search_product(sku, respond_to)
                }
                InventoryRequest::LowStockReport { respond_to } => {
                    self.handle_low_stock_report(respond_to)
                }
                InventoryRequest::TransactionReport { count, respond_to } => {
                    self.handle_transaction_report(count, respond_to)
                }
                InventoryRequest::Statistics { respond_to } => {
                    self.handle_statistics(respond_to)
                }
                InventoryRequest::Shutdown => {
                    info!("InventoryService shutting down");
                    break;
                }
            }
        }

        info!("InventoryService stopped");
    }

    #[instrument(fields(sku = %product.sku, quantity = product.quantity), skip(self, product, respond_to))]
    fn handle_add_product(
        &mut self,
        product: ProductCreate,
        respond_to: ServiceResponse<AddOutcome, InventoryError>,
    ) {
        debug!("Processing add_product request");

        let result = self.store.add(product);
        match &result {
            Ok(outcome) => {
                info!("Product added");
                if outcome.low_stock_alert {
                    warn!("Low stock alert raised");
                }
            }
            Err(e) => warn!(error = %e, "Add rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(fields(sku = %sku), skip(self, sku, respond_to))]
    fn handle_update_quantity(
        &mut self,
        sku: String,
        quantity: u32,
        respond_to: ServiceResponse<QuantityChange, InventoryError>,
    ) {
        debug!("Processing update_quantity request");

        let result = self.store.update_quantity(&sku, quantity);
        match &result {
            Ok(change) => {
                info!(previous = change.previous, current = change.current, "Quantity updated");
                if change.low_stock_alert {
                    warn!("Low stock alert raised");
                }
            }
            Err(e) => warn!(error = %e, "Update rejected"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_undo_last_update(&mut self, respond_to: ServiceResponse<UndoOutcome, InventoryError>) {
        debug!("Processing undo_last_update request");

        let outcome = self.store.undo_last_update();
        match &outcome {
            UndoOutcome::NothingToUndo => debug!("Nothing to undo"),
            UndoOutcome::Restored { sku, quantity } => {
                info!(sku = %sku, quantity, "Last update undone")
            }
            UndoOutcome::ProductMissing { sku } => {
                warn!(sku = %sku, "Undo entry refers to a missing product")
            }
        }

        let _ = respond_to.send(Ok(outcome));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_view_products(
        &self,
        sort_key: SortKey,
        respond_to: ServiceResponse<Vec<Product>, InventoryError>,
    ) {
        let products = self.store.view(sort_key);
        debug!(count = products.len(), "Products listed");
        let _ = respond_to.send(Ok(products));
    }

    #[instrument(fields(sku = %sku), skip(self, sku, respond_to))]
    fn handle_search_product(&self, sku: String, respond_to: ServiceResponse<Product, InventoryError>) {
        debug!("Processing search_product request");

        let result = self.store.search(&sku).cloned();
        match &result {
            Ok(product) => debug!(name = %product.name, last_updated = %product.last_updated, "Product found"),
            Err(_) => debug!("Product not found"),
        }

        let _ = respond_to.send(result);
    }

    #[instrument(skip(self, respond_to))]
    fn handle_low_stock_report(&self, respond_to: ServiceResponse<Vec<LowStockAlert>, InventoryError>) {
        let alerts = self.store.low_stock_report();
        debug!(count = alerts.len(), "Low stock alerts listed");
        let _ = respond_to.send(Ok(alerts));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_transaction_report(
        &self,
        count: i64,
        respond_to: ServiceResponse<Vec<TransactionRecord>, InventoryError>,
    ) {
        let records = self.store.transaction_report(count);
        debug!(returned = records.len(), "Transactions listed");
        let _ = respond_to.send(Ok(records));
    }

    #[instrument(skip(self, respond_to))]
    fn handle_statistics(&self, respond_to: ServiceResponse<InventoryStats, InventoryError>) {
        let stats = self.store.statistics();
        debug!(
            total_products = stats.total_products,
            total_value = stats.total_value,
            "Statistics computed"
        );
        let _ = respond_to.send(Ok(stats));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn widget(quantity: u32) -> ProductCreate {
        ProductCreate {
            sku: "A1".to_string(),
            name: "Widget".to_string(),
            category: "Tools".to_string(),
            price: 2.5,
            quantity,
        }
    }

    #[tokio::test]
    async fn test_service_serves_store_operations() -> Result<(), Box<dyn std::error::Error>> {
        let (service, client) = InventoryService::new(10);
        let handle = tokio::spawn(service.run());

        let added = client.add_product(widget(5)).await?;
        assert!(added.low_stock_alert);

        let duplicate = client.add_product(widget(50)).await;
        assert_eq!(duplicate, Err(InventoryError::DuplicateSku("A1".to_string())));

        let change = client.update_quantity("A1".to_string(), 20).await?;
        assert_eq!((change.previous, change.current), (5, 20));

        let undone = client.undo_last_update().await?;
        assert_eq!(
            undone,
            UndoOutcome::Restored {
                sku: "A1".to_string(),
                quantity: 5
            }
        );

        let product = client.search_product("A1".to_string()).await?;
        assert_eq!(product.quantity, 5);

        let missing = client.search_product("nope".to_string()).await;
        assert_eq!(missing.unwrap_err(), InventoryError::NotFound("nope".to_string()));

        assert_eq!(client.view_products(SortKey::Value).await?.len(), 1);
        assert_eq!(client.low_stock_report().await?.len(), 1);
        assert_eq!(client.transaction_report(5).await?.len(), 2);
        assert_eq!(client.statistics().await?.total_value, 12.5);

        client.shutdown().await?;
        handle.await?;
        Ok(())
    }

    #[tokio::test]
    async fn test_stopped_service_reports_communication_error() {
        let (service, client) = InventoryService::new(1);
        let handle = tokio::spawn(service.run());

        client.shutdown().await.unwrap();
        handle.await.unwrap();

        let result = client.statistics().await;
        assert!(matches!(result, Err(InventoryError::ActorCommunicationError(_))));
    }

    #[tokio::test]
    async fn test_service_stops_when_clients_dropped() {
        let (service, client) = InventoryService::new(4);
        let handle = tokio::spawn(service.run());

        drop(client);
        handle.await.unwrap();
    }
}
