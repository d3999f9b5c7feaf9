use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

use crate::domain::{
    InventoryStats, LowStockAlert, Product, ProductCreate, SortKey, TransactionRecord,
};
use crate::error::InventoryError;
use crate::messages::InventoryRequest;
use crate::store::{AddOutcome, QuantityChange, UndoOutcome};

/// Generate client methods with oneshot channel boilerplate and automatic tracing.
macro_rules! client_method {
    ($client:ty => fn $method:ident($($param:ident: $param_type:ty),*) -> $return_type:ty as $request:ident::$variant:ident, Error = $error_type:ty) => {
        impl $client {
            #[instrument(skip(self))]
            pub async fn $method(&self, $($param: $param_type),*) -> Result<$return_type, $error_type> {
                debug!("Sending request");
                let (respond_to, response) = oneshot::channel();
                self.sender.send($request::$variant {
                    $($param,)*
                    respond_to,
                }).await.map_err(|_| <$error_type>::ActorCommunicationError("Actor closed".to_string()))?;

                response.await.map_err(|_| <$error_type>::ActorCommunicationError("Actor dropped".to_string()))?
            }
        }
    };
}

/// Handle for talking to the [`InventoryService`](crate::inventory_service::InventoryService).
///
/// Cheap to clone; the service stops once every clone is dropped.
#[derive(Clone)]
pub struct InventoryClient {
    sender: mpsc::Sender<InventoryRequest>,
}

impl InventoryClient {
    pub fn new(sender: mpsc::Sender<InventoryRequest>) -> Self {
        Self { sender }
    }

    /// Asks the service to stop after the requests already queued.
    #[instrument(skip(self))]
    pub async fn shutdown(&self) -> Result<(), InventoryError> {
        debug!("Sending shutdown");
        self.sender
            .send(InventoryRequest::Shutdown)
            .await
            .map_err(|_| InventoryError::ActorCommunicationError("Actor closed".to_string()))
    }
}

client_method!(InventoryClient => fn add_product(product: ProductCreate) -> AddOutcome as InventoryRequest::AddProduct, Error = InventoryError);
client_method!(InventoryClient => fn update_quantity(sku: String, quantity: u32) -> QuantityChange as InventoryRequest::UpdateQuantity, Error = InventoryError);
client_method!(InventoryClient => fn undo_last_update() -> UndoOutcome as InventoryRequest::UndoLastUpdate, Error = InventoryError);
client_method!(InventoryClient => fn view_products(sort_key: SortKey) -> Vec<Product> as InventoryRequest::ViewProducts, Error = InventoryError);
client_method!(InventoryClient => fn search_product(sku: String) -> Product as InventoryRequest::SearchProduct, Error = InventoryError);
client_method!(InventoryClient => fn low_stock_report() -> Vec<LowStockAlert> as InventoryRequest::LowStockReport, Error = InventoryError);
client_method!(InventoryClient => fn transaction_report(count: i64) -> Vec<TransactionRecord> as InventoryRequest::TransactionReport, Error = InventoryError);
client_method!(InventoryClient => fn statistics() -> InventoryStats as InventoryRequest::Statistics, Error = InventoryError);
