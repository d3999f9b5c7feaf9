use tokio::sync::oneshot;

use crate::domain::{
    InventoryStats, LowStockAlert, Product, ProductCreate, SortKey, TransactionRecord,
};
use crate::error::InventoryError;
use crate::store::{AddOutcome, QuantityChange, UndoOutcome};

/// Generic type aliases for service communication
pub type ServiceResult<T, E> = std::result::Result<T, E>;
pub type ServiceResponse<T, E> = oneshot::Sender<ServiceResult<T, E>>;

/// Typed messages for the inventory service. Each variant carries its
/// parameters and a oneshot channel for the reply.
#[derive(Debug)]
pub enum InventoryRequest {
    AddProduct {
        product: ProductCreate,
        respond_to: ServiceResponse<AddOutcome, InventoryError>,
    },
    UpdateQuantity {
        sku: String,
        quantity: u32,
        respond_to: ServiceResponse<QuantityChange, InventoryError>,
    },
    UndoLastUpdate {
        respond_to: ServiceResponse<UndoOutcome, InventoryError>,
    },
    ViewProducts {
        sort_key: SortKey,
        respond_to: ServiceResponse<Vec<Product>, InventoryError>,
    },
    SearchProduct {
        sku: String,
        respond_to: ServiceResponse<Product, InventoryError>,
    },
    LowStockReport {
        respond_to: ServiceResponse<Vec<LowStockAlert>, InventoryError>,
    },
    TransactionReport {
        count: i64,
        respond_to: ServiceResponse<Vec<TransactionRecord>, InventoryError>,
    },
    Statistics {
        respond_to: ServiceResponse<InventoryStats, InventoryError>,
    },
    Shutdown,
}
