use thiserror::Error;

/// Errors reported by inventory operations.
///
/// Every variant leaves the store unchanged.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InventoryError {
    #[error("SKU already exists: {0}")]
    DuplicateSku(String),
    #[error("Product not found: {0}")]
    NotFound(String),
    #[error("Invalid sort key: {0}")]
    InvalidSortKey(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
