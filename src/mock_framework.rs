//! # Mock Framework
//!
//! Utilities for testing code that talks to the inventory service without
//! running the service.
//!
//! Use [`create_mock_client`] to get a client and a receiver. Then use helpers
//! like [`expect_search`] or [`expect_update`] to assert each request and
//! script its reply.

use tokio::sync::{mpsc, oneshot};

use crate::clients::InventoryClient;
use crate::domain::{Product, ProductCreate};
use crate::error::InventoryError;
use crate::messages::InventoryRequest;
use crate::store::{AddOutcome, QuantityChange, UndoOutcome};

type Reply<T> = oneshot::Sender<Result<T, InventoryError>>;

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the service: it receives each request from `receiver` and
/// answers through the request's oneshot sender, so success, failure and
/// ordering are fully deterministic.
pub fn create_mock_client(buffer_size: usize) -> (InventoryClient, mpsc::Receiver<InventoryRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (InventoryClient::new(sender), receiver)
}

/// Helper to verify that the next message is an AddProduct request
pub async fn expect_add(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(ProductCreate, Reply<AddOutcome>)> {
    match receiver.recv().await {
        Some(InventoryRequest::AddProduct { product, respond_to }) => Some((product, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a SearchProduct request
pub async fn expect_search(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, Reply<Product>)> {
    match receiver.recv().await {
        Some(InventoryRequest::SearchProduct { sku, respond_to }) => Some((sku, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UpdateQuantity request
pub async fn expect_update(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<(String, u32, Reply<QuantityChange>)> {
    match receiver.recv().await {
        Some(InventoryRequest::UpdateQuantity {
            sku,
            quantity,
            respond_to,
        }) => Some((sku, quantity, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an UndoLastUpdate request
pub async fn expect_undo(
    receiver: &mut mpsc::Receiver<InventoryRequest>,
) -> Option<Reply<UndoOutcome>> {
    match receiver.recv().await {
        Some(InventoryRequest::UndoLastUpdate { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_client() {
        let (client, mut receiver) = create_mock_client(10);

        let add_task = tokio::spawn(async move {
            let product = ProductCreate {
                sku: "A1".to_string(),
                name: "Widget".to_string(),
                category: "Tools".to_string(),
                price: 2.5,
                quantity: 5,
            };
            client.add_product(product).await
        });

        let (payload, responder) = expect_add(&mut receiver).await.expect("Expected Add request");
        assert_eq!(payload.sku, "A1");
        assert_eq!(payload.quantity, 5);
        responder
            .send(Ok(AddOutcome {
                sku: "A1".to_string(),
                low_stock_alert: true,
            }))
            .unwrap();

        let result = add_task.await.unwrap();
        assert_eq!(
            result,
            Ok(AddOutcome {
                sku: "A1".to_string(),
                low_stock_alert: true
            })
        );
    }

    #[tokio::test]
    async fn test_dropped_reply_is_a_communication_error() {
        let (client, mut receiver) = create_mock_client(10);

        let search_task = tokio::spawn(async move { client.search_product("A1".to_string()).await });

        let (_, responder) = expect_search(&mut receiver).await.expect("Expected Search request");
        drop(responder);

        let result = search_task.await.unwrap();
        assert_eq!(
            result.unwrap_err(),
            InventoryError::ActorCommunicationError("Actor dropped".to_string())
        );
    }
}
