//! In-memory inventory state and every operation over it.
//!
//! The store is plain synchronous data. It is owned by exactly one
//! [`InventoryService`](crate::inventory_service::InventoryService), which
//! serializes access to it.

mod outcome;

use std::collections::{HashMap, VecDeque};

use crate::domain::{
    InventoryStats, LowStockAlert, Product, ProductCreate, SortKey, TransactionRecord,
};
use crate::error::InventoryError;

pub use outcome::*;

/// Quantities strictly below this raise a low-stock alert.
pub const LOW_STOCK_THRESHOLD: u32 = 10;

/// Reversal record for one quantity update.
#[derive(Debug, Clone, PartialEq)]
struct UndoEntry {
    sku: String,
    previous_quantity: u32,
}

#[derive(Debug, Default)]
pub struct InventoryStore {
    products: HashMap<String, Product>,
    // newest first
    transactions: VecDeque<TransactionRecord>,
    undo_stack: Vec<UndoEntry>,
    // alert log of sku references, never pruned
    low_stock: Vec<String>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new product.
    ///
    /// # Errors
    /// `DuplicateSku` if a product with the same sku already exists.
    pub fn add(&mut self, payload: ProductCreate) -> Result<AddOutcome, InventoryError> {
        if self.products.contains_key(&payload.sku) {
            return Err(InventoryError::DuplicateSku(payload.sku));
        }

        let product = Product::from(payload);
        let sku = product.sku.clone();
        let quantity = product.quantity;
        self.products.insert(sku.clone(), product);
        self.transactions
            .push_front(TransactionRecord::add(sku.clone(), quantity));

        let low_stock_alert = self.track_low_stock(&sku, quantity);
        Ok(AddOutcome {
            sku,
            low_stock_alert,
        })
    }

    /// Sets a product's quantity and records how to reverse it.
    ///
    /// # Errors
    /// `NotFound` if no product has this sku.
    pub fn update_quantity(
        &mut self,
        sku: &str,
        quantity: u32,
    ) -> Result<QuantityChange, InventoryError> {
        let product = self
            .products
            .get_mut(sku)
            .ok_or_else(|| InventoryError::NotFound(sku.to_string()))?;

        let previous = product.quantity;
        product.set_quantity(quantity);

        self.undo_stack.push(UndoEntry {
            sku: sku.to_string(),
            previous_quantity: previous,
        });
        self.transactions
            .push_front(TransactionRecord::update(sku, previous, quantity));

        let low_stock_alert = self.track_low_stock(sku, quantity);
        Ok(QuantityChange {
            sku: sku.to_string(),
            previous,
            current: quantity,
            low_stock_alert,
        })
    }

    /// Rolls back the most recent quantity update.
    ///
    /// Only the quantity is restored. The transaction log and the low-stock
    /// queue keep the entries the undone update produced.
    pub fn undo_last_update(&mut self) -> UndoOutcome {
        let Some(entry) = self.undo_stack.pop() else {
            return UndoOutcome::NothingToUndo;
        };

        match self.products.get_mut(&entry.sku) {
            Some(product) => {
                product.set_quantity(entry.previous_quantity);
                UndoOutcome::Restored {
                    sku: entry.sku,
                    quantity: entry.previous_quantity,
                }
            }
            None => UndoOutcome::ProductMissing { sku: entry.sku },
        }
    }

    /// Snapshot of every product in the requested order.
    ///
    /// Ties are broken by sku.
    pub fn view(&self, sort_key: SortKey) -> Vec<Product> {
        let mut products: Vec<Product> = self.products.values().cloned().collect();
        products.sort();

        match sort_key {
            SortKey::Sku => {}
            SortKey::Price => products.sort_by(|a, b| a.price.total_cmp(&b.price)),
            SortKey::Value => products
                .sort_by(|a, b| b.inventory_value().total_cmp(&a.inventory_value())),
            SortKey::Name => products.sort_by(|a, b| a.name.cmp(&b.name)),
        }
        products
    }

    pub fn search(&self, sku: &str) -> Result<&Product, InventoryError> {
        self.products
            .get(sku)
            .ok_or_else(|| InventoryError::NotFound(sku.to_string()))
    }

    /// Every alert ever raised, oldest first, showing current quantities.
    pub fn low_stock_report(&self) -> Vec<LowStockAlert> {
        self.low_stock
            .iter()
            .filter_map(|sku| self.products.get(sku))
            .map(|product| LowStockAlert {
                sku: product.sku.clone(),
                quantity: product.quantity,
            })
            .collect()
    }

    /// Up to `count` records, newest first. Non-positive counts yield nothing.
    pub fn transaction_report(&self, count: i64) -> Vec<TransactionRecord> {
        let count = usize::try_from(count).unwrap_or(0);
        self.transactions.iter().take(count).cloned().collect()
    }

    pub fn statistics(&self) -> InventoryStats {
        InventoryStats {
            total_products: self.products.len(),
            total_value: self.products.values().map(Product::inventory_value).sum(),
        }
    }

    fn track_low_stock(&mut self, sku: &str, quantity: u32) -> bool {
        if quantity < LOW_STOCK_THRESHOLD {
            self.low_stock.push(sku.to_string());
            true
        } else {
            false
        }
    }
}
