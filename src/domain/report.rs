use std::str::FromStr;

use crate::error::InventoryError;

/// Orderings offered by the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Natural order, sku ascending.
    Sku,
    /// Unit price ascending.
    Price,
    /// Inventory value descending.
    Value,
    /// Name ascending, case-sensitive.
    Name,
}

impl FromStr for SortKey {
    type Err = InventoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sku" => Ok(SortKey::Sku),
            "price" => Ok(SortKey::Price),
            "value" => Ok(SortKey::Value),
            "name" => Ok(SortKey::Name),
            _ => Err(InventoryError::InvalidSortKey(s.trim().to_string())),
        }
    }
}

/// A low-stock queue entry resolved against the product it references.
#[derive(Debug, Clone, PartialEq)]
pub struct LowStockAlert {
    pub sku: String,
    pub quantity: u32,
}

/// Aggregate figures over the whole product set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InventoryStats {
    pub total_products: usize,
    pub total_value: f64,
}
