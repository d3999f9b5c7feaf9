use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use chrono::{DateTime, Local};

/// Represents a product in the inventory.
///
/// Identity is the `sku`: equality, hashing and ordering ignore every other field.
#[derive(Debug, Clone)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
    pub last_updated: DateTime<Local>,
}

/// Payload for adding a new product.
#[derive(Debug, Clone)]
pub struct ProductCreate {
    pub sku: String,
    pub name: String,
    pub category: String,
    pub price: f64,
    pub quantity: u32,
}

impl Product {
    /// Creates a new Product stamped with the current local time.
    ///
    /// # Arguments
    /// * `sku` - Unique identifier, immutable afterwards
    /// * `name` - Display name
    /// * `category` - Free-text category
    /// * `price` - Unit price
    /// * `quantity` - Units in stock
    pub fn new(
        sku: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        price: f64,
        quantity: u32,
    ) -> Self {
        Self {
            sku: sku.into(),
            name: name.into(),
            category: category.into(),
            price,
            quantity,
            last_updated: Local::now(),
        }
    }

    pub fn inventory_value(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.last_updated = Local::now();
    }
}

impl From<ProductCreate> for Product {
    fn from(payload: ProductCreate) -> Self {
        Product::new(
            payload.sku,
            payload.name,
            payload.category,
            payload.price,
            payload.quantity,
        )
    }
}

impl PartialEq for Product {
    fn eq(&self, other: &Self) -> bool {
        self.sku == other.sku
    }
}

impl Eq for Product {}

impl Hash for Product {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.sku.hash(state);
    }
}

impl PartialOrd for Product {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Product {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sku.cmp(&other.sku)
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SKU: {}, Name: {}, Category: {}, Price: ₹{:.2}, Qty: {}, Value: ₹{:.2}",
            self.sku,
            self.name,
            self.category,
            self.price,
            self.quantity,
            self.inventory_value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_identity_is_sku_only() {
        let a = Product::new("A1", "Widget", "Tools", 2.5, 5);
        let b = Product::new("A1", "Gadget", "Toys", 99.0, 1);
        assert_eq!(a, b);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(!set.insert(b));
    }

    #[test]
    fn test_natural_order_is_lexicographic_sku() {
        let mut products = vec![
            Product::new("b2", "x", "c", 1.0, 1),
            Product::new("B1", "y", "c", 1.0, 1),
            Product::new("a9", "z", "c", 1.0, 1),
        ];
        products.sort();
        let skus: Vec<_> = products.iter().map(|p| p.sku.as_str()).collect();
        assert_eq!(skus, vec!["B1", "a9", "b2"]);
    }

    #[test]
    fn test_quantity_change_refreshes_timestamp() {
        let mut product = Product::new("A1", "Widget", "Tools", 2.5, 5);
        let before = product.last_updated;
        product.set_quantity(20);
        assert_eq!(product.quantity, 20);
        assert!(product.last_updated >= before);
        assert_eq!(product.inventory_value(), 50.0);
    }

    #[test]
    fn test_display_formats_money_with_two_decimals() {
        let product = Product::new("A1", "Widget", "Tools", 2.5, 5);
        assert_eq!(
            product.to_string(),
            "SKU: A1, Name: Widget, Category: Tools, Price: ₹2.50, Qty: 5, Value: ₹12.50"
        );
    }
}
