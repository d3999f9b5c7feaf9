use std::fmt::Display;

use crate::domain::{InventoryStats, LowStockAlert, Product};

pub const MENU: &str = "\n=== INVENTORY MANAGEMENT SYSTEM ===
1. Add Product
2. Update Quantity
3. View Products (Sorted)
4. Search Products
5. Low Stock Alerts
6. Transaction History
7. Inventory Statistics
8. Undo Last Update
9. Exit
";

/// One line per item.
pub fn lines<T: Display>(items: &[T]) -> String {
    items.iter().map(|item| format!("{item}\n")).collect()
}

pub fn product_table(products: &[Product]) -> String {
    let mut table = format!(
        "{:<10} {:<15} {:<12} {:<8} {:<6} {:<10}\n",
        "SKU", "Name", "Category", "Price", "Qty", "Value"
    );
    for p in products {
        table.push_str(&format!(
            "{:<10} {:<15} {:<12} {:<8.2} {:<6} {:.2}\n",
            p.sku,
            p.name,
            p.category,
            p.price,
            p.quantity,
            p.inventory_value()
        ));
    }
    table
}

pub fn low_stock(alerts: &[LowStockAlert]) -> String {
    let mut out = String::from("\n=== LOW STOCK ALERTS ===\n");
    for alert in alerts {
        out.push_str(&format!("{} - Qty: {}\n", alert.sku, alert.quantity));
    }
    out
}

pub fn statistics(stats: &InventoryStats) -> String {
    format!(
        "Total Products: {}\nTotal Inventory Value: ₹{:.2}\n",
        stats.total_products, stats.total_value
    )
}
