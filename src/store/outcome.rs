/// Result of a successful add.
#[derive(Debug, Clone, PartialEq)]
pub struct AddOutcome {
    pub sku: String,
    pub low_stock_alert: bool,
}

/// Result of a successful quantity update.
#[derive(Debug, Clone, PartialEq)]
pub struct QuantityChange {
    pub sku: String,
    pub previous: u32,
    pub current: u32,
    pub low_stock_alert: bool,
}

/// What an undo request did.
#[derive(Debug, Clone, PartialEq)]
pub enum UndoOutcome {
    /// The undo stack was empty; nothing changed.
    NothingToUndo,
    /// The product's quantity was rolled back.
    Restored { sku: String, quantity: u32 },
    /// The entry was popped but its product no longer exists.
    ///
    /// Products are never removed today, so the store does not produce this.
    ProductMissing { sku: String },
}
