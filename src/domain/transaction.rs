use std::fmt;

use chrono::{DateTime, Local};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The event a transaction record describes.
#[derive(Debug, Clone, PartialEq)]
pub enum TransactionKind {
    Add { quantity: u32 },
    Update { from: u32, to: u32 },
}

/// One entry of the transaction log.
#[derive(Debug, Clone)]
pub struct TransactionRecord {
    pub sku: String,
    pub kind: TransactionKind,
    pub at: DateTime<Local>,
}

impl TransactionRecord {
    pub fn add(sku: impl Into<String>, quantity: u32) -> Self {
        Self {
            sku: sku.into(),
            kind: TransactionKind::Add { quantity },
            at: Local::now(),
        }
    }

    pub fn update(sku: impl Into<String>, from: u32, to: u32) -> Self {
        Self {
            sku: sku.into(),
            kind: TransactionKind::Update { from, to },
            at: Local::now(),
        }
    }
}

impl fmt::Display for TransactionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let at = self.at.format(TIMESTAMP_FORMAT);
        match self.kind {
            TransactionKind::Add { quantity } => {
                write!(f, "ADD: {} ({}) at {}", self.sku, quantity, at)
            }
            TransactionKind::Update { from, to } => {
                write!(f, "UPDATE: {} from {} to {} at {}", self.sku, from, to, at)
            }
        }
    }
}
