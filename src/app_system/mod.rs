//! System orchestration, configuration, startup, and shutdown logic.

pub mod inventory_system;
pub mod tracing;
pub mod config;
pub mod error;

pub use inventory_system::*;
pub use self::tracing::setup_tracing;
pub use config::*;
pub use error::*;
