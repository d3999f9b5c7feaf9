pub mod product;
pub mod transaction;
pub mod report;

pub use product::*;
pub use transaction::*;
pub use report::*;
