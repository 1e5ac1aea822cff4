//! Sequential creation of external users with per-item results

mod executor;
mod result;

pub use executor::BatchExecutor;
pub use result::{BatchItemResult, BatchItemStatus, BatchResult};
