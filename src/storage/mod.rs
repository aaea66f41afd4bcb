mod loader;
mod table_cache;
#[cfg(test)]
mod tests;

use std::path::Path;
use std::sync::Arc;

use crate::models::{LoadError, TransactionTable};

pub use loader::read_table;
pub use table_cache::TableCache;

/// Anything that can hand out the transaction table stored at a path.
pub trait TableSource {
    fn load(&self, path: &Path) -> Result<Arc<TransactionTable>, Arc<LoadError>>;
}
