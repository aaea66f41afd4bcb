use moka::sync::Cache;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

use crate::models::{LoadError, TransactionTable};
use crate::storage::{read_table, TableSource};

type Loader = Box<dyn Fn(&Path) -> Result<TransactionTable, LoadError> + Send + Sync>;

/// Process-wide memo of loaded tables, keyed by path.
///
/// Entries are never evicted; a table stays cached until the process exits.
/// Failed loads are not cached.
pub struct TableCache {
    cache: Cache<PathBuf, Arc<TransactionTable>>,
    loader: Loader
}

impl TableCache {
    pub fn new() -> Self {
        Self::with_loader(read_table)
    }

    /// Uses `loader` instead of the CSV reader to produce tables on a miss.
    pub fn with_loader<F>(loader: F) -> Self
    where
        F: Fn(&Path) -> Result<TransactionTable, LoadError> + Send + Sync + 'static,
    {
        Self {
            cache: Cache::builder().build(),
            loader: Box::new(loader)
        }
    }

    #[cfg(test)]
    pub fn contains(&self, path: &Path) -> bool {
        self.cache.contains_key(path)
    }
}

impl Default for TableCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TableSource for TableCache {
    fn load(&self, path: &Path) -> Result<Arc<TransactionTable>, Arc<LoadError>> {
        if let Some(table) = self.cache.get(path) {
            debug!("Serving [{}] from the table cache", path.display());
            return Ok(table);
        }

        self.cache.try_get_with(path.to_path_buf(), || (self.loader)(path).map(Arc::new))
    }
}
