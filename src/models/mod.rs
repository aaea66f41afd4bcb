mod errors;
mod table;
mod transaction;

pub use errors::LoadError;
pub use table::{ColumnData, ExtraColumn, Preview, TableView, TransactionTable, REQUIRED_COLUMNS};
pub use transaction::Transaction;
