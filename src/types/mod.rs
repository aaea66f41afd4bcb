mod errors;
mod kind;
mod selection;
#[cfg(test)]
mod tests;

pub use kind::TransactionKind;
pub use selection::Selection;
