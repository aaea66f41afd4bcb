use crate::types::TransactionKind;
use std::collections::BTreeSet;
use std::fmt;
use std::fmt::{Display, Formatter};

/// The set of transaction kinds picked in the category multi-select.
///
/// An empty selection means "no filtering", not "match nothing".
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Selection(BTreeSet<TransactionKind>);

impl Selection {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn contains(&self, kind: TransactionKind) -> bool {
        self.0.contains(&kind)
    }

    /// Adds the kind if absent, removes it otherwise. Returns whether it is now selected.
    pub fn toggle(&mut self, kind: TransactionKind) -> bool {
        if self.0.remove(&kind) {
            false
        } else {
            self.0.insert(kind);
            true
        }
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = TransactionKind> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<TransactionKind> for Selection {
    fn from_iter<I: IntoIterator<Item = TransactionKind>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Display for Selection {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return formatter.write_str("all types");
        }

        let labels: Vec<&str> = self.0.iter().map(|kind| kind.label()).collect();
        formatter.write_str(&labels.join(", "))
    }
}
