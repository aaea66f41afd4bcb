use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::dashboard::{refresh, Dashboard, DashboardOptions, Section};
use crate::models::LoadError;
use crate::storage::TableSource;
use crate::types::TransactionKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Filter,
    Sections
}

/// State of the interactive dashboard between two key presses.
pub struct AppState<S: TableSource> {
    pub running: bool,
    pub focus: Focus,
    /// Highlighted entry of the category filter.
    pub cursor: usize,
    /// Index of the section shown in the main panel.
    pub section: usize,
    pub options: DashboardOptions,
    pub dashboard: Dashboard,
    pub status: String,
    source: S,
    path: PathBuf
}

impl<S: TableSource> AppState<S> {
    /// Loads the table and renders the first cycle.
    ///
    /// # Errors
    /// Returns the loader's error when the table cannot be produced.
    pub fn new(source: S, path: PathBuf, options: DashboardOptions) -> Result<Self, Arc<LoadError>> {
        let dashboard = refresh(&source, &path, &options)?;

        Ok(Self {
            running: true,
            focus: Focus::Filter,
            cursor: 0,
            section: 0,
            options,
            dashboard,
            status: String::from("Space toggles a type, c clears, Tab switches panels, q quits"),
            source,
            path
        })
    }

    pub fn kinds(&self) -> &[TransactionKind] {
        &self.dashboard.kinds
    }

    pub fn current_section(&self) -> Option<&Section> {
        self.dashboard.sections.get(self.section)
    }

    pub fn move_cursor(&mut self, forward: bool) {
        let count = self.kinds().len();

        if count == 0 {
            return;
        }

        self.cursor = if forward { (self.cursor + 1) % count } else { (self.cursor + count - 1) % count };
    }

    pub fn move_section(&mut self, forward: bool) {
        let count = self.dashboard.sections.len();

        if count == 0 {
            return;
        }

        self.section = if forward { (self.section + 1) % count } else { (self.section + count - 1) % count };
    }

    /// Toggles the highlighted kind in the selection and re-renders.
    pub fn toggle_current(&mut self) -> Result<(), Arc<LoadError>> {
        let Some(kind) = self.kinds().get(self.cursor).copied() else {
            return Ok(());
        };

        let selected = self.options.selection.toggle(kind);
        self.status = format!("{} {kind}", if selected { "Selected" } else { "Deselected" });

        self.rerender()
    }

    pub fn clear_selection(&mut self) -> Result<(), Arc<LoadError>> {
        if self.options.selection.is_empty() {
            return Ok(());
        }

        self.options.selection.clear();
        self.status = String::from("Showing all transaction types");

        self.rerender()
    }

    fn rerender(&mut self) -> Result<(), Arc<LoadError>> {
        debug!("Selection changed to [{}], re-rendering", self.options.selection);
        self.dashboard = refresh(&self.source, &self.path, &self.options)?;
        Ok(())
    }
}
