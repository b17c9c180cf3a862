//! Pure Application Model
//!
//! The Model is split into two sub-models:
//!
//! - **BrowserState**: navigation, filter and sort (the reducer's state)
//! - **UiModel**: row selection, filter input focus, quit flag
//!
//! Key principles:
//! - Clone + Debug: can snapshot state in tests
//! - No I/O: the tree is loaded before the model is built
//! - Pure accessors: helper methods are side-effect free

pub mod browser;
pub mod types;
pub mod ui;

pub use browser::BrowserState;
pub use types::*;
pub use ui::UiModel;

use crate::logic::view::{visible_entries, VisibleEntry};

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    pub browser: BrowserState,
    pub ui: UiModel,
}

impl Model {
    pub fn new(browser: BrowserState, vim_mode: bool) -> Self {
        let mut model = Self {
            browser,
            ui: UiModel::new(vim_mode),
        };
        if !model.visible().is_empty() {
            model.ui.selected_index = Some(0);
        }
        model
    }

    /// Filtered and sorted rows of the open folder
    pub fn visible(&self) -> Vec<VisibleEntry<'_>> {
        visible_entries(
            self.browser.current_entries(),
            &self.browser.filter,
            self.browser.sort,
        )
    }

    /// Currently selected row (if any)
    pub fn selected_entry(&self) -> Option<VisibleEntry<'_>> {
        self.ui
            .selected_index
            .and_then(|idx| self.visible().get(idx).copied())
    }
}
