//! App Orchestration Methods
//!
//! `App` owns the Model and the icon renderer. Methods are grouped by domain:
//! - navigation: row cursor, entering folders, breadcrumb jumps
//! - filters: filter input editing
//! - sorting: header sort controls
//!
//! Every change to `BrowserState` goes through `dispatch`, which runs the
//! reducer and then repairs the row cursor.

pub mod filters;
pub mod navigation;
pub mod sorting;

use tracing::debug;

use crate::logic;
use crate::messages::Action;
use crate::model::{BrowserState, Model};
use crate::ui::icons::IconRenderer;

pub struct App {
    pub model: Model,
    pub icon_renderer: IconRenderer,
}

impl App {
    pub fn new(browser: BrowserState, vim_mode: bool, icon_renderer: IconRenderer) -> Self {
        Self {
            model: Model::new(browser, vim_mode),
            icon_renderer,
        }
    }

    /// Apply an action and keep the cursor meaningful
    ///
    /// Filter and sort changes keep the cursor on the same entry when it is
    /// still visible; navigation starts at the first row.
    pub fn dispatch(&mut self, action: Action) {
        let keep_selection = matches!(action, Action::SetFilter(_) | Action::SetSort(_));
        let selected_name = if keep_selection {
            self.model
                .selected_entry()
                .map(|row| row.entry.name().to_string())
        } else {
            None
        };

        debug!("dispatch {:?}", action);
        self.model.browser = logic::reducer::reduce(self.model.browser.clone(), action);

        let selection = {
            let rows = self.model.visible();
            let found = selected_name
                .as_deref()
                .and_then(|name| logic::view::find_row_by_name(&rows, name));
            logic::navigation::restore_row(found, rows.len())
        };
        self.model.ui.selected_index = selection;
    }

    /// Rows currently visible in the table
    pub fn visible_count(&self) -> usize {
        self.model.visible().len()
    }
}
