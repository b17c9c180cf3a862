//! Navigation orchestration methods
//!
//! Methods for traversing the document tree:
//! - Entering the selected folder
//! - Going back to the parent, the root, or a breadcrumb segment
//! - Moving the row cursor

use tracing::debug;

use crate::messages::Action;
use crate::{logic, App};

impl App {
    pub fn select_next(&mut self) {
        let count = self.visible_count();
        self.model.ui.selected_index = logic::navigation::next_row(self.model.ui.selected_index, count);
    }

    pub fn select_prev(&mut self) {
        let count = self.visible_count();
        self.model.ui.selected_index = logic::navigation::prev_row(self.model.ui.selected_index, count);
    }

    pub fn select_first(&mut self) {
        self.model.ui.selected_index = logic::navigation::restore_row(None, self.visible_count());
    }

    pub fn select_last(&mut self) {
        self.model.ui.selected_index = logic::navigation::last_row(self.visible_count());
    }

    /// Open the selected row if it is a folder; files are not navigable
    pub fn open_selected(&mut self) {
        let target = self
            .model
            .selected_entry()
            .filter(|row| row.entry.is_folder())
            .map(|row| row.index);

        match target {
            Some(index) => self.dispatch(Action::OpenFolder(Some(index))),
            None => debug!("open_selected: selection is not a folder"),
        }
    }

    /// Go to the parent folder (no-op at the root)
    pub fn navigate_up(&mut self) {
        if let Some(action) = Action::navigate_up(self.model.browser.depth()) {
            self.dispatch(action);
        }
    }

    /// The root "Documents" control
    pub fn jump_to_root(&mut self) {
        self.dispatch(Action::open_root());
    }

    /// Breadcrumb segment `segment` (1-based, as numbered in the trail)
    pub fn jump_to_segment(&mut self, segment: usize) {
        match segment {
            0 => self.jump_to_root(),
            n => self.dispatch(Action::JumpToBreadcrumb(n - 1)),
        }
    }
}
