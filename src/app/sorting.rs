//! Sorting orchestration methods

use crate::messages::Action;
use crate::{App, SortDirection, SortKey, SortOption};

impl App {
    /// Activate one of the six header controls
    pub fn set_sort(&mut self, column: SortKey, order: SortDirection) {
        self.dispatch(Action::SetSort(SortOption::new(column, order)));
    }

    /// Activate a header control by its accessible label ("Name Ascending")
    ///
    /// Returns false when no control carries that label.
    pub fn activate_sort_control(&mut self, label: &str) -> bool {
        match SortOption::from_label(label) {
            Some(option) => {
                self.dispatch(Action::SetSort(option));
                true
            }
            None => false,
        }
    }
}
