//! Filter input methods
//!
//! The filter input edits `BrowserState::filter` live: every keystroke
//! dispatches `SetFilter`, so the table narrows as the user types.

use crate::messages::Action;
use crate::App;

impl App {
    pub fn set_filter(&mut self, filter: &str) {
        self.dispatch(Action::SetFilter(filter.to_string()));
    }

    /// Give the filter input focus
    pub fn start_filter_input(&mut self) {
        self.model.ui.filter_mode = true;
    }

    /// Leave the input, keeping the filter applied
    pub fn accept_filter_input(&mut self) {
        self.model.ui.filter_mode = false;
    }

    /// Leave the input and drop the filter
    pub fn cancel_filter_input(&mut self) {
        self.model.ui.filter_mode = false;
        self.clear_filter();
    }

    pub fn clear_filter(&mut self) {
        if !self.model.browser.filter.is_empty() {
            self.set_filter("");
        }
    }

    pub fn push_filter_char(&mut self, c: char) {
        let mut filter = self.model.browser.filter.clone();
        filter.push(c);
        self.dispatch(Action::SetFilter(filter));
    }

    pub fn pop_filter_char(&mut self) {
        let mut filter = self.model.browser.filter.clone();
        if filter.pop().is_some() {
            self.dispatch(Action::SetFilter(filter));
        }
    }
}
