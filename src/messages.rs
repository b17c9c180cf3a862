//! Message types for the Elm Architecture pattern
//!
//! Every change to `BrowserState` is expressed as an `Action` and applied by
//! `logic::reducer::reduce`. Key handling translates input into actions;
//! tests can dispatch them directly without rendering anything.

use crate::SortOption;

/// State transitions of the document browser
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Open the folder at this position of the displayed listing, or reset
    /// to the top level when `None`
    OpenFolder(Option<usize>),

    /// Truncate the breadcrumb to this position (inclusive)
    JumpToBreadcrumb(usize),

    /// Replace the name filter
    SetFilter(String),

    /// Replace the sort column and order
    SetSort(SortOption),
}

impl Action {
    /// Action for the root "Documents" control
    pub fn open_root() -> Self {
        Action::OpenFolder(None)
    }

    /// Action for the parent of a folder `depth` levels deep (None at root)
    pub fn navigate_up(depth: usize) -> Option<Self> {
        match depth {
            0 => None,
            1 => Some(Action::open_root()),
            d => Some(Action::JumpToBreadcrumb(d - 2)),
        }
    }
}
