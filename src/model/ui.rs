//! UI Model
//!
//! Interaction state owned by the terminal front end: the row cursor,
//! whether the filter input has focus, and the quit flag.

/// UI preferences and transient input state
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Selected row in the visible (filtered + sorted) listing
    pub selected_index: Option<usize>,

    /// Whether the filter input is receiving keystrokes
    pub filter_mode: bool,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            selected_index: None,
            filter_mode: false,
            should_quit: false,
        }
    }
}
