//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal:
//! - formatting: Table cell and status text
//! - navigation: Row cursor movement
//! - reducer: BrowserState transitions
//! - search: Name filter
//! - sorting: Comparators for name, size and date added
//! - view: Filtered and sorted rows of the open folder

pub mod formatting;
pub mod navigation;
pub mod reducer;
pub mod search;
pub mod sorting;
pub mod view;
