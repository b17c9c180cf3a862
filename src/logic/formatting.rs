//! Formatting and display logic
//!
//! Pure functions turning entries and state into table/status text.

use crate::model::Entry;

/// Placeholder for columns a folder has no value for
pub const EMPTY_CELL: &str = "-";

/// Size column text ("-" for folders)
pub fn size_cell(entry: &Entry) -> &str {
    entry.size().unwrap_or(EMPTY_CELL)
}

/// Added column text ("-" for folders)
pub fn added_cell(entry: &Entry) -> &str {
    entry.added().unwrap_or(EMPTY_CELL)
}

/// Join breadcrumb names for the status bar
///
/// # Examples
/// ```
/// use docbrowse::logic::formatting::format_path;
///
/// assert_eq!(format_path(&["Documents"]), "Documents");
/// assert_eq!(format_path(&["Documents", "Expenses"]), "Documents / Expenses");
/// ```
pub fn format_path(names: &[&str]) -> String {
    names.join(" / ")
}

/// Item count text, e.g. "2 of 5 items" when filtered
pub fn format_item_count(visible: usize, total: usize) -> String {
    let noun = if total == 1 { "item" } else { "items" };
    if visible == total {
        format!("{} {}", total, noun)
    } else {
        format!("{} of {} {}", visible, total, noun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells_for_folder() {
        let folder = Entry::folder("Misc", vec![]);
        assert_eq!(size_cell(&folder), "-");
        assert_eq!(added_cell(&folder), "-");
    }

    #[test]
    fn test_cells_for_file() {
        let file = Entry::file("mov", "Welcome", "450 mb", "2015-04-24");
        assert_eq!(size_cell(&file), "450 mb");
        assert_eq!(added_cell(&file), "2015-04-24");
    }

    #[test]
    fn test_format_item_count() {
        assert_eq!(format_item_count(5, 5), "5 items");
        assert_eq!(format_item_count(1, 1), "1 item");
        assert_eq!(format_item_count(1, 5), "1 of 5 items");
        assert_eq!(format_item_count(0, 0), "0 items");
    }
}
