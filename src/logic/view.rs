//! Derived view
//!
//! The rows shown in the table: the open folder's entries, filtered and then
//! sorted. Pure, so tests can call it without rendering.

use crate::logic::{search, sorting};
use crate::model::Entry;
use crate::SortOption;

/// A row of the table, remembering where it sits in the unfiltered listing
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VisibleEntry<'a> {
    /// Position in the displayed listing (what `Action::OpenFolder` takes)
    pub index: usize,
    pub entry: &'a Entry,
}

/// Filter `entries` by name, then sort the survivors
pub fn visible_entries<'a>(
    entries: &'a [Entry],
    filter: &str,
    sort: SortOption,
) -> Vec<VisibleEntry<'a>> {
    let mut rows: Vec<VisibleEntry<'a>> = search::filter_entries(entries, filter)
        .into_iter()
        .map(|(index, entry)| VisibleEntry { index, entry })
        .collect();

    sorting::stable_sort_by(&mut rows, |a, b| {
        sorting::compare_entries(a.entry, b.entry, sort)
    });

    rows
}

/// Find a row's position by entry name
pub fn find_row_by_name(rows: &[VisibleEntry<'_>], name: &str) -> Option<usize> {
    rows.iter().position(|row| row.entry.name() == name)
}
