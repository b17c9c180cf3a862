//! Filter Logic
//!
//! Pure functions for narrowing a listing by name.

use crate::model::Entry;

/// Case-insensitive substring match of `filter` anywhere in `name`
///
/// # Examples
/// ```
/// use docbrowse::logic::search::name_matches;
///
/// assert!(name_matches("", "anything"));
/// assert!(name_matches("employee", "Employee Handbook"));
/// assert!(name_matches("HAND", "Employee Handbook"));
/// assert!(!name_matches("policy", "Employee Handbook"));
/// ```
pub fn name_matches(filter: &str, name: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    name.to_lowercase().contains(&filter.to_lowercase())
}

/// Entries of one listing whose names match, paired with their position
///
/// Only the given listing is searched; folder contents are not descended into.
pub fn filter_entries<'a>(entries: &'a [Entry], filter: &str) -> Vec<(usize, &'a Entry)> {
    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| name_matches(filter, entry.name()))
        .collect()
}
