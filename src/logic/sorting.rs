//! Sorting comparison logic
//!
//! Pure functions for comparing entries across the three sort columns.
//!
//! The size and date comparators are loose: unknown units weigh zero, and
//! folders (by size) or unparseable dates compare equal to everything. That
//! makes them non-total orders, so listings are sorted with `stable_sort_by`
//! rather than `slice::sort_by`.

use chrono::{DateTime, NaiveDate};
use std::cmp::Ordering;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::model::Entry;
use crate::{SortDirection, SortKey, SortOption};

/// Lowercased name with diacritics removed ("Élan" -> "elan")
fn base_letters(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Compare two display names in three levels
///
/// Base letters first, then accents (unaccented first), then case
/// (lowercase first).
pub fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(&base_letters(b))
        .then_with(|| a.to_lowercase().cmp(&b.to_lowercase()))
        .then_with(|| b.cmp(a))
}

/// Parse the longest numeric prefix of `s` (like a lenient float parser)
fn leading_number(s: &str) -> Option<f64> {
    let end = s
        .char_indices()
        .take_while(|(_, c)| c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'))
        .map(|(i, c)| i + c.len_utf8())
        .last()
        .unwrap_or(0);

    (1..=end).rev().find_map(|n| s[..n].parse::<f64>().ok())
}

/// Normalize a human-readable size string to kilobytes
///
/// Returns `None` when the magnitude is not numeric. Units other than
/// "kb" and "mb" have factor 0.
///
/// # Examples
/// ```
/// use docbrowse::logic::sorting::parse_size;
///
/// assert_eq!(parse_size("156 kb"), Some(156.0));
/// assert_eq!(parse_size("450 MB"), Some(450.0 * 1024.0));
/// assert_eq!(parse_size("3 gb"), Some(0.0));
/// assert_eq!(parse_size("huge"), None);
/// ```
pub fn parse_size(size: &str) -> Option<f64> {
    let lower = size.to_lowercase();
    let mut parts = lower.split(' ');
    let value = parts.next().and_then(leading_number)?;

    let factor = match parts.next() {
        Some("kb") => 1.0,
        Some("mb") => 1024.0,
        _ => 0.0,
    };

    Some(value * factor)
}

/// Milliseconds since the epoch for an `added` value
///
/// A missing date (folders) counts as the epoch itself. An unparseable date
/// has no timestamp and compares equal to everything.
pub fn added_timestamp(added: Option<&str>) -> Option<i64> {
    match added {
        None => Some(0),
        Some(date) => parse_date_millis(date),
    }
}

fn parse_date_millis(s: &str) -> Option<i64> {
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return date
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc().timestamp_millis());
    }
    DateTime::parse_from_rfc3339(s)
        .ok()
        .map(|dt| dt.timestamp_millis())
}

fn compare_sizes(a: &Entry, b: &Entry) -> Ordering {
    match (a.size().and_then(parse_size), b.size().and_then(parse_size)) {
        (Some(a_kb), Some(b_kb)) => a_kb.partial_cmp(&b_kb).unwrap_or(Ordering::Equal),
        // Folders and non-numeric sizes have no position on this axis
        _ => Ordering::Equal,
    }
}

fn compare_added(a: &Entry, b: &Entry) -> Ordering {
    match (added_timestamp(a.added()), added_timestamp(b.added())) {
        (Some(a_ms), Some(b_ms)) => a_ms.cmp(&b_ms),
        _ => Ordering::Equal,
    }
}

fn compare_by_key(a: &Entry, b: &Entry, key: SortKey) -> Ordering {
    match key {
        SortKey::Name => compare_names(a.name(), b.name()),
        SortKey::Size => compare_sizes(a, b),
        SortKey::Added => compare_added(a, b),
    }
}

/// Compare two entries according to the given sort option
///
/// Descending swaps the arguments rather than reversing the result.
pub fn compare_entries(a: &Entry, b: &Entry, sort: SortOption) -> Ordering {
    match sort.order {
        SortDirection::Ascending => compare_by_key(a, b, sort.column),
        SortDirection::Descending => compare_by_key(b, a, sort.column),
    }
}

/// Stable insertion sort that accepts comparators which are not total orders
///
/// An element only moves left past neighbours that compare strictly greater,
/// so equal elements keep their relative order.
pub fn stable_sort_by<T, F>(items: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && compare(&items[j - 1], &items[j]) == Ordering::Greater {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}
