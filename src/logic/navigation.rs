//! Row cursor logic
//!
//! Pure functions moving the table selection, wrapping at both ends.

/// Row below the cursor, wrapping to the top
///
/// # Examples
/// ```
/// use docbrowse::logic::navigation::next_row;
///
/// assert_eq!(next_row(None, 0), None);
/// assert_eq!(next_row(None, 3), Some(0));
/// assert_eq!(next_row(Some(1), 3), Some(2));
/// assert_eq!(next_row(Some(2), 3), Some(0));
/// ```
pub fn next_row(current: Option<usize>, row_count: usize) -> Option<usize> {
    if row_count == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= row_count => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Row above the cursor, wrapping to the bottom
///
/// # Examples
/// ```
/// use docbrowse::logic::navigation::prev_row;
///
/// assert_eq!(prev_row(None, 0), None);
/// assert_eq!(prev_row(Some(2), 3), Some(1));
/// assert_eq!(prev_row(Some(0), 3), Some(2));
/// assert_eq!(prev_row(None, 3), Some(2));
/// ```
pub fn prev_row(current: Option<usize>, row_count: usize) -> Option<usize> {
    if row_count == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => row_count - 1,
        Some(i) => (i - 1).min(row_count - 1),
    })
}

/// Last row, if any
pub fn last_row(row_count: usize) -> Option<usize> {
    row_count.checked_sub(1)
}

/// Cursor after the rows changed: keep the previously found row, else the top
pub fn restore_row(found: Option<usize>, row_count: usize) -> Option<usize> {
    if row_count == 0 {
        None
    } else {
        found.or(Some(0))
    }
}
