//! Reducer and derived-view properties
//!
//! These exercise the pure layer only: `reduce` plus `visible_entries`,
//! without an `App` or a terminal.

use docbrowse::data::sample_documents;
use docbrowse::logic::reducer::reduce;
use docbrowse::logic::view::visible_entries;
use docbrowse::messages::Action;
use docbrowse::model::{BrowserState, Entry};
use docbrowse::{SortDirection, SortKey, SortOption};

fn names(state: &BrowserState) -> Vec<String> {
    visible_entries(state.current_entries(), &state.filter, state.sort)
        .iter()
        .map(|row| row.entry.name().to_string())
        .collect()
}

fn sort(column: SortKey, order: SortDirection) -> Action {
    Action::SetSort(SortOption::new(column, order))
}

#[test]
fn test_unknown_size_unit_sorts_as_zero() {
    // "gb" is not a recognised unit, so "1 gb" weighs nothing
    let tree = vec![
        Entry::file("txt", "Notes", "5 kb", "2020-01-01"),
        Entry::file("iso", "Disk image", "1 gb", "2020-01-01"),
        Entry::file("mov", "Video", "2 mb", "2020-01-01"),
    ];
    let state = reduce(BrowserState::new(tree), sort(SortKey::Size, SortDirection::Ascending));
    assert_eq!(names(&state), vec!["Disk image", "Notes", "Video"]);
}

#[test]
fn test_unknown_size_units_descending_keep_listing_order() {
    let tree = vec![
        Entry::file("iso", "Disk image", "1 gb", "2020-01-01"),
        Entry::file("txt", "Notes", "5 kb", "2020-01-01"),
        Entry::file("bak", "Tape", "4 tb", "2020-01-01"),
        Entry::file("mov", "Video", "2 mb", "2020-01-01"),
    ];
    let state = reduce(BrowserState::new(tree), sort(SortKey::Size, SortDirection::Descending));
    // Both zero-weight files land last, still in listing order
    assert_eq!(names(&state), vec!["Video", "Notes", "Disk image", "Tape"]);
}

#[test]
fn test_mb_outweighs_kb() {
    let state = reduce(
        BrowserState::new(sample_documents()),
        Action::OpenFolder(Some(4)), // Misc
    );
    let state = reduce(state, sort(SortKey::Size, SortDirection::Descending));
    assert_eq!(names(&state), vec!["Welcome to the company!", "Christmas party"]);
}

#[test]
fn test_applying_the_same_action_twice_is_idempotent() {
    let start = BrowserState::new(sample_documents());
    let actions = vec![
        Action::SetFilter("e".to_string()),
        sort(SortKey::Added, SortDirection::Descending),
        Action::OpenFolder(None),
        Action::JumpToBreadcrumb(0),
    ];

    for action in actions {
        let once = reduce(start.clone(), action.clone());
        let twice = reduce(once.clone(), action);
        assert_eq!(once, twice);
    }
}

#[test]
fn test_open_then_root_round_trip() {
    let start = BrowserState::new(sample_documents());
    let inside = reduce(start.clone(), Action::OpenFolder(Some(2)));
    assert_eq!(names(&inside), vec!["Expenses claim form", "Fuel allowances"]);

    let back = reduce(inside, Action::OpenFolder(None));
    assert_eq!(back, start);
}

#[test]
fn test_opening_a_file_position_is_ignored() {
    let start = BrowserState::new(sample_documents());
    let after = reduce(start.clone(), Action::OpenFolder(Some(0)));
    assert_eq!(after, start);
}

#[test]
fn test_view_is_derived_not_stored() {
    // Changing the filter never drops entries from the tree
    let state = reduce(
        BrowserState::new(sample_documents()),
        Action::SetFilter("zzz".to_string()),
    );
    assert!(names(&state).is_empty());

    let state = reduce(state, Action::SetFilter(String::new()));
    assert_eq!(names(&state).len(), 5);
}

#[test]
fn test_breadcrumb_jump_truncates_path() {
    let nested = vec![Entry::folder(
        "A",
        vec![Entry::folder(
            "B",
            vec![Entry::folder("C", vec![Entry::file("txt", "leaf", "1 kb", "2020-01-01")])],
        )],
    )];
    let mut state = BrowserState::new(nested);
    for _ in 0..3 {
        state = reduce(state, Action::OpenFolder(Some(0)));
    }
    assert_eq!(state.breadcrumb_names(), vec!["Documents", "A", "B", "C"]);

    let state = reduce(state, Action::JumpToBreadcrumb(0));
    assert_eq!(state.breadcrumb_names(), vec!["Documents", "A"]);
    assert_eq!(names(&state), vec!["B"]);

    // Past the end: unchanged
    let same = reduce(state.clone(), Action::JumpToBreadcrumb(5));
    assert_eq!(same, state);
}
