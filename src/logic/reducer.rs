//! State transitions
//!
//! `reduce` maps a `BrowserState` and an `Action` to the next state. Requests
//! that cannot apply (opening a file, jumping past the breadcrumb) return the
//! state unchanged.

use tracing::debug;

use crate::messages::Action;
use crate::model::BrowserState;

/// Apply one action to the browser state
pub fn reduce(state: BrowserState, action: Action) -> BrowserState {
    match action {
        Action::OpenFolder(None) => BrowserState {
            path: Vec::new(),
            ..state
        },
        Action::OpenFolder(Some(index)) => {
            let is_folder = state
                .current_entries()
                .get(index)
                .map(|entry| entry.is_folder())
                .unwrap_or(false);

            if !is_folder {
                debug!("Ignoring open of non-folder position {}", index);
                return state;
            }

            let mut path = state.path.clone();
            path.push(index);
            BrowserState { path, ..state }
        }
        Action::JumpToBreadcrumb(position) => {
            if position >= state.path.len() {
                debug!(
                    "Ignoring breadcrumb jump to {} (depth {})",
                    position,
                    state.path.len()
                );
                return state;
            }

            let mut path = state.path.clone();
            path.truncate(position + 1);
            BrowserState { path, ..state }
        }
        Action::SetFilter(filter) => BrowserState { filter, ..state },
        Action::SetSort(sort) => {
            debug!("Sort set to {}", sort.label());
            BrowserState { sort, ..state }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_documents;
    use crate::model::Entry;
    use crate::{SortDirection, SortKey, SortOption};

    fn names(state: &BrowserState) -> Vec<&str> {
        state.current_entries().iter().map(Entry::name).collect()
    }

    fn deep_tree() -> Vec<Entry> {
        vec![Entry::folder(
            "A",
            vec![Entry::folder(
                "B",
                vec![Entry::folder(
                    "C",
                    vec![Entry::file("txt", "leaf", "1 kb", "2020-01-01")],
                )],
            )],
        )]
    }

    #[test]
    fn test_open_folder_pushes_breadcrumb() {
        let state = BrowserState::new(sample_documents());
        let state = reduce(state, Action::OpenFolder(Some(2)));

        assert_eq!(names(&state), vec!["Expenses claim form", "Fuel allowances"]);
        assert_eq!(state.breadcrumb_names(), vec!["Documents", "Expenses"]);
    }

    #[test]
    fn test_open_file_is_noop() {
        let state = BrowserState::new(sample_documents());
        let next = reduce(state.clone(), Action::OpenFolder(Some(0)));
        assert_eq!(next, state);
    }

    #[test]
    fn test_open_out_of_range_is_noop() {
        let state = BrowserState::new(sample_documents());
        let next = reduce(state.clone(), Action::OpenFolder(Some(99)));
        assert_eq!(next, state);
    }

    #[test]
    fn test_open_root_clears_breadcrumb() {
        let state = BrowserState::new(sample_documents());
        let state = reduce(state, Action::OpenFolder(Some(4)));
        assert_eq!(state.depth(), 1);

        let state = reduce(state, Action::open_root());
        assert!(state.at_root());
        assert_eq!(names(&state), names(&BrowserState::new(sample_documents())));
    }

    #[test]
    fn test_jump_truncates_inclusive() {
        let mut state = BrowserState::new(deep_tree());
        for _ in 0..3 {
            state = reduce(state, Action::OpenFolder(Some(0)));
        }
        assert_eq!(state.breadcrumb_names(), vec!["Documents", "A", "B", "C"]);

        let state = reduce(state, Action::JumpToBreadcrumb(1));
        assert_eq!(state.breadcrumb_names(), vec!["Documents", "A", "B"]);
        assert_eq!(names(&state), vec!["C"]);
    }

    #[test]
    fn test_jump_past_breadcrumb_is_noop() {
        let state = reduce(BrowserState::new(deep_tree()), Action::OpenFolder(Some(0)));
        let next = reduce(state.clone(), Action::JumpToBreadcrumb(1));
        assert_eq!(next, state);
    }

    #[test]
    fn test_navigation_keeps_filter_and_sort() {
        let sort = SortOption::new(SortKey::Size, SortDirection::Descending);
        let state = BrowserState::new(sample_documents());
        let state = reduce(state, Action::SetFilter("x".to_string()));
        let state = reduce(state, Action::SetSort(sort));
        let state = reduce(state, Action::OpenFolder(Some(2)));

        assert_eq!(state.filter, "x");
        assert_eq!(state.sort, sort);
    }

    #[test]
    fn test_filter_does_not_navigate() {
        let state = reduce(BrowserState::new(sample_documents()), Action::OpenFolder(Some(2)));
        let next = reduce(state.clone(), Action::SetFilter("Fuel".to_string()));
        assert_eq!(next.path, state.path);
        assert_eq!(next.filter, "Fuel");
    }

    #[test]
    fn test_reduce_does_not_mutate_tree() {
        let original = BrowserState::new(sample_documents());
        let state = reduce(original.clone(), Action::OpenFolder(Some(2)));
        let state = reduce(state, Action::open_root());
        assert_eq!(state.tree, original.tree);
        assert_eq!(names(&state), names(&original));
    }
}
