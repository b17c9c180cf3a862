//! Browser Model
//!
//! The immutable view-state record: which folder is open, how it was
//! reached, and how its listing is filtered and sorted. Transitions go
//! through `logic::reducer::reduce`.

use std::rc::Rc;

use super::types::{Entry, Folder};
use crate::SortOption;

/// Navigation, filter and sort state for one mounted view
#[derive(Clone, Debug, PartialEq)]
pub struct BrowserState {
    /// Top-level entries (shared, never mutated)
    pub tree: Rc<[Entry]>,

    /// Position of each entered folder within its parent's children
    pub path: Vec<usize>,

    /// Active name filter (empty matches everything)
    pub filter: String,

    /// Active sort column and order
    pub sort: SortOption,
}

impl BrowserState {
    pub fn new(tree: Vec<Entry>) -> Self {
        Self::with_sort(tree, SortOption::default())
    }

    pub fn with_sort(tree: Vec<Entry>, sort: SortOption) -> Self {
        Self {
            tree: tree.into(),
            path: Vec::new(),
            filter: String::new(),
            sort,
        }
    }

    /// Folders navigated through, root first
    pub fn breadcrumb(&self) -> Vec<&Folder> {
        let mut crumbs = Vec::with_capacity(self.path.len());
        let mut entries: &[Entry] = &self.tree;
        for &idx in &self.path {
            match entries.get(idx).and_then(Entry::as_folder) {
                Some(folder) => {
                    crumbs.push(folder);
                    entries = &folder.files;
                }
                None => break,
            }
        }
        crumbs
    }

    /// Displayed listing: children of the open folder, before filter/sort
    pub fn current_entries(&self) -> &[Entry] {
        match self.breadcrumb().last() {
            Some(folder) => &folder.files,
            None => &self.tree,
        }
    }

    /// Number of folders entered
    pub fn depth(&self) -> usize {
        self.path.len()
    }

    pub fn at_root(&self) -> bool {
        self.path.is_empty()
    }

    /// Breadcrumb names, root label first ("Documents / Expenses")
    pub fn breadcrumb_names(&self) -> Vec<&str> {
        std::iter::once(crate::ROOT_LABEL)
            .chain(self.breadcrumb().into_iter().map(|f| f.name.as_str()))
            .collect()
    }
}
