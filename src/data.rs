//! Document tree sources
//!
//! The built-in sample tree, and loading a tree from a YAML or JSON file.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::model::Entry;

/// Built-in sample tree shown when no tree file is configured
pub fn sample_documents() -> Vec<Entry> {
    vec![
        Entry::file("pdf", "Employee Handbook", "156 kb", "2017-01-06"),
        Entry::file("pdf", "Public Holiday policy", "90 kb", "2016-12-06"),
        Entry::folder(
            "Expenses",
            vec![
                Entry::file("doc", "Expenses claim form", "45 kb", "2017-05-02"),
                Entry::file("doc", "Fuel allowances", "75 kb", "2017-05-03"),
            ],
        ),
        Entry::file("csv", "Cost centres", "23 kb", "2016-08-12"),
        Entry::folder(
            "Misc",
            vec![
                Entry::file("doc", "Christmas party", "12 kb", "2017-12-01"),
                Entry::file("mov", "Welcome to the company!", "450 mb", "2015-04-24"),
            ],
        ),
    ]
}

/// Load a document tree from disk
///
/// `.json` files are parsed as JSON, everything else as YAML.
pub fn load_tree(path: &Path) -> Result<Vec<Entry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read tree file {}", path.display()))?;

    let is_json = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let entries: Vec<Entry> = if is_json {
        serde_json::from_str(&contents)
            .with_context(|| format!("Invalid JSON tree in {}", path.display()))?
    } else {
        serde_yaml::from_str(&contents)
            .with_context(|| format!("Invalid YAML tree in {}", path.display()))?
    };

    tracing::debug!("Loaded {} top-level entries from {}", entries.len(), path.display());
    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_documents_shape() {
        let docs = sample_documents();
        let names: Vec<&str> = docs.iter().map(Entry::name).collect();
        assert_eq!(
            names,
            vec![
                "Employee Handbook",
                "Public Holiday policy",
                "Expenses",
                "Cost centres",
                "Misc"
            ]
        );
        assert_eq!(docs.iter().filter(|e| e.is_folder()).count(), 2);
    }

    #[test]
    fn test_load_tree_missing_file() {
        let err = load_tree(Path::new("/nonexistent/docbrowse/tree.yaml")).unwrap_err();
        assert!(
            err.to_string().contains("Failed to read tree file"),
            "got: {}",
            err
        );
    }
}
