//! Document Browser Library
//!
//! Exposes the model, logic and rendering modules so the binary and the
//! integration tests share one implementation.

pub mod app;
pub mod config;
pub mod data;
pub mod handlers;
pub mod logic;
pub mod messages;
pub mod model;
pub mod ui;
pub mod utils;

pub use app::App;

use serde::Deserialize;

/// Label of the root breadcrumb control
pub const ROOT_LABEL: &str = "Documents";

/// Placeholder shown in the empty filter input
pub const FILTER_PLACEHOLDER: &str = "Filter by filename...";

/// Column a listing can be sorted by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Name,
    Size,
    Added,
}

impl SortKey {
    pub const ALL: [SortKey; 3] = [SortKey::Name, SortKey::Size, SortKey::Added];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Name => "Name",
            SortKey::Size => "Size",
            SortKey::Added => "Added",
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "Ascending",
            SortDirection::Descending => "Descending",
        }
    }
}

/// Active sort choice (one of the six header controls)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct SortOption {
    pub column: SortKey,
    pub order: SortDirection,
}

impl SortOption {
    pub fn new(column: SortKey, order: SortDirection) -> Self {
        Self { column, order }
    }

    /// Accessible label of the header control, e.g. "Name Ascending"
    pub fn label(&self) -> String {
        format!("{} {}", self.column.as_str(), self.order.as_str())
    }

    /// Find a header control by its accessible label
    ///
    /// # Examples
    /// ```
    /// use docbrowse::{SortDirection, SortKey, SortOption};
    ///
    /// assert_eq!(
    ///     SortOption::from_label("Size Descending"),
    ///     Some(SortOption::new(SortKey::Size, SortDirection::Descending))
    /// );
    /// assert_eq!(SortOption::from_label("Type Ascending"), None);
    /// ```
    pub fn from_label(label: &str) -> Option<Self> {
        Self::controls().into_iter().find(|opt| opt.label() == label)
    }

    /// All header controls in display order
    pub fn controls() -> Vec<SortOption> {
        SortKey::ALL
            .iter()
            .flat_map(|&column| {
                [
                    SortOption::new(column, SortDirection::Ascending),
                    SortOption::new(column, SortDirection::Descending),
                ]
            })
            .collect()
    }
}

impl Default for SortOption {
    fn default() -> Self {
        Self::new(SortKey::Name, SortDirection::Ascending)
    }
}
