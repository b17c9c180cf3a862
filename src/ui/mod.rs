// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - icons: Icon rendering (emoji and Nerd Fonts) with themes
// - layout: Splits the screen into stacked panes
// - render: Main orchestration function that coordinates all rendering
// - breadcrumb: Renders the location trail
// - search: Renders the filter input box
// - document_table: Renders the sortable document table
// - legend: Renders hotkey legend
// - status_bar: Renders bottom status bar with location, counts and sort

pub mod breadcrumb;
pub mod document_table;
pub mod icons;
pub mod layout;
pub mod legend;
pub mod render;
pub mod search;
pub mod status_bar;

// Re-export main render function for convenience
pub use render::render;
