use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Breadcrumb trail
    pub breadcrumb_area: Rect,
    /// Filter input
    pub filter_area: Rect,
    /// Document table
    pub table_area: Rect,
    /// Hotkey legend (full width)
    pub legend_area: Rect,
    /// Bottom status bar
    pub status_area: Rect,
}

/// Split the inside of the outer "Document Manager" block into panes
pub fn calculate_layout(inner: Rect, legend_height: u16) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Breadcrumb (border, text, border)
            Constraint::Length(3),             // Filter input
            Constraint::Min(4),                // Table (borders + header + one row)
            Constraint::Length(legend_height), // Legend (exact fit for wrapped content)
            Constraint::Length(3),             // Status bar
        ])
        .split(inner);

    LayoutInfo {
        breadcrumb_area: chunks[0],
        filter_area: chunks[1],
        table_area: chunks[2],
        legend_area: chunks[3],
        status_area: chunks[4],
    }
}
