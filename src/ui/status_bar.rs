use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::logic::formatting::{format_item_count, format_path};
use crate::SortOption;

/// Status text: location │ item count │ sort │ filter
pub fn build_status_line(
    path: &[&str],
    visible: usize,
    total: usize,
    sort: SortOption,
    filter: &str,
) -> String {
    let mut parts = vec![
        format_path(path),
        format_item_count(visible, total),
        format!("Sort: {}", sort.label()),
    ];
    if !filter.is_empty() {
        parts.push(format!("Filter: \"{}\"", filter));
    }
    parts.join(" │ ")
}

/// Render the bottom status bar
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    path: &[&str],
    visible: usize,
    total: usize,
    sort: SortOption,
    filter: &str,
) {
    let paragraph = Paragraph::new(build_status_line(path, visible, total, sort, filter))
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(paragraph, area);
}
