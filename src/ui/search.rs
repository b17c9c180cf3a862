//! Filter Input UI
//!
//! Renders the filter input box with placeholder, query and cursor.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::FILTER_PLACEHOLDER;

/// Title of the input box for the current input state
pub fn filter_title(active: bool, has_query: bool, vim_mode: bool) -> String {
    if active {
        " Filter - Enter to apply, Esc to clear ".to_string()
    } else if has_query {
        " Filter - Esc to clear ".to_string()
    } else {
        let key = if vim_mode { "/" } else { "Ctrl-F" };
        format!(" Filter ({}) ", key)
    }
}

/// Input line: placeholder when empty and idle, otherwise the query
pub fn build_filter_line(query: &str, active: bool) -> Line<'_> {
    if query.is_empty() && !active {
        return Line::from(Span::styled(
            FILTER_PLACEHOLDER,
            Style::default().fg(Color::DarkGray),
        ));
    }

    let mut spans = vec![Span::raw(query)];
    if active {
        spans.push(Span::styled(
            "█",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    Line::from(spans)
}

pub fn render_filter_input(f: &mut Frame, area: Rect, query: &str, active: bool, vim_mode: bool) {
    let border_color = if active { Color::Cyan } else { Color::Gray };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(filter_title(active, !query.is_empty(), vim_mode))
        .border_style(Style::default().fg(border_color));

    f.render_widget(Paragraph::new(build_filter_line(query, active)).block(block), area);
}
