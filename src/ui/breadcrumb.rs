//! Breadcrumb trail
//!
//! "Documents / Expenses / ..." with every segment styled as a link and the
//! open folder in bold.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Build the trail line from root label + folder names
pub fn build_breadcrumb_line<'a>(names: &[&'a str]) -> Line<'a> {
    let link = Style::default()
        .fg(Color::Blue)
        .add_modifier(Modifier::UNDERLINED);
    let last = names.len().saturating_sub(1);

    let mut spans = Vec::with_capacity(names.len() * 2);
    for (idx, name) in names.iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled(" / ", Style::default().fg(Color::Gray)));
        }
        let style = if idx == last {
            link.add_modifier(Modifier::BOLD)
        } else {
            link
        };
        spans.push(Span::styled(*name, style));
    }

    Line::from(spans)
}

pub fn render_breadcrumb(f: &mut Frame, area: Rect, names: &[&str]) {
    let paragraph = Paragraph::new(build_breadcrumb_line(names)).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Location ")
            .border_style(Style::default().fg(Color::Gray)),
    );
    f.render_widget(paragraph, area);
}
