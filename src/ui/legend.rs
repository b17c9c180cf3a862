use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, filter_mode: bool, has_filter: bool, depth: usize) -> Vec<Span<'static>> {
    // While typing, only the input keys matter
    if filter_mode {
        return vec![
            Span::raw("Type to filter  "),
            key("Enter"),
            Span::raw(":Apply  "),
            key("Esc"),
            Span::raw(":Clear  "),
            key("Backspace"),
            Span::raw(":Delete"),
        ];
    }

    let mut hotkey_spans = if vim_mode {
        vec![
            key("j/k"),
            Span::raw(":Nav  "),
            key("l"),
            Span::raw(":Open  "),
            key("h"),
            Span::raw(":Back  "),
        ]
    } else {
        vec![
            key("↑/↓"),
            Span::raw(":Nav  "),
            key("Enter"),
            Span::raw(":Open  "),
            key("←"),
            Span::raw(":Back  "),
        ]
    };

    if depth > 0 {
        hotkey_spans.extend(vec![key("0"), Span::raw(":Documents  ")]);
        let last = depth.min(9);
        let range = if last == 1 { "1".to_string() } else { format!("1-{}", last) };
        hotkey_spans.extend(vec![
            Span::styled(range, Style::default().fg(Color::Yellow)),
            Span::raw(":Jump  "),
        ]);
    }

    if has_filter {
        hotkey_spans.extend(vec![key("Esc"), Span::raw(":Clear Filter  ")]);
    } else {
        let filter_key = if vim_mode { "/" } else { "^F" };
        hotkey_spans.extend(vec![key(filter_key), Span::raw(":Filter  ")]);
    }

    hotkey_spans.extend(vec![
        key("n/N"),
        Span::raw(":Name ▲▼  "),
        key("s/S"),
        Span::raw(":Size ▲▼  "),
        key("a/A"),
        Span::raw(":Added ▲▼  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    hotkey_spans
}

/// Build the legend paragraph (reusable for both rendering and height calculation)
pub fn build_legend_paragraph(vim_mode: bool, filter_mode: bool, has_filter: bool, depth: usize) -> Paragraph<'static> {
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, filter_mode, has_filter, depth));

    Paragraph::new(vec![hotkey_line])
        .block(Block::default().borders(Borders::ALL).title("Hotkeys"))
        .style(Style::default().fg(Color::Gray))
        .wrap(Wrap { trim: false })
}

pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, filter_mode: bool, has_filter: bool, depth: usize) {
    f.render_widget(build_legend_paragraph(vim_mode, filter_mode, has_filter, depth), area);
}

/// Calculate required height for legend based on terminal width and content
pub fn calculate_legend_height(width: u16, vim_mode: bool, filter_mode: bool, has_filter: bool, depth: usize) -> u16 {
    // Count lines without the block: line_count() does not account for borders
    let hotkey_line = Line::from(build_hotkey_spans(vim_mode, filter_mode, has_filter, depth));
    let paragraph_for_counting = Paragraph::new(vec![hotkey_line]).wrap(Wrap { trim: false });

    let line_count = paragraph_for_counting.line_count(width.saturating_sub(2));

    // Add top + bottom borders, ensure minimum of 3
    (line_count as u16).saturating_add(2).max(3)
}
