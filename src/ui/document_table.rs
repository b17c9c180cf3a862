//! Document table
//!
//! Header with per-column sort controls, then one row per visible entry:
//! icon, name, type, size and date added.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Row, Table, TableState},
    Frame,
};

use super::icons::IconRenderer;
use crate::logic::formatting::{added_cell, size_cell};
use crate::logic::view::VisibleEntry;
use crate::{SortDirection, SortKey, SortOption};

/// Column widths: icon, name, type, size, added
const COLUMN_WIDTHS: [Constraint; 5] = [
    Constraint::Length(2),
    Constraint::Min(20),
    Constraint::Length(8),
    Constraint::Length(12),
    Constraint::Length(14),
];

/// Header cell for a sortable column: "Name ▲▼" with the active arrow lit
fn sortable_header<'a>(
    column: SortKey,
    active: SortOption,
    icon_renderer: &IconRenderer,
) -> Line<'a> {
    let is_active = |order| active == SortOption::new(column, order);
    Line::from(vec![
        Span::styled(column.as_str(), Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        icon_renderer.sort_arrow(true, is_active(SortDirection::Ascending)),
        icon_renderer.sort_arrow(false, is_active(SortDirection::Descending)),
    ])
}

pub fn build_header(active: SortOption, icon_renderer: &IconRenderer) -> Row<'static> {
    Row::new(vec![
        Cell::from(icon_renderer.column_icon()),
        Cell::from(sortable_header(SortKey::Name, active, icon_renderer)),
        Cell::from(Span::styled("Type", Style::default().add_modifier(Modifier::BOLD))),
        Cell::from(sortable_header(SortKey::Size, active, icon_renderer)),
        Cell::from(sortable_header(SortKey::Added, active, icon_renderer)),
    ])
    .style(Style::default().bg(Color::Rgb(40, 40, 40)))
}

/// One table row; folder names are styled as links since only they open
pub fn build_row<'a>(row: &VisibleEntry<'a>, icon_renderer: &IconRenderer) -> Row<'a> {
    let entry = row.entry;
    let name_style = if entry.is_folder() {
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    Row::new(vec![
        Cell::from(icon_renderer.entry_icon(entry.is_folder())),
        Cell::from(Span::styled(entry.name(), name_style)),
        Cell::from(entry.type_tag()),
        Cell::from(size_cell(entry)),
        Cell::from(added_cell(entry)),
    ])
}

pub fn render_document_table(
    f: &mut Frame,
    area: Rect,
    rows: &[VisibleEntry<'_>],
    selected: Option<usize>,
    sort: SortOption,
    filter: &str,
    icon_renderer: &IconRenderer,
) {
    let mut table_rows: Vec<Row> = rows.iter().map(|row| build_row(row, icon_renderer)).collect();

    if table_rows.is_empty() {
        let message = if filter.is_empty() {
            "This folder is empty".to_string()
        } else {
            format!("No documents match \"{}\"", filter)
        };
        table_rows.push(Row::new(vec![
            Cell::from(""),
            Cell::from(Span::styled(message, Style::default().fg(Color::DarkGray))),
        ]));
    }

    let table = Table::new(table_rows, COLUMN_WIDTHS)
        .header(build_header(sort, icon_renderer))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .column_spacing(1)
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut state = TableState::default().with_selected(selected);
    f.render_stateful_widget(table, area, &mut state);
}
