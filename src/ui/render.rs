use crate::App;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

use super::{breadcrumb, document_table, layout, legend, search, status_bar};

/// Main render function - draws the whole browser from the model
pub fn render(f: &mut Frame, app: &App) {
    let model = &app.model;
    let browser = &model.browser;
    let ui = &model.ui;

    let outer = Block::default()
        .borders(Borders::ALL)
        .title(" Document Manager ")
        .title_style(Style::default().add_modifier(Modifier::BOLD))
        .border_style(Style::default().fg(Color::Cyan));
    let inner = outer.inner(f.area());
    f.render_widget(outer, f.area());

    let has_filter = !browser.filter.is_empty();
    let legend_height = legend::calculate_legend_height(
        inner.width,
        ui.vim_mode,
        ui.filter_mode,
        has_filter,
        browser.depth(),
    );
    let layout_info = layout::calculate_layout(inner, legend_height);

    let path = browser.breadcrumb_names();
    breadcrumb::render_breadcrumb(f, layout_info.breadcrumb_area, &path);

    search::render_filter_input(
        f,
        layout_info.filter_area,
        &browser.filter,
        ui.filter_mode,
        ui.vim_mode,
    );

    let rows = model.visible();
    document_table::render_document_table(
        f,
        layout_info.table_area,
        &rows,
        ui.selected_index,
        browser.sort,
        &browser.filter,
        &app.icon_renderer,
    );

    legend::render_legend(
        f,
        layout_info.legend_area,
        ui.vim_mode,
        ui.filter_mode,
        has_filter,
        browser.depth(),
    );

    status_bar::render_status_bar(
        f,
        layout_info.status_area,
        &path,
        rows.len(),
        browser.current_entries().len(),
        browser.sort,
        &browser.filter,
    );
}
