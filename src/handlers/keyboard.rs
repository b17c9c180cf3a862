//! Keyboard Input Handler
//!
//! Maps key events onto `App` methods. The filter input takes every key
//! while it has focus; otherwise keys drive the table, the breadcrumb and
//! the sort controls.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

use crate::{App, SortDirection, SortKey};

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ctrl-C always quits, even while typing
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.model.ui.should_quit = true;
        return;
    }

    if app.model.ui.filter_mode {
        handle_filter_key(app, key);
        return;
    }

    let vim_mode = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.start_filter_input();
        }
        KeyCode::Char('/') if vim_mode => app.start_filter_input(),
        KeyCode::Char('q') => app.model.ui.should_quit = true,

        // Row cursor
        KeyCode::Down => app.select_next(),
        KeyCode::Up => app.select_prev(),
        KeyCode::Char('j') if vim_mode => app.select_next(),
        KeyCode::Char('k') if vim_mode => app.select_prev(),
        KeyCode::Home => app.select_first(),
        KeyCode::End => app.select_last(),

        // Folder navigation
        KeyCode::Enter | KeyCode::Right => app.open_selected(),
        KeyCode::Char('l') if vim_mode => app.open_selected(),
        KeyCode::Backspace | KeyCode::Left => app.navigate_up(),
        KeyCode::Char('h') if vim_mode => app.navigate_up(),
        KeyCode::Char('0') | KeyCode::Char('~') => app.jump_to_root(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(segment) = c.to_digit(10) {
                app.jump_to_segment(segment as usize);
            }
        }

        KeyCode::Esc => app.clear_filter(),

        // Sort controls
        KeyCode::Char('n') => app.set_sort(SortKey::Name, SortDirection::Ascending),
        KeyCode::Char('N') => app.set_sort(SortKey::Name, SortDirection::Descending),
        KeyCode::Char('s') => app.set_sort(SortKey::Size, SortDirection::Ascending),
        KeyCode::Char('S') => app.set_sort(SortKey::Size, SortDirection::Descending),
        KeyCode::Char('a') => app.set_sort(SortKey::Added, SortDirection::Ascending),
        KeyCode::Char('A') => app.set_sort(SortKey::Added, SortDirection::Descending),

        other => debug!("unhandled key {:?}", other),
    }
}

fn handle_filter_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.accept_filter_input(),
        KeyCode::Esc => app.cancel_filter_input(),
        KeyCode::Backspace => app.pop_filter_char(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_filter_char(c)
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample_documents;
    use crate::model::BrowserState;
    use crate::ui::icons::{IconMode, IconRenderer, IconTheme};

    fn app(vim_mode: bool) -> App {
        App::new(
            BrowserState::new(sample_documents()),
            vim_mode,
            IconRenderer::new(IconMode::Emoji, IconTheme::default()),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    fn selected_name(app: &App) -> Option<String> {
        app.model.selected_entry().map(|row| row.entry.name().to_string())
    }

    #[test]
    fn test_typed_letters_go_to_filter_while_focused() {
        let mut app = app(false);
        ctrl(&mut app, 'f');
        assert!(app.model.ui.filter_mode);

        // 'q' and 'n' are hotkeys outside the input
        for c in "qn".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.model.browser.filter, "qn");
        assert!(!app.model.ui.should_quit);

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.model.browser.filter, "q");
    }

    #[test]
    fn test_enter_keeps_filter_and_esc_clears() {
        let mut app = app(false);
        ctrl(&mut app, 'f');
        for c in "Employee".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert!(!app.model.ui.filter_mode);
        assert_eq!(app.model.browser.filter, "Employee");
        assert_eq!(app.visible_count(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.model.browser.filter, "");
        assert_eq!(app.visible_count(), 5);
    }

    #[test]
    fn test_esc_inside_input_drops_filter() {
        let mut app = app(false);
        ctrl(&mut app, 'f');
        press(&mut app, KeyCode::Char('x'));
        press(&mut app, KeyCode::Esc);
        assert!(!app.model.ui.filter_mode);
        assert!(app.model.browser.filter.is_empty());
    }

    #[test]
    fn test_sort_keys() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('N'));
        assert_eq!(app.model.browser.sort.label(), "Name Descending");
        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.model.browser.sort.label(), "Added Ascending");
        press(&mut app, KeyCode::Char('S'));
        assert_eq!(app.model.browser.sort.label(), "Size Descending");
    }

    #[test]
    fn test_open_and_back() {
        let mut app = app(false);
        // Name ascending: Cost centres, Employee Handbook, Expenses, ...
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(selected_name(&app).as_deref(), Some("Expenses"));

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.model.browser.breadcrumb_names(), vec!["Documents", "Expenses"]);

        press(&mut app, KeyCode::Backspace);
        assert!(app.model.browser.at_root());
    }

    #[test]
    fn test_enter_on_file_does_nothing() {
        let mut app = app(false);
        assert_eq!(selected_name(&app).as_deref(), Some("Cost centres"));
        press(&mut app, KeyCode::Enter);
        assert!(app.model.browser.at_root());
        assert_eq!(app.visible_count(), 5);
    }

    #[test]
    fn test_digit_jumps() {
        let mut app = app(false);
        press(&mut app, KeyCode::End);
        assert_eq!(selected_name(&app).as_deref(), Some("Public Holiday policy"));
        press(&mut app, KeyCode::Up);
        assert_eq!(selected_name(&app).as_deref(), Some("Misc"));
        press(&mut app, KeyCode::Right);
        assert_eq!(app.model.browser.depth(), 1);

        // Already at segment 1: unchanged
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.model.browser.depth(), 1);

        press(&mut app, KeyCode::Char('0'));
        assert!(app.model.browser.at_root());
    }

    #[test]
    fn test_vim_keys_only_in_vim_mode() {
        let mut plain = app(false);
        press(&mut plain, KeyCode::Char('j'));
        assert_eq!(plain.model.ui.selected_index, Some(0));
        press(&mut plain, KeyCode::Char('/'));
        assert!(!plain.model.ui.filter_mode);

        let mut vim = app(true);
        press(&mut vim, KeyCode::Char('j'));
        assert_eq!(vim.model.ui.selected_index, Some(1));
        press(&mut vim, KeyCode::Char('k'));
        press(&mut vim, KeyCode::Char('k'));
        // Wraps to the last row
        assert_eq!(vim.model.ui.selected_index, Some(4));
        press(&mut vim, KeyCode::Char('/'));
        assert!(vim.model.ui.filter_mode);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app(false);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.model.ui.should_quit);

        let mut typing = self::app(false);
        ctrl(&mut typing, 'f');
        ctrl(&mut typing, 'c');
        assert!(typing.model.ui.should_quit);
    }
}
