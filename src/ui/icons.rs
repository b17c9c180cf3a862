use ratatui::{
    style::{Color, Style},
    text::Span,
};

/// Icon display mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconMode {
    Emoji,    // Standard emoji icons (📁, 📄)
    NerdFont, // Nerd Fonts icons (U+E5FF, etc.)
}

impl IconMode {
    /// Parse the `icon_mode` config value, defaulting to Nerd Font
    pub fn from_config(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "emoji" => IconMode::Emoji,
            _ => IconMode::NerdFont,
        }
    }
}

/// Icon theme using terminal colors (respects user's terminal theme)
#[derive(Debug, Clone)]
pub struct IconTheme {
    pub folder_color: Color,
    pub file_color: Color,
    /// Highlight for the active sort arrow
    pub active_sort_color: Color,
    pub inactive_sort_color: Color,
}

impl Default for IconTheme {
    fn default() -> Self {
        Self {
            folder_color: Color::Blue,
            file_color: Color::Cyan,
            active_sort_color: Color::Yellow,
            inactive_sort_color: Color::DarkGray,
        }
    }
}

/// Icon renderer that handles both emoji and Nerd Font modes
#[derive(Debug, Clone)]
pub struct IconRenderer {
    mode: IconMode,
    theme: IconTheme,
}

impl IconRenderer {
    pub fn new(mode: IconMode, theme: IconTheme) -> Self {
        Self { mode, theme }
    }

    /// Row icon: folder or file
    pub fn entry_icon(&self, is_folder: bool) -> Span<'static> {
        if is_folder {
            self.folder_icon()
        } else {
            self.file_icon()
        }
    }

    /// Header icon above the icon column
    pub fn column_icon(&self) -> Span<'static> {
        match self.mode {
            IconMode::Emoji => Span::raw("🗎"),
            IconMode::NerdFont => Span::raw("\u{F016}"),
        }
    }

    /// Sort arrow for a header control, highlighted when active
    pub fn sort_arrow(&self, ascending: bool, active: bool) -> Span<'static> {
        let symbol = if ascending { "▲" } else { "▼" };
        let color = if active {
            self.theme.active_sort_color
        } else {
            self.theme.inactive_sort_color
        };
        Span::styled(symbol, Style::default().fg(color))
    }

    fn folder_icon(&self) -> Span<'static> {
        match self.mode {
            IconMode::Emoji => Span::styled("📁", Style::default().fg(self.theme.folder_color)),
            IconMode::NerdFont => {
                Span::styled("\u{E5FF}", Style::default().fg(self.theme.folder_color))
            }
        }
    }

    fn file_icon(&self) -> Span<'static> {
        match self.mode {
            IconMode::Emoji => Span::styled("📄", Style::default().fg(self.theme.file_color)),
            IconMode::NerdFont => {
                Span::styled("\u{F15B}", Style::default().fg(self.theme.file_color))
            }
        }
    }
}
