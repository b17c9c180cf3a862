use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{io, path::PathBuf, time::Duration};
use tracing::{debug, info};

use docbrowse::config::{get_config_path, Config};
use docbrowse::data::{load_tree, sample_documents};
use docbrowse::model::{BrowserState, Entry};
use docbrowse::ui::icons::{IconMode, IconRenderer, IconTheme};
use docbrowse::{handlers, ui, App};

/// Terminal document browser
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <temp dir>/docbrowse-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, / to filter)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// YAML or JSON document tree to browse instead of the sample data
    #[arg(short, long)]
    tree: Option<PathBuf>,
}

const POLL_INTERVAL: Duration = Duration::from_millis(250);

fn main() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse();

    if args.debug {
        let log_path = docbrowse::utils::init_debug_logging()?;
        info!("Debug mode enabled, logging to {}", log_path.display());
    }

    // Load configuration; no file means defaults
    let mut config = match get_config_path(args.config.as_deref())? {
        Some(path) => {
            debug!("Loading config from: {:?}", path);
            Config::load(&path)?
        }
        None => {
            debug!("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }

    let tree = resolve_tree(args.tree.as_ref().or(config.tree_path.as_ref()))?;
    let browser = BrowserState::with_sort(tree, config.default_sort);
    let icon_renderer = IconRenderer::new(IconMode::from_config(&config.icon_mode), IconTheme::default());
    let mut app = App::new(browser, config.vim_mode, icon_renderer);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

/// The tree file from the CLI or config, else the built-in sample
fn resolve_tree(path: Option<&PathBuf>) -> Result<Vec<Entry>> {
    match path {
        Some(path) => {
            let tree = load_tree(path)?;
            info!("Loaded {} root entries from {}", tree.len(), path.display());
            Ok(tree)
        }
        None => Ok(sample_documents()),
    }
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Always render (Elm Architecture approach)
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                // Ignore release/repeat events reported by some terminals
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handlers::handle_key(app, key);
                }
                Event::Resize(width, height) => debug!("resize to {}x{}", width, height),
                _ => {}
            }
        }
    }

    Ok(())
}
