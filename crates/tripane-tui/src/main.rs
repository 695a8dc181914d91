//! tripane, a three-pane terminal file browser built with ratatui.
//!
//! This binary initialises the terminal, runs the main event loop,
//! and restores the terminal on exit or panic.

mod app;
mod input;
mod render;
mod ui;

use std::io;
use std::panic;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tripane_core::config::{config_dir, ConfigSet};

use crate::app::App;
use crate::input::handle_key;
use crate::render::render;

const LOG_FILE: &str = "tripane.log";
const LOG_ENV: &str = "TRIPANE_LOG";

fn setup_terminal() -> anyhow::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Logs to a file in the temp directory so output never mixes with the UI.
///
/// The filter comes from `TRIPANE_LOG` (e.g. `TRIPANE_LOG=debug`).
fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE);
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
    {
        Ok(file) => file,
        Err(e) => {
            eprintln!("logging disabled: cannot open {}: {e}", path.display());
            return;
        }
    };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
}

/// Picks the starting folder: CLI argument, then `general.start_dir`,
/// then `$HOME`, then `/`.
fn resolve_start_dir(arg: Option<PathBuf>, configured: Option<&Path>) -> PathBuf {
    let dir = arg
        .or_else(|| configured.map(Path::to_path_buf))
        .or_else(|| std::env::var_os("HOME").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("/"));
    dir.canonicalize().unwrap_or(dir)
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let configs = config_dir()
        .map(|dir| ConfigSet::load(&dir))
        .unwrap_or_default();
    let start_dir = resolve_start_dir(
        std::env::args().nth(1).map(PathBuf::from),
        configs.config.general.start_dir.as_deref(),
    );

    // Fail before touching the terminal if the start folder is unusable.
    let app = App::new(&start_dir, &configs)?;
    tracing::info!(start = %start_dir.display(), "tripane started");

    install_panic_hook();
    let mut terminal = setup_terminal()?;

    let result = run_app(&mut terminal, app);

    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: App) -> anyhow::Result<()> {
    let mut app = app;

    loop {
        terminal.draw(|f| render(f, &app))?;

        if app.should_quit() {
            tracing::info!("tripane exiting");
            break;
        }

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            let action = handle_key(key, &app.mode(), app.keymap());
            app = app.apply(action);
        }
    }

    Ok(())
}
