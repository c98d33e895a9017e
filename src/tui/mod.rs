//! Terminal UI for time-travel tic-tac-toe.

mod app;
mod input;
mod ui;

pub use app::{App, ClickTarget, Focus};
pub use ui::{ScreenLayout, draw};

use crate::config::Settings;
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

/// Run the TUI until the user quits.
pub fn run_tui(settings: Settings) -> Result<()> {
    // Log to a file so tracing output does not draw over the board
    let log_file = std::fs::File::create(settings.log_file())
        .with_context(|| format!("Failed to create log file {}", settings.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(settings.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(ascending = settings.ascending(), "Starting time travel TUI");

    enable_raw_mode()?;
    let _guard = TerminalGuard::new(restore_terminal);
    execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;

    let res = run_app(&mut terminal, App::new(&settings));
    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    res
}

/// Restores the terminal on drop, including on early error returns.
struct TerminalGuard {
    restore: fn(),
}

impl TerminalGuard {
    fn new(restore: fn()) -> Self {
        Self { restore }
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        (self.restore)();
    }
}

/// Leaves raw mode, the alternate screen and mouse capture.
fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        cursor::Show
    ) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}

/// Draw, wait for input, apply it; repeat.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| draw(f, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let layout = ScreenLayout::new(Rect::new(0, 0, size.width, size.height));
                let entries = app.state().history().len();
                match layout.hit_test(mouse.column, mouse.row, entries) {
                    Some(target) => app.handle_click(target),
                    None => {
                        debug!(column = mouse.column, row = mouse.row, "Click outside controls")
                    }
                }
            }
            _ => {}
        }
    }

    info!(
        steps = app.state().history().len(),
        status = %app.state().status(),
        "Leaving game"
    );
    Ok(())
}
