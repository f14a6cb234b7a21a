//! Terminal storefront
//!
//! Single-threaded event loop: input is polled every 100 ms (sooner when a
//! handed-off order is about to complete) and the pending reset is fired
//! from the same loop, so key handling never waits on the handoff delay.

pub mod app;
pub mod ui;

pub use app::{App, Focus, InputMode};

use crossterm::{
    event, execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;
use shared::{AppError, AppResult, ErrorCode};
use std::io::{self, Stdout};
use std::time::Duration;
use tokio::time::Instant;

const TICK: Duration = Duration::from_millis(100);

fn terminal_error(err: io::Error) -> AppError {
    AppError::with_message(ErrorCode::TerminalError, err.to_string())
}

/// Take over the terminal, run the storefront until the user quits, restore
pub fn run(app: &mut App) -> AppResult<()> {
    enable_raw_mode().map_err(terminal_error)?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(terminal_error)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(terminal_error)?;

    tracing::info!("Storefront ready, press 'q' to quit");
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode().map_err(terminal_error)?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).map_err(terminal_error)?;
    terminal.show_cursor().map_err(terminal_error)?;

    res.map_err(terminal_error)
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::ui(f, app))?;

        let timeout = app
            .pending
            .as_ref()
            .map(|p| p.deadline.saturating_duration_since(Instant::now()).min(TICK))
            .unwrap_or(TICK);
        if event::poll(timeout)? {
            app.handle_event(&event::read()?);
        }

        app.tick(Instant::now());

        if app.should_quit {
            if app.pending.is_some() {
                tracing::debug!("Exiting before the pending reset");
            }
            return Ok(());
        }
    }
}
