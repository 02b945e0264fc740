//! Terminal User Interface (TUI) for setwise.
//!
//! The interactive workout runner. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::RunnerConfig;
use crate::error::SetwiseError;
use crate::workout::Workout;

/// Run the workout runner.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(workout: Workout, config: &RunnerConfig) -> Result<(), SetwiseError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| SetwiseError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)
        .map_err(|e| SetwiseError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| SetwiseError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(workout, config);
    let result = run_app(&mut terminal, &mut app);

    // Dropping the app disarms any running countdown
    drop(app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend + io::Write>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), SetwiseError> {
    loop {
        app.tick();

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| SetwiseError::Terminal(format!("Failed to draw: {e}")))?;

        if app.take_bell() {
            execute!(terminal.backend_mut(), Print('\x07')).ok();
        }

        // Handle events
        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
                event::Action::Advance => app.advance(),
                event::Action::SkipRest => app.skip_rest(),
                event::Action::TogglePause => app.toggle_pause(),
                event::Action::Restart => app.restart(),
            }
        }
    }

    Ok(())
}
