//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};

use crate::error::SetwiseError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start, finish the set, or skip the rest.
    Advance,
    /// Skip the current rest.
    SkipRest,
    /// Pause or resume the countdown.
    TogglePause,
    /// Start the workout over.
    Restart,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<Option<Action>, SetwiseError> {
    // Short timeout so the countdown keeps ticking between key presses
    if !event::poll(Duration::from_millis(100))
        .map_err(|e| SetwiseError::Terminal(format!("Event poll failed: {e}")))?
    {
        return Ok(None);
    }

    let Event::Key(key) = event::read()
        .map_err(|e| SetwiseError::Terminal(format!("Event read failed: {e}")))?
    else {
        return Ok(None);
    };

    if key.kind != KeyEventKind::Press {
        return Ok(None);
    }

    // Handle Ctrl+C
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(Some(Action::Quit));
    }

    let action = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char(' ') | KeyCode::Enter => Some(Action::Advance),
        KeyCode::Char('s') => Some(Action::SkipRest),
        KeyCode::Char('p') => Some(Action::TogglePause),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('?') => {
            app.show_help();
            None
        }
        _ => None,
    };

    Ok(action)
}
