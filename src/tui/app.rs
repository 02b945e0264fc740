//! Application state for the TUI.

use crate::config::RunnerConfig;
use crate::features::session::{Phase, Runner, Transition};
use crate::workout::Workout;

/// Application state.
pub struct App {
    /// Session runner.
    pub runner: Runner,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether to show exercise tips.
    pub show_tips: bool,
    /// Whether to ring the bell on phase changes.
    bell: bool,
    /// A bell is due on the next frame.
    pending_bell: bool,
}

impl App {
    /// Create a new app instance.
    #[must_use]
    pub fn new(workout: Workout, config: &RunnerConfig) -> Self {
        Self {
            runner: Runner::with_system_clock(workout, config.runner_options()),
            status: Some("Press space to start, ? for help".to_string()),
            show_tips: config.show_tips,
            bell: config.bell,
            pending_bell: false,
        }
    }

    /// Pump the countdown.
    pub fn tick(&mut self) {
        for transition in self.runner.poll() {
            self.announce(transition);
        }
    }

    /// Start, finish the set, or skip the rest.
    pub fn advance(&mut self) {
        let transition = self.runner.advance();
        if transition == Transition::Ignored && self.is_stuck() {
            self.status = Some(
                "No exercise here. Check the workout file, then r to restart or q to quit"
                    .to_string(),
            );
            return;
        }
        self.announce(transition);
    }

    /// Exercising with nothing to exercise, e.g. an empty section.
    fn is_stuck(&self) -> bool {
        let session = self.runner.session();
        session.phase() == Phase::Exercising && session.current_exercise().is_none()
    }

    /// Skip the current rest.
    pub fn skip_rest(&mut self) {
        let transition = self.runner.skip_rest();
        self.announce(transition);
    }

    /// Pause or resume the countdown.
    pub fn toggle_pause(&mut self) {
        self.runner.toggle_pause();
    }

    /// Start the workout over.
    pub fn restart(&mut self) {
        let transition = self.runner.restart();
        self.announce(transition);
    }

    /// Show the key help in the status bar.
    pub fn show_help(&mut self) {
        self.status = Some(
            "space:start/done/skip | s:skip rest | p:pause | r:restart | q:quit".to_string(),
        );
    }

    /// Take the pending bell, if any.
    pub fn take_bell(&mut self) -> bool {
        std::mem::take(&mut self.pending_bell)
    }

    fn announce(&mut self, transition: Transition) {
        let message = match transition {
            Transition::Started => "Let's go!",
            Transition::NextSet => "Set done. Rest up.",
            Transition::NextExercise => "Exercise done. Rest up.",
            Transition::NextSection => "Section complete!",
            Transition::Finished => "Workout complete!",
            Transition::Resumed => "Back to work.",
            Transition::Restarted => "Restarted. Press space to start.",
            Transition::Ignored => return,
        };

        self.status = Some(message.to_string());
        if self.bell && transition != Transition::Restarted {
            self.pending_bell = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workout::WorkoutLibrary;

    fn app(config: &RunnerConfig) -> App {
        let library = WorkoutLibrary::bundled().unwrap();
        App::new(library.find("full-body").unwrap().clone(), config)
    }

    #[test]
    fn test_advance_announces_and_rings() {
        let mut app = app(&RunnerConfig::default());
        assert!(!app.take_bell());

        app.advance();
        assert_eq!(app.runner.session().phase(), Phase::Exercising);
        assert_eq!(app.status.as_deref(), Some("Let's go!"));
        assert!(app.take_bell());
        assert!(!app.take_bell());
    }

    #[test]
    fn test_ignored_transition_keeps_status() {
        let mut app = app(&RunnerConfig::default());
        app.show_help();
        app.skip_rest();

        assert!(app.status.as_deref().unwrap_or_default().contains("q:quit"));
        assert!(!app.take_bell());
    }

    #[test]
    fn test_bell_disabled() {
        let config = RunnerConfig {
            bell: false,
            ..RunnerConfig::default()
        };
        let mut app = app(&config);
        app.advance();
        assert!(!app.take_bell());
    }

    #[test]
    fn test_restart() {
        let mut app = app(&RunnerConfig::default());
        app.advance();
        app.advance();
        app.restart();

        assert_eq!(app.runner.session().phase(), Phase::Idle);
        assert!(app.runner.timer().is_none());
    }

    #[test]
    fn test_empty_section_explains_stall() {
        let workout = Workout {
            id: "gap".to_string(),
            name: "Gap".to_string(),
            description: None,
            sections: vec![crate::workout::Section {
                id: "empty".to_string(),
                name: "Empty".to_string(),
                exercises: vec![],
            }],
        };
        let mut app = App::new(workout, &RunnerConfig::default());
        app.advance();
        assert_eq!(app.runner.session().phase(), Phase::Exercising);

        app.advance();
        assert!(app
            .status
            .as_deref()
            .unwrap_or_default()
            .contains("No exercise here"));
    }
}
