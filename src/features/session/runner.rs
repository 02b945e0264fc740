//! Drives a workout session with per-phase countdowns.
//!
//! The runner owns the session and at most one countdown. Every transition
//! throws the old countdown away and, if the new phase is timed, mounts a
//! fresh one. Countdown completions come back through a channel tagged with
//! the phase attempt that armed them, so a completion from a phase that has
//! since been left is dropped instead of advancing the session.

use std::sync::mpsc::{self, Receiver, Sender};
use std::time::{Duration, Instant};

use serde::Serialize;

use super::machine::{Phase, Transition, WorkoutSession};
use crate::features::timer::{Clock, CountdownTimer, SystemClock, TimerSnapshot};
use crate::workout::Workout;

/// Which kind of phase a countdown belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TimedPhase {
    /// A timed set.
    Work,
    /// A rest interval.
    Rest,
}

/// Message sent by a countdown's completion callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerEvent {
    /// The countdown armed for `attempt` reached zero.
    TimerFinished { attempt: u64 },
}

/// Runner behavior switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerOptions {
    /// Let countdown completion finish the set or end the rest.
    pub auto_advance: bool,
}

impl Default for RunnerOptions {
    fn default() -> Self {
        Self { auto_advance: true }
    }
}

/// The countdown for one phase attempt.
struct PhaseTimer<C: Clock> {
    attempt: u64,
    kind: TimedPhase,
    timer: CountdownTimer<C>,
}

/// A session plus the countdown for its current phase.
pub struct Runner<C: Clock + Clone = SystemClock> {
    session: WorkoutSession,
    clock: C,
    options: RunnerOptions,
    active: Option<PhaseTimer<C>>,
    attempts: u64,
    started_at: Option<Instant>,
    finished_at: Option<Instant>,
    tx: Sender<RunnerEvent>,
    rx: Receiver<RunnerEvent>,
}

impl Runner<SystemClock> {
    /// Create a runner on the system clock.
    #[must_use]
    pub fn with_system_clock(workout: Workout, options: RunnerOptions) -> Self {
        Self::new(workout, SystemClock, options)
    }
}

impl<C: Clock + Clone + 'static> Runner<C> {
    /// Create a runner for a workout. Nothing is armed until `start`.
    #[must_use]
    pub fn new(workout: Workout, clock: C, options: RunnerOptions) -> Self {
        let (tx, rx) = mpsc::channel();
        Self {
            session: WorkoutSession::new(workout),
            clock,
            options,
            active: None,
            attempts: 0,
            started_at: None,
            finished_at: None,
            tx,
            rx,
        }
    }

    /// The underlying session.
    #[must_use]
    pub const fn session(&self) -> &WorkoutSession {
        &self.session
    }

    /// Snapshot of the active countdown, if the current phase is timed.
    #[must_use]
    pub fn timer(&self) -> Option<TimerSnapshot> {
        self.active.as_ref().map(|a| a.timer.snapshot())
    }

    /// Kind of the active countdown.
    #[must_use]
    pub fn timed_phase(&self) -> Option<TimedPhase> {
        self.active.as_ref().map(|a| a.kind)
    }

    /// Time since the workout was started, frozen once it completes.
    #[must_use]
    pub fn elapsed(&self) -> Option<Duration> {
        let started = self.started_at?;
        let end = self.finished_at.unwrap_or_else(|| self.clock.now());
        Some(end.saturating_duration_since(started))
    }

    /// Begin the workout.
    pub fn start(&mut self) -> Transition {
        let transition = self.session.start();
        if transition.is_applied() {
            self.started_at = Some(self.clock.now());
        }
        self.settle(transition)
    }

    /// Finish the current set (also skips the rest of a timed set).
    pub fn complete_set(&mut self) -> Transition {
        let transition = self.session.complete_set();
        self.settle(transition)
    }

    /// End the current rest early.
    pub fn skip_rest(&mut self) -> Transition {
        let transition = self.session.after_rest();
        self.settle(transition)
    }

    /// Start over from the first set.
    pub fn restart(&mut self) -> Transition {
        let transition = self.session.restart();
        self.started_at = None;
        self.finished_at = None;
        self.settle(transition)
    }

    /// The primary action for the current phase: start, finish the set, or
    /// skip the rest.
    pub fn advance(&mut self) -> Transition {
        match self.session.phase() {
            Phase::Idle => self.start(),
            Phase::Exercising => self.complete_set(),
            Phase::Resting => self.skip_rest(),
            Phase::Completed => Transition::Ignored,
        }
    }

    /// Pause or resume the active countdown.
    pub fn toggle_pause(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.timer.toggle();
        }
    }

    /// Pump the countdown and apply any completions.
    ///
    /// Returns the transitions that completions caused.
    pub fn poll(&mut self) -> Vec<Transition> {
        if let Some(active) = self.active.as_mut() {
            active.timer.poll();
        }

        let events: Vec<RunnerEvent> = self.rx.try_iter().collect();
        events
            .into_iter()
            .filter_map(|event| self.handle(event))
            .collect()
    }

    fn handle(&mut self, event: RunnerEvent) -> Option<Transition> {
        let RunnerEvent::TimerFinished { attempt } = event;

        let kind = match self.active.as_ref() {
            Some(active) if active.attempt == attempt => active.kind,
            _ => {
                tracing::debug!(attempt, "dropping completion from a previous phase");
                return None;
            }
        };

        if !self.options.auto_advance {
            return None;
        }

        let transition = match (kind, self.session.phase()) {
            (TimedPhase::Work, Phase::Exercising) => self.complete_set(),
            (TimedPhase::Rest, Phase::Resting) => self.skip_rest(),
            _ => Transition::Ignored,
        };
        transition.is_applied().then_some(transition)
    }

    /// Bring the countdown in line with the session after a transition.
    fn settle(&mut self, transition: Transition) -> Transition {
        if !transition.is_applied() {
            return transition;
        }

        let state = self.session.state();
        if state.phase == Phase::Resting && state.rest_duration == 0 && self.options.auto_advance {
            self.session.after_rest();
        }
        if self.session.phase() == Phase::Completed && self.finished_at.is_none() {
            self.finished_at = Some(self.clock.now());
        }

        self.remount();
        transition
    }

    fn remount(&mut self) {
        // The old countdown disarms on drop.
        self.active = None;

        let (kind, duration) = match self.session.phase() {
            Phase::Exercising => match self.session.current_timer_duration() {
                Some(duration) => (TimedPhase::Work, duration),
                None => return,
            },
            Phase::Resting => (TimedPhase::Rest, self.session.state().rest_duration),
            Phase::Idle | Phase::Completed => return,
        };

        self.attempts += 1;
        let attempt = self.attempts;

        let mut timer = CountdownTimer::new(duration, self.clock.clone());
        let tx = self.tx.clone();
        timer.set_on_complete(move || {
            tx.send(RunnerEvent::TimerFinished { attempt }).ok();
        });
        timer.start(None);

        tracing::debug!(attempt, ?kind, duration, "countdown mounted");
        self.active = Some(PhaseTimer {
            attempt,
            kind,
            timer,
        });
    }
}
