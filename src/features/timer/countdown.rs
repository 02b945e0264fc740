//! Countdown timer driven by a one-second tick.
//!
//! The tick source is a deadline that the owning loop pumps with
//! [`CountdownTimer::poll`]. At most one tick source exists per timer:
//! `start` and `resume` always drop the previous one before arming a new one,
//! and dropping the timer disarms it.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};

const TICK: Duration = Duration::from_secs(1);

/// Timer status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    /// Not started, or reset
    Idle,
    /// Counting down
    Running,
    /// Stopped mid-countdown; remaining time is kept
    Paused,
    /// Reached zero
    Finished,
}

impl fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "Idle"),
            Self::Running => write!(f, "Running"),
            Self::Paused => write!(f, "Paused"),
            Self::Finished => write!(f, "Finished"),
        }
    }
}

/// Completion callback.
pub type Callback = Box<dyn FnMut()>;

#[derive(Default)]
struct SlotState {
    callback: Option<Callback>,
    /// Bumped on every `set` or `clear`.
    generation: u64,
}

/// A shared, swappable slot holding the completion callback.
///
/// The owner can replace the callback at any time without touching the timer;
/// whatever is in the slot when the countdown reaches zero is what runs.
#[derive(Clone, Default)]
pub struct CompletionSlot(Rc<RefCell<SlotState>>);

impl CompletionSlot {
    /// Create an empty slot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a callback, replacing any previous one.
    pub fn set(&self, callback: impl FnMut() + 'static) {
        let mut state = self.0.borrow_mut();
        state.callback = Some(Box::new(callback));
        state.generation = state.generation.wrapping_add(1);
    }

    /// Remove the callback.
    pub fn clear(&self) {
        let mut state = self.0.borrow_mut();
        state.callback = None;
        state.generation = state.generation.wrapping_add(1);
    }

    /// Check whether a callback is present.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.0.borrow().callback.is_some()
    }

    /// Run the callback, if any. Returns true if one ran.
    pub fn fire(&self) -> bool {
        // Taken out for the call so the callback may set or clear the slot.
        let (taken, generation) = {
            let mut state = self.0.borrow_mut();
            (state.callback.take(), state.generation)
        };
        let Some(mut callback) = taken else {
            return false;
        };
        callback();

        let mut state = self.0.borrow_mut();
        if state.generation == generation {
            state.callback = Some(callback);
        }
        true
    }
}

impl fmt::Debug for CompletionSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompletionSlot")
            .field("set", &self.is_set())
            .finish()
    }
}

/// Read-only view of a timer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TimerSnapshot {
    /// Seconds left.
    pub time_remaining: u32,
    /// Seconds the current run started with.
    pub total_time: u32,
    /// Current status.
    pub status: TimerStatus,
    /// Fraction elapsed (0.0 - 1.0).
    pub progress: f64,
}

/// The armed tick source.
#[derive(Debug)]
struct Ticker {
    next_tick: Instant,
}

impl Ticker {
    fn arm(now: Instant) -> Self {
        Self {
            next_tick: now + TICK,
        }
    }
}

/// A countdown timer.
pub struct CountdownTimer<C: Clock = SystemClock> {
    initial_duration: u32,
    total_time: u32,
    time_remaining: u32,
    status: TimerStatus,
    clock: C,
    ticker: Option<Ticker>,
    on_complete: CompletionSlot,
}

impl<C: Clock> CountdownTimer<C> {
    /// Create an idle timer.
    #[must_use]
    pub fn new(initial_duration: u32, clock: C) -> Self {
        Self {
            initial_duration,
            total_time: initial_duration,
            time_remaining: initial_duration,
            status: TimerStatus::Idle,
            clock,
            ticker: None,
            on_complete: CompletionSlot::new(),
        }
    }

    /// Replace the completion callback.
    pub fn set_on_complete(&self, callback: impl FnMut() + 'static) {
        self.on_complete.set(callback);
    }

    /// A handle to the callback slot, for swapping the callback later.
    #[must_use]
    pub fn completion_slot(&self) -> CompletionSlot {
        self.on_complete.clone()
    }

    /// Start counting down from `duration`, or from the initial duration.
    ///
    /// Any countdown already in progress is discarded.
    pub fn start(&mut self, duration: Option<u32>) {
        self.ticker = None;
        self.total_time = duration.unwrap_or(self.initial_duration);
        self.time_remaining = self.total_time;
        self.status = TimerStatus::Running;
        self.ticker = Some(Ticker::arm(self.clock.now()));
    }

    /// Pause a running timer.
    pub fn pause(&mut self) {
        if self.status == TimerStatus::Running {
            self.ticker = None;
            self.status = TimerStatus::Paused;
        }
    }

    /// Resume a paused timer.
    pub fn resume(&mut self) {
        if self.status == TimerStatus::Paused {
            self.ticker = None;
            self.status = TimerStatus::Running;
            self.ticker = Some(Ticker::arm(self.clock.now()));
        }
    }

    /// Pause if running, resume if paused.
    pub fn toggle(&mut self) {
        match self.status {
            TimerStatus::Running => self.pause(),
            TimerStatus::Paused => self.resume(),
            TimerStatus::Idle | TimerStatus::Finished => {}
        }
    }

    /// Stop and return to the initial duration.
    pub fn reset(&mut self) {
        self.ticker = None;
        self.total_time = self.initial_duration;
        self.time_remaining = self.initial_duration;
        self.status = TimerStatus::Idle;
    }

    /// Apply every tick that is due.
    ///
    /// Returns true if the timer finished during this call.
    pub fn poll(&mut self) -> bool {
        let now = self.clock.now();
        let mut finished = false;

        while let Some(ticker) = self.ticker.as_mut() {
            if now < ticker.next_tick {
                break;
            }
            ticker.next_tick += TICK;
            finished |= self.tick();
        }

        finished
    }

    /// Count down one second. Returns true if this tick finished the timer.
    fn tick(&mut self) -> bool {
        if self.time_remaining > 1 {
            self.time_remaining -= 1;
            return false;
        }

        self.time_remaining = 0;
        self.ticker = None;
        self.status = TimerStatus::Finished;
        tracing::debug!(total = self.total_time, "countdown finished");
        self.on_complete.fire();
        true
    }

    /// Seconds left.
    #[must_use]
    pub const fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// Seconds the current run started with.
    #[must_use]
    pub const fn total_time(&self) -> u32 {
        self.total_time
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> TimerStatus {
        self.status
    }

    /// Check if the timer is counting down.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.status == TimerStatus::Running
    }

    /// Check if the timer reached zero.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == TimerStatus::Finished
    }

    /// Check if a tick source is armed.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.ticker.is_some()
    }

    /// Fraction elapsed (0.0 - 1.0); zero for a zero-length timer.
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.total_time == 0 {
            return 0.0;
        }
        f64::from(self.total_time - self.time_remaining) / f64::from(self.total_time)
    }

    /// Read-only view of the timer.
    #[must_use]
    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            time_remaining: self.time_remaining,
            total_time: self.total_time,
            status: self.status,
            progress: self.progress(),
        }
    }
}

impl<C: Clock> Drop for CountdownTimer<C> {
    fn drop(&mut self) {
        self.ticker = None;
        self.on_complete.clear();
    }
}

impl<C: Clock> fmt::Debug for CountdownTimer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CountdownTimer")
            .field("initial_duration", &self.initial_duration)
            .field("total_time", &self.total_time)
            .field("time_remaining", &self.time_remaining)
            .field("status", &self.status)
            .field("armed", &self.ticker.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::super::clock::ManualClock;
    use super::*;

    fn counting_timer(duration: u32) -> (CountdownTimer<ManualClock>, ManualClock, Rc<Cell<u32>>) {
        let clock = ManualClock::new();
        let timer = CountdownTimer::new(duration, clock.clone());
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        timer.set_on_complete(move || counter.set(counter.get() + 1));
        (timer, clock, fired)
    }

    #[test]
    fn test_timer_new() {
        let (timer, _, _) = counting_timer(30);
        assert_eq!(timer.status(), TimerStatus::Idle);
        assert!(!timer.is_finished());
        assert_eq!(timer.time_remaining(), 30);
        assert_eq!(timer.total_time(), 30);
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_run_to_completion_fires_once() {
        let (mut timer, clock, fired) = counting_timer(3);
        timer.start(None);

        for expected in [2, 1] {
            clock.advance_secs(1);
            assert!(!timer.poll());
            assert_eq!(timer.time_remaining(), expected);
            assert!(timer.is_running());
        }

        clock.advance_secs(1);
        assert!(timer.poll());
        assert_eq!(timer.time_remaining(), 0);
        assert_eq!(timer.status(), TimerStatus::Finished);
        assert!(timer.is_finished());
        assert!(!timer.is_running());
        assert_eq!(fired.get(), 1);

        clock.advance_secs(10);
        assert!(!timer.poll());
        assert_eq!(fired.get(), 1);
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_poll_catches_up_after_gap() {
        let (mut timer, clock, fired) = counting_timer(5);
        timer.start(None);

        clock.advance_secs(3);
        timer.poll();
        assert_eq!(timer.time_remaining(), 2);

        clock.advance_secs(30);
        assert!(timer.poll());
        assert_eq!(timer.time_remaining(), 0);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_no_tick_before_a_full_second() {
        let (mut timer, clock, _) = counting_timer(5);
        timer.start(None);

        clock.advance(Duration::from_millis(999));
        timer.poll();

        assert_eq!(timer.time_remaining(), 5);
    }

    #[test]
    fn test_start_with_override() {
        let (mut timer, _, _) = counting_timer(30);
        timer.start(Some(45));

        assert_eq!(timer.total_time(), 45);
        assert_eq!(timer.time_remaining(), 45);
        assert!(timer.is_running());
    }

    #[test]
    fn test_pause_resume_preserves_time() {
        let (mut timer, clock, fired) = counting_timer(10);
        timer.start(None);

        clock.advance(Duration::from_millis(1500));
        timer.poll();
        assert_eq!(timer.time_remaining(), 9);

        timer.pause();
        assert_eq!(timer.status(), TimerStatus::Paused);
        assert!(!timer.is_armed());

        clock.advance_secs(60);
        timer.poll();
        assert_eq!(timer.time_remaining(), 9);

        timer.resume();
        assert!(timer.is_running());
        assert_eq!(timer.time_remaining(), 9);
        assert_eq!(timer.total_time(), 10);

        // Cadence restarts from the resume instant
        clock.advance(Duration::from_millis(600));
        timer.poll();
        assert_eq!(timer.time_remaining(), 9);
        clock.advance(Duration::from_millis(400));
        timer.poll();
        assert_eq!(timer.time_remaining(), 8);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_pause_and_resume_are_guarded() {
        let (mut timer, _, _) = counting_timer(10);

        timer.pause();
        assert_eq!(timer.status(), TimerStatus::Idle);

        timer.start(None);
        timer.resume();
        assert!(timer.is_running());

        timer.toggle();
        assert_eq!(timer.status(), TimerStatus::Paused);
        timer.toggle();
        assert!(timer.is_running());
    }

    #[test]
    fn test_restart_discards_previous_countdown() {
        let (mut timer, clock, fired) = counting_timer(10);
        timer.start(None);
        clock.advance_secs(3);
        timer.poll();
        assert_eq!(timer.time_remaining(), 7);

        clock.advance(Duration::from_millis(700));
        timer.start(Some(5));
        assert_eq!(timer.time_remaining(), 5);

        // The old cadence would have ticked 300ms from here
        clock.advance(Duration::from_millis(500));
        timer.poll();
        assert_eq!(timer.time_remaining(), 5);

        clock.advance_secs(5);
        assert!(timer.poll());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_reset() {
        let (mut timer, clock, fired) = counting_timer(10);
        timer.start(Some(20));
        clock.advance_secs(4);
        timer.poll();

        timer.reset();

        assert_eq!(timer.status(), TimerStatus::Idle);
        assert_eq!(timer.time_remaining(), 10);
        assert_eq!(timer.total_time(), 10);
        assert!(!timer.is_armed());

        clock.advance_secs(30);
        timer.poll();
        assert_eq!(timer.time_remaining(), 10);
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_zero_duration_finishes_on_first_tick() {
        let (mut timer, clock, fired) = counting_timer(0);
        timer.start(None);
        assert!((timer.progress() - 0.0).abs() < f64::EPSILON);

        clock.advance_secs(1);
        assert!(timer.poll());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_progress() {
        let (mut timer, clock, _) = counting_timer(100);
        timer.start(None);
        assert!((timer.progress() - 0.0).abs() < f64::EPSILON);

        clock.advance_secs(50);
        timer.poll();

        assert!((timer.progress() - 0.5).abs() < 0.01);
        let snapshot = timer.snapshot();
        assert_eq!(snapshot.time_remaining, 50);
        assert_eq!(snapshot.total_time, 100);
        assert_eq!(snapshot.status, TimerStatus::Running);
    }

    #[test]
    fn test_latest_callback_fires() {
        let clock = ManualClock::new();
        let mut timer = CountdownTimer::new(1, clock.clone());
        let log = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&log);
        timer.set_on_complete(move || first.borrow_mut().push("first"));
        timer.start(None);

        let second = Rc::clone(&log);
        timer
            .completion_slot()
            .set(move || second.borrow_mut().push("second"));

        clock.advance_secs(1);
        timer.poll();

        assert_eq!(*log.borrow(), vec!["second"]);
    }

    #[test]
    fn test_drop_clears_callback() {
        let (mut timer, _, fired) = counting_timer(5);
        timer.start(None);
        let slot = timer.completion_slot();

        drop(timer);

        assert!(!slot.is_set());
        assert!(!slot.fire());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_callback_can_clear_itself() {
        let slot = CompletionSlot::new();
        let handle = slot.clone();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        slot.set(move || {
            counter.set(counter.get() + 1);
            handle.clear();
        });

        assert!(slot.fire());
        assert!(!slot.is_set());
        assert!(!slot.fire());
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_callback_can_replace_itself() {
        let slot = CompletionSlot::new();
        let handle = slot.clone();
        let log = Rc::new(RefCell::new(Vec::new()));
        let first = Rc::clone(&log);
        slot.set(move || {
            first.borrow_mut().push("first");
            let second = Rc::clone(&first);
            handle.set(move || second.borrow_mut().push("second"));
        });

        assert!(slot.fire());
        assert!(slot.fire());
        assert_eq!(*log.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_untouched_callback_stays_in_slot() {
        let slot = CompletionSlot::new();
        let fired = Rc::new(Cell::new(0));
        let counter = Rc::clone(&fired);
        slot.set(move || counter.set(counter.get() + 1));

        assert!(slot.fire());
        assert!(slot.is_set());
        assert!(slot.fire());
        assert_eq!(fired.get(), 2);
    }
}
