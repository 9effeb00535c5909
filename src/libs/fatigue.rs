//! Fatigue accounting core: minute accumulator and fatigue state machine.
//!
//! This module holds the pure temporal logic of the application. It knows
//! nothing about timers, input devices or HTTP; the monitor loop feeds it
//! per-tick second counts and it answers with closed-minute events and
//! verdicts that the alert policy consumes.
//!
//! ## Accounting Model
//!
//! Seconds are folded into a rolling 60-second window. The fold is a plain
//! integer bucket-fill rather than wall-clock modulo arithmetic, so window
//! boundaries stay aligned to accumulated seconds even across process
//! suspension or laptop sleep:
//!
//! ```text
//! fold(active, inactive)
//!   -> advance by min(remaining, 60 - seconds_in_window) per step
//!   -> each time the window reaches 60, emit one MinuteUpdate and reset
//! ```
//!
//! A single fold may legitimately close several windows (a 125-second gap
//! closes two minutes and leaves a 5-second partial window).
//!
//! ## Fatigue Rule
//!
//! A closed minute with at least [`ACTIVE_MINUTE_THRESHOLD`] active seconds
//! counts as an active minute: fatigue rises by one and the rest streak
//! resets. Any other minute is a rest minute: fatigue falls by one (floored
//! at zero) and the rest streak grows. A rest streak reaching the configured
//! break limit zeroes fatigue within the same update.

use crate::libs::config::MonitorConfig;

/// Active seconds required for a closed minute to count as an active minute.
pub const ACTIVE_MINUTE_THRESHOLD: u32 = 10;

/// Length of the rolling accounting window in seconds.
pub const WINDOW_SECONDS: u32 = 60;

/// A closed 60-second window, carrying the active seconds it accumulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteUpdate {
    /// Seconds with user activity inside the window that just closed.
    pub active_seconds: u32,
}

/// Result of applying one minute update to the fatigue state.
///
/// The at-limit flags are evaluated against the live work limit before and
/// after the mutation; the alert policy needs both to distinguish the
/// crossing edge from repeat-at-limit minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinuteVerdict {
    /// Active seconds of the minute that was applied.
    pub minute_active_seconds: u32,
    /// Whether fatigue was already at or over the work limit before the update.
    pub was_at_limit: bool,
    /// Whether fatigue is at or over the work limit after the update.
    pub is_at_limit: bool,
}

/// Mutable state owned by the monitoring loop.
///
/// Created zeroed at process start, mutated only by [`MonitorState::fold_sample`],
/// [`apply_minute`] and the alert outcome transitions, and reinitialized in
/// place on reset. Never destroyed mid-process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorState {
    /// Count of active minutes accrued since the last full reset.
    pub fatigue: u32,
    /// Count of consecutive rest minutes.
    pub rest_streak: u32,
    /// Seconds with activity accumulated in the current unclosed window.
    pub active_seconds_in_window: u32,
    /// Total seconds elapsed in the current unclosed window.
    pub seconds_in_window: u32,
    /// Millisecond timestamp of the last dispatched alert, `None` for never.
    pub last_alert_at: Option<i64>,
    /// Whether the tick loop is currently folding samples into this state.
    pub monitoring: bool,
    /// Sticky flag set when the alert channel reports an auth failure.
    pub api_key_invalid: bool,
}

impl Default for MonitorState {
    fn default() -> Self {
        Self::new()
    }
}

impl MonitorState {
    /// Creates a fresh zeroed state.
    pub fn new() -> Self {
        MonitorState {
            fatigue: 0,
            rest_streak: 0,
            active_seconds_in_window: 0,
            seconds_in_window: 0,
            last_alert_at: None,
            monitoring: false,
            api_key_invalid: false,
        }
    }

    /// Reinitializes the fatigue accounting in place.
    ///
    /// `monitoring` and `api_key_invalid` survive the reset: resetting
    /// fatigue neither stops the watcher nor vouches for the credential.
    pub fn reset(&mut self) {
        self.fatigue = 0;
        self.rest_streak = 0;
        self.active_seconds_in_window = 0;
        self.seconds_in_window = 0;
        self.last_alert_at = None;
    }

    /// Discards the current partial window without touching fatigue.
    ///
    /// Used when monitoring resumes after a stop, so the gap is not
    /// misread as idle time.
    pub fn clear_window(&mut self) {
        self.active_seconds_in_window = 0;
        self.seconds_in_window = 0;
    }

    /// Folds one tick's worth of seconds into the rolling window.
    ///
    /// `active_seconds` is credited to the current window once; the total
    /// (`active + inactive`) is then consumed toward successive 60-second
    /// boundaries. Every boundary crossed produces one [`MinuteUpdate`]
    /// carrying the closing window's active seconds, after which both window
    /// counters restart at zero. A zero total is a no-op.
    pub fn fold_sample(&mut self, active_seconds: u32, inactive_seconds: u32) -> Vec<MinuteUpdate> {
        let total_seconds = active_seconds + inactive_seconds;
        let mut updates = Vec::new();
        if total_seconds == 0 {
            return updates;
        }

        self.active_seconds_in_window += active_seconds;

        let mut remaining = total_seconds;
        while remaining > 0 {
            let to_boundary = WINDOW_SECONDS - self.seconds_in_window;
            let step = remaining.min(to_boundary);
            self.seconds_in_window += step;
            remaining -= step;

            if self.seconds_in_window >= WINDOW_SECONDS {
                updates.push(MinuteUpdate {
                    active_seconds: self.active_seconds_in_window,
                });
                self.active_seconds_in_window = 0;
                self.seconds_in_window = 0;
            }
        }

        updates
    }

    /// Current fatigue percentage relative to the given work limit.
    ///
    /// Unclamped: internal fatigue may exceed the limit, so values above
    /// 100 are possible and left to the presentation layer to cap.
    pub fn fatigue_percent(&self, config: &MonitorConfig) -> f64 {
        (self.fatigue as f64 / config.work_limit() as f64) * 100.0
    }

    /// Whether fatigue is at or over the configured work limit.
    pub fn at_limit(&self, config: &MonitorConfig) -> bool {
        self.fatigue as u64 >= config.work_limit()
    }
}

/// Applies one closed minute to the fatigue state.
///
/// Limits are read from the live configuration at call time, not cached,
/// so a user edit takes effect on the next minute update.
pub fn apply_minute(state: &mut MonitorState, config: &MonitorConfig, update: &MinuteUpdate) -> MinuteVerdict {
    let work_limit = config.work_limit() as u32;
    let break_limit = config.break_limit() as u32;

    let was_at_limit = state.fatigue >= work_limit;

    if update.active_seconds >= ACTIVE_MINUTE_THRESHOLD {
        state.fatigue += 1;
        state.rest_streak = 0;
    } else {
        if state.fatigue > 0 {
            state.fatigue -= 1;
        }
        state.rest_streak += 1;
    }

    // Full recovery after a sufficient rest streak, in the same update.
    if state.rest_streak >= break_limit {
        state.fatigue = 0;
    }

    let is_at_limit = state.fatigue >= work_limit;

    MinuteVerdict {
        minute_active_seconds: update.active_seconds,
        was_at_limit,
        is_at_limit,
    }
}
