//! Alert admission policy and outcome transitions.
//!
//! Decides, per closed minute, whether a stimulus is due and keeps the
//! once-per-minute safety throttle. The decision is pure; the monitor loop
//! records the throttle timestamp and performs the actual dispatch.
//!
//! ## Admission Paths
//!
//! 1. **Crossing edge**: the very minute fatigue reaches the work limit,
//!    regardless of how active that minute was.
//! 2. **Repeat-at-limit**: already at or over the limit, and the closed
//!    minute was fully active (all 60 seconds). A minute padded by a large
//!    idle gap never re-arms the repeat path, so a burst of missed-tick
//!    seconds cannot be misread as sustained activity.
//!
//! Either way the alert is suppressed unless more than
//! [`ALERT_THROTTLE_MS`] elapsed since the last dispatch.

use crate::api::pavlok::AlertOutcome;
use crate::libs::fatigue::{MinuteVerdict, MonitorState};

/// Minimum spacing between two alert dispatches, in milliseconds.
pub const ALERT_THROTTLE_MS: i64 = 60_000;

/// Active seconds required for a minute to count as fully active.
pub const FULL_MINUTE_SECONDS: u32 = 60;

/// Decides whether the minute just closed warrants an alert.
pub fn should_alert(verdict: &MinuteVerdict, now_ms: i64, last_alert_at: Option<i64>) -> bool {
    if !verdict.is_at_limit {
        return false;
    }

    let crossed_limit_now = !verdict.was_at_limit;
    let can_repeat_at_limit = verdict.was_at_limit && verdict.minute_active_seconds >= FULL_MINUTE_SECONDS;
    if !crossed_limit_now && !can_repeat_at_limit {
        return false;
    }

    match last_alert_at {
        Some(at) => now_ms - at > ALERT_THROTTLE_MS,
        None => true,
    }
}

/// Applies a delivery outcome to the sticky credential flag.
///
/// A successful acknowledgement clears `api_key_invalid`, an auth rejection
/// sets it, and any other channel failure leaves state untouched (it is
/// surfaced for observability only).
pub fn note_outcome(state: &mut MonitorState, outcome: &AlertOutcome) {
    match outcome {
        AlertOutcome::Sent => state.api_key_invalid = false,
        AlertOutcome::Unauthorized => state.api_key_invalid = true,
        AlertOutcome::Failed(_) => {}
    }
}
