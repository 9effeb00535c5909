#[cfg(test)]
mod tests {
    use zapwatch::api::pavlok::AlertOutcome;
    use zapwatch::libs::alert::{note_outcome, should_alert, ALERT_THROTTLE_MS};
    use zapwatch::libs::fatigue::{MinuteVerdict, MonitorState};

    fn verdict(was_at_limit: bool, is_at_limit: bool, minute_active_seconds: u32) -> MinuteVerdict {
        MinuteVerdict {
            minute_active_seconds,
            was_at_limit,
            is_at_limit,
        }
    }

    #[test]
    fn test_crossing_edge_fires_without_prior_alert() {
        assert!(should_alert(&verdict(false, true, 60), 1_000_000, None));
    }

    #[test]
    fn test_crossing_edge_fires_regardless_of_minute_activity() {
        // The crossing minute itself may be barely active; the edge alone
        // admits the alert.
        assert!(should_alert(&verdict(false, true, 10), 1_000_000, None));
        assert!(should_alert(&verdict(false, true, 0), 1_000_000, None));
    }

    #[test]
    fn test_repeat_requires_fully_active_minute() {
        let now = 1_000_000;
        assert!(should_alert(&verdict(true, true, 60), now, None));
        // A 45-second minute at the limit does not re-arm the alert.
        assert!(!should_alert(&verdict(true, true, 45), now, None));
        assert!(!should_alert(&verdict(true, true, 0), now, None));
    }

    #[test]
    fn test_below_limit_never_fires() {
        assert!(!should_alert(&verdict(false, false, 60), 1_000_000, None));
        // Fatigue dropped back below the limit this minute.
        assert!(!should_alert(&verdict(true, false, 60), 1_000_000, None));
    }

    #[test]
    fn test_throttle_is_strictly_more_than_one_minute() {
        let last = 1_000_000;
        let v = verdict(false, true, 60);
        // Exactly the throttle spacing is still suppressed.
        assert!(!should_alert(&v, last + ALERT_THROTTLE_MS, Some(last)));
        assert!(!should_alert(&v, last + 30_000, Some(last)));
        assert!(should_alert(&v, last + ALERT_THROTTLE_MS + 1, Some(last)));
    }

    #[test]
    fn test_throttle_applies_to_repeat_path_too() {
        let last = 1_000_000;
        let v = verdict(true, true, 60);
        assert!(!should_alert(&v, last + 60_000, Some(last)));
        assert!(should_alert(&v, last + 120_000, Some(last)));
    }

    #[test]
    fn test_outcome_transitions_on_credential_flag() {
        let mut state = MonitorState::new();

        note_outcome(&mut state, &AlertOutcome::Unauthorized);
        assert!(state.api_key_invalid);

        // Unrelated HTTP failures leave the flag untouched.
        note_outcome(&mut state, &AlertOutcome::Failed(500));
        assert!(state.api_key_invalid);

        note_outcome(&mut state, &AlertOutcome::Sent);
        assert!(!state.api_key_invalid);

        note_outcome(&mut state, &AlertOutcome::Failed(429));
        assert!(!state.api_key_invalid);
    }
}
