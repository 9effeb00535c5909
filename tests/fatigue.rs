#[cfg(test)]
mod tests {
    use zapwatch::libs::config::MonitorConfig;
    use zapwatch::libs::fatigue::{apply_minute, MinuteUpdate, MonitorState, ACTIVE_MINUTE_THRESHOLD};

    fn config(work_limit: u64, break_limit: u64) -> MonitorConfig {
        MonitorConfig { work_limit, break_limit }
    }

    #[test]
    fn test_fold_zero_seconds_is_noop() {
        let mut state = MonitorState::new();
        let updates = state.fold_sample(0, 0);
        assert!(updates.is_empty());
        assert_eq!(state.seconds_in_window, 0);
        assert_eq!(state.active_seconds_in_window, 0);
    }

    #[test]
    fn test_fold_partial_window_produces_no_update() {
        let mut state = MonitorState::new();
        for _ in 0..59 {
            assert!(state.fold_sample(1, 0).is_empty());
        }
        assert_eq!(state.seconds_in_window, 59);
        assert_eq!(state.active_seconds_in_window, 59);
    }

    #[test]
    fn test_fold_closes_window_at_sixty_seconds() {
        let mut state = MonitorState::new();
        for _ in 0..59 {
            state.fold_sample(1, 0);
        }
        let updates = state.fold_sample(1, 0);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].active_seconds, 60);
        // Both window counters restart after the close.
        assert_eq!(state.seconds_in_window, 0);
        assert_eq!(state.active_seconds_in_window, 0);
    }

    #[test]
    fn test_fold_gap_closes_multiple_windows() {
        // One active second observed, 184 missed seconds credited as
        // inactive: 185 total closes three windows and leaves 5 seconds.
        let mut state = MonitorState::new();
        let updates = state.fold_sample(1, 184);
        assert_eq!(updates.len(), 3);
        assert_eq!(updates[0].active_seconds, 1);
        assert_eq!(updates[1].active_seconds, 0);
        assert_eq!(updates[2].active_seconds, 0);
        assert_eq!(state.seconds_in_window, 5);
        assert_eq!(state.active_seconds_in_window, 0);
    }

    #[test]
    fn test_fold_gap_preserves_window_alignment() {
        // 125 seconds on top of an empty window: two closes plus a
        // 5-second partial, never a wall-clock-aligned boundary.
        let mut state = MonitorState::new();
        let updates = state.fold_sample(1, 124);
        assert_eq!(updates.len(), 2);
        assert_eq!(state.seconds_in_window, 5);
    }

    #[test]
    fn test_fold_active_second_lands_in_current_window() {
        let mut state = MonitorState::new();
        state.fold_sample(0, 59);
        let updates = state.fold_sample(1, 0);
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].active_seconds, 1);
    }

    #[test]
    fn test_active_minute_increments_fatigue_and_resets_streak() {
        let mut state = MonitorState::new();
        state.rest_streak = 3;
        let verdict = apply_minute(
            &mut state,
            &config(45, 5),
            &MinuteUpdate {
                active_seconds: ACTIVE_MINUTE_THRESHOLD,
            },
        );
        assert_eq!(state.fatigue, 1);
        assert_eq!(state.rest_streak, 0);
        assert!(!verdict.was_at_limit);
        assert!(!verdict.is_at_limit);
    }

    #[test]
    fn test_minute_below_threshold_is_rest() {
        let mut state = MonitorState::new();
        state.fatigue = 5;
        apply_minute(
            &mut state,
            &config(45, 99),
            &MinuteUpdate {
                active_seconds: ACTIVE_MINUTE_THRESHOLD - 1,
            },
        );
        assert_eq!(state.fatigue, 4);
        assert_eq!(state.rest_streak, 1);
    }

    #[test]
    fn test_fatigue_never_goes_negative() {
        let mut state = MonitorState::new();
        for _ in 0..3 {
            apply_minute(&mut state, &config(45, 99), &MinuteUpdate { active_seconds: 0 });
        }
        assert_eq!(state.fatigue, 0);
        assert_eq!(state.rest_streak, 3);
    }

    #[test]
    fn test_break_limit_zeroes_fatigue_in_same_update() {
        let mut state = MonitorState::new();
        state.fatigue = 10;
        state.rest_streak = 2;
        let verdict = apply_minute(&mut state, &config(45, 3), &MinuteUpdate { active_seconds: 0 });
        // The streak reached the break limit within this update, so the
        // full recovery happens here, not on the next minute.
        assert_eq!(state.rest_streak, 3);
        assert_eq!(state.fatigue, 0);
        assert!(!verdict.is_at_limit);
    }

    #[test]
    fn test_limit_crossing_reported_in_verdict() {
        let mut state = MonitorState::new();
        let cfg = config(10, 5);
        let update = MinuteUpdate { active_seconds: 60 };

        for minute in 1..=10 {
            let verdict = apply_minute(&mut state, &cfg, &update);
            if minute < 10 {
                assert!(!verdict.is_at_limit, "minute {} should be below the limit", minute);
            } else {
                assert!(!verdict.was_at_limit);
                assert!(verdict.is_at_limit);
            }
        }
        assert_eq!(state.fatigue, 10);
    }

    #[test]
    fn test_fatigue_can_exceed_limit() {
        let mut state = MonitorState::new();
        let cfg = config(2, 5);
        let update = MinuteUpdate { active_seconds: 60 };

        for _ in 0..3 {
            apply_minute(&mut state, &cfg, &update);
        }
        let verdict = apply_minute(&mut state, &cfg, &update);
        assert_eq!(state.fatigue, 4);
        assert!(verdict.was_at_limit);
        assert!(verdict.is_at_limit);
    }

    #[test]
    fn test_fatigue_percent_relative_to_limit() {
        let mut state = MonitorState::new();
        state.fatigue = 9;
        assert_eq!(state.fatigue_percent(&config(45, 5)), 20.0);
        // Unclamped above the limit.
        state.fatigue = 90;
        assert_eq!(state.fatigue_percent(&config(45, 5)), 200.0);
    }

    #[test]
    fn test_out_of_range_limits_are_clamped_by_accounting() {
        // A hand-edited zero work limit acts as one, so apply_minute
        // can never divide by zero or loop forever.
        let mut state = MonitorState::new();
        let cfg = config(0, 0);
        let verdict = apply_minute(&mut state, &cfg, &MinuteUpdate { active_seconds: 60 });
        assert_eq!(state.fatigue, 1);
        assert!(verdict.is_at_limit);
        assert!(state.at_limit(&cfg));
    }

    #[test]
    fn test_reset_preserves_monitoring_and_credential_flag() {
        let mut state = MonitorState::new();
        state.fatigue = 12;
        state.rest_streak = 2;
        state.seconds_in_window = 30;
        state.active_seconds_in_window = 15;
        state.last_alert_at = Some(1_000);
        state.monitoring = true;
        state.api_key_invalid = true;

        state.reset();

        assert_eq!(state.fatigue, 0);
        assert_eq!(state.rest_streak, 0);
        assert_eq!(state.seconds_in_window, 0);
        assert_eq!(state.active_seconds_in_window, 0);
        assert_eq!(state.last_alert_at, None);
        assert!(state.monitoring);
        assert!(state.api_key_invalid);
    }
}
