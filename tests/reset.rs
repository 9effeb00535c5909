#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use zapwatch::commands::reset;
    use zapwatch::libs::config::MonitorConfig;
    use zapwatch::libs::data_storage::DataStorage;
    use zapwatch::libs::fatigue::MonitorState;
    use zapwatch::libs::monitor::RESET_MARKER_FILE;
    use zapwatch::libs::snapshot::StateSnapshot;

    struct ResetTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ResetTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ResetTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ResetTestContext)]
    #[test]
    fn test_reset_drops_marker_for_running_watcher(_ctx: &mut ResetTestContext) {
        reset::cmd().unwrap();

        let marker = DataStorage::new().get_path(RESET_MARKER_FILE).unwrap();
        assert!(marker.exists());
    }

    #[test_context(ResetTestContext)]
    #[test]
    fn test_reset_zeroes_recorded_snapshot(_ctx: &mut ResetTestContext) {
        let mut state = MonitorState::new();
        state.fatigue = 12;
        state.rest_streak = 1;
        state.api_key_invalid = true;
        StateSnapshot::capture(&state, &MonitorConfig::default()).save().unwrap();

        reset::cmd().unwrap();

        let snapshot = StateSnapshot::read().unwrap().unwrap();
        assert_eq!(snapshot.fatigue, 0);
        assert_eq!(snapshot.rest_streak, 0);
        assert_eq!(snapshot.fatigue_percent, 0.0);
        assert!(!snapshot.at_limit);
        assert!(!snapshot.token_warning);
        // The credential flag is an observation, not accounting; it survives.
        assert!(snapshot.api_key_invalid);
    }

    #[test_context(ResetTestContext)]
    #[test]
    fn test_reset_without_snapshot_is_fine(_ctx: &mut ResetTestContext) {
        assert!(reset::cmd().is_ok());
        assert!(StateSnapshot::read().unwrap().is_none());
    }
}
