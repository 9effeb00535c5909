//! Persisted view of the monitor state for out-of-process observers.
//!
//! The watcher writes a small JSON snapshot on every minute update and on
//! lifecycle changes (start, stop, reset). The `status` command reads it
//! back, so observing fatigue never requires talking to the running
//! process. This is presentation state, not accounting state: the watcher
//! never reads it back into its own counters.

use crate::libs::config::MonitorConfig;
use crate::libs::data_storage::DataStorage;
use crate::libs::fatigue::MonitorState;
use anyhow::Result;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fs;

/// File name of the state snapshot in the data directory.
pub const STATE_FILE_NAME: &str = "state.json";

/// Externally observable monitor state.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StateSnapshot {
    /// Active minutes of fatigue accrued since the last reset.
    pub fatigue: u32,
    /// Consecutive rest minutes.
    pub rest_streak: u32,
    /// Fatigue relative to the work limit, in percent (may exceed 100).
    pub fatigue_percent: f64,
    /// Whether fatigue is at or over the work limit.
    pub at_limit: bool,
    /// Sticky invalid-credential flag.
    pub api_key_invalid: bool,
    /// Warning flag: credential invalid AND fatigue at limit.
    pub token_warning: bool,
    /// Whether the watcher was folding ticks when this was written.
    pub monitoring: bool,
    /// Local time of the write.
    pub updated_at: NaiveDateTime,
}

impl StateSnapshot {
    /// Captures the current monitor state against the given limits.
    pub fn capture(state: &MonitorState, config: &MonitorConfig) -> Self {
        let at_limit = state.at_limit(config);
        StateSnapshot {
            fatigue: state.fatigue,
            rest_streak: state.rest_streak,
            fatigue_percent: state.fatigue_percent(config),
            at_limit,
            api_key_invalid: state.api_key_invalid,
            token_warning: at_limit && state.api_key_invalid,
            monitoring: state.monitoring,
            updated_at: chrono::Local::now().naive_local(),
        }
    }

    /// Writes the snapshot to the data directory.
    pub fn save(&self) -> Result<()> {
        let path = DataStorage::new().get_path(STATE_FILE_NAME)?;
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    /// Reads the last written snapshot, `None` if the watcher never ran.
    pub fn read() -> Result<Option<Self>> {
        let path = DataStorage::new().get_path(STATE_FILE_NAME)?;
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&raw)?))
    }
}
