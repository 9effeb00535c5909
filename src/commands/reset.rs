//! Reset command: zeroes the fatigue accounting.
//!
//! A running watcher is signalled through a marker file that its tick loop
//! consumes; the persisted snapshot is zeroed as well so `status` reflects
//! the reset immediately. Invoking reset twice in a row yields the same
//! zero state as invoking it once.

use crate::libs::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::libs::monitor::RESET_MARKER_FILE;
use crate::libs::snapshot::StateSnapshot;
use crate::msg_success;
use anyhow::Result;
use std::fs;

pub fn cmd() -> Result<()> {
    let marker = DataStorage::new().get_path(RESET_MARKER_FILE)?;
    fs::write(&marker, b"")?;

    if let Ok(Some(mut snapshot)) = StateSnapshot::read() {
        snapshot.fatigue = 0;
        snapshot.rest_streak = 0;
        snapshot.fatigue_percent = 0.0;
        snapshot.at_limit = false;
        snapshot.token_warning = false;
        snapshot.updated_at = chrono::Local::now().naive_local();
        snapshot.save()?;
    }

    msg_success!(Message::ResetRequested);
    Ok(())
}
