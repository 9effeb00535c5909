//! Watch command: runs the fatigue monitor in the foreground.

use crate::api::pavlok::Pavlok;
use crate::libs::config::Config;
use crate::libs::monitor::Monitor;
use crate::libs::sampler::InputTracker;
use anyhow::Result;

/// Wires the production sampler and alert channel into the monitor and
/// runs it until interrupted.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let sampler = InputTracker::spawn();
    let channel = Pavlok::new();

    let mut monitor = Monitor::new(sampler, channel, &config);
    monitor.run().await
}
