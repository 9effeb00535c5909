//! Activity monitor: wires the clock, the sampler and the alert channel to
//! the fatigue accounting core.
//!
//! One tick arrives per second. The handler samples idle time, folds the
//! elapsed wall-clock seconds into the minute accumulator, applies every
//! closed minute to the fatigue state machine and lets the alert policy
//! decide whether to fire the channel. Everything runs on one logical
//! thread; the only suspension points are the sampler and the channel call,
//! both awaited sequentially inside the handler.

use crate::api::pavlok::{AlertChannel, AlertOutcome, StimulusKind};
use crate::libs::alert::{note_outcome, should_alert};
use crate::libs::config::{Config, MonitorConfig};
use crate::libs::data_storage::DataStorage;
use crate::libs::fatigue::{apply_minute, MinuteVerdict, MonitorState};
use crate::libs::messages::Message;
use crate::libs::sampler::ActivitySampler;
use crate::libs::snapshot::StateSnapshot;
use crate::{msg_debug, msg_error, msg_info, msg_warning};
use anyhow::Result;
use chrono::Utc;
use std::fs;
use tokio::time::{self, Duration};

// Nominal tick period of the external timer.
pub const TICK_INTERVAL_MS: u64 = 1000;

// Idle time below which a tick counts as active.
pub const IDLE_ACTIVE_THRESHOLD_SECONDS: f64 = 2.0;

// Marker file dropped by the reset command, consumed by the tick loop.
pub const RESET_MARKER_FILE: &str = "reset-fatigue";

// Represents the fatigue monitor.
pub struct Monitor<S: ActivitySampler, C: AlertChannel> {
    sampler: S,
    channel: C,
    pub state: MonitorState,
    config: MonitorConfig,  // Cached limits, refreshed from disk on each minute update.
    token: String,          // Cached alert credential.
    stimulus: StimulusKind, // Stimulus kind delivered on alerts.
    last_tick_at: Option<i64>,
}

impl<S: ActivitySampler, C: AlertChannel> Monitor<S, C> {
    // Creates a new Monitor instance seeded from the given configuration.
    pub fn new(sampler: S, channel: C, config: &Config) -> Self {
        let monitor_config = config.monitor.clone().unwrap_or_default();
        let (token, stimulus) = match &config.pavlok {
            Some(pavlok) => (pavlok.api_token.clone(), pavlok.stimulus),
            None => (String::new(), StimulusKind::default()),
        };

        Monitor {
            sampler,
            channel,
            state: MonitorState::new(),
            config: monitor_config,
            token,
            stimulus,
            last_tick_at: None,
        }
    }

    // Runs the main monitoring loop until Ctrl+C.
    //
    // The loop drives one tick per second, consumes reset markers dropped
    // by the reset command, and persists a state snapshot whenever the
    // accounting changes.
    pub async fn run(&mut self) -> Result<()> {
        msg_info!(Message::WatcherStarted);
        self.start_monitoring(Utc::now().timestamp_millis());
        let _ = self.save_snapshot();

        let mut interval = time::interval(Duration::from_millis(TICK_INTERVAL_MS));
        let ctrl_c = tokio::signal::ctrl_c();
        tokio::pin!(ctrl_c);

        loop {
            tokio::select! {
                _ = interval.tick() => {
                    let now_ms = Utc::now().timestamp_millis();
                    if self.consume_reset_marker() {
                        msg_info!(Message::ResetRequested);
                        self.reset(now_ms);
                    }
                    if let Err(e) = self.tick(now_ms).await {
                        // Transient: state untouched, next tick retries.
                        msg_warning!(Message::TickSampleFailed(e.to_string()));
                    }
                }
                result = &mut ctrl_c => {
                    match result {
                        Ok(()) => msg_info!(Message::WatcherReceivedCtrlC),
                        Err(e) => msg_error!(Message::WatcherCtrlCListenFailed(e.to_string())),
                    }
                    break;
                }
            }
        }

        self.stop_monitoring();
        let _ = self.save_snapshot();
        msg_info!(Message::WatcherStopped);
        Ok(())
    }

    // Processes one tick at the given wall-clock timestamp.
    //
    // Returns the verdicts of the minute updates the tick produced, which
    // is usually empty (windows close once a minute) but can hold several
    // entries after process suspension.
    pub async fn tick(&mut self, now_ms: i64) -> Result<Vec<MinuteVerdict>> {
        // A sampler failure aborts this tick's fold with no state mutation.
        let idle_seconds = self.sampler.idle_seconds().await?;

        let elapsed_seconds = match self.last_tick_at {
            Some(at) => ((now_ms - at) / 1000).max(1) as u32,
            None => 1,
        };
        self.last_tick_at = Some(now_ms);

        let active_now = idle_seconds < IDLE_ACTIVE_THRESHOLD_SECONDS;

        // Only the first second of a tick can be proven active; seconds
        // missed beyond it are always credited as inactive.
        let missed_seconds = elapsed_seconds - 1;
        let (active, inactive) = match active_now {
            true => (1, missed_seconds),
            false => (0, 1 + missed_seconds),
        };

        let updates = self.state.fold_sample(active, inactive);
        let mut verdicts = Vec::with_capacity(updates.len());

        for update in &updates {
            msg_debug!(Message::MinuteClosed(update.active_seconds));

            // Limits and credential are re-read per minute update so user
            // edits take effect without restarting the watcher.
            self.refresh_config();

            let verdict = apply_minute(&mut self.state, &self.config, update);
            msg_debug!(Message::FatigueChanged(self.state.fatigue));

            if should_alert(&verdict, now_ms, self.state.last_alert_at) {
                // Recorded before the dispatch completes, so overlapping
                // alert conditions cannot double-fire.
                self.state.last_alert_at = Some(now_ms);
                self.dispatch_alert().await;
            }

            verdicts.push(verdict);
        }

        if !verdicts.is_empty() {
            let _ = self.save_snapshot();
        }

        Ok(verdicts)
    }

    // Reloads limits and credential from the live configuration.
    fn refresh_config(&mut self) {
        // A failed read keeps the last known good values.
        if let Ok(config) = Config::read() {
            if let Some(monitor) = config.monitor {
                self.config = monitor;
            }
            if let Some(pavlok) = config.pavlok {
                if pavlok.api_token != self.token {
                    // A credential edit clears the sticky invalid flag.
                    self.state.api_key_invalid = false;
                }
                self.token = pavlok.api_token;
                self.stimulus = pavlok.stimulus;
            }
        }
    }

    // Delivers one stimulus through the alert channel.
    //
    // A missing credential consumes the throttle budget (the timestamp was
    // already recorded) but never reaches the network.
    async fn dispatch_alert(&mut self) {
        if self.token.trim().is_empty() {
            msg_warning!(Message::AlertTokenMissing);
            self.state.api_key_invalid = true;
            return;
        }

        msg_info!(Message::AlertDispatching(self.stimulus.to_string()));
        match self.channel.send(&self.token, self.stimulus).await {
            Ok(outcome) => {
                match outcome {
                    AlertOutcome::Sent => msg_debug!(Message::AlertDelivered),
                    AlertOutcome::Unauthorized => msg_warning!(Message::AlertUnauthorized),
                    AlertOutcome::Failed(status) => msg_warning!(Message::AlertDeliveryFailed(status)),
                }
                note_outcome(&mut self.state, &outcome);
            }
            // Transport failures are surfaced only; state unchanged.
            Err(e) => msg_warning!(Message::AlertChannelError(e.to_string())),
        }
    }

    // Reinitializes the fatigue accounting, preserving monitoring and
    // configuration. Idempotent.
    pub fn reset(&mut self, now_ms: i64) {
        self.state.reset();
        self.last_tick_at = Some(now_ms);
        let _ = self.save_snapshot();
        msg_info!(Message::FatigueReset);
    }

    // Starts folding ticks into state. A new run begins a fresh minute
    // window; accrued fatigue is preserved.
    pub fn start_monitoring(&mut self, now_ms: i64) {
        self.state.monitoring = true;
        self.state.clear_window();
        self.last_tick_at = Some(now_ms);
    }

    // Stops folding ticks and clears the last-tick marker so a later
    // resume does not treat the gap as idle time.
    pub fn stop_monitoring(&mut self) {
        self.state.monitoring = false;
        self.last_tick_at = None;
    }

    // Consumes the reset marker dropped by the reset command.
    fn consume_reset_marker(&self) -> bool {
        match DataStorage::new().get_path(RESET_MARKER_FILE) {
            Ok(path) if path.exists() => {
                let _ = fs::remove_file(&path);
                true
            }
            _ => false,
        }
    }

    // Persists the externally observable state snapshot.
    pub fn save_snapshot(&self) -> Result<()> {
        StateSnapshot::capture(&self.state, &self.config).save()
    }
}
