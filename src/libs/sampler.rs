//! Activity sampling: how long since the user last touched an input device.
//!
//! The production sampler listens for keyboard, mouse and scroll events on a
//! dedicated thread and reports idle time as the elapsed duration since the
//! last observed event. The monitor consumes it through the
//! [`ActivitySampler`] trait so tests can script idle readings and failures.

use anyhow::Result;
use parking_lot::Mutex;
use rdev::{listen, Event, EventType};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;

/// Sampling failures.
///
/// Transient by design: the monitor skips the fold for the failing tick and
/// retries on the next one.
#[derive(Debug, Error)]
pub enum SamplerError {
    #[error("input listener is not running: {0}")]
    ListenerDown(String),
}

/// Source of idle-duration measurements, queried once per tick.
#[allow(async_fn_in_trait)]
pub trait ActivitySampler {
    /// Continuous idle time in seconds. May exceed one tick if ticks were
    /// skipped; a failure must leave monitor state untouched for that tick.
    async fn idle_seconds(&self) -> Result<f64, SamplerError>;
}

/// Tracks the time of the last user input event.
pub struct InputTracker {
    last_input: Arc<Mutex<Instant>>,
    listener_alive: Arc<AtomicBool>,
}

impl InputTracker {
    /// Spawns the input listener thread and returns the tracker.
    ///
    /// The listener restarts on error to keep monitoring continuous; while
    /// it is down, `idle_seconds` reports a `SamplerError` instead of stale
    /// measurements.
    pub fn spawn() -> Self {
        let last_input = Arc::new(Mutex::new(Instant::now()));
        let listener_alive = Arc::new(AtomicBool::new(true));

        let shared_last_input = last_input.clone();
        let shared_alive = listener_alive.clone();
        std::thread::spawn(move || {
            loop {
                let last_input_for_listener = shared_last_input.clone();
                let alive_for_listener = shared_alive.clone();
                alive_for_listener.store(true, Ordering::SeqCst);
                if let Err(e) = listen(move |event: Event| match event.event_type {
                    EventType::KeyPress(_) | EventType::ButtonPress(_) | EventType::Wheel { .. } | EventType::MouseMove { .. } => {
                        *last_input_for_listener.lock() = Instant::now();
                    }
                    _ => {}
                }) {
                    tracing::warn!("Input listener failed: {:?}. Retrying in 1 second...", e);
                    shared_alive.store(false, Ordering::SeqCst);
                    std::thread::sleep(Duration::from_secs(1));
                } else {
                    // listen() is blocking and only returns on shutdown
                    break;
                }
            }
        });

        InputTracker { last_input, listener_alive }
    }
}

impl ActivitySampler for InputTracker {
    async fn idle_seconds(&self) -> Result<f64, SamplerError> {
        if !self.listener_alive.load(Ordering::SeqCst) {
            return Err(SamplerError::ListenerDown("event listener restarting".to_string()));
        }
        Ok(self.last_input.lock().elapsed().as_secs_f64())
    }
}
