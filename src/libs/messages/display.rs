//! Display implementation for zapwatch application messages.
//!
//! Converts structured [`Message`] values into human-readable text for
//! terminal output. Keeping all user-facing text in one place gives the
//! application a single source of truth for wording and makes the call
//! sites type-checked.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleMonitor => "Monitor configuration".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptWorkLimit => "Work limit in active minutes (1-99)".to_string(),
            Message::PromptBreakLimit => "Break limit in rest minutes (1-99)".to_string(),
            Message::PromptApiToken => "Pavlok API token".to_string(),
            Message::PromptStimulusKind => "Stimulus kind".to_string(),

            // === WATCHER MESSAGES ===
            Message::WatcherStarted => "Fatigue watcher started".to_string(),
            Message::WatcherStopped => "Fatigue watcher stopped".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C, shutting down...".to_string(),
            Message::WatcherCtrlCListenFailed(e) => format!("Failed to listen for Ctrl+C: {}", e),
            Message::TickSampleFailed(e) => format!("Activity sample failed, skipping tick: {}", e),
            Message::MinuteClosed(active) => format!("Minute closed with {} active seconds", active),
            Message::FatigueChanged(fatigue) => format!("Fatigue is now {} active minutes", fatigue),

            // === ALERT MESSAGES ===
            Message::AlertDispatching(kind) => format!("Fatigue limit reached, sending {} stimulus", kind),
            Message::AlertDelivered => "Stimulus delivered".to_string(),
            Message::AlertTokenMissing => "Alert triggered but no API token is configured".to_string(),
            Message::AlertUnauthorized => "Pavlok rejected the API token".to_string(),
            Message::AlertDeliveryFailed(status) => format!("Stimulus delivery failed with status {}", status),
            Message::AlertChannelError(e) => format!("Could not reach the Pavlok API: {}", e),

            // === RESET MESSAGES ===
            Message::ResetRequested => "Fatigue reset requested".to_string(),
            Message::FatigueReset => "Fatigue state reset".to_string(),

            // === STATUS MESSAGES ===
            Message::StatusNotAvailable => "No monitor state recorded yet. Start the watcher with 'zapwatch watch'".to_string(),
            Message::StatusTokenWarning => "API key invalid: alert not sent".to_string(),

            // === SEND MESSAGES ===
            Message::StimulusSent(kind) => format!("Test {} stimulus sent", kind),
            Message::StimulusRejected => "The API token was rejected".to_string(),
            Message::StimulusFailed(status) => format!("Stimulus request failed with status {}", status),
        };
        write!(f, "{}", message)
    }
}
