#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleMonitor,
    PromptSelectModules,
    PromptWorkLimit,
    PromptBreakLimit,
    PromptApiToken,
    PromptStimulusKind,

    // === WATCHER MESSAGES ===
    WatcherStarted,
    WatcherStopped,
    WatcherReceivedCtrlC,
    WatcherCtrlCListenFailed(String),
    TickSampleFailed(String),
    MinuteClosed(u32),     // active seconds in the closed window
    FatigueChanged(u32),   // new fatigue value

    // === ALERT MESSAGES ===
    AlertDispatching(String), // stimulus kind
    AlertDelivered,
    AlertTokenMissing,
    AlertUnauthorized,
    AlertDeliveryFailed(u16),   // HTTP status
    AlertChannelError(String),  // transport error

    // === RESET MESSAGES ===
    ResetRequested,
    FatigueReset,

    // === STATUS MESSAGES ===
    StatusNotAvailable,
    StatusTokenWarning,

    // === SEND MESSAGES ===
    StimulusSent(String),   // stimulus kind
    StimulusRejected,
    StimulusFailed(u16),    // HTTP status
}
