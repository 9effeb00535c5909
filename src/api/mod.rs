//! API client modules for external service integrations.
//!
//! Currently holds the single external collaborator: the Pavlok stimulus
//! API that delivers fatigue alerts to the user's device. The channel is
//! consumed through the [`pavlok::AlertChannel`] trait so the monitor core
//! stays testable without network access.

// API client modules
pub mod pavlok;

// Re-export configuration structs for easier access from other modules
pub use pavlok::PavlokConfig;
