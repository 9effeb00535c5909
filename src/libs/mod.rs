//! Core library modules for the zapwatch application.
//!
//! Serves as the main entry point for all zapwatch library components.
//!
//! ## Features
//!
//! - **Fatigue Core**: minute accumulator, fatigue state machine, alert policy
//! - **Activity Monitoring**: the tick loop and the input-device sampler
//! - **Infrastructure**: configuration, data storage, messaging, snapshots
//! - **User Interface**: console rendering of the monitor status

pub mod alert;
pub mod config;
pub mod data_storage;
pub mod fatigue;
pub mod messages;
pub mod monitor;
pub mod sampler;
pub mod snapshot;
pub mod view;
