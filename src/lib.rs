//! # Zapwatch - Desktop Activity-Fatigue Monitor
//!
//! A command-line utility that samples user activity once per second,
//! converts accumulated activity into a bounded fatigue score and fires a
//! Pavlok stimulus when fatigue reaches a configurable work limit.
//!
//! ## Features
//!
//! - **Activity Monitoring**: per-second idle sampling from input devices
//! - **Fatigue Accounting**: minute-boundary accumulation tolerant of
//!   arbitrarily large tick gaps (laptop sleep, process suspension)
//! - **Alert Policy**: crossing-edge and repeat-at-limit admission with a
//!   hard one-per-minute throttle
//! - **Pavlok Integration**: beep, vibration or zap stimuli over HTTP
//! - **Live Configuration**: limit and credential edits apply on the next
//!   minute update without restarting the watcher
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zapwatch::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod libs;
