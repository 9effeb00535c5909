//! Pavlok API client for delivering fatigue alerts.
//!
//! Sends a stimulus (beep, vibration or zap) to the user's Pavlok device
//! through the public stimulus endpoint. The client reports a structured
//! [`AlertOutcome`] instead of failing on non-success statuses, because the
//! monitor treats auth rejections and other HTTP failures very differently:
//! the former flips the sticky invalid-credential flag, the latter is only
//! logged.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zapwatch::api::pavlok::{AlertChannel, Pavlok, StimulusKind};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let channel = Pavlok::new();
//! let outcome = channel.send("api-token", StimulusKind::Beep).await?;
//! # Ok(())
//! # }
//! ```

use crate::libs::config::ConfigModule;
use crate::libs::messages::Message;
use anyhow::Result;
use clap::ValueEnum;
use dialoguer::{theme::ColorfulTheme, Input, Select};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Pavlok stimulus delivery endpoint.
pub const STIMULUS_URL: &str = "https://api.pavlok.com/api/v5/stimulus/send";

/// Intensity sent with every stimulus.
const STIMULUS_VALUE: u8 = 100;

/// Reason string attached to every stimulus request.
const ALERT_REASON: &str = "Fatigue limit";

/// Kind of stimulus to deliver when fatigue reaches the work limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum StimulusKind {
    /// Audible beep from the device.
    #[default]
    Beep,
    /// Silent vibration.
    Vibro,
    /// Electric zap.
    Zap,
}

impl StimulusKind {
    /// Stimulus type name expected by the Pavlok API.
    pub fn api_name(&self) -> &'static str {
        match self {
            StimulusKind::Beep => "beep",
            StimulusKind::Vibro => "vibe",
            StimulusKind::Zap => "zap",
        }
    }
}

impl fmt::Display for StimulusKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StimulusKind::Beep => "beep",
            StimulusKind::Vibro => "vibro",
            StimulusKind::Zap => "zap",
        };
        write!(f, "{}", name)
    }
}

/// Result of one delivery attempt, as seen by the alert policy.
///
/// Transport-level failures (connection refused, DNS, timeouts) are not
/// outcomes; they surface as errors from [`AlertChannel::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertOutcome {
    /// The device acknowledged the stimulus.
    Sent,
    /// The API rejected the credential (HTTP 401/403).
    Unauthorized,
    /// Any other non-success HTTP status.
    Failed(u16),
}

/// Delivery channel for fatigue alerts.
///
/// The monitor is generic over this trait so tests can substitute a scripted
/// channel and assert on dispatch decisions without any network traffic.
#[allow(async_fn_in_trait)]
pub trait AlertChannel {
    /// Delivers one stimulus using the given credential.
    async fn send(&self, token: &str, kind: StimulusKind) -> Result<AlertOutcome>;
}

/// Pavlok alert channel settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct PavlokConfig {
    /// API token for the stimulus endpoint. A leading `Bearer ` scheme is
    /// tolerated and stripped before the request is built.
    pub api_token: String,

    /// Stimulus kind delivered on fatigue alerts.
    #[serde(default)]
    pub stimulus: StimulusKind,
}

impl PavlokConfig {
    /// Module descriptor for the configuration wizard.
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "pavlok".to_string(),
            name: "Pavlok".to_string(),
        }
    }

    /// Interactive setup for the Pavlok module.
    pub fn init(config: &Option<PavlokConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or(PavlokConfig {
            api_token: "".to_string(),
            stimulus: StimulusKind::default(),
        });

        let api_token: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptApiToken.to_string())
            .default(default.api_token)
            .allow_empty(true)
            .interact_text()?;

        let kinds = [StimulusKind::Beep, StimulusKind::Vibro, StimulusKind::Zap];
        let selected = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStimulusKind.to_string())
            .items(&kinds.iter().map(|k| k.to_string()).collect::<Vec<_>>())
            .default(kinds.iter().position(|k| *k == default.stimulus).unwrap_or(0))
            .interact()?;

        Ok(PavlokConfig {
            api_token,
            stimulus: kinds[selected],
        })
    }
}

/// HTTP client for the Pavlok stimulus API.
///
/// Stateless and thread-safe; one instance is shared by the watcher for the
/// whole monitoring session.
#[derive(Debug)]
pub struct Pavlok {
    /// HTTP client with connection pooling
    client: Client,
}

impl Pavlok {
    pub fn new() -> Self {
        Self { client: Client::new() }
    }

    /// Strips an optional `Bearer ` scheme from a pasted token.
    ///
    /// Users copy tokens straight out of HTTP examples, so both
    /// `"abc123"` and `"Bearer abc123"` must work.
    fn token_value(token: &str) -> &str {
        let trimmed = token.trim();
        let mut parts = trimmed.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some(scheme), Some(value)) if scheme.eq_ignore_ascii_case("bearer") => value,
            _ => trimmed,
        }
    }
}

impl Default for Pavlok {
    fn default() -> Self {
        Self::new()
    }
}

impl AlertChannel for Pavlok {
    async fn send(&self, token: &str, kind: StimulusKind) -> Result<AlertOutcome> {
        let payload = serde_json::json!({
            "stimulus": {
                "stimulusType": kind.api_name(),
                "stimulusValue": STIMULUS_VALUE,
            },
            "reason": ALERT_REASON,
        });

        let res = self
            .client
            .post(STIMULUS_URL)
            .header("Authorization", format!("Bearer {}", Self::token_value(token)))
            .json(&payload)
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            Ok(AlertOutcome::Sent)
        } else if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            Ok(AlertOutcome::Unauthorized)
        } else {
            Ok(AlertOutcome::Failed(status.as_u16()))
        }
    }
}
