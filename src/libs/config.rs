//! Configuration management for the zapwatch application.
//!
//! Handles the fatigue monitor limits and the Pavlok alert channel settings.
//! The configuration lives as JSON in the platform data directory and is
//! deliberately cheap to re-read: the watcher reloads it on every minute
//! update so user edits take effect without a restart.
//!
//! ## Configuration Structure
//!
//! - **Monitor Config**: work and break limits in minutes, clamped to [1,99]
//! - **Pavlok Config**: API token and stimulus kind for the alert channel
//!
//! ## Storage
//!
//! Files are stored in JSON format in platform-specific directories and can
//! be edited by hand; out-of-range limits are clamped when committed through
//! the wizard and again when read by the accounting code, so a hand-edited
//! value cannot break the accounting invariants.
//!
//! ## Usage Examples
//!
//! ```rust,no_run
//! use zapwatch::libs::config::Config;
//!
//! # fn run() -> anyhow::Result<()> {
//! // Load existing configuration or create default
//! let config = Config::read()?;
//!
//! // Run interactive configuration setup
//! let updated_config = Config::init()?;
//! updated_config.save()?;
//! # Ok(())
//! # }
//! ```

use super::data_storage::DataStorage;
use crate::api::pavlok::PavlokConfig;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};

/// Configuration file name used for storing application settings.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Lower bound for the work/break limits in minutes.
pub const MIN_LIMIT_MINUTES: u64 = 1;

/// Upper bound for the work/break limits in minutes.
pub const MAX_LIMIT_MINUTES: u64 = 99;

/// Represents a configurable module in the application.
///
/// Used during interactive setup to display available modules and let the
/// user pick which ones to configure.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Unique identifier for the module used in configuration routing
    pub key: String,
    /// Display name shown to users during interactive setup
    pub name: String,
}

/// Fatigue monitor limits.
///
/// Both values are user-editable minutes in the [1,99] range. The raw fields
/// keep whatever the file contains; the accessor methods clamp.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct MonitorConfig {
    /// Active minutes of accrued fatigue that trigger an alert.
    pub work_limit: u64,

    /// Consecutive rest minutes after which fatigue fully recovers.
    pub break_limit: u64,
}

impl MonitorConfig {
    /// Work limit in minutes, clamped to the valid range.
    pub fn work_limit(&self) -> u64 {
        self.work_limit.clamp(MIN_LIMIT_MINUTES, MAX_LIMIT_MINUTES)
    }

    /// Break limit in minutes, clamped to the valid range.
    pub fn break_limit(&self) -> u64 {
        self.break_limit.clamp(MIN_LIMIT_MINUTES, MAX_LIMIT_MINUTES)
    }
}

impl Default for MonitorConfig {
    /// Default limits: 45 active minutes of work, 5 rest minutes to recover.
    fn default() -> Self {
        MonitorConfig {
            work_limit: 45,
            break_limit: 5,
        }
    }
}

/// Main configuration container for the entire application.
///
/// Each field represents an optional module that can be configured
/// independently. Unconfigured modules are omitted from the JSON output.
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct Config {
    /// Fatigue monitor limits.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub monitor: Option<MonitorConfig>,

    /// Pavlok alert channel settings.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pavlok: Option<PavlokConfig>,
}

impl Config {
    /// Reads configuration from the filesystem.
    ///
    /// Returns a default configuration if no file exists yet; a file that
    /// exists but cannot be read or parsed is an error.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    /// Saves the current configuration as pretty-printed JSON.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Runs an interactive configuration setup wizard.
    ///
    /// Presents a multi-select of the available modules, pre-fills existing
    /// values as defaults, clamps the limits on commit and returns the
    /// updated configuration ready for saving.
    pub fn init() -> Result<Self> {
        // Existing configuration becomes the wizard defaults
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![
            ConfigModule {
                key: "monitor".to_string(),
                name: "Monitor".to_string(),
            },
            PavlokConfig::module(),
        ];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "monitor" => {
                    let default = config.monitor.clone().unwrap_or_default();
                    msg_print!(Message::ConfigModuleMonitor);
                    let work_limit: u64 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptWorkLimit.to_string())
                        .default(default.work_limit())
                        .interact_text()?;
                    let break_limit: u64 = Input::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptBreakLimit.to_string())
                        .default(default.break_limit())
                        .interact_text()?;

                    // Non-numeric input is rejected by dialoguer during
                    // editing; out-of-range values are clamped on commit.
                    config.monitor = Some(MonitorConfig {
                        work_limit: work_limit.clamp(MIN_LIMIT_MINUTES, MAX_LIMIT_MINUTES),
                        break_limit: break_limit.clamp(MIN_LIMIT_MINUTES, MAX_LIMIT_MINUTES),
                    });
                }
                "pavlok" => config.pavlok = Some(PavlokConfig::init(&config.pavlok)?),
                _ => {} // Unknown module keys are safely ignored
            }
        }

        Ok(config)
    }
}
