//! Application configuration initialization command.
//!
//! Provides an interactive setup wizard that walks the user through the
//! monitor limits and the Pavlok credential for first-time use.

use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the initialization command.
#[derive(Debug, Args)]
pub struct InitArgs {}

/// Executes the initialization command.
///
/// Runs the interactive wizard and persists the resulting configuration.
pub fn cmd(_init_args: InitArgs) -> Result<()> {
    Config::init()?.save()?;

    msg_success!(Message::ConfigSaved);
    Ok(())
}
