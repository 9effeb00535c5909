//! Send command: manual stimulus dispatch for credential verification.

use crate::api::pavlok::{AlertChannel, AlertOutcome, Pavlok, StimulusKind};
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_success};
use anyhow::Result;
use clap::Args;

/// Command-line arguments for the send command.
#[derive(Debug, Args)]
pub struct SendArgs {
    /// Stimulus kind to deliver; defaults to the configured kind
    #[arg(short, long, value_enum)]
    kind: Option<StimulusKind>,
}

pub async fn cmd(args: SendArgs) -> Result<()> {
    let config = Config::read()?;
    let pavlok_config = match config.pavlok {
        Some(pavlok) if !pavlok.api_token.trim().is_empty() => pavlok,
        _ => msg_bail_anyhow!(Message::AlertTokenMissing),
    };
    let kind = args.kind.unwrap_or(pavlok_config.stimulus);

    match Pavlok::new().send(&pavlok_config.api_token, kind).await? {
        AlertOutcome::Sent => msg_success!(Message::StimulusSent(kind.to_string())),
        AlertOutcome::Unauthorized => msg_bail_anyhow!(Message::StimulusRejected),
        AlertOutcome::Failed(status) => msg_bail_anyhow!(Message::StimulusFailed(status)),
    }
    Ok(())
}
