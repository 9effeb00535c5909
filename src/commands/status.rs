//! Status command: displays the last recorded fatigue state.

use crate::libs::messages::Message;
use crate::libs::snapshot::StateSnapshot;
use crate::libs::view::View;
use crate::{msg_info, msg_warning};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    match StateSnapshot::read()? {
        Some(snapshot) => {
            View::status(&snapshot)?;
            if snapshot.token_warning {
                msg_warning!(Message::StatusTokenWarning);
            }
            Ok(())
        }
        None => {
            msg_info!(Message::StatusNotAvailable);
            Ok(())
        }
    }
}
