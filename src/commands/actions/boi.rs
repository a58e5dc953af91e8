//! `boi` command handler.

use log::debug;

use crate::commands::{CommandResult, mrkdwn_response::format_boi};

pub fn handle_boi() -> CommandResult {
    debug!("handling boi command");

    CommandResult {
        response: format_boi(),
        status_update: None,
    }
}
