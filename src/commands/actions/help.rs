//! Help command handler.
//!
//! Lists every command with its syntax and the bot version. This is a
//! stateless command that always returns the same message.

use log::debug;

use crate::commands::{CommandResult, mrkdwn_response::format_help};

/// Returns formatted help information about available commands.
pub fn handle_help() -> CommandResult {
    debug!("handling help command");

    CommandResult {
        response: format_help(),
        status_update: None,
    }
}
