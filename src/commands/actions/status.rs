//! Status command handler.
//!
//! Reports the current FOODCON level, food and location. Fields nobody has set
//! yet are reported with their defaults, so this command always succeeds.

use log::debug;

use crate::commands::{CommandContext, CommandResult, mrkdwn_response::format_status};

/// Returns the current status read from the context.
pub fn handle_status(context: &CommandContext) -> CommandResult {
    debug!("handling status command: {:?}", context.status);

    CommandResult {
        response: format_status(&context.status),
        status_update: None,
    }
}
