//! Level command handlers.
//!
//! Two grammars change the FOODCON level:
//!
//! - `set <level>` / `level <level>` changes the level only. Level 5 stands
//!   down and also clears the food and location.
//! - `set <level> <food> <location>` changes all three at once.
//!
//! Arguments are already validated by the parser; handlers only describe the
//! update and the announcement.

use log::debug;

use crate::{
    commands::{
        CommandResult,
        mrkdwn_response::{format_full_status_set, format_level_set},
    },
    status::{AlertLevel, StatusUpdate},
};

/// Announces a new level and requests the level change.
pub fn handle_set_level(level: AlertLevel) -> CommandResult {
    debug!("handling set level command: {}", level);

    CommandResult {
        response: format_level_set(level),
        status_update: Some(StatusUpdate::Level(level)),
    }
}

/// Announces a new level with its food and location and requests all three changes.
pub fn handle_set_full(level: AlertLevel, item: &str, location: &str) -> CommandResult {
    debug!(
        "handling set command: level={}, food={}, location={}",
        level, item, location
    );

    CommandResult {
        response: format_full_status_set(level, item, location),
        status_update: Some(StatusUpdate::Full {
            level,
            item: item.to_owned(),
            location: location.to_owned(),
        }),
    }
}
