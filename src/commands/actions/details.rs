//! Food and location command handlers.
//!
//! Each command sets one detail shown by `status` and leaves the rest of the
//! status untouched. An empty value is accepted and stored as is.

use log::debug;

use crate::{
    commands::{
        CommandResult,
        mrkdwn_response::{format_food_set, format_location_set},
    },
    status::StatusUpdate,
};

/// Requests the food to be changed.
pub fn handle_food(item: &str) -> CommandResult {
    debug!("handling food command: {}", item);

    CommandResult {
        response: format_food_set(),
        status_update: Some(StatusUpdate::Item(item.to_owned())),
    }
}

/// Requests the location to be changed.
pub fn handle_location(location: &str) -> CommandResult {
    debug!("handling location command: {}", location);

    CommandResult {
        response: format_location_set(),
        status_update: Some(StatusUpdate::Location(location.to_owned())),
    }
}
