//! Slack `mrkdwn` response formatters for bot commands.
//!
//! Every reply the bot can post is built here, so the wording lives in one
//! place. Slack renders `*text*` as bold and `:name:` as an emoji.

use crate::status::{AlertLevel, Status};

/// Gif posted in answer to `boi`.
pub const BOI_DOT_GIF: &str = "https://i.imgur.com/rLgVcmk.gif";

/// Formats the help message showing available bot commands.
///
/// # Examples
///
/// ```text
/// FOODCON App - v0.2.0
/// All commands must be addressed to the bot: '@foodcon `command`'
/// Commands:
/// ...
/// ```
pub fn format_help() -> String {
    format!(
        "FOODCON App - v{}\n\
        All commands must be addressed to the bot: '@foodcon `command`'\n\
        Commands:\n\n\
        *status* - Returns the current FOODCON level.\n\
        *set* `1`, `2`, `3`, `4` or `5` - Sets the FOODCON level to the specified value. `level` works too.\n\
        *set* `level` `food` `location` - Sets the FOODCON level, food and location at once.\n\
        *food* `name/types of food` - Adds this to the `status` command.\n\
        *location* `location of food` - Adds this to the `status` command.\n\
        *help* - Shows this message.",
        env!("CARGO_PKG_VERSION")
    )
}

/// Formats the current status. Unset fields are shown with their defaults.
///
/// # Examples
///
/// ```text
/// WE ARE CURRENTLY AT *FOODCON 5* | *LOCATION*: No location *FOOD*: No food
/// ```
pub fn format_status(status: &Status) -> String {
    format!(
        "WE ARE CURRENTLY AT *FOODCON {}* | *LOCATION*: {} *FOOD*: {}",
        status.level_or_default(),
        status.location_or_default(),
        status.item_or_default()
    )
}

/// Formats the announcement of a new level.
pub fn format_level_set(level: AlertLevel) -> String {
    if level.is_stand_down() {
        return "FOODCON SET TO FOODCON5. I REPEAT. *FOODCON 5*. STAND DOWN.".to_owned();
    }

    format!(":alert: FOODCON RAISED TO FOODCON {level}. I REPEAT. *FOODCON {level}*. :alert:")
}

/// Formats the announcement of level, food and location set together.
pub fn format_full_status_set(level: AlertLevel, item: &str, location: &str) -> String {
    format!("FOODCON {level}: {item} available at {location}! Enjoy!")
}

pub fn format_food_set() -> String {
    "OK, got it. Sounds tasty :eyes:".to_owned()
}

pub fn format_location_set() -> String {
    "OK, got it. I'll be paying a visit :eyes:".to_owned()
}

pub fn format_boi() -> String {
    BOI_DOT_GIF.to_owned()
}

/// Formats a response for a message the bot does not understand.
pub fn format_unrecognized() -> String {
    "Not sure what you mean. Stop it. Get some help, try *help*.".to_owned()
}

/// Formats an error response for a `set` command without exactly three arguments.
pub fn format_argument_count() -> String {
    "Incorrect number of arguments. Please try again with: set level food location".to_owned()
}

/// Formats an error response for a `set` command with a level outside 1 to 5.
pub fn format_invalid_level() -> String {
    "Invalid FOODCON level. Please pick a level between 1 and 5.".to_owned()
}
