//! Command classification and parsing.
//!
//! This module turns the text of a Slack message into a structured [`Command`].
//! It works in three steps:
//!
//! 1. [`extract_mention`] checks the message starts with a mention of the bot
//! 2. [`classify`] picks the command kind from the keyword
//! 3. [`Command::parse`] validates and decodes the arguments of that kind

use log::debug;

use crate::{
    commands::{
        mention::extract_mention,
        mrkdwn_response::{format_argument_count, format_invalid_level, format_unrecognized},
    },
    events::BotIdentity,
    status::AlertLevel,
};

/// Kind of a command, as decided by the keyword of the message.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    /// `set <level> <food> <location>`
    SetFull,
    /// `set <level>` or `level <level>`
    SetLevel,
    SetFood,
    SetLocation,
    Status,
    /// `boi`
    Easter,
    Unrecognized,
}

/// Represents a parsed bot command.
#[derive(Debug, Clone, Hash, PartialEq, Eq)]
pub enum Command {
    /// Display help information
    Help,
    /// Display the current status
    Status,
    /// Set level, food and location at once
    ///
    /// # Fields
    ///
    /// * `AlertLevel` - FOODCON level
    /// * `String` - Food, lower-cased
    /// * `String` - Location, lower-cased
    SetFull(AlertLevel, String, String),
    /// Set the FOODCON level only
    SetLevel(AlertLevel),
    /// Set the food, lower-cased
    SetFood(String),
    /// Set the location, lower-cased
    SetLocation(String),
    /// Post the boi gif
    Boi,
}

/// Errors that can occur during command parsing.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandParsingError {
    /// The message does not start with a mention
    NoMention,
    /// The message starts with a mention of someone else
    NotForBot,
    /// No command matches the message
    Unrecognized,
    /// `set` was not given exactly a level, a food and a location
    ArgumentCount,
    /// The level of a `set` command is not between 1 and 5
    InvalidLevel,
}

/// A classification rule: returns the kind and argument text when it matches
/// the lower-cased command text.
type Rule = fn(&str) -> Option<(CommandKind, String)>;

/// Classification rules, in priority order. The first matching rule wins.
const RULES: [Rule; 7] = [
    match_help,
    match_status,
    match_set_full,
    match_set_level,
    match_food,
    match_location,
    match_boi,
];

/// Maps the text following the mention to a command kind and its argument text.
///
/// Keywords are case-insensitive and argument text is returned lower-cased,
/// except for [`CommandKind::Unrecognized`] which carries the text untouched.
/// Exactly one kind is returned for any input.
///
/// # Examples
///
/// ```text
/// "Set 2 Samosas Kitchen" -> (SetFull, "2 samosas kitchen")
/// "set 2"                 -> (SetLevel, "2")
/// "set 6"                 -> (Unrecognized, "set 6")
/// ```
pub fn classify(remainder: &str) -> (CommandKind, String) {
    let text = remainder.to_lowercase();

    RULES
        .iter()
        .find_map(|rule| rule(&text))
        .unwrap_or_else(|| (CommandKind::Unrecognized, remainder.to_owned()))
}

fn match_help(text: &str) -> Option<(CommandKind, String)> {
    (text == "help").then(|| (CommandKind::Help, String::new()))
}

fn match_status(text: &str) -> Option<(CommandKind, String)> {
    let rest = text.strip_prefix("status")?;
    // Anything after `status` is ignored, but `statusfoo` is not a status request
    (rest.is_empty() || rest.starts_with(char::is_whitespace))
        .then(|| (CommandKind::Status, String::new()))
}

fn match_set_full(text: &str) -> Option<(CommandKind, String)> {
    let args = text.strip_prefix("set ")?;
    // A single token is a level change, see `match_set_level`
    if args.split_whitespace().count() == 1 {
        return None;
    }
    Some((CommandKind::SetFull, args.trim().to_owned()))
}

fn match_set_level(text: &str) -> Option<(CommandKind, String)> {
    let args = text
        .strip_prefix("level ")
        .or_else(|| text.strip_prefix("set "))?;

    let mut tokens = args.split_whitespace();
    let token = tokens.next()?;
    if tokens.next().is_some() || token.parse::<AlertLevel>().is_err() {
        return None;
    }
    Some((CommandKind::SetLevel, token.to_owned()))
}

fn match_food(text: &str) -> Option<(CommandKind, String)> {
    let args = text.strip_prefix("food ")?;
    Some((CommandKind::SetFood, args.trim().to_owned()))
}

fn match_location(text: &str) -> Option<(CommandKind, String)> {
    let args = text.strip_prefix("location ")?;
    Some((CommandKind::SetLocation, args.trim().to_owned()))
}

fn match_boi(text: &str) -> Option<(CommandKind, String)> {
    (text == "boi").then(|| (CommandKind::Easter, String::new()))
}

impl Command {
    /// Parses a message body into a Command.
    ///
    /// # Arguments
    ///
    /// * `identity` - Identity of the bot, the message must start with a mention of it
    /// * `body` - The message text to parse
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The message does not start with a mention - [`CommandParsingError::NoMention`]
    /// - The mention is for someone else - [`CommandParsingError::NotForBot`]
    /// - No command matches - [`CommandParsingError::Unrecognized`]
    /// - `set` has the wrong number of arguments - [`CommandParsingError::ArgumentCount`]
    /// - `set` has a level outside 1 to 5 - [`CommandParsingError::InvalidLevel`]
    pub fn parse(identity: &BotIdentity, body: &str) -> Result<Self, CommandParsingError> {
        let mention = extract_mention(body);

        let Some(mentioned_id) = mention.mentioned_id else {
            return Err(CommandParsingError::NoMention);
        };

        // Ignore messages addressed to someone else
        if mentioned_id != identity.as_str() {
            return Err(CommandParsingError::NotForBot);
        }

        let (kind, args) = classify(&mention.remainder);
        debug!("classified {:?} as {:?} with args {:?}", mention.remainder, kind, args);

        match kind {
            CommandKind::Help => Ok(Command::Help),
            CommandKind::Status => Ok(Command::Status),
            CommandKind::SetFull => {
                let (level, item, location) = Self::parse_set_full(&args)?;
                Ok(Command::SetFull(level, item, location))
            }
            CommandKind::SetLevel => Ok(Command::SetLevel(Self::parse_set_level(&args)?)),
            CommandKind::SetFood => Ok(Command::SetFood(args)),
            CommandKind::SetLocation => Ok(Command::SetLocation(args)),
            CommandKind::Easter => Ok(Command::Boi),
            CommandKind::Unrecognized => Err(CommandParsingError::Unrecognized),
        }
    }

    fn parse_set_full(args: &str) -> Result<(AlertLevel, String, String), CommandParsingError> {
        let tokens: Vec<&str> = args.split_whitespace().collect();

        // 3 arguments: level, food and location
        let [level, item, location] = tokens[..] else {
            debug!("set expects 3 arguments, got {}", tokens.len());
            return Err(CommandParsingError::ArgumentCount);
        };

        let level = level.parse::<AlertLevel>().map_err(|_| {
            debug!("invalid level {:?}", level);
            CommandParsingError::InvalidLevel
        })?;

        Ok((level, item.to_lowercase(), location.to_lowercase()))
    }

    fn parse_set_level(args: &str) -> Result<AlertLevel, CommandParsingError> {
        // Out of range levels are not a level change at all
        args.parse::<AlertLevel>()
            .map_err(|_| CommandParsingError::Unrecognized)
    }
}

/// Formats a command error into a user-friendly message.
///
/// Messages that are not addressed to the bot produce `None`, so the bot stays
/// silent instead of answering unrelated chatter or its own messages.
pub fn format_command_error(error: CommandParsingError) -> Option<String> {
    match error {
        CommandParsingError::Unrecognized => Some(format_unrecognized()),
        CommandParsingError::ArgumentCount => Some(format_argument_count()),
        CommandParsingError::InvalidLevel => Some(format_invalid_level()),
        CommandParsingError::NoMention | CommandParsingError::NotForBot => None,
    }
}
