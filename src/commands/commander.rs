//! Command orchestration and execution.
//!
//! This module provides the [`Commander`] struct, which serves as the main entry point
//! for processing bot commands. It coordinates command parsing and execution, routing
//! commands to their appropriate handlers.
//!
//! # Flow
//!
//! ```text
//! Slack Message → parse() → Command → parse_command() → CommandResult
//! ```

use crate::{
    commands::{
        CommandContext, CommandParseError, CommandResult,
        actions::{
            handle_boi, handle_food, handle_help, handle_location, handle_set_full,
            handle_set_level, handle_status,
        },
        command::{Command, format_command_error},
    },
    events::BotIdentity,
};

/// Command orchestrator for parsing and executing bot commands.
///
/// The Commander is responsible for:
/// - Recognising messages addressed to the bot
/// - Parsing them into structured commands
/// - Routing commands to appropriate handlers
/// - Converting errors into user-friendly messages
///
/// # Addressing
///
/// A message is for the bot only when it starts with a mention of
/// [`BotIdentity`]. Other messages are silently ignored (returning
/// [`CommandParseError::NotForBot`]).
#[derive(Debug)]
pub struct Commander {
    /// Identity of the bot, used to recognise mentions
    identity: BotIdentity,
}

impl Commander {
    /// Creates a new Commander answering mentions of `identity`.
    pub fn new(identity: BotIdentity) -> Self {
        Commander { identity }
    }

    /// Parses a Slack message body into a structured command.
    ///
    /// # Returns
    ///
    /// * `Ok(Command)` - Successfully parsed and validated command
    /// * `Err(CommandParseError::NotForBot)` - Message is not addressed to the bot
    /// * `Err(CommandParseError::InvalidCommand)` - Command is unrecognized or invalid,
    ///   with the reply to post
    pub fn parse(&self, body: &str) -> Result<Command, CommandParseError> {
        Command::parse(&self.identity, body).map_err(|error| {
            // Stay silent if the message is not for the bot,
            // otherwise explain what went wrong
            match format_command_error(error) {
                Some(message) => CommandParseError::InvalidCommand(message),
                None => CommandParseError::NotForBot,
            }
        })
    }

    /// Executes a parsed command and returns the result.
    ///
    /// # Command Handlers
    ///
    /// - [`Command::Help`] → [`handle_help`]
    /// - [`Command::Status`] → [`handle_status`]
    /// - [`Command::SetLevel`] → [`handle_set_level`]
    /// - [`Command::SetFull`] → [`handle_set_full`]
    /// - [`Command::SetFood`] → [`handle_food`]
    /// - [`Command::SetLocation`] → [`handle_location`]
    /// - [`Command::Boi`] → [`handle_boi`]
    pub fn parse_command(&self, command: &Command, context: &CommandContext) -> CommandResult {
        match command {
            Command::Help => handle_help(),
            Command::Status => handle_status(context),
            Command::SetLevel(level) => handle_set_level(*level),
            Command::SetFull(level, item, location) => handle_set_full(*level, item, location),
            Command::SetFood(item) => handle_food(item),
            Command::SetLocation(location) => handle_location(location),
            Command::Boi => handle_boi(),
        }
    }
}
