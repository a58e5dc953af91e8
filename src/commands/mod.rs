//! Bot command parsing and response formatting.
//!
//! This module provides the complete command processing pipeline for the
//! FOODCON bot, from the raw text of a Slack message to the reply to post.
//!
//! # Overview
//!
//! The commands module handles the entire lifecycle of bot commands:
//! 1. **Mention** - Keeping only messages that start with a mention of the bot
//! 2. **Classification** - Picking the command from its keyword, first rule wins
//! 3. **Validation** - Decoding the arguments into a structured [`command::Command`]
//! 4. **Execution** - Routing commands to specialized handlers
//! 5. **Response** - Formatting results as Slack `mrkdwn`
//!
//! # Architecture
//!
//! ```text
//! Slack Message
//!      │
//!      ▼
//! ┌─────────────┐
//! │  Commander  │  ← Entry point: parse() + parse_command()
//! └─────────────┘
//!      │
//!      ├── parse() ────────────────────┐
//!      │                               ▼
//!      │                   ┌──────────────────────────┐
//!      │                   │ extract_mention/classify │
//!      │                   │  → command::Command      │
//!      │                   └──────────────────────────┘
//!      │
//!      └── parse_command() ───────────┐
//!                                     ▼
//!                          ┌─────────────────────┐
//!                          │ Action Handlers     │
//!                          │  - handle_help      │
//!                          │  - handle_status    │
//!                          │  - handle_set_level │
//!                          │  - handle_set_full  │
//!                          │  - handle_food      │
//!                          │  - handle_location  │
//!                          │  - handle_boi       │
//!                          └─────────────────────┘
//!                                     │
//!                                     ▼
//!                          ┌────────────────────┐
//!                          │  CommandResult     │
//!                          │  - response        │
//!                          │  - status update   │
//!                          └────────────────────┘
//! ```
//!
//! # Command Structure
//!
//! All commands follow the format: `@foodcon <command> [args...]`
//!
//! | Command | Arguments | Description |
//! |---------|-----------|-------------|
//! | `help` | None | Display help information |
//! | `status` | None | Display the current FOODCON status |
//! | `set` | `<level>` | Change the level (`level <level>` works too) |
//! | `set` | `<level> <food> <location>` | Change level, food and location |
//! | `food` | `<food...>` | Change the food |
//! | `location` | `<location...>` | Change the location |
//! | `boi` | None | boi |
//!
//! Keywords are case-insensitive; food and location are stored lower-cased.
//!
//! # Error Handling
//!
//! The module distinguishes between two error categories:
//!
//! - **Silent Errors** ([`CommandParseError::NotForBot`]): Messages that don't
//!   start with a mention of the bot. These never generate responses.
//!
//! - **User Errors** ([`CommandParseError::InvalidCommand`]): Unrecognized
//!   commands or invalid arguments, with the message to reply.
//!
//! # Module Organization
//!
//! - [`commander`] - Main orchestrator for parsing and executing commands
//! - [`command`] - Command classification and argument parsing
//! - [`mention`] - Leading mention extraction
//! - [`actions`] - Individual command handler implementations
//! - [`mrkdwn_response`] - Response formatting

mod actions;
mod command;
mod commander;
mod mention;
mod mrkdwn_response;

pub use crate::commands::commander::Commander;
use crate::status::{Status, StatusUpdate};

/// Runtime context for command execution.
///
/// # Fields
///
/// * `status` - Snapshot of the FOODCON status when the command arrived
#[derive(Debug)]
pub struct CommandContext {
    /// Current FOODCON status
    pub status: Status,
}

/// Result of command execution.
///
/// # State Changes
///
/// Command handlers don't directly modify state. Instead, they return the
/// change through `status_update` and the caller applies it.
#[derive(Debug)]
pub struct CommandResult {
    /// `mrkdwn` response message
    pub response: String,
    /// Optional status change to apply
    pub status_update: Option<StatusUpdate>,
}

/// Errors that can occur during command parsing.
///
/// # Variants
///
/// * `NotForBot` - Message is not addressed to the bot.
///   Should be handled silently without responding.
///
/// * `InvalidCommand` - Command is unrecognized or its arguments are invalid.
///   Contains the message to reply.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandParseError {
    /// Message is not for this bot (silent error)
    NotForBot,
    /// Invalid command with the message to reply
    InvalidCommand(String),
}
