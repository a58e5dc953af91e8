//! Command action handlers.
//!
//! Individual handler functions for each bot command. Each handler receives the
//! already validated arguments of its command, and [`handle_status`] also
//! receives the [`CommandContext`](crate::commands::CommandContext).
//!
//! # Handler Pattern
//!
//! Handlers follow a consistent pattern:
//! 1. Receive validated arguments (and the status snapshot when needed)
//! 2. Build the reply text
//! 3. Return a result with the reply and an optional status update
//!
//! # Available Handlers
//!
//! - [`handle_help`] - Display help information
//! - [`handle_status`] - Display the current FOODCON status
//! - [`handle_set_level`] - Change the FOODCON level
//! - [`handle_set_full`] - Change level, food and location at once
//! - [`handle_food`] - Change the food
//! - [`handle_location`] - Change the location
//! - [`handle_boi`] - Post the boi gif
//!
//! # State Changes
//!
//! Handlers don't modify state directly. Instead, they return a
//! [`StatusUpdate`](crate::status::StatusUpdate) in the
//! [`CommandResult`](crate::commands::CommandResult), applied by the dispatcher.

mod boi;
mod details;
mod help;
mod set;
mod status;

pub use crate::commands::actions::{
    boi::handle_boi,
    details::{handle_food, handle_location},
    help::handle_help,
    set::{handle_set_full, handle_set_level},
    status::handle_status,
};
