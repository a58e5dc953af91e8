//! Shared FOODCON status.
//!
//! This module holds the single piece of state the bot mutates: the current
//! FOODCON level together with the food on offer and where to find it.
//!
//! - [`AlertLevel`]: the five FOODCON levels, 1 being the most urgent
//! - [`Status`]: a snapshot of level, food and location, with display defaults
//! - [`StatusStore`]: owns the status and applies [`StatusUpdate`]s to it
//!
//! Nothing here is persisted; the status starts unset on every launch and
//! displays as `FOODCON 5`, `No food`, `No location` until a command sets it.

mod alert_level;
mod store;

pub use crate::status::alert_level::AlertLevel;
pub use crate::status::store::{Status, StatusStore, StatusUpdate};

/// Food shown when none has been announced.
pub const NO_FOOD: &str = "No food";
/// Location shown when none has been announced.
pub const NO_LOCATION: &str = "No location";
