//! In-memory FOODCON status and the store that mutates it.

use log::{debug, info};

use crate::status::{AlertLevel, NO_FOOD, NO_LOCATION};

/// Snapshot of the current FOODCON status.
///
/// Every field starts unset. Readers go through the `*_or_default` accessors,
/// so an unset field is displayed as level 5, `No food` or `No location`
/// and never surfaces as an error.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Status {
    /// Current FOODCON level
    pub level: Option<AlertLevel>,
    /// Food on offer, lower-cased
    pub item: Option<String>,
    /// Where the food is, lower-cased
    pub location: Option<String>,
}

impl Status {
    pub fn level_or_default(&self) -> AlertLevel {
        self.level.unwrap_or_default()
    }

    pub fn item_or_default(&self) -> &str {
        self.item.as_deref().unwrap_or(NO_FOOD)
    }

    pub fn location_or_default(&self) -> &str {
        self.location.as_deref().unwrap_or(NO_LOCATION)
    }
}

/// A mutation requested by a command.
///
/// Command handlers never touch the store themselves; they return one of
/// these and the dispatcher applies it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusUpdate {
    /// Set level, food and location together
    Full {
        level: AlertLevel,
        item: String,
        location: String,
    },
    /// Set the level only. Level 5 also resets food and location.
    Level(AlertLevel),
    /// Set the food only
    Item(String),
    /// Set the location only
    Location(String),
}

/// Owner of the process-wide [`Status`].
///
/// There is exactly one store per bot and a single writer (the dispatcher),
/// so updates are applied in place without locking.
#[derive(Debug, Default)]
pub struct StatusStore {
    status: Status,
}

impl StatusStore {
    /// Creates a store with every field unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the current status.
    pub fn snapshot(&self) -> Status {
        self.status.clone()
    }

    /// Applies an update. The change is visible to the next [`Self::snapshot`].
    pub fn apply(&mut self, update: StatusUpdate) {
        debug!("apply status update {:?}", update);

        match update {
            StatusUpdate::Full {
                level,
                item,
                location,
            } => {
                self.status = Status {
                    level: Some(level),
                    item: Some(item),
                    location: Some(location),
                };
            }
            StatusUpdate::Level(level) if level.is_stand_down() => {
                self.status = Status {
                    level: Some(level),
                    item: Some(NO_FOOD.to_owned()),
                    location: Some(NO_LOCATION.to_owned()),
                };
            }
            StatusUpdate::Level(level) => self.status.level = Some(level),
            StatusUpdate::Item(item) => self.status.item = Some(item),
            StatusUpdate::Location(location) => self.status.location = Some(location),
        }

        info!(
            "status is now FOODCON {}, food={}, location={}",
            self.status.level_or_default(),
            self.status.item_or_default(),
            self.status.location_or_default()
        );
    }
}
