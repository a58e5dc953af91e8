//! FOODCON alert levels.

use std::{fmt, str::FromStr};

/// A FOODCON level.
///
/// `One` is the highest urgency (food just landed), `Five` means stand down.
#[derive(Debug, Default, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum AlertLevel {
    One,
    Two,
    Three,
    Four,
    #[default]
    Five,
}

/// Returned when a token is not a level between 1 and 5.
#[derive(Debug, PartialEq, Eq)]
pub struct InvalidLevel;

impl AlertLevel {
    /// Numeric value of the level, between 1 and 5.
    pub fn number(self) -> u8 {
        match self {
            AlertLevel::One => 1,
            AlertLevel::Two => 2,
            AlertLevel::Three => 3,
            AlertLevel::Four => 4,
            AlertLevel::Five => 5,
        }
    }

    /// Whether this level clears the alert.
    pub fn is_stand_down(self) -> bool {
        self == AlertLevel::Five
    }
}

impl FromStr for AlertLevel {
    type Err = InvalidLevel;

    /// Parses a single digit. Anything else, including `"05"` or `" 1"`, is rejected.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "1" => Ok(AlertLevel::One),
            "2" => Ok(AlertLevel::Two),
            "3" => Ok(AlertLevel::Three),
            "4" => Ok(AlertLevel::Four),
            "5" => Ok(AlertLevel::Five),
            _ => Err(InvalidLevel),
        }
    }
}

impl fmt::Display for AlertLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}
