//! ActionLevel - Difficulty of a logged value-driven action (1-5)

use serde::{Deserialize, Serialize};

/// Action level on the fixed 1..=5 scale
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub struct ActionLevel(u8);

impl ActionLevel {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    pub fn new(level: u8) -> Result<Self, String> {
        if (Self::MIN..=Self::MAX).contains(&level) {
            Ok(Self(level))
        } else {
            Err(format!(
                "Action level must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                level
            ))
        }
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// XP granted for logging an action at this level
    pub fn xp(self) -> u64 {
        match self.0 {
            1 => 5,
            2 => 15,
            3 => 30,
            4 => 50,
            _ => 100,
        }
    }
}

impl TryFrom<u8> for ActionLevel {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActionLevel> for u8 {
    fn from(level: ActionLevel) -> Self {
        level.0
    }
}

impl std::fmt::Display for ActionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Lv.{}", self.0)
    }
}
