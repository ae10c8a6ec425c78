use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{MenuError, Result};

const MINUTES_PER_HOUR: u16 = 60;
const MINUTES_PER_DAY: u16 = 24 * MINUTES_PER_HOUR;

/// A time of day with minute resolution, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from hour (0-23) and minute (0-59); anything else is `InvalidTime`.
    pub fn new(hour: u8, minute: u8) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(MenuError::InvalidTime(format!(
                "{:02}:{:02} is not a valid time of day",
                hour, minute
            )));
        }
        Ok(Self(hour as u16 * MINUTES_PER_HOUR + minute as u16))
    }

    /// Parse a zero-padded 24-hour `HH:MM` string.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        let invalid = || {
            MenuError::InvalidTime(format!("'{}' is not in HH:MM 24-hour format", input))
        };

        let (hours, minutes) = trimmed.split_once(':').ok_or_else(invalid)?;
        if hours.len() != 2
            || minutes.len() != 2
            || !hours.bytes().all(|b| b.is_ascii_digit())
            || !minutes.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(invalid());
        }

        let hour: u8 = hours.parse().map_err(|_| invalid())?;
        let minute: u8 = minutes.parse().map_err(|_| invalid())?;
        Self::new(hour, minute)
    }

    /// Hour of the day, 0-23.
    pub fn hour(&self) -> u8 {
        (self.0 / MINUTES_PER_HOUR) as u8
    }

    /// Minute within the hour, 0-59.
    pub fn minute(&self) -> u8 {
        (self.0 % MINUTES_PER_HOUR) as u8
    }

    /// Raw value, 0-1439.
    pub fn minutes_since_midnight(&self) -> u16 {
        self.0
    }

    /// Inclusive range check.
    pub fn is_within(&self, start: TimeOfDay, end: TimeOfDay) -> bool {
        start <= *self && *self <= end
    }
}

/// Const constructor for the fixed window bounds.
pub(crate) const fn hm(hour: u16, minute: u16) -> TimeOfDay {
    assert!(hour * MINUTES_PER_HOUR + minute < MINUTES_PER_DAY);
    TimeOfDay(hour * MINUTES_PER_HOUR + minute)
}

impl FromStr for TimeOfDay {
    type Err = MenuError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = MenuError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}
