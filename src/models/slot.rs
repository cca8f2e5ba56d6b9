//! Availability slot model and related types.
//!
//! This module defines [`TimeOfDay`] and [`AvailabilitySlot`] for representing
//! the weekly availability windows of students and tutors.

use std::fmt;

use chrono::{NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{EngineError, EngineResult};
use crate::matching::{parse_weekday, weekday_label};

/// Number of minutes in a day; valid [`TimeOfDay`] values are below this.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// A clock time within a single day, stored as minutes since midnight.
///
/// Serialized as an `HH:MM` string (`00:00` to `23:59`).
///
/// # Examples
///
/// ```
/// use tutor_match::models::TimeOfDay;
///
/// let time = TimeOfDay::parse("18:30").unwrap();
/// assert_eq!(time.minutes(), 18 * 60 + 30);
/// assert_eq!(time.to_string(), "18:30");
/// assert!(TimeOfDay::parse("8h30").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Creates a time from minutes since midnight.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTime`] when `minutes` is 1440 or more.
    pub fn from_minutes(minutes: u16) -> EngineResult<Self> {
        if minutes >= MINUTES_PER_DAY {
            return Err(EngineError::InvalidTime {
                value: minutes.to_string(),
                message: format!("must be below {} minutes", MINUTES_PER_DAY),
            });
        }
        Ok(Self { minutes })
    }

    /// Parses a strict two-digit `HH:MM` string.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidTime`] when the value is not of the
    /// form `HH:MM` or names an impossible time such as `24:00`.
    pub fn parse(value: &str) -> EngineResult<Self> {
        let well_shaped = value.len() == 5
            && value.bytes().enumerate().all(|(i, b)| {
                if i == 2 {
                    b == b':'
                } else {
                    b.is_ascii_digit()
                }
            });
        if !well_shaped {
            return Err(EngineError::InvalidTime {
                value: value.to_string(),
                message: "expected HH:MM".to_string(),
            });
        }

        let time =
            NaiveTime::parse_from_str(value, "%H:%M").map_err(|e| EngineError::InvalidTime {
                value: value.to_string(),
                message: e.to_string(),
            })?;
        Ok(Self::from(time))
    }

    /// Returns the number of minutes since midnight.
    pub fn minutes(&self) -> u16 {
        self.minutes
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(time: NaiveTime) -> Self {
        Self {
            minutes: (time.hour() * 60 + time.minute()) as u16,
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.minutes / 60, self.minutes % 60)
    }
}

impl Serialize for TimeOfDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TimeOfDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Self::parse(&value).map_err(serde::de::Error::custom)
    }
}

/// A weekly availability window on a single weekday.
///
/// Deserialization checks that each time is well formed but not that
/// `start_time < end_time`; use [`AvailabilitySlot::validate`] for that.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilitySlot {
    /// The day of the week.
    #[serde(with = "weekday_serde")]
    pub day: Weekday,
    /// The start of the window.
    pub start_time: TimeOfDay,
    /// The end of the window (exclusive).
    pub end_time: TimeOfDay,
}

impl AvailabilitySlot {
    /// Creates a slot, rejecting equal or inverted bounds.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::Weekday;
    /// use tutor_match::models::{AvailabilitySlot, TimeOfDay};
    ///
    /// let start = TimeOfDay::parse("18:00").unwrap();
    /// let end = TimeOfDay::parse("20:00").unwrap();
    /// assert!(AvailabilitySlot::new(Weekday::Mon, start, end).is_ok());
    /// assert!(AvailabilitySlot::new(Weekday::Mon, end, start).is_err());
    /// ```
    pub fn new(day: Weekday, start_time: TimeOfDay, end_time: TimeOfDay) -> EngineResult<Self> {
        let slot = Self {
            day,
            start_time,
            end_time,
        };
        slot.validate()?;
        Ok(slot)
    }

    /// Parses a slot from its textual parts, e.g. `("Lundi", "18:00", "20:00")`.
    pub fn parse(day: &str, start_time: &str, end_time: &str) -> EngineResult<Self> {
        Self::new(
            parse_weekday(day)?,
            TimeOfDay::parse(start_time)?,
            TimeOfDay::parse(end_time)?,
        )
    }

    /// Returns true if the slot starts strictly before it ends.
    pub fn is_well_formed(&self) -> bool {
        self.start_time < self.end_time
    }

    /// Checks the `start_time < end_time` invariant.
    pub fn validate(&self) -> EngineResult<()> {
        if self.is_well_formed() {
            Ok(())
        } else {
            Err(EngineError::InvalidSlot {
                slot: self.to_string(),
            })
        }
    }
}

impl fmt::Display for AvailabilitySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{}",
            weekday_label(self.day),
            self.start_time,
            self.end_time
        )
    }
}

mod weekday_serde {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::matching::{parse_weekday, weekday_label};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(weekday_label(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let value = String::deserialize(deserializer)?;
        parse_weekday(&value).map_err(serde::de::Error::custom)
    }
}
