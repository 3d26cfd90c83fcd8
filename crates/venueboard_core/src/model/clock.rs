//! Minute-of-day time values.
//!
//! # Responsibility
//! - Parse zero-padded `HH:MM` strings into a canonical minute-of-day value.
//! - Provide half-open time windows used by conflict checks and layout.
//!
//! # Invariants
//! - `ClockTime` is always within `00:00..=23:59`.
//! - `TimeWindow::start < TimeWindow::end`; empty or reversed windows cannot
//!   be constructed.

use chrono::{NaiveTime, Timelike};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

static HH_MM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{2}):(\d{2})$").expect("valid HH:MM regex"));

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u16 = 24 * 60;

/// Time of day stored as minutes since midnight.
///
/// Serialized as the zero-padded `"HH:MM"` string used by the persisted
/// collections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ClockTime(u16);

/// Parse failure for `HH:MM` input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClockTimeError {
    /// Input is not two digits, a colon, and two digits.
    Malformed(String),
    /// Hour or minute is out of range.
    OutOfRange { hour: u16, minute: u16 },
}

impl Display for ClockTimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Malformed(value) => write!(f, "expected HH:MM time, got `{value}`"),
            Self::OutOfRange { hour, minute } => {
                write!(f, "time {hour:02}:{minute:02} is outside 00:00..23:59")
            }
        }
    }
}

impl Error for ClockTimeError {}

impl ClockTime {
    /// Builds a time from hour and minute components.
    pub fn from_hm(hour: u16, minute: u16) -> Result<Self, ClockTimeError> {
        if hour > 23 || minute > 59 {
            return Err(ClockTimeError::OutOfRange { hour, minute });
        }
        Ok(Self(hour * 60 + minute))
    }

    /// Builds a time from minutes since midnight; `None` past 23:59.
    pub fn from_minutes(minutes: u16) -> Option<Self> {
        (minutes < MINUTES_PER_DAY).then_some(Self(minutes))
    }

    /// For literal in-range constants only.
    pub(crate) const fn from_minutes_unchecked(minutes: u16) -> Self {
        Self(minutes)
    }

    /// Truncates a wall-clock time to minute precision.
    pub fn from_naive(time: NaiveTime) -> Self {
        // Timelike guarantees hour < 24 and minute < 60.
        Self((time.hour() * 60 + time.minute()) as u16)
    }

    /// Minutes elapsed since midnight.
    pub fn minutes(self) -> u16 {
        self.0
    }

    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    pub fn minute(self) -> u16 {
        self.0 % 60
    }
}

impl FromStr for ClockTime {
    type Err = ClockTimeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let caps = HH_MM_RE
            .captures(value)
            .ok_or_else(|| ClockTimeError::Malformed(value.to_string()))?;
        let hour = caps[1]
            .parse::<u16>()
            .map_err(|_| ClockTimeError::Malformed(value.to_string()))?;
        let minute = caps[2]
            .parse::<u16>()
            .map_err(|_| ClockTimeError::Malformed(value.to_string()))?;
        Self::from_hm(hour, minute)
    }
}

impl TryFrom<String> for ClockTime {
    type Error = ClockTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ClockTime> for String {
    fn from(value: ClockTime) -> Self {
        value.to_string()
    }
}

impl Display for ClockTime {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

/// Half-open interval `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeWindow {
    start: ClockTime,
    end: ClockTime,
}

impl TimeWindow {
    /// Returns `None` unless `start < end`.
    pub fn new(start: ClockTime, end: ClockTime) -> Option<Self> {
        (start < end).then_some(Self { start, end })
    }

    pub fn start(self) -> ClockTime {
        self.start
    }

    pub fn end(self) -> ClockTime {
        self.end
    }

    /// Always positive.
    pub fn duration_minutes(self) -> u16 {
        self.end.minutes() - self.start.minutes()
    }

    /// Half-open overlap test: touching endpoints do not overlap.
    pub fn overlaps(self, other: TimeWindow) -> bool {
        self.start < other.end && self.end > other.start
    }
}

impl Display for TimeWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.start, self.end)
    }
}
