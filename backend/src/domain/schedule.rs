//! Weekly lunch schedule types: weekday indices, times of day, and slots.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::neighborhood::NeighborhoodId;
use super::user::{Nickname, UserId};

/// Short weekday names, Monday first.
pub const DAY_NAMES: [&str; 7] = ["월", "화", "수", "목", "금", "토", "일"];

/// Errors raised when parsing schedule values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleValidationError {
    #[error("day of week must be between 0 (Monday) and 6 (Sunday), got {0}")]
    DayOutOfRange(i64),
    #[error("time must be HH:MM or HH:MM:SS, got '{0}'")]
    MalformedTime(String),
}

/// Canonical weekday index: Monday = 0 through Sunday = 6.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct DayIndex(u8);

impl DayIndex {
    /// Monday.
    pub const MONDAY: Self = Self(0);

    /// Validate a raw index.
    pub fn new(value: i64) -> Result<Self, ScheduleValidationError> {
        u8::try_from(value)
            .ok()
            .filter(|day| *day <= 6)
            .map(Self)
            .ok_or(ScheduleValidationError::DayOutOfRange(value))
    }

    /// Weekday of a calendar date, independent of any Sunday-first convention.
    ///
    /// # Examples
    /// ```
    /// use chrono::NaiveDate;
    /// use lunchmate::domain::DayIndex;
    ///
    /// let sunday = NaiveDate::from_ymd_opt(2026, 10, 18).expect("valid date");
    /// assert_eq!(DayIndex::of_date(sunday).get(), 6);
    /// ```
    pub fn of_date(date: NaiveDate) -> Self {
        // Sunday-first numbering (0 = Sunday) remapped to Monday-first.
        let native = date.weekday().num_days_from_sunday();
        let monday_first = (native + 6) % 7;
        Self(u8::try_from(monday_first).unwrap_or(0))
    }

    /// Raw index.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Short display name.
    pub fn name(self) -> &'static str {
        DAY_NAMES.get(usize::from(self.0)).copied().unwrap_or("?")
    }

    /// All weekdays, Monday first.
    pub fn all() -> impl Iterator<Item = Self> {
        (0u8..7).map(Self)
    }
}

impl From<DayIndex> for u8 {
    fn from(value: DayIndex) -> Self {
        value.0
    }
}

impl TryFrom<i64> for DayIndex {
    type Error = ScheduleValidationError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for DayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Time of day at minute resolution, stored as minutes since midnight.
///
/// Parses `HH:MM` or `HH:MM:SS` (seconds truncated) and always renders
/// zero-padded `HH:MM`, so comparisons never depend on string padding.
///
/// # Examples
/// ```
/// use lunchmate::domain::TimeOfDay;
///
/// let noon: TimeOfDay = "12:00:59".parse().expect("valid time");
/// assert_eq!(noon.to_string(), "12:00");
/// assert!("9:30".parse::<TimeOfDay>().expect("valid time") < noon);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(u16);

impl TimeOfDay {
    /// Build from hour and minute, if both are in range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        if hour > 23 || minute > 59 {
            return None;
        }
        u16::try_from(hour * 60 + minute).ok().map(Self)
    }

    /// Hour component.
    pub fn hour(self) -> u16 {
        self.0 / 60
    }

    /// Minute component.
    pub fn minute(self) -> u16 {
        self.0 % 60
    }

    /// Convert to a chrono time (seconds zero).
    pub fn to_naive_time(self) -> NaiveTime {
        NaiveTime::from_hms_opt(u32::from(self.hour()), u32::from(self.minute()), 0)
            .unwrap_or(NaiveTime::MIN)
    }
}

impl From<NaiveTime> for TimeOfDay {
    fn from(value: NaiveTime) -> Self {
        Self::from_hm(value.hour(), value.minute()).unwrap_or(Self(0))
    }
}

fn parse_component(raw: &str, max: u32) -> Option<u32> {
    if raw.is_empty() || raw.len() > 2 || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse::<u32>().ok().filter(|value| *value <= max)
}

impl FromStr for TimeOfDay {
    type Err = ScheduleValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || ScheduleValidationError::MalformedTime(s.to_owned());
        let mut parts = s.trim().split(':');
        let hour = parts.next().and_then(|raw| parse_component(raw, 23));
        let minute = parts
            .next()
            .filter(|raw| raw.len() == 2)
            .and_then(|raw| parse_component(raw, 59));
        let seconds_ok = match parts.next() {
            None => true,
            Some(raw) => raw.len() == 2 && parse_component(raw, 59).is_some(),
        };
        if parts.next().is_some() || !seconds_ok {
            return Err(malformed());
        }
        match (hour, minute) {
            (Some(hour), Some(minute)) => Self::from_hm(hour, minute).ok_or_else(malformed),
            _ => Err(malformed()),
        }
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ScheduleValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
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

/// One recurring weekly lunch slot.
///
/// At most one exists per `(user_id, day)`. Nothing forces
/// `start < end`; such windows simply never overlap anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub user_id: UserId,
    pub day: DayIndex,
    pub neighborhood: NeighborhoodId,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

/// Validated input for creating or replacing a weekday slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleDraft {
    pub day: DayIndex,
    pub neighborhood: NeighborhoodId,
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl ScheduleDraft {
    /// Bind the draft to its owner.
    pub fn into_schedule(self, user_id: UserId) -> Schedule {
        Schedule {
            user_id,
            day: self.day,
            neighborhood: self.neighborhood,
            start: self.start,
            end: self.end,
        }
    }
}

/// A friend's schedule together with the owner's nickname.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduleWithOwner {
    pub schedule: Schedule,
    pub owner_nickname: Nickname,
}
