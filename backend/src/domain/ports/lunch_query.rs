//! Driving port for the lunch dashboard.
//!
//! The dashboard combines the user's own week with their friends' slots:
//! "today" shows who is out and who lines up, "week" summarises each day.

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::domain::{DayIndex, Error, FriendAvailability, MapMarker, Schedule, UserId};

/// Today's view for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct TodayOverview {
    /// Local calendar date used as "today".
    pub date: NaiveDate,
    pub day: DayIndex,
    /// The user's own slot today.
    pub my_schedule: Option<Schedule>,
    /// Friends scheduled today, each flagged against `my_schedule`.
    pub friends: Vec<FriendAvailability>,
    /// Map markers: the user first, then every friend listed above.
    pub markers: Vec<MapMarker>,
}

impl TodayOverview {
    /// Number of friends whose slot lines up with the user's.
    pub fn match_count(&self) -> usize {
        self.friends.iter().filter(|friend| friend.is_match).count()
    }
}

/// One day row in the week view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekDay {
    pub day: DayIndex,
    pub date: NaiveDate,
    pub is_today: bool,
    pub my_schedule: Option<Schedule>,
    /// Friends with a slot on this weekday.
    pub friend_count: usize,
}

/// A Monday-to-Sunday week relative to the current one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekOverview {
    pub week_offset: i64,
    pub is_current_week: bool,
    /// `"YYYY년 M월"` of the week's Monday.
    pub month_label: String,
    pub days: Vec<WeekDay>,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LunchQuery: Send + Sync {
    /// Today's friends, match flags and map markers.
    async fn today(&self, user_id: &UserId) -> Result<TodayOverview, Error>;

    /// The week `week_offset` weeks away from the current one.
    async fn week(&self, user_id: &UserId, week_offset: i64) -> Result<WeekOverview, Error>;
}
