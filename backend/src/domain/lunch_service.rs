//! Lunch dashboard service: today's matches and the week overview.
//!
//! "Today" is the clock's instant seen through one fixed UTC offset, so every
//! user of a deployment shares the same calendar day.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{Datelike, FixedOffset, NaiveDate};
use mockable::Clock;

use super::schedule_service::map_schedule_error;
use crate::domain::ports::{LunchQuery, ScheduleRepository, TodayOverview, WeekDay, WeekOverview};
use crate::domain::{
    DayIndex, Error, MAX_WEEK_OFFSET, NEIGHBORHOODS, Schedule, ScheduleWithOwner, UserId,
    build_map_markers, is_valid_week_offset, match_friends, resolve_weekday, schedule_for_day,
    todays_friends, week_dates,
};

/// Default offset in minutes east of UTC (+09:00).
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 540;

/// `"YYYY년 M월"` heading for the month containing `date`.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use lunchmate::domain::month_label;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 30).expect("valid date");
/// assert_eq!(month_label(date), "2026년 3월");
/// ```
pub fn month_label(date: NaiveDate) -> String {
    format!("{}년 {}월", date.year(), date.month())
}

/// Lunch service implementing [`LunchQuery`].
#[derive(Clone)]
pub struct LunchService<S> {
    schedules: Arc<S>,
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
}

impl<S> LunchService<S> {
    /// Create a new service reading "today" from `clock` at `offset`.
    pub fn new(schedules: Arc<S>, clock: Arc<dyn Clock>, offset: FixedOffset) -> Self {
        Self {
            schedules,
            clock,
            offset,
        }
    }

    fn local_date(&self) -> NaiveDate {
        self.clock.utc().with_timezone(&self.offset).date_naive()
    }
}

impl<S> LunchService<S>
where
    S: ScheduleRepository,
{
    async fn load(
        &self,
        user_id: &UserId,
    ) -> Result<(Vec<Schedule>, Vec<ScheduleWithOwner>), Error> {
        tokio::try_join!(
            self.schedules.list_for_user(user_id),
            self.schedules.list_for_friends_of(user_id),
        )
        .map_err(map_schedule_error)
    }
}

#[async_trait]
impl<S> LunchQuery for LunchService<S>
where
    S: ScheduleRepository,
{
    async fn today(&self, user_id: &UserId) -> Result<TodayOverview, Error> {
        let date = self.local_date();
        let day = resolve_weekday(date, 0);
        let (mine, friends) = self.load(user_id).await?;

        let my_schedule = schedule_for_day(&mine, day).cloned();
        let todays = todays_friends(&friends, day);
        let markers = build_map_markers(&todays, my_schedule.as_ref(), NEIGHBORHOODS);
        let friends = match_friends(&todays, my_schedule.as_ref());

        Ok(TodayOverview {
            date,
            day,
            my_schedule,
            friends,
            markers,
        })
    }

    async fn week(&self, user_id: &UserId, week_offset: i64) -> Result<WeekOverview, Error> {
        if !is_valid_week_offset(week_offset) {
            return Err(Error::invalid_request(format!(
                "week offset must be within {MAX_WEEK_OFFSET} weeks of the current one"
            )));
        }
        let today = self.local_date();
        let dates = week_dates(today, week_offset);
        let (mine, friends) = self.load(user_id).await?;

        let days = DayIndex::all()
            .zip(dates)
            .map(|(day, date)| WeekDay {
                day,
                date,
                is_today: date == today,
                my_schedule: schedule_for_day(&mine, day).cloned(),
                friend_count: todays_friends(&friends, day).len(),
            })
            .collect();

        Ok(WeekOverview {
            week_offset,
            is_current_week: week_offset == 0,
            month_label: month_label(dates[0]),
            days,
        })
    }
}

#[cfg(test)]
#[path = "lunch_service_tests.rs"]
mod tests;
