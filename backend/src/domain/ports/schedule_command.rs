//! Driving port for editing a user's weekly schedule.
//!
//! Every mutation answers with the owner's refreshed week so clients never
//! need a second round trip.

use async_trait::async_trait;

use crate::domain::{DayIndex, Error, Schedule, ScheduleDraft, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleCommand: Send + Sync {
    /// Create or replace the slot for `draft.day`.
    async fn save_day(&self, user_id: &UserId, draft: ScheduleDraft)
    -> Result<Vec<Schedule>, Error>;

    /// Remove the slot for `day`, if any.
    async fn clear_day(&self, user_id: &UserId, day: DayIndex) -> Result<Vec<Schedule>, Error>;
}
