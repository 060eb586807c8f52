//! Driving port for reading weekly schedules.

use async_trait::async_trait;

use crate::domain::{Error, Schedule, ScheduleWithOwner, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleQuery: Send + Sync {
    /// The user's own slots, ordered by day.
    async fn my_schedules(&self, user_id: &UserId) -> Result<Vec<Schedule>, Error>;

    /// Every friend's slots with owner nicknames.
    async fn friend_schedules(&self, user_id: &UserId) -> Result<Vec<ScheduleWithOwner>, Error>;
}
