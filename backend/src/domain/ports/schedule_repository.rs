//! Port abstraction for weekly schedule persistence.
use async_trait::async_trait;

use crate::domain::{DayIndex, Schedule, ScheduleWithOwner, UserId};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by schedule repository adapters.
    pub enum ScheduleRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "schedule repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "schedule repository query failed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// All slots owned by `user_id`, ordered by day.
    async fn list_for_user(&self, user_id: &UserId)
    -> Result<Vec<Schedule>, ScheduleRepositoryError>;

    /// Create or replace the slot keyed by `(schedule.user_id, schedule.day)`.
    async fn upsert(&self, schedule: &Schedule) -> Result<(), ScheduleRepositoryError>;

    /// Remove the slot for `(user_id, day)`. Removing a missing slot succeeds.
    async fn delete(&self, user_id: &UserId, day: DayIndex)
    -> Result<(), ScheduleRepositoryError>;

    /// Every slot owned by a friend of `user_id`, joined with the owner's
    /// nickname and ordered by nickname, then day.
    async fn list_for_friends_of(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ScheduleWithOwner>, ScheduleRepositoryError>;
}
