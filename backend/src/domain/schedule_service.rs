//! Schedule domain service: per-weekday slot edits and schedule reads.
//!
//! Edits are serialized per user so a mutation and the reload that follows it
//! are never interleaved with another edit by the same user.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;
use tokio::sync::Mutex as AsyncMutex;
use tracing::debug;

use crate::domain::ports::{
    ScheduleCommand, ScheduleQuery, ScheduleRepository, ScheduleRepositoryError,
};
use crate::domain::{DayIndex, Error, Schedule, ScheduleDraft, ScheduleWithOwner, UserId};

pub(crate) fn map_schedule_error(error: ScheduleRepositoryError) -> Error {
    match error {
        ScheduleRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("schedule repository unavailable: {message}"))
        }
        ScheduleRepositoryError::Query { message } => {
            Error::internal(format!("schedule repository error: {message}"))
        }
    }
}

/// Per-user async locks. Idle entries are pruned on each acquisition.
#[derive(Default)]
struct UserLocks {
    locks: Mutex<HashMap<UserId, Arc<AsyncMutex<()>>>>,
}

impl UserLocks {
    fn lock_for(&self, user_id: &UserId) -> Arc<AsyncMutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        locks.retain(|_, lock| Arc::strong_count(lock) > 1);
        Arc::clone(locks.entry(user_id.clone()).or_default())
    }
}

/// Schedule service implementing [`ScheduleCommand`] and [`ScheduleQuery`].
#[derive(Clone)]
pub struct ScheduleService<S> {
    schedules: Arc<S>,
    locks: Arc<UserLocks>,
}

impl<S> ScheduleService<S> {
    /// Create a new service with the schedule repository.
    pub fn new(schedules: Arc<S>) -> Self {
        Self {
            schedules,
            locks: Arc::new(UserLocks::default()),
        }
    }
}

impl<S> ScheduleService<S>
where
    S: ScheduleRepository,
{
    async fn reload(&self, user_id: &UserId) -> Result<Vec<Schedule>, Error> {
        self.schedules
            .list_for_user(user_id)
            .await
            .map_err(map_schedule_error)
    }
}

#[async_trait]
impl<S> ScheduleCommand for ScheduleService<S>
where
    S: ScheduleRepository,
{
    async fn save_day(
        &self,
        user_id: &UserId,
        draft: ScheduleDraft,
    ) -> Result<Vec<Schedule>, Error> {
        let lock = self.locks.lock_for(user_id);
        let _guard = lock.lock().await;

        let schedule = draft.into_schedule(user_id.clone());
        self.schedules
            .upsert(&schedule)
            .await
            .map_err(map_schedule_error)?;
        debug!(user_id = %user_id, day = %schedule.day, "schedule saved");
        self.reload(user_id).await
    }

    async fn clear_day(&self, user_id: &UserId, day: DayIndex) -> Result<Vec<Schedule>, Error> {
        let lock = self.locks.lock_for(user_id);
        let _guard = lock.lock().await;

        self.schedules
            .delete(user_id, day)
            .await
            .map_err(map_schedule_error)?;
        debug!(user_id = %user_id, day = %day, "schedule cleared");
        self.reload(user_id).await
    }
}

#[async_trait]
impl<S> ScheduleQuery for ScheduleService<S>
where
    S: ScheduleRepository,
{
    async fn my_schedules(&self, user_id: &UserId) -> Result<Vec<Schedule>, Error> {
        self.reload(user_id).await
    }

    async fn friend_schedules(&self, user_id: &UserId) -> Result<Vec<ScheduleWithOwner>, Error> {
        self.schedules
            .list_for_friends_of(user_id)
            .await
            .map_err(map_schedule_error)
    }
}

#[cfg(test)]
#[path = "schedule_service_tests.rs"]
mod tests;
