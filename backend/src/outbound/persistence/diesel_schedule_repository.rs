//! PostgreSQL-backed `ScheduleRepository` over the `schedules` table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::upsert::excluded;
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{ScheduleRepository, ScheduleRepositoryError};
use crate::domain::{
    DayIndex, NeighborhoodId, Nickname, Schedule, ScheduleWithOwner, TimeOfDay, UserId,
};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::{NewScheduleRow, ScheduleRow};
use super::pool::{DbPool, PoolError};
use super::schema::{friendships, profiles, schedules};

/// Diesel-backed implementation of [`ScheduleRepository`].
#[derive(Clone)]
pub struct DieselScheduleRepository {
    pool: DbPool,
}

impl DieselScheduleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> ScheduleRepositoryError {
    map_pool_error(error, ScheduleRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> ScheduleRepositoryError {
    map_diesel_error(
        error,
        ScheduleRepositoryError::query,
        ScheduleRepositoryError::connection,
    )
}

fn row_to_schedule(row: ScheduleRow) -> Result<Schedule, ScheduleRepositoryError> {
    let day = DayIndex::new(i64::from(row.day_of_week)).map_err(|err| {
        warn!(user_id = %row.user_id, error = %err, "stored schedule has invalid day");
        ScheduleRepositoryError::query("stored schedule has invalid day")
    })?;
    let neighborhood = NeighborhoodId::new(row.neighborhood).map_err(|err| {
        warn!(user_id = %row.user_id, error = %err, "stored schedule has invalid neighborhood");
        ScheduleRepositoryError::query("stored schedule has invalid neighborhood")
    })?;
    Ok(Schedule {
        user_id: UserId::from_uuid(row.user_id),
        day,
        neighborhood,
        start: TimeOfDay::from(row.start_time),
        end: TimeOfDay::from(row.end_time),
    })
}

#[async_trait]
impl ScheduleRepository for DieselScheduleRepository {
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Schedule>, ScheduleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<ScheduleRow> = schedules::table
            .filter(schedules::user_id.eq(user_id.as_uuid()))
            .order(schedules::day_of_week.asc())
            .select(ScheduleRow::as_select())
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        rows.into_iter().map(row_to_schedule).collect()
    }

    async fn upsert(&self, schedule: &Schedule) -> Result<(), ScheduleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = NewScheduleRow {
            user_id: *schedule.user_id.as_uuid(),
            day_of_week: i16::from(schedule.day.get()),
            neighborhood: schedule.neighborhood.as_ref(),
            start_time: schedule.start.to_naive_time(),
            end_time: schedule.end.to_naive_time(),
        };

        diesel::insert_into(schedules::table)
            .values(&row)
            .on_conflict((schedules::user_id, schedules::day_of_week))
            .do_update()
            .set((
                schedules::neighborhood.eq(excluded(schedules::neighborhood)),
                schedules::start_time.eq(excluded(schedules::start_time)),
                schedules::end_time.eq(excluded(schedules::end_time)),
                schedules::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(diesel_error)
    }

    async fn delete(&self, user_id: &UserId, day: DayIndex) -> Result<(), ScheduleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        diesel::delete(
            schedules::table
                .filter(schedules::user_id.eq(user_id.as_uuid()))
                .filter(schedules::day_of_week.eq(i16::from(day.get()))),
        )
        .execute(&mut conn)
        .await
        .map(|_| ())
        .map_err(diesel_error)
    }

    async fn list_for_friends_of(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ScheduleWithOwner>, ScheduleRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let friend_ids = friendships::table
            .filter(friendships::user_id.eq(*user_id.as_uuid()))
            .select(friendships::friend_id);
        let rows: Vec<(ScheduleRow, String)> = schedules::table
            .inner_join(profiles::table)
            .filter(schedules::user_id.eq_any(friend_ids))
            .order((profiles::nickname.asc(), schedules::day_of_week.asc()))
            .select((ScheduleRow::as_select(), profiles::nickname))
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows.into_iter()
            .map(|(row, nickname)| {
                let owner_nickname = Nickname::new(&nickname)
                    .map_err(|_| ScheduleRepositoryError::query("stored nickname is invalid"))?;
                Ok(ScheduleWithOwner {
                    schedule: row_to_schedule(row)?,
                    owner_nickname,
                })
            })
            .collect()
    }
}
