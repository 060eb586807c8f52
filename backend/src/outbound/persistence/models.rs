//! Internal Diesel row structs.
//!
//! Rows stay inside the persistence layer; repositories convert them to
//! domain types before returning.

use chrono::NaiveTime;
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{friendships, profiles, schedules};

/// Row read from `profiles`, password hash included.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ProfileRow {
    pub id: Uuid,
    pub nickname: String,
    pub password_hash: String,
    pub invite_code: String,
}

/// Insertable profile.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = profiles)]
pub(crate) struct NewProfileRow<'a> {
    pub id: Uuid,
    pub nickname: &'a str,
    pub password_hash: &'a str,
    pub invite_code: &'a str,
}

/// Row read from `schedules`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = schedules)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct ScheduleRow {
    pub user_id: Uuid,
    pub day_of_week: i16,
    pub neighborhood: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Insertable schedule; also the upsert payload.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = schedules)]
pub(crate) struct NewScheduleRow<'a> {
    pub user_id: Uuid,
    pub day_of_week: i16,
    pub neighborhood: &'a str,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

/// Insertable friendship edge.
#[derive(Debug, Clone, Copy, Insertable)]
#[diesel(table_name = friendships)]
pub(crate) struct NewFriendshipRow {
    pub user_id: Uuid,
    pub friend_id: Uuid,
}
