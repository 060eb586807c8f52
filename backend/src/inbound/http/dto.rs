//! Response bodies shared by several endpoints.
//!
//! Domain types stay free of wire concerns; these camelCase views are what
//! clients actually receive.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{
    NEIGHBORHOODS, Schedule, ScheduleWithOwner, User, UserSummary, find_neighborhood,
};

/// The signed-in user's own profile, including the invite code to share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "김점심")]
    pub nickname: String,
    #[schema(example = "k3x9qa")]
    pub invite_code: String,
}

impl From<&User> for ProfileResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id().to_string(),
            nickname: user.nickname().to_string(),
            invite_code: user.invite_code().to_string(),
        }
    }
}

/// Public view of another user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserSummaryResponse {
    pub id: String,
    pub nickname: String,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(summary: UserSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            nickname: summary.nickname.to_string(),
        }
    }
}

/// One weekly lunch slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleResponse {
    /// Monday = 0 through Sunday = 6.
    #[schema(example = 2)]
    pub day_of_week: u8,
    #[schema(example = "수")]
    pub day_name: String,
    #[schema(example = "gangnam")]
    pub neighborhood: String,
    /// Display name, absent when the id has left the catalog.
    #[schema(example = "강남")]
    pub neighborhood_name: Option<String>,
    #[schema(example = "12:00")]
    pub start_time: String,
    #[schema(example = "13:00")]
    pub end_time: String,
}

impl From<&Schedule> for ScheduleResponse {
    fn from(schedule: &Schedule) -> Self {
        Self {
            day_of_week: schedule.day.get(),
            day_name: schedule.day.name().to_owned(),
            neighborhood: schedule.neighborhood.to_string(),
            neighborhood_name: find_neighborhood(NEIGHBORHOODS, &schedule.neighborhood)
                .map(|hood| hood.name.to_owned()),
            start_time: schedule.start.to_string(),
            end_time: schedule.end.to_string(),
        }
    }
}

/// A friend's slot with the owner's nickname.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendScheduleResponse {
    pub user_id: String,
    pub nickname: String,
    pub schedule: ScheduleResponse,
}

impl From<&ScheduleWithOwner> for FriendScheduleResponse {
    fn from(entry: &ScheduleWithOwner) -> Self {
        Self {
            user_id: entry.schedule.user_id.to_string(),
            nickname: entry.owner_nickname.to_string(),
            schedule: ScheduleResponse::from(&entry.schedule),
        }
    }
}

pub(crate) fn schedule_list(schedules: &[Schedule]) -> Vec<ScheduleResponse> {
    schedules.iter().map(ScheduleResponse::from).collect()
}
