//! Lunch dashboard handlers.
//!
//! ```text
//! GET /api/v1/lunch/today
//! GET /api/v1/lunch/week?offset=-1
//! ```

use actix_web::{get, web};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::domain::ports::{TodayOverview, WeekDay, WeekOverview};
use crate::domain::{Error, FriendAvailability, MapMarker};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{FriendScheduleResponse, ScheduleResponse};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_week_offset;

/// A friend out for lunch today and whether they line up with the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FriendTodayResponse {
    #[serde(flatten)]
    pub entry: FriendScheduleResponse,
    pub is_match: bool,
}

impl From<&FriendAvailability> for FriendTodayResponse {
    fn from(friend: &FriendAvailability) -> Self {
        Self {
            entry: FriendScheduleResponse::from(&friend.entry),
            is_match: friend.is_match,
        }
    }
}

/// A point to plot on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkerResponse {
    pub lat: f64,
    pub lng: f64,
    #[schema(example = "나 (강남)")]
    pub label: String,
    pub is_self: bool,
}

impl From<&MapMarker> for MarkerResponse {
    fn from(marker: &MapMarker) -> Self {
        Self {
            lat: marker.lat,
            lng: marker.lng,
            label: marker.label.clone(),
            is_self: marker.is_self,
        }
    }
}

/// Today's dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TodayResponse {
    #[schema(example = "2026-10-14")]
    pub date: String,
    pub day_of_week: u8,
    #[schema(example = "수")]
    pub day_name: String,
    pub my_schedule: Option<ScheduleResponse>,
    pub friends: Vec<FriendTodayResponse>,
    pub match_count: usize,
    pub markers: Vec<MarkerResponse>,
}

impl From<&TodayOverview> for TodayResponse {
    fn from(overview: &TodayOverview) -> Self {
        Self {
            date: overview.date.to_string(),
            day_of_week: overview.day.get(),
            day_name: overview.day.name().to_owned(),
            my_schedule: overview.my_schedule.as_ref().map(ScheduleResponse::from),
            friends: overview.friends.iter().map(FriendTodayResponse::from).collect(),
            match_count: overview.match_count(),
            markers: overview.markers.iter().map(MarkerResponse::from).collect(),
        }
    }
}

/// One day of the week view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekDayResponse {
    pub day_of_week: u8,
    pub day_name: String,
    #[schema(example = "2026-10-12")]
    pub date: String,
    pub is_today: bool,
    pub my_schedule: Option<ScheduleResponse>,
    pub friend_count: usize,
}

impl From<&WeekDay> for WeekDayResponse {
    fn from(day: &WeekDay) -> Self {
        Self {
            day_of_week: day.day.get(),
            day_name: day.day.name().to_owned(),
            date: day.date.to_string(),
            is_today: day.is_today,
            my_schedule: day.my_schedule.as_ref().map(ScheduleResponse::from),
            friend_count: day.friend_count,
        }
    }
}

/// Seven days, Monday first, around the requested week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WeekResponse {
    pub week_offset: i64,
    pub is_current_week: bool,
    #[schema(example = "2026년 10월")]
    pub month_label: String,
    pub days: Vec<WeekDayResponse>,
}

impl From<&WeekOverview> for WeekResponse {
    fn from(overview: &WeekOverview) -> Self {
        Self {
            week_offset: overview.week_offset,
            is_current_week: overview.is_current_week,
            month_label: overview.month_label.clone(),
            days: overview.days.iter().map(WeekDayResponse::from).collect(),
        }
    }
}

/// Query string for the week view.
#[derive(Debug, Deserialize, IntoParams)]
pub struct WeekQuery {
    /// Whole weeks relative to the current one, at most 520 either way;
    /// defaults to 0.
    #[param(example = "-1")]
    pub offset: Option<String>,
}

/// Who is out for lunch today and who lines up with the caller.
#[utoipa::path(
    get,
    path = "/api/v1/lunch/today",
    responses(
        (status = 200, description = "Today's dashboard", body = TodayResponse),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["lunch"],
    operation_id = "lunchToday"
)]
#[get("/lunch/today")]
pub async fn today(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<TodayResponse>> {
    let user_id = session.require_user_id()?;
    let overview = state.lunch.today(&user_id).await?;
    Ok(web::Json(TodayResponse::from(&overview)))
}

/// The caller's week with per-day friend counts.
#[utoipa::path(
    get,
    path = "/api/v1/lunch/week",
    params(WeekQuery),
    responses(
        (status = 200, description = "Week overview", body = WeekResponse),
        (status = 400, description = "Malformed offset", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["lunch"],
    operation_id = "lunchWeek"
)]
#[get("/lunch/week")]
pub async fn week(
    state: web::Data<HttpState>,
    session: SessionContext,
    query: web::Query<WeekQuery>,
) -> ApiResult<web::Json<WeekResponse>> {
    let user_id = session.require_user_id()?;
    let offset = parse_week_offset(query.offset.as_deref())?;
    let overview = state.lunch.week(&user_id, offset).await?;
    Ok(web::Json(WeekResponse::from(&overview)))
}

#[cfg(test)]
mod tests;
