//! Weekly schedule handlers.
//!
//! ```text
//! GET    /api/v1/schedules/me
//! PUT    /api/v1/schedules/me/{day}   {"neighborhood","startTime","endTime"}
//! DELETE /api/v1/schedules/me/{day}
//! GET    /api/v1/friends/schedules
//! ```
//!
//! Mutations answer with the caller's refreshed week.

use actix_web::{delete, get, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Error, ScheduleDraft};
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::{FriendScheduleResponse, ScheduleResponse, schedule_list};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    END_TIME, START_TIME, parse_day, parse_neighborhood, parse_time,
};

/// Body for saving one weekday.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    #[schema(example = "gangnam")]
    pub neighborhood: String,
    #[schema(example = "12:00")]
    pub start_time: String,
    #[schema(example = "13:00")]
    pub end_time: String,
}

fn parse_draft(day: &str, body: &ScheduleRequest) -> Result<ScheduleDraft, Error> {
    Ok(ScheduleDraft {
        day: parse_day(day)?,
        neighborhood: parse_neighborhood(&body.neighborhood)?,
        start: parse_time(START_TIME, &body.start_time)?,
        end: parse_time(END_TIME, &body.end_time)?,
    })
}

/// The caller's schedules, Monday first.
#[utoipa::path(
    get,
    path = "/api/v1/schedules/me",
    responses(
        (status = 200, description = "Own schedules", body = [ScheduleResponse]),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["schedules"],
    operation_id = "mySchedules"
)]
#[get("/schedules/me")]
pub async fn my_schedules(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<ScheduleResponse>>> {
    let user_id = session.require_user_id()?;
    let schedules = state.schedules_query.my_schedules(&user_id).await?;
    Ok(web::Json(schedule_list(&schedules)))
}

/// Create or replace the caller's slot for one weekday.
#[utoipa::path(
    put,
    path = "/api/v1/schedules/me/{day}",
    params(("day" = u8, Path, description = "Weekday, Monday = 0 through Sunday = 6")),
    request_body = ScheduleRequest,
    responses(
        (status = 200, description = "Refreshed week", body = [ScheduleResponse]),
        (status = 400, description = "Invalid day, time, or neighborhood", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["schedules"],
    operation_id = "saveSchedule"
)]
#[put("/schedules/me/{day}")]
pub async fn save_schedule(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
    payload: web::Json<ScheduleRequest>,
) -> ApiResult<web::Json<Vec<ScheduleResponse>>> {
    let user_id = session.require_user_id()?;
    let draft = parse_draft(&path, &payload)?;
    let schedules = state.schedules.save_day(&user_id, draft).await?;
    Ok(web::Json(schedule_list(&schedules)))
}

/// Remove the caller's slot for one weekday. Clearing an empty day is a no-op.
#[utoipa::path(
    delete,
    path = "/api/v1/schedules/me/{day}",
    params(("day" = u8, Path, description = "Weekday, Monday = 0 through Sunday = 6")),
    responses(
        (status = 200, description = "Refreshed week", body = [ScheduleResponse]),
        (status = 400, description = "Invalid day", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["schedules"],
    operation_id = "clearSchedule"
)]
#[delete("/schedules/me/{day}")]
pub async fn clear_schedule(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<ScheduleResponse>>> {
    let user_id = session.require_user_id()?;
    let day = parse_day(&path)?;
    let schedules = state.schedules.clear_day(&user_id, day).await?;
    Ok(web::Json(schedule_list(&schedules)))
}

/// Every friend's weekly schedule, ordered by nickname then day.
#[utoipa::path(
    get,
    path = "/api/v1/friends/schedules",
    responses(
        (status = 200, description = "Friend schedules", body = [FriendScheduleResponse]),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["schedules"],
    operation_id = "friendSchedules"
)]
#[get("/friends/schedules")]
pub async fn friend_schedules(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<FriendScheduleResponse>>> {
    let user_id = session.require_user_id()?;
    let entries = state.schedules_query.friend_schedules(&user_id).await?;
    Ok(web::Json(entries.iter().map(FriendScheduleResponse::from).collect()))
}
