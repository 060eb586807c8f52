//! Invite handlers.
//!
//! ```text
//! GET  /api/v1/invites/{code}
//! POST /api/v1/invites/{code}/accept
//! ```
//!
//! Looking an invite up is public so a landing page can show who sent it;
//! accepting requires a session.

use actix_web::{get, post, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::UserSummaryResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_invite_code;

/// Show who owns an invite code.
#[utoipa::path(
    get,
    path = "/api/v1/invites/{code}",
    params(("code" = String, Path, description = "Invite code", example = "k3x9qa")),
    responses(
        (status = 200, description = "Inviter", body = UserSummaryResponse),
        (status = 400, description = "Malformed code", body = Error),
        (status = 404, description = "Invite code not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["friends"],
    operation_id = "resolveInvite",
    security([])
)]
#[get("/invites/{code}")]
pub async fn resolve_invite(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserSummaryResponse>> {
    let code = parse_invite_code(&path)?;
    let inviter = state.identity_query.resolve_invite(&code).await?;
    Ok(web::Json(inviter.into()))
}

/// Befriend the owner of an invite code.
///
/// Accepting the same invite twice is harmless and answers the same way.
#[utoipa::path(
    post,
    path = "/api/v1/invites/{code}/accept",
    params(("code" = String, Path, description = "Invite code", example = "k3x9qa")),
    responses(
        (status = 200, description = "Now friends with the inviter", body = UserSummaryResponse),
        (status = 400, description = "Malformed code or own invite", body = Error),
        (status = 401, description = "Login required", body = Error),
        (status = 404, description = "Invite code not found", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["friends"],
    operation_id = "acceptInvite"
)]
#[post("/invites/{code}/accept")]
pub async fn accept_invite(
    state: web::Data<HttpState>,
    session: SessionContext,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserSummaryResponse>> {
    let user_id = session.require_user_id()?;
    let code = parse_invite_code(&path)?;
    let inviter = state.friendships.accept_invite(&user_id, &code).await?;
    Ok(web::Json(inviter.into()))
}
