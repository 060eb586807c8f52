//! Account handlers: signup, login, logout, and the caller's profile.
//!
//! ```text
//! POST /api/v1/signup {"nickname":"김점심","password":"secret"}
//! POST /api/v1/login  {"nickname":"김점심","password":"secret"}
//! POST /api/v1/logout
//! GET  /api/v1/users/me
//! ```

use actix_web::{HttpResponse, get, post, web};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::ProfileResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_credentials;

/// Credentials body shared by signup and login.
#[derive(Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CredentialsRequest {
    #[schema(example = "김점심")]
    pub nickname: String,
    #[schema(example = "secret")]
    pub password: String,
}

/// Create an account and sign it in.
#[utoipa::path(
    post,
    path = "/api/v1/signup",
    request_body = CredentialsRequest,
    responses(
        (status = 201, description = "Account created", body = ProfileResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 409, description = "Nickname already taken", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "signup",
    security([])
)]
#[post("/signup")]
pub async fn signup(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<HttpResponse> {
    let credentials = parse_credentials(&payload.nickname, &payload.password)?;
    let user = state.identity.sign_up(&credentials).await?;
    session.persist_user(user.id())?;
    info!(user_id = %user.id(), "session started after signup");
    Ok(HttpResponse::Created().json(ProfileResponse::from(&user)))
}

/// Verify credentials and start a session.
#[utoipa::path(
    post,
    path = "/api/v1/login",
    request_body = CredentialsRequest,
    responses(
        (status = 200, description = "Signed in", body = ProfileResponse,
            headers(("Set-Cookie" = String, description = "Session cookie"))),
        (status = 400, description = "Invalid request", body = Error),
        (status = 401, description = "Incorrect password", body = Error),
        (status = 404, description = "Nickname not found", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "login",
    security([])
)]
#[post("/login")]
pub async fn login(
    state: web::Data<HttpState>,
    session: SessionContext,
    payload: web::Json<CredentialsRequest>,
) -> ApiResult<web::Json<ProfileResponse>> {
    let credentials = parse_credentials(&payload.nickname, &payload.password)?;
    let user = state.identity.sign_in(&credentials).await?;
    session.persist_user(user.id())?;
    Ok(web::Json(ProfileResponse::from(&user)))
}

/// End the current session. Succeeds even without one.
#[utoipa::path(
    post,
    path = "/api/v1/logout",
    responses((status = 204, description = "Session cleared")),
    tags = ["users"],
    operation_id = "logout",
    security([])
)]
#[post("/logout")]
pub async fn logout(session: SessionContext) -> HttpResponse {
    session.clear();
    HttpResponse::NoContent().finish()
}

/// The caller's own profile, including the invite code to share.
#[utoipa::path(
    get,
    path = "/api/v1/users/me",
    responses(
        (status = 200, description = "Profile", body = ProfileResponse),
        (status = 401, description = "Login required", body = Error),
        (status = 404, description = "Account no longer exists", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["users"],
    operation_id = "currentUser"
)]
#[get("/users/me")]
pub async fn current_user(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<ProfileResponse>> {
    let user_id = session.require_user_id()?;
    let user = state.identity_query.profile(&user_id).await?;
    Ok(web::Json(ProfileResponse::from(&user)))
}
