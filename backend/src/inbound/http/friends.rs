//! Friend list handler.

use actix_web::{get, web};

use crate::domain::Error;
use crate::inbound::http::ApiResult;
use crate::inbound::http::dto::UserSummaryResponse;
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;

/// The caller's friends, ordered by nickname.
#[utoipa::path(
    get,
    path = "/api/v1/friends",
    responses(
        (status = 200, description = "Friends", body = [UserSummaryResponse]),
        (status = 401, description = "Login required", body = Error),
        (status = 503, description = "Store unavailable", body = Error),
        (status = 500, description = "Internal server error", body = Error)
    ),
    tags = ["friends"],
    operation_id = "listFriends"
)]
#[get("/friends")]
pub async fn list_friends(
    state: web::Data<HttpState>,
    session: SessionContext,
) -> ApiResult<web::Json<Vec<UserSummaryResponse>>> {
    let user_id = session.require_user_id()?;
    let friends = state.friends.list_friends(&user_id).await?;
    Ok(web::Json(friends.into_iter().map(Into::into).collect()))
}
