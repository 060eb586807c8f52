//! HTTP inbound adapter exposing REST endpoints.

pub mod dto;
pub mod error;
pub mod friends;
pub mod health;
pub mod invites;
pub mod lunch;
pub mod neighborhoods;
pub mod schedules;
pub mod session;
pub mod session_config;
pub mod state;
#[cfg(test)]
pub mod test_utils;
pub mod users;
pub(crate) mod validation;

pub use error::ApiResult;

use actix_web::web;

/// Register every `/api/v1` route on a scope or app.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use lunchmate::inbound::http::api_routes;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(api_routes));
/// ```
pub fn api_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(users::signup)
        .service(users::login)
        .service(users::logout)
        .service(users::current_user)
        .service(invites::resolve_invite)
        .service(invites::accept_invite)
        .service(friends::list_friends)
        .service(neighborhoods::list_neighborhoods)
        .service(schedules::my_schedules)
        .service(schedules::save_schedule)
        .service(schedules::clear_schedule)
        .service(schedules::friend_schedules)
        .service(lunch::today)
        .service(lunch::week);
}
