//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] gathers every REST path from the inbound layer together with
//! the request and response schemas and the session cookie security scheme.
//! Swagger UI serves it in debug builds and `openapi-dump` prints it for
//! external tooling.

use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::domain::{Error, ErrorCode};
use crate::inbound::http::dto::{
    FriendScheduleResponse, ProfileResponse, ScheduleResponse, UserSummaryResponse,
};
use crate::inbound::http::lunch::{
    FriendTodayResponse, MarkerResponse, TodayResponse, WeekDayResponse, WeekResponse,
};
use crate::inbound::http::neighborhoods::NeighborhoodResponse;
use crate::inbound::http::schedules::ScheduleRequest;
use crate::inbound::http::users::CredentialsRequest;

/// Name of the cookie security scheme referenced by protected paths.
pub const SESSION_COOKIE_SCHEME: &str = "SessionCookie";

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi
            .components
            .get_or_insert_with(utoipa::openapi::Components::default);

        components.add_security_scheme(
            SESSION_COOKIE_SCHEME,
            SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                "session",
                "Session cookie issued by POST /api/v1/signup or /api/v1/login.",
            ))),
        );
    }
}

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    modifiers(&SecurityAddon),
    info(
        title = "Lunchmate API",
        description = "Weekly lunch schedules shared between friends, with today's matches."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    security(("SessionCookie" = [])),
    paths(
        crate::inbound::http::users::signup,
        crate::inbound::http::users::login,
        crate::inbound::http::users::logout,
        crate::inbound::http::users::current_user,
        crate::inbound::http::invites::resolve_invite,
        crate::inbound::http::invites::accept_invite,
        crate::inbound::http::friends::list_friends,
        crate::inbound::http::neighborhoods::list_neighborhoods,
        crate::inbound::http::schedules::my_schedules,
        crate::inbound::http::schedules::save_schedule,
        crate::inbound::http::schedules::clear_schedule,
        crate::inbound::http::schedules::friend_schedules,
        crate::inbound::http::lunch::today,
        crate::inbound::http::lunch::week,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        Error,
        ErrorCode,
        CredentialsRequest,
        ProfileResponse,
        UserSummaryResponse,
        ScheduleRequest,
        ScheduleResponse,
        FriendScheduleResponse,
        NeighborhoodResponse,
        FriendTodayResponse,
        MarkerResponse,
        TodayResponse,
        WeekDayResponse,
        WeekResponse,
    )),
    tags(
        (name = "users", description = "Signup, login, and the caller's profile"),
        (name = "friends", description = "Invite codes and friendships"),
        (name = "schedules", description = "Weekly lunch schedules"),
        (name = "lunch", description = "Today's matches and the week view"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    //! Tests verifying the generated document's structure.

    use super::*;
    use rstest::rstest;
    use utoipa::openapi::RefOr;
    use utoipa::openapi::schema::Schema;

    fn assert_object_schema_has_field(schema: &RefOr<Schema>, field: &str) {
        match schema {
            RefOr::T(Schema::Object(obj)) => {
                assert!(
                    obj.properties.contains_key(field),
                    "schema should have field '{field}'"
                );
            }
            _ => panic!("expected Object schema"),
        }
    }

    #[rstest]
    #[case("Error", &["code", "message", "traceId", "details"])]
    #[case("ProfileResponse", &["id", "nickname", "inviteCode"])]
    #[case("ScheduleResponse", &["dayOfWeek", "dayName", "neighborhood", "startTime", "endTime"])]
    #[case("WeekResponse", &["weekOffset", "isCurrentWeek", "monthLabel", "days"])]
    fn schemas_expose_camel_case_fields(#[case] name: &str, #[case] fields: &[&str]) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        let schema = schemas.get(name).expect("schema registered");
        for field in fields {
            assert_object_schema_has_field(schema, field);
        }
    }

    #[rstest]
    #[case("/api/v1/signup")]
    #[case("/api/v1/invites/{code}/accept")]
    #[case("/api/v1/schedules/me/{day}")]
    #[case("/api/v1/lunch/week")]
    #[case("/health/ready")]
    fn paths_are_registered(#[case] path: &str) {
        let doc = ApiDoc::openapi();
        assert!(doc.paths.paths.contains_key(path), "missing {path}");
    }

    #[rstest]
    fn session_cookie_scheme_is_declared() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        assert!(components.security_schemes.contains_key(SESSION_COOKIE_SCHEME));
    }
}
