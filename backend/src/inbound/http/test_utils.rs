//! Test helpers for inbound HTTP components.

use std::sync::Arc;

use actix_http::Request;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::body::BoxBody;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{App, HttpResponse, test, web};
use serde_json::Value;

use crate::domain::ports::{
    MockFriendsQuery, MockFriendshipCommand, MockIdentityCommand, MockIdentityQuery,
    MockLunchQuery, MockScheduleCommand, MockScheduleQuery,
};
use crate::domain::{Error, UserId};
use crate::inbound::http::session::SessionContext;
use crate::inbound::http::state::HttpState;
use crate::server::SESSION_COOKIE_NAME;

/// Build a session middleware configured for tests.
///
/// Uses a fresh key per invocation, the production cookie name, and drops the
/// `Secure` flag so plain-HTTP test requests carry the cookie.
pub fn test_session_middleware() -> SessionMiddleware<CookieSessionStore> {
    SessionMiddleware::builder(CookieSessionStore::default(), Key::generate())
        .cookie_name(SESSION_COOKIE_NAME.to_owned())
        .cookie_secure(false)
        .build()
}

/// Extract the session cookie set by a response.
pub fn session_cookie<B>(response: &ServiceResponse<B>) -> Cookie<'static> {
    response
        .response()
        .cookies()
        .find(|cookie| cookie.name() == SESSION_COOKIE_NAME)
        .expect("session cookie set")
        .into_owned()
}

/// Pull `details.<key>` out of an error payload as a string.
pub fn detail<'a>(payload: &'a Value, key: &str) -> Option<&'a str> {
    payload
        .get("details")
        .and_then(|details| details.get(key))
        .and_then(Value::as_str)
}

/// Mocked driving ports; tests set expectations on the ones a route uses.
#[derive(Default)]
pub struct MockPorts {
    pub identity: MockIdentityCommand,
    pub identity_query: MockIdentityQuery,
    pub friendships: MockFriendshipCommand,
    pub friends: MockFriendsQuery,
    pub schedules: MockScheduleCommand,
    pub schedules_query: MockScheduleQuery,
    pub lunch: MockLunchQuery,
}

impl MockPorts {
    pub fn into_state(self) -> HttpState {
        HttpState {
            identity: Arc::new(self.identity),
            identity_query: Arc::new(self.identity_query),
            friendships: Arc::new(self.friendships),
            friends: Arc::new(self.friends),
            schedules: Arc::new(self.schedules),
            schedules_query: Arc::new(self.schedules_query),
            lunch: Arc::new(self.lunch),
        }
    }
}

async fn start_test_session(
    session: SessionContext,
    path: web::Path<String>,
) -> Result<HttpResponse, Error> {
    let user_id =
        UserId::new(path.into_inner()).map_err(|err| Error::invalid_request(err.to_string()))?;
    session.persist_user(&user_id)?;
    Ok(HttpResponse::NoContent().finish())
}

/// Initialise an app with the given state and `/api/v1` routes.
///
/// A `/test/session/{id}` route signs a user in without touching the ports.
pub async fn init_app<F>(
    state: HttpState,
    routes: F,
) -> impl Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>
where
    F: FnOnce(&mut web::ServiceConfig),
{
    test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .wrap(test_session_middleware())
            .route("/test/session/{id}", web::post().to(start_test_session))
            .service(web::scope("/api/v1").configure(routes)),
    )
    .await
}

/// Session cookie for `user_id`, minted through the test-only route.
pub async fn signed_in<S>(app: &S, user_id: &UserId) -> Cookie<'static>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = actix_web::Error>,
{
    let request = test::TestRequest::post()
        .uri(&format!("/test/session/{user_id}"))
        .to_request();
    let response = test::call_service(app, request).await;
    assert!(response.status().is_success(), "test session route failed");
    session_cookie(&response)
}

/// Read a response body as JSON.
pub async fn json_body(response: ServiceResponse<BoxBody>) -> Value {
    let bytes = test::read_body(response).await;
    serde_json::from_slice(&bytes).expect("response body is JSON")
}
