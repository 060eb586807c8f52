//! Domain primitives, services, and ports.
//!
//! Purpose: define the strongly typed lunch-scheduling model and the services
//! that implement the driving ports. Nothing in here knows about HTTP or SQL;
//! adapters reach the domain only through [`ports`].
//!
//! Public surface:
//! - Identity: [`UserId`], [`Nickname`], [`InviteCode`], [`User`],
//!   [`UserSummary`], [`Credentials`].
//! - Schedules: [`DayIndex`], [`TimeOfDay`], [`Schedule`], [`ScheduleDraft`],
//!   [`ScheduleWithOwner`], and the [`NEIGHBORHOODS`] catalog.
//! - Matching: [`todays_friends`], [`is_match`], [`match_friends`],
//!   [`build_map_markers`], and the week helpers.
//! - Services: [`IdentityService`], [`FriendshipService`],
//!   [`ScheduleService`], [`LunchService`].
//! - Errors: [`Error`] and [`ErrorCode`], the transport-neutral failure type.

pub mod auth;
pub mod availability;
pub mod error;
pub mod neighborhood;
pub mod ports;
pub mod schedule;
pub mod trace_id;
pub mod user;

mod friendship_service;
mod identity_service;
mod lunch_service;
mod schedule_service;

pub use self::auth::{
    Credentials, CredentialsValidationError, PASSWORD_MAX, PASSWORD_MIN, PasswordHash,
};
pub use self::availability::{
    FriendAvailability, MAX_WEEK_OFFSET, MapMarker, SELF_LABEL, build_map_markers, is_match,
    is_valid_week_offset, match_friends, resolve_weekday, schedule_for_day, todays_friends,
    week_anchor, week_dates,
};
pub use self::error::{Error, ErrorCode, ErrorValidationError};
pub use self::friendship_service::FriendshipService;
pub use self::identity_service::{INVITE_CODE_ATTEMPTS, IdentityService};
pub use self::lunch_service::{DEFAULT_UTC_OFFSET_MINUTES, LunchService, month_label};
pub use self::neighborhood::{
    NEIGHBORHOODS, Neighborhood, NeighborhoodError, NeighborhoodId, find_neighborhood,
};
pub use self::schedule::{
    DAY_NAMES, DayIndex, Schedule, ScheduleDraft, ScheduleValidationError, ScheduleWithOwner,
    TimeOfDay,
};
pub use self::schedule_service::ScheduleService;
pub use self::trace_id::{TRACE_ID_HEADER, TraceId};
pub use self::user::{
    INVITE_CODE_LEN, INVITE_CODE_MAX, InviteCode, NICKNAME_MAX, Nickname, User, UserId,
    UserSummary, UserValidationError,
};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use lunchmate::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<()> {
///     Err(Error::unauthorized("login required"))
/// }
/// assert!(handler().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
