//! Shared validation helpers for inbound HTTP adapters.
//!
//! Every failure becomes `400 invalid_request` with `details.field` naming the
//! wire field and `details.code` naming the rule that failed.

use std::num::IntErrorKind;

use serde_json::json;

use crate::domain::{
    Credentials, CredentialsValidationError, DayIndex, Error, InviteCode, NEIGHBORHOODS,
    MAX_WEEK_OFFSET, NeighborhoodError, NeighborhoodId, TimeOfDay, UserValidationError,
    is_valid_week_offset,
};

/// Validation error codes for HTTP request failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ErrorCode {
    EmptyNickname,
    NicknameTooLong,
    InvalidNickname,
    PasswordTooShort,
    PasswordTooLong,
    InvalidInviteCode,
    InvalidDay,
    InvalidTime,
    UnknownNeighborhood,
    InvalidWeekOffset,
}

impl ErrorCode {
    fn as_str(self) -> &'static str {
        match self {
            Self::EmptyNickname => "empty_nickname",
            Self::NicknameTooLong => "nickname_too_long",
            Self::InvalidNickname => "invalid_nickname",
            Self::PasswordTooShort => "password_too_short",
            Self::PasswordTooLong => "password_too_long",
            Self::InvalidInviteCode => "invalid_invite_code",
            Self::InvalidDay => "invalid_day",
            Self::InvalidTime => "invalid_time",
            Self::UnknownNeighborhood => "unknown_neighborhood",
            Self::InvalidWeekOffset => "invalid_week_offset",
        }
    }
}

/// Newtype wrapper for HTTP field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FieldName(&'static str);

impl FieldName {
    pub(crate) const fn new(name: &'static str) -> Self {
        Self(name)
    }

    fn as_str(self) -> &'static str {
        self.0
    }
}

pub(crate) const NICKNAME: FieldName = FieldName::new("nickname");
pub(crate) const PASSWORD: FieldName = FieldName::new("password");
pub(crate) const INVITE_CODE: FieldName = FieldName::new("code");
pub(crate) const DAY: FieldName = FieldName::new("day");
pub(crate) const NEIGHBORHOOD: FieldName = FieldName::new("neighborhood");
pub(crate) const START_TIME: FieldName = FieldName::new("startTime");
pub(crate) const END_TIME: FieldName = FieldName::new("endTime");
pub(crate) const WEEK_OFFSET: FieldName = FieldName::new("offset");

fn field_error(field: FieldName, code: ErrorCode, message: impl Into<String>) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
    }))
}

fn field_error_with_value(
    field: FieldName,
    code: ErrorCode,
    message: impl Into<String>,
    value: &str,
) -> Error {
    Error::invalid_request(message).with_details(json!({
        "field": field.as_str(),
        "code": code.as_str(),
        "value": value,
    }))
}

fn nickname_error(err: UserValidationError) -> Error {
    let code = match err {
        UserValidationError::EmptyNickname => ErrorCode::EmptyNickname,
        UserValidationError::NicknameTooLong { .. } => ErrorCode::NicknameTooLong,
        _ => ErrorCode::InvalidNickname,
    };
    field_error(NICKNAME, code, err.to_string())
}

/// Validate a nickname/password pair from a request body.
pub(crate) fn parse_credentials(nickname: &str, password: &str) -> Result<Credentials, Error> {
    Credentials::try_from_parts(nickname, password).map_err(|err| match err {
        CredentialsValidationError::Nickname(inner) => nickname_error(inner),
        CredentialsValidationError::PasswordTooShort { .. } => {
            field_error(PASSWORD, ErrorCode::PasswordTooShort, err.to_string())
        }
        CredentialsValidationError::PasswordTooLong { .. } => {
            field_error(PASSWORD, ErrorCode::PasswordTooLong, err.to_string())
        }
    })
}

pub(crate) fn parse_invite_code(raw: &str) -> Result<InviteCode, Error> {
    InviteCode::new(raw).map_err(|err| {
        field_error_with_value(INVITE_CODE, ErrorCode::InvalidInviteCode, err.to_string(), raw)
    })
}

pub(crate) fn parse_day(raw: &str) -> Result<DayIndex, Error> {
    let invalid = || {
        field_error_with_value(
            DAY,
            ErrorCode::InvalidDay,
            "day must be an integer between 0 (Monday) and 6 (Sunday)",
            raw,
        )
    };
    let value: i64 = raw.trim().parse().map_err(|_| invalid())?;
    DayIndex::new(value).map_err(|_| invalid())
}

pub(crate) fn parse_time(field: FieldName, raw: &str) -> Result<TimeOfDay, Error> {
    raw.parse::<TimeOfDay>().map_err(|_| {
        field_error_with_value(
            field,
            ErrorCode::InvalidTime,
            format!("{} must be HH:MM", field.as_str()),
            raw,
        )
    })
}

pub(crate) fn parse_neighborhood(raw: &str) -> Result<NeighborhoodId, Error> {
    NeighborhoodId::from_catalog(NEIGHBORHOODS, raw).map_err(|err| {
        let message = match err {
            NeighborhoodError::Empty => "neighborhood must not be empty".to_owned(),
            NeighborhoodError::Unknown(_) => err.to_string(),
        };
        field_error_with_value(NEIGHBORHOOD, ErrorCode::UnknownNeighborhood, message, raw)
    })
}

/// Parse the optional `offset` query value; absent means the current week.
pub(crate) fn parse_week_offset(raw: Option<&str>) -> Result<i64, Error> {
    let Some(raw) = raw else {
        return Ok(0);
    };
    let out_of_range = || {
        field_error_with_value(
            WEEK_OFFSET,
            ErrorCode::InvalidWeekOffset,
            format!("offset must be within {MAX_WEEK_OFFSET} weeks of the current one"),
            raw,
        )
    };
    let offset = raw.trim().parse::<i64>().map_err(|err| match err.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => out_of_range(),
        _ => field_error_with_value(
            WEEK_OFFSET,
            ErrorCode::InvalidWeekOffset,
            "offset must be an integer number of weeks",
            raw,
        ),
    })?;
    if is_valid_week_offset(offset) {
        Ok(offset)
    } else {
        Err(out_of_range())
    }
}
