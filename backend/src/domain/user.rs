//! User identity primitives: identifiers, nicknames, and invite codes.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors for user-facing identity values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
    InvalidId,
    EmptyNickname,
    NicknameTooLong { max: usize },
    NicknameInvalidCharacters,
    EmptyInviteCode,
    InvalidInviteCode,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
            Self::InvalidId => write!(f, "user id must be a valid UUID"),
            Self::EmptyNickname => write!(f, "nickname must not be empty"),
            Self::NicknameTooLong { max } => {
                write!(f, "nickname must be at most {max} characters")
            }
            Self::NicknameInvalidCharacters => write!(
                f,
                "nickname may only contain letters, numbers, spaces, dots, dashes, or underscores",
            ),
            Self::EmptyInviteCode => write!(f, "invite code must not be empty"),
            Self::InvalidInviteCode => write!(
                f,
                "invite code must be at most {INVITE_CODE_MAX} lowercase letters or digits",
            ),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// Stable user identifier stored as a UUID.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(Uuid, String);

impl UserId {
    /// Validate and construct a [`UserId`] from borrowed input.
    pub fn new(id: impl AsRef<str>) -> Result<Self, UserValidationError> {
        Self::from_owned(id.as_ref().to_owned())
    }

    /// Wrap an already-parsed UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid, uuid.to_string())
    }

    /// Generate a new random [`UserId`].
    pub fn random() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    fn from_owned(id: String) -> Result<Self, UserValidationError> {
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        if id.trim() != id {
            return Err(UserValidationError::InvalidId);
        }

        let parsed = Uuid::parse_str(&id).map_err(|_| UserValidationError::InvalidId)?;
        Ok(Self(parsed, id))
    }

    /// Access the underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.1.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        let UserId(_, raw) = value;
        raw
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_owned(value)
    }
}

/// Maximum nickname length in characters.
pub const NICKNAME_MAX: usize = 20;

static NICKNAME_RE: OnceLock<Regex> = OnceLock::new();

fn nickname_regex() -> &'static Regex {
    NICKNAME_RE.get_or_init(|| {
        // Length is enforced separately; this regex constrains allowed characters.
        Regex::new(r"^[\p{L}\p{N}_ .\-]+$")
            .unwrap_or_else(|error| panic!("nickname regex failed to compile: {error}"))
    })
}

/// Unique, immutable nickname chosen at signup.
///
/// ## Invariants
/// - Trimmed and non-empty.
/// - At most [`NICKNAME_MAX`] characters of letters (any script), digits,
///   spaces, `_`, `-`, or `.`.
///
/// # Examples
/// ```
/// use lunchmate::domain::Nickname;
///
/// let nickname = Nickname::new("  김점심 ").expect("valid nickname");
/// assert_eq!(nickname.as_ref(), "김점심");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Nickname(String);

impl Nickname {
    /// Validate and construct a [`Nickname`], trimming surrounding whitespace.
    pub fn new(nickname: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let trimmed = nickname.as_ref().trim();
        if trimmed.is_empty() {
            return Err(UserValidationError::EmptyNickname);
        }
        if trimmed.chars().count() > NICKNAME_MAX {
            return Err(UserValidationError::NicknameTooLong { max: NICKNAME_MAX });
        }
        if !nickname_regex().is_match(trimmed) {
            return Err(UserValidationError::NicknameInvalidCharacters);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for Nickname {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Nickname {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<Nickname> for String {
    fn from(value: Nickname) -> Self {
        value.0
    }
}

impl TryFrom<String> for Nickname {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Length of freshly generated invite codes.
pub const INVITE_CODE_LEN: usize = 6;
/// Longest invite code accepted on lookup.
pub const INVITE_CODE_MAX: usize = 16;

/// Short opaque token that lets a new user befriend the inviter.
///
/// Generated codes are [`INVITE_CODE_LEN`] characters of `[0-9a-z]`; lookups
/// accept up to [`INVITE_CODE_MAX`] characters of the same alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct InviteCode(String);

impl InviteCode {
    /// Validate and construct an [`InviteCode`].
    pub fn new(code: impl AsRef<str>) -> Result<Self, UserValidationError> {
        let code = code.as_ref();
        if code.is_empty() {
            return Err(UserValidationError::EmptyInviteCode);
        }
        let well_formed = code.len() <= INVITE_CODE_MAX
            && code
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
        if !well_formed {
            return Err(UserValidationError::InvalidInviteCode);
        }
        Ok(Self(code.to_owned()))
    }

    /// Wrap a code minted by a generator that only emits `[0-9a-z]`.
    pub(crate) fn from_generated(code: String) -> Self {
        debug_assert!(Self::new(&code).is_ok(), "generated invite code is malformed");
        Self(code)
    }
}

impl AsRef<str> for InviteCode {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for InviteCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<InviteCode> for String {
    fn from(value: InviteCode) -> Self {
        value.0
    }
}

impl TryFrom<String> for InviteCode {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Registered user as seen by its owner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    nickname: Nickname,
    invite_code: InviteCode,
}

impl User {
    /// Build a user from validated components.
    pub fn new(id: UserId, nickname: Nickname, invite_code: InviteCode) -> Self {
        Self {
            id,
            nickname,
            invite_code,
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Unique nickname.
    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    /// Invite code to share with friends.
    pub fn invite_code(&self) -> &InviteCode {
        &self.invite_code
    }

    /// Public view shown to other users.
    pub fn to_summary(&self) -> UserSummary {
        UserSummary {
            id: self.id.clone(),
            nickname: self.nickname.clone(),
        }
    }
}

/// Public view of a user: what friends and invitees may see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSummary {
    pub id: UserId,
    pub nickname: Nickname,
}
