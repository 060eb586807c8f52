//! Authentication primitives: credentials and stored password hashes.
//!
//! Inbound payloads are validated here before a handler talks to a port, so
//! services only ever see well-formed nicknames and passwords.

use std::fmt;

use zeroize::Zeroizing;

use super::user::{Nickname, UserValidationError};

/// Minimum password length in characters.
pub const PASSWORD_MIN: usize = 4;
/// Maximum password length in characters.
pub const PASSWORD_MAX: usize = 128;

/// Domain error returned when credential payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialsValidationError {
    /// Nickname failed validation.
    Nickname(UserValidationError),
    /// Password was shorter than [`PASSWORD_MIN`].
    PasswordTooShort { min: usize },
    /// Password was longer than [`PASSWORD_MAX`].
    PasswordTooLong { max: usize },
}

impl fmt::Display for CredentialsValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nickname(err) => err.fmt(f),
            Self::PasswordTooShort { min } => {
                write!(f, "password must be at least {min} characters")
            }
            Self::PasswordTooLong { max } => {
                write!(f, "password must be at most {max} characters")
            }
        }
    }
}

impl std::error::Error for CredentialsValidationError {}

/// Validated nickname/password pair used for signup and sign-in.
///
/// ## Invariants
/// - `nickname` satisfies [`Nickname`] validation.
/// - `password` is between [`PASSWORD_MIN`] and [`PASSWORD_MAX`] characters
///   and keeps caller-provided whitespace.
///
/// # Examples
/// ```
/// use lunchmate::domain::Credentials;
///
/// let creds = Credentials::try_from_parts("ada", "pass").expect("valid");
/// assert_eq!(creds.nickname().as_ref(), "ada");
/// assert_eq!(creds.password(), "pass");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    nickname: Nickname,
    password: Zeroizing<String>,
}

impl Credentials {
    /// Construct credentials from raw inputs.
    pub fn try_from_parts(
        nickname: &str,
        password: &str,
    ) -> Result<Self, CredentialsValidationError> {
        let nickname = Nickname::new(nickname).map_err(CredentialsValidationError::Nickname)?;

        let length = password.chars().count();
        if length < PASSWORD_MIN {
            return Err(CredentialsValidationError::PasswordTooShort { min: PASSWORD_MIN });
        }
        if length > PASSWORD_MAX {
            return Err(CredentialsValidationError::PasswordTooLong { max: PASSWORD_MAX });
        }

        Ok(Self {
            nickname,
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Nickname used for lookups.
    pub fn nickname(&self) -> &Nickname {
        &self.nickname
    }

    /// Plaintext password provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("nickname", &self.nickname)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Stored password hash in PHC string format.
///
/// Opaque to the domain; only the password hasher port interprets it.
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordHash(String);

impl PasswordHash {
    /// Wrap an encoded hash produced by a password hasher.
    pub fn new(encoded: impl Into<String>) -> Self {
        Self(encoded.into())
    }

    /// Encoded PHC string.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordHash(..)")
    }
}
