//! Identity domain service: sign-up, sign-in, profiles, and invite lookup.
//!
//! Passwords are hashed off the async executor. Invite codes come from a
//! generator port and are retried on collision.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::domain::ports::{
    IdentityCommand, IdentityQuery, InviteCodeGenerator, PasswordHasher, PasswordHasherError,
    UserAccount, UserPersistenceError, UserRepository,
};
use crate::domain::{Credentials, Error, InviteCode, PasswordHash, User, UserId, UserSummary};

/// Attempts made to find an unused invite code before giving up.
pub const INVITE_CODE_ATTEMPTS: usize = 5;

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        UserPersistenceError::Query { message } => {
            Error::internal(format!("user repository error: {message}"))
        }
        UserPersistenceError::DuplicateNickname { .. } => {
            Error::conflict("nickname is already taken")
        }
        UserPersistenceError::DuplicateInviteCode { code } => {
            Error::internal(format!("invite code collision: {code}"))
        }
    }
}

fn map_hasher_error(error: PasswordHasherError) -> Error {
    Error::internal(error.to_string())
}

/// Identity service implementing [`IdentityCommand`] and [`IdentityQuery`].
#[derive(Clone)]
pub struct IdentityService<U, H, G> {
    users: Arc<U>,
    hasher: Arc<H>,
    invite_codes: Arc<G>,
}

impl<U, H, G> IdentityService<U, H, G> {
    /// Create a new service from its driven ports.
    pub fn new(users: Arc<U>, hasher: Arc<H>, invite_codes: Arc<G>) -> Self {
        Self {
            users,
            hasher,
            invite_codes,
        }
    }
}

impl<U, H, G> IdentityService<U, H, G>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    G: InviteCodeGenerator,
{
    async fn hash_password(&self, password: &str) -> Result<PasswordHash, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|err| Error::internal(format!("password hashing task failed: {err}")))?
            .map_err(map_hasher_error)
    }

    async fn verify_password(&self, password: &str, hash: PasswordHash) -> Result<bool, Error> {
        let hasher = Arc::clone(&self.hasher);
        let password = Zeroizing::new(password.to_owned());
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|err| Error::internal(format!("password check task failed: {err}")))?
            .map_err(map_hasher_error)
    }
}

#[async_trait]
impl<U, H, G> IdentityCommand for IdentityService<U, H, G>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    G: InviteCodeGenerator,
{
    async fn sign_up(&self, credentials: &Credentials) -> Result<User, Error> {
        let password_hash = self.hash_password(credentials.password()).await?;

        for attempt in 1..=INVITE_CODE_ATTEMPTS {
            let account = UserAccount {
                user: User::new(
                    UserId::random(),
                    credentials.nickname().clone(),
                    self.invite_codes.generate(),
                ),
                password_hash: password_hash.clone(),
            };
            match self.users.insert(&account).await {
                Ok(()) => {
                    info!(user_id = %account.user.id(), "account created");
                    return Ok(account.user);
                }
                Err(UserPersistenceError::DuplicateInviteCode { code }) => {
                    debug!(attempt, code = %code, "invite code already issued; retrying");
                }
                Err(err) => return Err(map_user_error(err)),
            }
        }

        Err(Error::internal(format!(
            "no unused invite code after {INVITE_CODE_ATTEMPTS} attempts"
        )))
    }

    async fn sign_in(&self, credentials: &Credentials) -> Result<User, Error> {
        let account = self
            .users
            .find_account_by_nickname(credentials.nickname())
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found("nickname not found"))?;

        let UserAccount {
            user,
            password_hash,
        } = account;
        if !self
            .verify_password(credentials.password(), password_hash)
            .await?
        {
            debug!(user_id = %user.id(), "password mismatch");
            return Err(Error::unauthorized("incorrect password"));
        }
        Ok(user)
    }
}

#[async_trait]
impl<U, H, G> IdentityQuery for IdentityService<U, H, G>
where
    U: UserRepository,
    H: PasswordHasher + 'static,
    G: InviteCodeGenerator,
{
    async fn profile(&self, user_id: &UserId) -> Result<User, Error> {
        self.users
            .find_by_id(user_id)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found(format!("user {user_id} not found")))
    }

    async fn resolve_invite(&self, code: &InviteCode) -> Result<UserSummary, Error> {
        self.users
            .find_by_invite_code(code)
            .await
            .map_err(map_user_error)?
            .map(|user| user.to_summary())
            .ok_or_else(|| Error::not_found("invite code not found"))
    }
}

#[cfg(test)]
#[path = "identity_service_tests.rs"]
mod tests;
