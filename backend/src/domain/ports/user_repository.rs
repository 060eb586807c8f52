//! Port abstraction for user persistence adapters and their errors.
use async_trait::async_trait;

use crate::domain::{InviteCode, Nickname, PasswordHash, User, UserId, UserSummary};

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by user repository adapters.
    pub enum UserPersistenceError {
        /// Repository connection could not be established.
        Connection { message: String } => "user repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "user repository query failed: {message}",
        /// Another account already owns the nickname.
        DuplicateNickname { nickname: String } => "nickname already registered: {nickname}",
        /// Another account already owns the invite code.
        DuplicateInviteCode { code: String } => "invite code already issued: {code}",
    }
}

/// A user together with the hash of their password.
///
/// Only the identity service sees this record; everything else works with
/// [`User`] or [`UserSummary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccount {
    pub user: User,
    pub password_hash: PasswordHash,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Insert a new account.
    ///
    /// Fails with [`UserPersistenceError::DuplicateNickname`] or
    /// [`UserPersistenceError::DuplicateInviteCode`] when a unique value is
    /// already taken.
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError>;

    /// Fetch a user by identifier.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError>;

    /// Fetch an account (with its password hash) by exact nickname.
    async fn find_account_by_nickname(
        &self,
        nickname: &Nickname,
    ) -> Result<Option<UserAccount>, UserPersistenceError>;

    /// Fetch the owner of an invite code.
    async fn find_by_invite_code(
        &self,
        code: &InviteCode,
    ) -> Result<Option<User>, UserPersistenceError>;

    /// Public summaries for the given ids, ordered by nickname.
    ///
    /// Unknown ids are skipped.
    async fn find_summaries(
        &self,
        ids: &[UserId],
    ) -> Result<Vec<UserSummary>, UserPersistenceError>;
}
