//! Driving port for reading account identities.

use async_trait::async_trait;

use crate::domain::{Error, InviteCode, User, UserId, UserSummary};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityQuery: Send + Sync {
    /// Full profile of the signed-in user.
    async fn profile(&self, user_id: &UserId) -> Result<User, Error>;

    /// Public summary of the user who owns `code`.
    async fn resolve_invite(&self, code: &InviteCode) -> Result<UserSummary, Error>;
}
