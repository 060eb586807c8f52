//! Driving port for creating friendships.

use async_trait::async_trait;

use crate::domain::{Error, InviteCode, UserId, UserSummary};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FriendshipCommand: Send + Sync {
    /// Befriend the owner of `code` and return the inviter.
    ///
    /// Accepting an invite from an existing friend succeeds without change.
    ///
    /// # Errors
    ///
    /// Returns not found for an unknown code and invalid request when the
    /// code belongs to `user_id`.
    async fn accept_invite(&self, user_id: &UserId, code: &InviteCode)
    -> Result<UserSummary, Error>;
}
