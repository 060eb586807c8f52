//! Driving port for listing friends.

use async_trait::async_trait;

use crate::domain::{Error, UserId, UserSummary};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FriendsQuery: Send + Sync {
    /// Everyone `user_id` is friends with, ordered by nickname.
    async fn list_friends(&self, user_id: &UserId) -> Result<Vec<UserSummary>, Error>;
}
