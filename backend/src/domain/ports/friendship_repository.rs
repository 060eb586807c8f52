//! Port abstraction for the symmetric friendship relation.
use async_trait::async_trait;

use crate::domain::UserId;

use super::define_port_error;

define_port_error! {
    /// Persistence errors raised by friendship repository adapters.
    pub enum FriendshipRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "friendship repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "friendship repository query failed: {message}",
    }
}

/// Outcome of linking two users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FriendshipLink {
    /// At least one direction was new.
    Created,
    /// Both directions already existed.
    AlreadyLinked,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FriendshipRepository: Send + Sync {
    /// Ids of everyone `user_id` is friends with.
    async fn friend_ids_of(&self, user_id: &UserId)
    -> Result<Vec<UserId>, FriendshipRepositoryError>;

    /// Record both directions of a friendship atomically.
    ///
    /// Existing edges are left untouched, so repeating the call is harmless.
    async fn link(
        &self,
        user_id: &UserId,
        friend_id: &UserId,
    ) -> Result<FriendshipLink, FriendshipRepositoryError>;
}
