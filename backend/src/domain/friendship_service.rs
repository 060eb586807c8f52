//! Friendship domain service: accepting invites and listing friends.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::domain::ports::{
    FriendsQuery, FriendshipCommand, FriendshipLink, FriendshipRepository,
    FriendshipRepositoryError, UserPersistenceError, UserRepository,
};
use crate::domain::{Error, InviteCode, UserId, UserSummary};

fn map_friendship_error(error: FriendshipRepositoryError) -> Error {
    match error {
        FriendshipRepositoryError::Connection { message } => {
            Error::service_unavailable(format!("friendship repository unavailable: {message}"))
        }
        FriendshipRepositoryError::Query { message } => {
            Error::internal(format!("friendship repository error: {message}"))
        }
    }
}

fn map_user_error(error: UserPersistenceError) -> Error {
    match error {
        UserPersistenceError::Connection { message } => {
            Error::service_unavailable(format!("user repository unavailable: {message}"))
        }
        other => Error::internal(format!("user repository error: {other}")),
    }
}

/// Friendship service implementing [`FriendshipCommand`] and [`FriendsQuery`].
#[derive(Clone)]
pub struct FriendshipService<U, F> {
    users: Arc<U>,
    friendships: Arc<F>,
}

impl<U, F> FriendshipService<U, F> {
    /// Create a new service from its driven ports.
    pub fn new(users: Arc<U>, friendships: Arc<F>) -> Self {
        Self { users, friendships }
    }
}

#[async_trait]
impl<U, F> FriendshipCommand for FriendshipService<U, F>
where
    U: UserRepository,
    F: FriendshipRepository,
{
    async fn accept_invite(
        &self,
        user_id: &UserId,
        code: &InviteCode,
    ) -> Result<UserSummary, Error> {
        let inviter = self
            .users
            .find_by_invite_code(code)
            .await
            .map_err(map_user_error)?
            .ok_or_else(|| Error::not_found("invite code not found"))?;

        if inviter.id() == user_id {
            return Err(Error::invalid_request("cannot accept your own invite"));
        }

        let link = self
            .friendships
            .link(user_id, inviter.id())
            .await
            .map_err(map_friendship_error)?;
        if link == FriendshipLink::Created {
            info!(user_id = %user_id, friend_id = %inviter.id(), "friendship created");
        }
        Ok(inviter.to_summary())
    }
}

#[async_trait]
impl<U, F> FriendsQuery for FriendshipService<U, F>
where
    U: UserRepository,
    F: FriendshipRepository,
{
    async fn list_friends(&self, user_id: &UserId) -> Result<Vec<UserSummary>, Error> {
        let ids = self
            .friendships
            .friend_ids_of(user_id)
            .await
            .map_err(map_friendship_error)?;
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        self.users
            .find_summaries(&ids)
            .await
            .map_err(map_user_error)
    }
}

#[cfg(test)]
mod tests {
    //! Invite acceptance and friend listing behaviour.
    use super::*;
    use crate::domain::ErrorCode;
    use crate::domain::ports::{MockFriendshipRepository, MockUserRepository};
    use crate::domain::{Nickname, User};
    use rstest::rstest;

    fn user(nickname: &str, code: &str) -> User {
        User::new(
            UserId::random(),
            Nickname::new(nickname).expect("valid nickname"),
            InviteCode::new(code).expect("valid code"),
        )
    }

    fn code(raw: &str) -> InviteCode {
        InviteCode::new(raw).expect("valid code")
    }

    fn make_service(
        users: MockUserRepository,
        friendships: MockFriendshipRepository,
    ) -> FriendshipService<MockUserRepository, MockFriendshipRepository> {
        FriendshipService::new(Arc::new(users), Arc::new(friendships))
    }

    #[rstest]
    #[case(FriendshipLink::Created)]
    #[case(FriendshipLink::AlreadyLinked)]
    #[tokio::test]
    async fn accepting_an_invite_links_both_users(#[case] outcome: FriendshipLink) {
        let inviter = user("bora", "bora01");
        let inviter_id = inviter.id().clone();
        let expected = inviter.to_summary();
        let me = UserId::random();
        let me_for_link = me.clone();

        let mut users = MockUserRepository::new();
        users
            .expect_find_by_invite_code()
            .return_once(move |_| Ok(Some(inviter)));
        let mut friendships = MockFriendshipRepository::new();
        friendships
            .expect_link()
            .withf(move |left, right| *left == me_for_link && *right == inviter_id)
            .times(1)
            .return_once(move |_, _| Ok(outcome));

        let summary = make_service(users, friendships)
            .accept_invite(&me, &code("bora01"))
            .await
            .expect("invite accepted");
        assert_eq!(summary, expected);
    }

    #[tokio::test]
    async fn own_invite_is_rejected() {
        let me = user("ada", "ada001");
        let my_id = me.id().clone();
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_invite_code()
            .return_once(move |_| Ok(Some(me)));
        let mut friendships = MockFriendshipRepository::new();
        friendships.expect_link().never();

        let err = make_service(users, friendships)
            .accept_invite(&my_id, &code("ada001"))
            .await
            .expect_err("self invite");
        assert_eq!(err.code(), ErrorCode::InvalidRequest);
    }

    #[tokio::test]
    async fn unknown_invite_is_not_found() {
        let mut users = MockUserRepository::new();
        users.expect_find_by_invite_code().return_once(|_| Ok(None));
        let mut friendships = MockFriendshipRepository::new();
        friendships.expect_link().never();

        let err = make_service(users, friendships)
            .accept_invite(&UserId::random(), &code("nobody"))
            .await
            .expect_err("unknown code");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[case(FriendshipRepositoryError::connection("down"), ErrorCode::ServiceUnavailable)]
    #[case(FriendshipRepositoryError::query("bad sql"), ErrorCode::InternalError)]
    #[tokio::test]
    async fn link_failures_are_mapped(
        #[case] failure: FriendshipRepositoryError,
        #[case] expected: ErrorCode,
    ) {
        let inviter = user("bora", "bora01");
        let mut users = MockUserRepository::new();
        users
            .expect_find_by_invite_code()
            .return_once(move |_| Ok(Some(inviter)));
        let mut friendships = MockFriendshipRepository::new();
        friendships
            .expect_link()
            .return_once(move |_, _| Err(failure));

        let err = make_service(users, friendships)
            .accept_invite(&UserId::random(), &code("bora01"))
            .await
            .expect_err("link fails");
        assert_eq!(err.code(), expected);
    }

    #[tokio::test]
    async fn listing_friends_without_any_skips_the_user_lookup() {
        let mut users = MockUserRepository::new();
        users.expect_find_summaries().never();
        let mut friendships = MockFriendshipRepository::new();
        friendships
            .expect_friend_ids_of()
            .return_once(|_| Ok(Vec::new()));

        let friends = make_service(users, friendships)
            .list_friends(&UserId::random())
            .await
            .expect("empty list");
        assert!(friends.is_empty());
    }

    #[tokio::test]
    async fn listing_friends_resolves_summaries() {
        let bora = user("bora", "bora01").to_summary();
        let chul = user("chul", "chul01").to_summary();
        let ids = vec![chul.id.clone(), bora.id.clone()];
        let expected = vec![bora.clone(), chul.clone()];

        let mut friendships = MockFriendshipRepository::new();
        friendships
            .expect_friend_ids_of()
            .return_once(move |_| Ok(ids));
        let mut users = MockUserRepository::new();
        users
            .expect_find_summaries()
            .withf(|ids| ids.len() == 2)
            .return_once(move |_| Ok(vec![bora, chul]));

        let friends = make_service(users, friendships)
            .list_friends(&UserId::random())
            .await
            .expect("friends listed");
        assert_eq!(friends, expected);
    }
}
