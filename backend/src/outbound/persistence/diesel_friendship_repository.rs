//! PostgreSQL-backed `FriendshipRepository` over the `friendships` table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::scoped_futures::ScopedFutureExt;
use diesel_async::{AsyncConnection, RunQueryDsl};
use uuid::Uuid;

use crate::domain::UserId;
use crate::domain::ports::{FriendshipLink, FriendshipRepository, FriendshipRepositoryError};

use super::error_mapping::{map_diesel_error, map_pool_error};
use super::models::NewFriendshipRow;
use super::pool::{DbPool, PoolError};
use super::schema::friendships;

/// Diesel-backed implementation of [`FriendshipRepository`].
#[derive(Clone)]
pub struct DieselFriendshipRepository {
    pool: DbPool,
}

impl DieselFriendshipRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> FriendshipRepositoryError {
    map_pool_error(error, FriendshipRepositoryError::connection)
}

fn diesel_error(error: diesel::result::Error) -> FriendshipRepositoryError {
    map_diesel_error(
        error,
        FriendshipRepositoryError::query,
        FriendshipRepositoryError::connection,
    )
}

/// Both directed edges of a friendship.
fn edges(user_id: &UserId, friend_id: &UserId) -> [NewFriendshipRow; 2] {
    let (left, right) = (*user_id.as_uuid(), *friend_id.as_uuid());
    [
        NewFriendshipRow {
            user_id: left,
            friend_id: right,
        },
        NewFriendshipRow {
            user_id: right,
            friend_id: left,
        },
    ]
}

#[async_trait]
impl FriendshipRepository for DieselFriendshipRepository {
    async fn friend_ids_of(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserId>, FriendshipRepositoryError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let ids: Vec<Uuid> = friendships::table
            .filter(friendships::user_id.eq(user_id.as_uuid()))
            .select(friendships::friend_id)
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;
        Ok(ids.into_iter().map(UserId::from_uuid).collect())
    }

    async fn link(
        &self,
        user_id: &UserId,
        friend_id: &UserId,
    ) -> Result<FriendshipLink, FriendshipRepositoryError> {
        let rows = edges(user_id, friend_id);
        let mut conn = self.pool.get().await.map_err(pool_error)?;

        let inserted = conn
            .transaction(|conn| {
                async move {
                    diesel::insert_into(friendships::table)
                        .values(&rows[..])
                        .on_conflict_do_nothing()
                        .execute(conn)
                        .await
                }
                .scope_boxed()
            })
            .await
            .map_err(diesel_error)?;

        Ok(if inserted == 0 {
            FriendshipLink::AlreadyLinked
        } else {
            FriendshipLink::Created
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn edges_cover_both_directions() {
        let (ada, bora) = (UserId::random(), UserId::random());
        let [forward, backward] = edges(&ada, &bora);
        assert_eq!(forward.user_id, *ada.as_uuid());
        assert_eq!(forward.friend_id, *bora.as_uuid());
        assert_eq!(backward.user_id, *bora.as_uuid());
        assert_eq!(backward.friend_id, *ada.as_uuid());
    }
}
