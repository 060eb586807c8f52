//! PostgreSQL-backed `UserRepository` over the `profiles` table.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;
use tracing::warn;
use uuid::Uuid;

use crate::domain::ports::{UserAccount, UserPersistenceError, UserRepository};
use crate::domain::{InviteCode, Nickname, PasswordHash, User, UserId, UserSummary};

use super::error_mapping::{map_diesel_error, map_pool_error, unique_violation};
use super::models::{NewProfileRow, ProfileRow};
use super::pool::{DbPool, PoolError};
use super::schema::profiles;

const NICKNAME_CONSTRAINT: &str = "profiles_nickname_key";
const INVITE_CODE_CONSTRAINT: &str = "profiles_invite_code_key";

/// Diesel-backed implementation of [`UserRepository`].
#[derive(Clone)]
pub struct DieselUserRepository {
    pool: DbPool,
}

impl DieselUserRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn pool_error(error: PoolError) -> UserPersistenceError {
    map_pool_error(error, UserPersistenceError::connection)
}

fn diesel_error(error: diesel::result::Error) -> UserPersistenceError {
    map_diesel_error(
        error,
        UserPersistenceError::query,
        UserPersistenceError::connection,
    )
}

fn corrupt_row(field: &str, id: Uuid) -> UserPersistenceError {
    warn!(%id, field, "stored profile failed validation");
    UserPersistenceError::query(format!("stored profile has invalid {field}"))
}

fn row_to_account(row: ProfileRow) -> Result<UserAccount, UserPersistenceError> {
    let nickname = Nickname::new(&row.nickname).map_err(|_| corrupt_row("nickname", row.id))?;
    let invite_code =
        InviteCode::new(&row.invite_code).map_err(|_| corrupt_row("invite code", row.id))?;
    Ok(UserAccount {
        user: User::new(UserId::from_uuid(row.id), nickname, invite_code),
        password_hash: PasswordHash::new(row.password_hash),
    })
}

#[async_trait]
impl UserRepository for DieselUserRepository {
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let user = &account.user;
        let row = NewProfileRow {
            id: *user.id().as_uuid(),
            nickname: user.nickname().as_ref(),
            password_hash: account.password_hash.as_str(),
            invite_code: user.invite_code().as_ref(),
        };

        diesel::insert_into(profiles::table)
            .values(&row)
            .execute(&mut conn)
            .await
            .map(|_| ())
            .map_err(|err| {
                let duplicate = match unique_violation(&err) {
                    Some(NICKNAME_CONSTRAINT) => Some(UserPersistenceError::duplicate_nickname(
                        user.nickname().as_ref(),
                    )),
                    Some(INVITE_CODE_CONSTRAINT) => Some(
                        UserPersistenceError::duplicate_invite_code(user.invite_code().as_ref()),
                    ),
                    _ => None,
                };
                duplicate.unwrap_or_else(|| diesel_error(err))
            })
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = profiles::table
            .find(*id.as_uuid())
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(|row| row_to_account(row).map(|account| account.user))
            .transpose()
    }

    async fn find_account_by_nickname(
        &self,
        nickname: &Nickname,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = profiles::table
            .filter(profiles::nickname.eq(nickname.as_ref()))
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(row_to_account).transpose()
    }

    async fn find_by_invite_code(
        &self,
        code: &InviteCode,
    ) -> Result<Option<User>, UserPersistenceError> {
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let row = profiles::table
            .filter(profiles::invite_code.eq(code.as_ref()))
            .select(ProfileRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(diesel_error)?;
        row.map(|row| row_to_account(row).map(|account| account.user))
            .transpose()
    }

    async fn find_summaries(
        &self,
        ids: &[UserId],
    ) -> Result<Vec<UserSummary>, UserPersistenceError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        let uuids: Vec<Uuid> = ids.iter().map(|id| *id.as_uuid()).collect();
        let mut conn = self.pool.get().await.map_err(pool_error)?;
        let rows: Vec<(Uuid, String)> = profiles::table
            .filter(profiles::id.eq_any(&uuids))
            .order(profiles::nickname.asc())
            .select((profiles::id, profiles::nickname))
            .load(&mut conn)
            .await
            .map_err(diesel_error)?;

        rows.into_iter()
            .map(|(id, nickname)| {
                let nickname = Nickname::new(&nickname).map_err(|_| corrupt_row("nickname", id))?;
                Ok(UserSummary {
                    id: UserId::from_uuid(id),
                    nickname,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    //! Row conversion coverage; queries are exercised against PostgreSQL
    //! outside the unit suite.
    use super::*;
    use rstest::rstest;

    fn row(nickname: &str, invite_code: &str) -> ProfileRow {
        ProfileRow {
            id: Uuid::new_v4(),
            nickname: nickname.to_owned(),
            password_hash: "$argon2id$v=19$stub".to_owned(),
            invite_code: invite_code.to_owned(),
        }
    }

    #[rstest]
    fn valid_rows_become_accounts() {
        let account = row_to_account(row("ada", "k3x9qa")).expect("valid row");
        assert_eq!(account.user.nickname().as_ref(), "ada");
        assert_eq!(account.user.invite_code().as_ref(), "k3x9qa");
        assert_eq!(account.password_hash.as_str(), "$argon2id$v=19$stub");
    }

    #[rstest]
    #[case("", "k3x9qa")]
    #[case("ada", "NOT-OK")]
    fn corrupt_rows_are_query_errors(#[case] nickname: &str, #[case] invite_code: &str) {
        let err = row_to_account(row(nickname, invite_code)).expect_err("invalid row");
        assert!(matches!(err, UserPersistenceError::Query { .. }));
    }
}
