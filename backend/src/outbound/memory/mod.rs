//! In-process adapters backing every repository port.
//!
//! [`InMemoryStore`] keeps profiles, schedules, and friendships behind one
//! lock so cross-table reads (friend schedules with nicknames) see a
//! consistent snapshot. It serves development runs without a database and
//! the integration tests; data is lost on restart.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;

use crate::domain::ports::{
    FriendshipLink, FriendshipRepository, FriendshipRepositoryError, ScheduleRepository,
    ScheduleRepositoryError, UserAccount, UserPersistenceError, UserRepository,
};
use crate::domain::{
    DayIndex, InviteCode, Nickname, Schedule, ScheduleWithOwner, User, UserId, UserSummary,
};

#[derive(Default)]
struct State {
    accounts: HashMap<UserId, UserAccount>,
    schedules: HashMap<UserId, BTreeMap<DayIndex, Schedule>>,
    friendships: HashSet<(UserId, UserId)>,
}

impl State {
    fn nickname_of(&self, id: &UserId) -> Option<&Nickname> {
        self.accounts.get(id).map(|account| account.user.nickname())
    }
}

/// Shared in-memory store implementing the user, schedule, and friendship
/// repository ports.
#[derive(Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl UserRepository for InMemoryStore {
    async fn insert(&self, account: &UserAccount) -> Result<(), UserPersistenceError> {
        let mut state = self.state();
        let user = &account.user;
        if state
            .accounts
            .values()
            .any(|existing| existing.user.nickname() == user.nickname())
        {
            return Err(UserPersistenceError::duplicate_nickname(
                user.nickname().as_ref(),
            ));
        }
        if state
            .accounts
            .values()
            .any(|existing| existing.user.invite_code() == user.invite_code())
        {
            return Err(UserPersistenceError::duplicate_invite_code(
                user.invite_code().as_ref(),
            ));
        }
        state.accounts.insert(user.id().clone(), account.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserPersistenceError> {
        Ok(self.state().accounts.get(id).map(|account| account.user.clone()))
    }

    async fn find_account_by_nickname(
        &self,
        nickname: &Nickname,
    ) -> Result<Option<UserAccount>, UserPersistenceError> {
        Ok(self
            .state()
            .accounts
            .values()
            .find(|account| account.user.nickname() == nickname)
            .cloned())
    }

    async fn find_by_invite_code(
        &self,
        code: &InviteCode,
    ) -> Result<Option<User>, UserPersistenceError> {
        Ok(self
            .state()
            .accounts
            .values()
            .find(|account| account.user.invite_code() == code)
            .map(|account| account.user.clone()))
    }

    async fn find_summaries(
        &self,
        ids: &[UserId],
    ) -> Result<Vec<UserSummary>, UserPersistenceError> {
        let state = self.state();
        let mut summaries: Vec<UserSummary> = ids
            .iter()
            .filter_map(|id| state.accounts.get(id))
            .map(|account| account.user.to_summary())
            .collect();
        summaries.sort_by(|a, b| a.nickname.as_ref().cmp(b.nickname.as_ref()));
        summaries.dedup_by(|a, b| a.id == b.id);
        Ok(summaries)
    }
}

#[async_trait]
impl ScheduleRepository for InMemoryStore {
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<Schedule>, ScheduleRepositoryError> {
        Ok(self
            .state()
            .schedules
            .get(user_id)
            .map(|week| week.values().cloned().collect())
            .unwrap_or_default())
    }

    async fn upsert(&self, schedule: &Schedule) -> Result<(), ScheduleRepositoryError> {
        self.state()
            .schedules
            .entry(schedule.user_id.clone())
            .or_default()
            .insert(schedule.day, schedule.clone());
        Ok(())
    }

    async fn delete(&self, user_id: &UserId, day: DayIndex) -> Result<(), ScheduleRepositoryError> {
        let mut state = self.state();
        if let Some(week) = state.schedules.get_mut(user_id) {
            week.remove(&day);
        }
        Ok(())
    }

    async fn list_for_friends_of(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ScheduleWithOwner>, ScheduleRepositoryError> {
        let state = self.state();
        let mut rows: Vec<ScheduleWithOwner> = state
            .friendships
            .iter()
            .filter(|(from, _)| from == user_id)
            .filter_map(|(_, friend)| {
                let nickname = state.nickname_of(friend)?;
                let week = state.schedules.get(friend)?;
                Some(week.values().map(move |schedule| ScheduleWithOwner {
                    schedule: schedule.clone(),
                    owner_nickname: nickname.clone(),
                }))
            })
            .flatten()
            .collect();
        rows.sort_by(|a, b| {
            a.owner_nickname
                .as_ref()
                .cmp(b.owner_nickname.as_ref())
                .then(a.schedule.day.cmp(&b.schedule.day))
        });
        Ok(rows)
    }
}

#[async_trait]
impl FriendshipRepository for InMemoryStore {
    async fn friend_ids_of(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserId>, FriendshipRepositoryError> {
        Ok(self
            .state()
            .friendships
            .iter()
            .filter(|(from, _)| from == user_id)
            .map(|(_, to)| to.clone())
            .collect())
    }

    async fn link(
        &self,
        user_id: &UserId,
        friend_id: &UserId,
    ) -> Result<FriendshipLink, FriendshipRepositoryError> {
        let mut state = self.state();
        let forward = state
            .friendships
            .insert((user_id.clone(), friend_id.clone()));
        let backward = state
            .friendships
            .insert((friend_id.clone(), user_id.clone()));
        Ok(if forward || backward {
            FriendshipLink::Created
        } else {
            FriendshipLink::AlreadyLinked
        })
    }
}
