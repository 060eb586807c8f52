//! Builders wiring repositories and services into [`HttpState`].

use std::sync::Arc;

use chrono::FixedOffset;
use mockable::{Clock, DefaultClock};
use tracing::info;

use crate::domain::ports::{FriendshipRepository, ScheduleRepository, UserRepository};
use crate::domain::{FriendshipService, IdentityService, LunchService, ScheduleService};
use crate::inbound::http::state::HttpState;
use crate::outbound::identity::{Argon2PasswordHasher, RandomInviteCodeGenerator};
use crate::outbound::memory::InMemoryStore;
use crate::outbound::persistence::{
    DieselFriendshipRepository, DieselScheduleRepository, DieselUserRepository,
};

use super::ServerConfig;

/// Build handler state from the server configuration.
///
/// Uses Diesel repositories when a pool is configured and a fresh
/// [`InMemoryStore`] otherwise. "Today" follows the system clock.
pub(crate) fn build_http_state(config: &ServerConfig) -> HttpState {
    let clock: Arc<dyn Clock> = Arc::new(DefaultClock);
    match &config.db_pool {
        Some(pool) => {
            info!("using PostgreSQL repositories");
            wire_services(
                Arc::new(DieselUserRepository::new(pool.clone())),
                Arc::new(DieselScheduleRepository::new(pool.clone())),
                Arc::new(DieselFriendshipRepository::new(pool.clone())),
                clock,
                config.utc_offset,
            )
        }
        None => {
            info!("no database configured; data is kept in memory");
            in_memory_state(Arc::new(InMemoryStore::new()), clock, config.utc_offset)
        }
    }
}

/// Build handler state over one shared in-memory store.
///
/// # Examples
/// ```
/// use std::sync::Arc;
///
/// use chrono::FixedOffset;
/// use lunchmate::outbound::memory::InMemoryStore;
/// use lunchmate::server::in_memory_state;
/// use mockable::DefaultClock;
///
/// let offset = FixedOffset::east_opt(9 * 3600).expect("valid offset");
/// let _state = in_memory_state(Arc::new(InMemoryStore::new()), Arc::new(DefaultClock), offset);
/// ```
pub fn in_memory_state(
    store: Arc<InMemoryStore>,
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
) -> HttpState {
    wire_services(store.clone(), store.clone(), store, clock, offset)
}

fn wire_services<U, S, F>(
    users: Arc<U>,
    schedules: Arc<S>,
    friendships: Arc<F>,
    clock: Arc<dyn Clock>,
    offset: FixedOffset,
) -> HttpState
where
    U: UserRepository + 'static,
    S: ScheduleRepository + 'static,
    F: FriendshipRepository + 'static,
{
    let identity = Arc::new(IdentityService::new(
        users.clone(),
        Arc::new(Argon2PasswordHasher::new()),
        Arc::new(RandomInviteCodeGenerator),
    ));
    let friendships = Arc::new(FriendshipService::new(users, friendships));
    let schedules_service = Arc::new(ScheduleService::new(schedules.clone()));
    let lunch = Arc::new(LunchService::new(schedules, clock, offset));

    HttpState {
        identity: identity.clone(),
        identity_query: identity,
        friendships: friendships.clone(),
        friends: friendships,
        schedules: schedules_service.clone(),
        schedules_query: schedules_service,
        lunch,
    }
}
