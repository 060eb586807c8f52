//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and only ever talk to driving
//! ports, so they can be exercised with mocks and no I/O.

use std::sync::Arc;

use crate::domain::ports::{
    FriendsQuery, FriendshipCommand, IdentityCommand, IdentityQuery, LunchQuery, ScheduleCommand,
    ScheduleQuery,
};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub identity: Arc<dyn IdentityCommand>,
    pub identity_query: Arc<dyn IdentityQuery>,
    pub friendships: Arc<dyn FriendshipCommand>,
    pub friends: Arc<dyn FriendsQuery>,
    pub schedules: Arc<dyn ScheduleCommand>,
    pub schedules_query: Arc<dyn ScheduleQuery>,
    pub lunch: Arc<dyn LunchQuery>,
}
