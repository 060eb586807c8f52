//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (repositories, hasher, invite codes) are implemented by
//! outbound adapters. Driving ports (commands and queries) are implemented by
//! domain services and consumed by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod friends_query;
mod friendship_command;
mod friendship_repository;
mod identity_command;
mod identity_query;
mod invite_code_generator;
mod lunch_query;
mod password_hasher;
mod schedule_command;
mod schedule_query;
mod schedule_repository;
mod user_repository;

#[cfg(test)]
pub use friends_query::MockFriendsQuery;
pub use friends_query::FriendsQuery;
#[cfg(test)]
pub use friendship_command::MockFriendshipCommand;
pub use friendship_command::FriendshipCommand;
#[cfg(test)]
pub use friendship_repository::MockFriendshipRepository;
pub use friendship_repository::{FriendshipLink, FriendshipRepository, FriendshipRepositoryError};
#[cfg(test)]
pub use identity_command::MockIdentityCommand;
pub use identity_command::IdentityCommand;
#[cfg(test)]
pub use identity_query::MockIdentityQuery;
pub use identity_query::IdentityQuery;
#[cfg(test)]
pub use invite_code_generator::MockInviteCodeGenerator;
pub use invite_code_generator::InviteCodeGenerator;
#[cfg(test)]
pub use lunch_query::MockLunchQuery;
pub use lunch_query::{LunchQuery, TodayOverview, WeekDay, WeekOverview};
#[cfg(test)]
pub use password_hasher::MockPasswordHasher;
pub use password_hasher::{PasswordHasher, PasswordHasherError};
#[cfg(test)]
pub use schedule_command::MockScheduleCommand;
pub use schedule_command::ScheduleCommand;
#[cfg(test)]
pub use schedule_query::MockScheduleQuery;
pub use schedule_query::ScheduleQuery;
#[cfg(test)]
pub use schedule_repository::MockScheduleRepository;
pub use schedule_repository::{ScheduleRepository, ScheduleRepositoryError};
#[cfg(test)]
pub use user_repository::MockUserRepository;
pub use user_repository::{UserAccount, UserPersistenceError, UserRepository};
