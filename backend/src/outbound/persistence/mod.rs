//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories translate between Diesel rows and domain types and nothing
//! more. Rows and table definitions stay private to this module; every
//! database failure leaves as a typed port error.
//!
//! # Example
//!
//! ```no_run
//! # async fn demo() -> Result<(), lunchmate::outbound::persistence::PoolError> {
//! use lunchmate::outbound::persistence::{DbPool, DieselUserRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/lunchmate")).await?;
//! let users = DieselUserRepository::new(pool);
//! # let _ = users;
//! # Ok(())
//! # }
//! ```

mod diesel_friendship_repository;
mod diesel_schedule_repository;
mod diesel_user_repository;
mod error_mapping;
mod migrations;
mod models;
mod pool;
mod schema;

pub use diesel_friendship_repository::DieselFriendshipRepository;
pub use diesel_schedule_repository::DieselScheduleRepository;
pub use diesel_user_repository::DieselUserRepository;
pub use migrations::{MigrationError, run_pending_migrations};
pub use pool::{DbPool, PoolConfig, PoolError};
