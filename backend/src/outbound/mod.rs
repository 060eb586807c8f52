//! Outbound adapters implementing the domain's driven ports.
//!
//! - **persistence**: PostgreSQL repositories using Diesel.
//! - **memory**: an in-process store for database-free runs and tests.
//! - **identity**: Argon2 password hashing and random invite codes.
//!
//! Adapters translate between infrastructure and domain types; they hold no
//! business rules.

pub mod identity;
pub mod memory;
pub mod persistence;
