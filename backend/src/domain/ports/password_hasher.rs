//! Port for one-way password hashing.
//!
//! Hashing is CPU bound, so the trait is synchronous and callers decide where
//! to run it.

use crate::domain::PasswordHash;

use super::define_port_error;

define_port_error! {
    /// Errors raised by password hasher adapters.
    pub enum PasswordHasherError {
        /// The hasher could not produce a hash.
        Hashing { message: String } => "password hashing failed: {message}",
        /// A stored hash could not be parsed.
        MalformedHash { message: String } => "stored password hash is malformed: {message}",
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait PasswordHasher: Send + Sync {
    /// Produce a salted hash of `password`.
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError>;

    /// Check `password` against a stored hash.
    ///
    /// A mismatch is `Ok(false)`; errors are reserved for unreadable hashes.
    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHasherError>;
}
