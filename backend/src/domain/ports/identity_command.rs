//! Driving port for account creation and sign-in.
//!
//! Inbound adapters hand over validated [`Credentials`] and receive the
//! authenticated [`User`]; session handling stays in the adapter.

use async_trait::async_trait;

use crate::domain::{Credentials, Error, User};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityCommand: Send + Sync {
    /// Register a new account and issue it an invite code.
    ///
    /// # Errors
    ///
    /// Returns a conflict error when the nickname is taken.
    async fn sign_up(&self, credentials: &Credentials) -> Result<User, Error>;

    /// Authenticate an existing account.
    ///
    /// # Errors
    ///
    /// Returns not found for an unknown nickname and unauthorized for a wrong
    /// password.
    async fn sign_in(&self, credentials: &Credentials) -> Result<User, Error>;
}
