//! Port for minting fresh invite codes.

use crate::domain::InviteCode;

/// Source of candidate invite codes.
///
/// Candidates need not be unique; the repository rejects collisions and the
/// identity service retries.
#[cfg_attr(test, mockall::automock)]
pub trait InviteCodeGenerator: Send + Sync {
    /// Produce a new candidate code.
    fn generate(&self) -> InviteCode;
}
