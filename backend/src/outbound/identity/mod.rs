//! Credential and invite-code adapters.

mod argon2_hasher;
mod invite_codes;

pub use argon2_hasher::Argon2PasswordHasher;
pub use invite_codes::RandomInviteCodeGenerator;
