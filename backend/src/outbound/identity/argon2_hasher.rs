//! Argon2id implementation of the `PasswordHasher` port.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    Error as PhcError, PasswordHash as PhcString, PasswordHasher as _, PasswordVerifier as _,
    SaltString,
};
use argon2::{Algorithm, Argon2, Params, Version};

use crate::domain::PasswordHash;
use crate::domain::ports::{PasswordHasher, PasswordHasherError};

/// Salted Argon2id hashes encoded as PHC strings.
///
/// Verification reads the parameters from the stored string, so hashes made
/// with older parameters keep verifying after a parameter change.
#[derive(Clone, Default)]
pub struct Argon2PasswordHasher {
    argon2: Argon2<'static>,
}

impl Argon2PasswordHasher {
    /// Hasher with the crate's recommended Argon2id parameters.
    pub fn new() -> Self {
        Self::default()
    }

    /// Hasher with explicit cost parameters.
    pub fn with_params(params: Params) -> Self {
        Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        }
    }
}

impl PasswordHasher for Argon2PasswordHasher {
    fn hash(&self, password: &str) -> Result<PasswordHash, PasswordHasherError> {
        let salt = SaltString::generate(&mut OsRng);
        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| PasswordHash::new(hash.to_string()))
            .map_err(|err| PasswordHasherError::hashing(err.to_string()))
    }

    fn verify(&self, password: &str, hash: &PasswordHash) -> Result<bool, PasswordHasherError> {
        let parsed = PhcString::new(hash.as_str())
            .map_err(|err| PasswordHasherError::malformed_hash(err.to_string()))?;
        match self.argon2.verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(PhcError::Password) => Ok(false),
            Err(err) => Err(PasswordHasherError::malformed_hash(err.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    #[fixture]
    fn hasher() -> Argon2PasswordHasher {
        let params = Params::new(8, 1, 1, None).expect("valid test params");
        Argon2PasswordHasher::with_params(params)
    }

    #[rstest]
    fn hashes_verify_only_the_original_password(hasher: Argon2PasswordHasher) {
        let hash = hasher.hash("점심 먹자").expect("hash");
        assert!(hash.as_str().starts_with("$argon2id$"));
        assert!(hasher.verify("점심 먹자", &hash).expect("verify"));
        assert!(!hasher.verify("점심 먹자 ", &hash).expect("verify"));
    }

    #[rstest]
    fn equal_passwords_get_distinct_salts(hasher: Argon2PasswordHasher) {
        let first = hasher.hash("lunch").expect("hash");
        let second = hasher.hash("lunch").expect("hash");
        assert_ne!(first.as_str(), second.as_str());
    }

    #[rstest]
    fn garbage_hashes_are_reported(hasher: Argon2PasswordHasher) {
        let err = hasher
            .verify("lunch", &PasswordHash::new("not-a-phc-string"))
            .expect_err("malformed");
        assert!(matches!(err, PasswordHasherError::MalformedHash { .. }));
    }
}
