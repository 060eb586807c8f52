//! Random invite codes drawn from `[0-9a-z]`.

use rand::Rng;

use crate::domain::ports::InviteCodeGenerator;
use crate::domain::{INVITE_CODE_LEN, InviteCode};

const ALPHABET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Draws [`INVITE_CODE_LEN`] characters uniformly from `[0-9a-z]` using the
/// thread-local CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomInviteCodeGenerator;

impl InviteCodeGenerator for RandomInviteCodeGenerator {
    fn generate(&self) -> InviteCode {
        let mut rng = rand::thread_rng();
        let code: String = (0..INVITE_CODE_LEN)
            .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
            .collect();
        InviteCode::from_generated(code)
    }
}
