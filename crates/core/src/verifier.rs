//! Proof verification
//!
//! Checks run in a fixed order and stop at the first failure:
//! 1. the hash is 128 characters long
//! 2. the proof is not older than `max_age`
//! 3. the claimed difficulty is positive
//! 4. the claimed difficulty fits in the hash
//! 5. the hash starts with the claimed number of `'0'`
//! 6. the digest recomputed from `data`, `created_at` and `nonce` equals the hash
//!
//! Only the last step hashes, so malformed and expired proofs are cheap to
//! reject.

use std::time::Duration;

use log::debug;

use crate::clock::{Clock, SystemClock};
use crate::params::HASH_HEX_LEN;
use crate::payload::{digest_hex, has_leading_zeros, payload};
use crate::{Proof, Rejection};

/// Proof verifier
///
/// `now` always comes from the verifier's own clock, never from the proof.
#[derive(Debug, Clone, Copy, Default)]
pub struct Verifier<C = SystemClock> {
    clock: C,
}

impl Verifier<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: Clock> Verifier<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Verify `proof` against `data`, reporting why it failed.
    ///
    /// `max_age` is truncated to whole seconds. A proof dated in the future
    /// has a negative age and is not considered expired.
    pub fn check(&self, data: &[u8], proof: &Proof, max_age: Duration) -> Result<(), Rejection> {
        let hash = proof.hash();
        if hash.len() != HASH_HEX_LEN {
            return Err(Rejection::MalformedHash { len: hash.len() });
        }

        let age = i128::from(self.clock.now_secs()) - i128::from(proof.created_at());
        let max_age = max_age.as_secs();
        if age > i128::from(max_age) {
            return Err(Rejection::Expired { age, max_age });
        }

        let leading_zeros = proof.leading_zeros();
        if leading_zeros < 1 {
            return Err(Rejection::NonPositiveDifficulty { leading_zeros });
        }
        let prefix_len = leading_zeros as usize;
        if hash.len() < prefix_len {
            return Err(Rejection::DifficultyExceedsHash {
                leading_zeros,
                len: hash.len(),
            });
        }

        if !has_leading_zeros(hash, prefix_len) {
            return Err(Rejection::MissingLeadingZeros);
        }

        let recomputed = digest_hex(&payload(data, proof.created_at(), proof.nonce()));
        if recomputed != hash {
            return Err(Rejection::HashMismatch);
        }

        Ok(())
    }

    /// `true` only if every check passes.
    pub fn verify(&self, data: &[u8], proof: &Proof, max_age: Duration) -> bool {
        match self.check(data, proof, max_age) {
            Ok(()) => true,
            Err(rejection) => {
                debug!("proof rejected: {}", rejection);
                false
            }
        }
    }
}

/// Verify `proof` against `data` using the system clock.
pub fn verify(data: &[u8], proof: &Proof, max_age: Duration) -> bool {
    Verifier::new().verify(data, proof, max_age)
}
