//! Nonce search
//!
//! The search follows a fixed pattern:
//! - `created_at` is read from the clock once, before the first attempt, and
//!   never refreshed (a drifting timestamp would not verify)
//! - every attempt draws a fresh random nonce, rewrites the nonce slot of the
//!   payload, hashes it and tests the uppercase hex prefix
//! - limits are checked before each attempt

use log::{debug, trace};

use crate::clock::{Clock, SystemClock};
use crate::limits::SearchLimits;
use crate::nonce::{NonceSource, OsNonceSource};
use crate::params::{MAX_LEADING_ZEROS, MIN_LEADING_ZEROS};
use crate::payload::{PayloadBuffer, digest_hex, has_leading_zeros};
use crate::{PowError, Proof};

/// Proof-of-work miner
///
/// Owns its nonce source and clock so that tests can make a search
/// reproducible. A miner can be reused for any number of sequential searches.
pub struct Miner<N = OsNonceSource, C = SystemClock> {
    nonces: N,
    clock: C,
    limits: SearchLimits,
    /// Attempts made by the most recent search
    attempts: u64,
}

impl Miner<OsNonceSource, SystemClock> {
    /// Miner using OS entropy and the system clock, with no search bound.
    pub fn new() -> Self {
        Self::with_parts(OsNonceSource, SystemClock)
    }
}

impl Default for Miner<OsNonceSource, SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: NonceSource, C: Clock> Miner<N, C> {
    pub fn with_parts(nonces: N, clock: C) -> Self {
        Self {
            nonces,
            clock,
            limits: SearchLimits::unbounded(),
            attempts: 0,
        }
    }

    /// Replace the stopping conditions.
    pub fn with_limits(mut self, limits: SearchLimits) -> Self {
        self.limits = limits;
        self
    }

    pub fn limits(&self) -> &SearchLimits {
        &self.limits
    }

    /// Attempts made by the most recent call to [`mine`](Self::mine).
    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Search for a nonce whose payload digest starts with `leading_zeros`
    /// `'0'` hex characters.
    ///
    /// With unbounded limits this only returns once a proof is found, which
    /// for large difficulties is never in practice.
    pub fn mine(&mut self, data: &[u8], leading_zeros: i32) -> Result<Proof, PowError> {
        validate_difficulty(leading_zeros)?;
        let prefix_len = leading_zeros as usize;

        let created_at = self.clock.now_secs();
        let mut payload = PayloadBuffer::new(data, created_at);
        self.attempts = 0;

        debug!(
            "mining {} bytes at difficulty {} (created_at={})",
            data.len(),
            leading_zeros,
            created_at
        );

        loop {
            self.limits.check(self.attempts).inspect_err(|e| {
                debug!("search stopped: {}", e);
            })?;

            let nonce = self.nonces.next_nonce()?;
            payload.set_nonce(nonce);
            let hash = digest_hex(payload.as_bytes());
            self.attempts += 1;

            if has_leading_zeros(&hash, prefix_len) {
                debug!("found nonce {} after {} attempts", nonce, self.attempts);
                trace!("hash {}", hash);
                return Ok(Proof::from_parts(hash, created_at, nonce, leading_zeros));
            }
        }
    }
}

/// Mine a proof with OS entropy, the system clock and no search bound.
///
/// Fails only for a difficulty outside `1..=128` or a broken entropy source.
pub fn work(data: &[u8], leading_zeros: i32) -> Result<Proof, PowError> {
    Miner::new().mine(data, leading_zeros)
}

pub(crate) fn validate_difficulty(leading_zeros: i32) -> Result<(), PowError> {
    if (MIN_LEADING_ZEROS..=MAX_LEADING_ZEROS).contains(&leading_zeros) {
        Ok(())
    } else {
        Err(PowError::InvalidDifficulty { leading_zeros })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FixedClock, RngNonceSource, payload};

    fn seeded_miner(seed: u64, now: i64) -> Miner<RngNonceSource, FixedClock> {
        Miner::with_parts(RngNonceSource::seeded(seed), FixedClock(now))
    }

    #[test]
    fn proof_carries_fixed_timestamp_and_difficulty() {
        let mut miner = seeded_miner(3, 1_700_000_000);
        let proof = miner.mine(b"dit is een test", 2).unwrap();

        assert_eq!(proof.created_at(), 1_700_000_000);
        assert_eq!(proof.leading_zeros(), 2);
        assert!(proof.hash().starts_with("00"));
        assert!(miner.attempts() >= 1);
    }

    #[test]
    fn hash_is_digest_of_canonical_payload() {
        let mut miner = seeded_miner(11, 1_234_567);
        let proof = miner.mine(b"abc", 1).unwrap();

        let expected = digest_hex(&payload(b"abc", proof.created_at(), proof.nonce()));
        assert_eq!(proof.hash(), expected);
    }

    #[test]
    fn same_seed_same_proof() {
        let a = seeded_miner(3, 99).mine(b"data", 2).unwrap();
        let b = seeded_miner(3, 99).mine(b"data", 2).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn empty_data_is_valid_input() {
        let proof = seeded_miner(5, 0).mine(b"", 1).unwrap();
        assert!(proof.hash().starts_with('0'));
    }

    #[test]
    fn difficulty_out_of_range_is_rejected_before_searching() {
        let mut miner = seeded_miner(1, 0);
        for leading_zeros in [0, -1, 129, i32::MIN] {
            assert_eq!(
                miner.mine(b"x", leading_zeros),
                Err(PowError::InvalidDifficulty { leading_zeros })
            );
        }
        assert_eq!(miner.attempts(), 0);
    }

    #[test]
    fn attempt_bound_stops_search() {
        let mut miner =
            seeded_miner(1, 0).with_limits(SearchLimits::unbounded().with_max_attempts(25));
        // 64 zero hex digits will not be found in 25 attempts
        assert_eq!(
            miner.mine(b"x", 64),
            Err(PowError::AttemptsExhausted { attempts: 25 })
        );
        assert_eq!(miner.attempts(), 25);
    }

    #[test]
    fn miner_is_reusable() {
        let mut miner = seeded_miner(7, 10);
        let first = miner.mine(b"one", 1).unwrap();
        let second = miner.mine(b"two", 1).unwrap();
        assert_ne!(first.hash(), second.hash());
    }
}
