//! Nonce sources
//!
//! The miner draws every candidate nonce from a [`NonceSource`]. Production
//! code uses the operating system's entropy; tests seed a generator to get a
//! reproducible search.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use crate::PowError;

/// Supplies uniformly distributed 64-bit candidate nonces.
pub trait NonceSource {
    fn next_nonce(&mut self) -> Result<i64, PowError>;
}

impl<N: NonceSource + ?Sized> NonceSource for &mut N {
    fn next_nonce(&mut self) -> Result<i64, PowError> {
        (**self).next_nonce()
    }
}

/// Reads 8 bytes per nonce from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsNonceSource;

impl NonceSource for OsNonceSource {
    fn next_nonce(&mut self) -> Result<i64, PowError> {
        let mut bytes = [0u8; 8];
        getrandom::getrandom(&mut bytes).map_err(|e| PowError::Entropy(e.to_string()))?;
        Ok(i64::from_le_bytes(bytes))
    }
}

/// Draws nonces from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngNonceSource<R = StdRng> {
    rng: R,
}

impl<R: RngCore> RngNonceSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RngNonceSource<StdRng> {
    /// Deterministic sequence for reproducible searches.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: RngCore> NonceSource for RngNonceSource<R> {
    fn next_nonce(&mut self) -> Result<i64, PowError> {
        Ok(self.rng.next_u64() as i64)
    }
}
