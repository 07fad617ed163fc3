//! The proof record handed from miner to verifier

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A mined proof of work.
///
/// Created once by [`Miner::mine`](crate::Miner::mine) and never mutated. The
/// four fields are everything a verifier needs besides the original data.
///
/// With the `serde` feature the external field names are `hash`, `nonce`,
/// `createdAt` and `leadingZeros`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Proof {
    /// Uppercase hex SHA-512 of the payload
    hash: String,
    /// Winning nonce
    nonce: i64,
    /// Seconds since the Unix epoch when the search started
    created_at: i64,
    /// Difficulty the proof was mined for
    leading_zeros: i32,
}

impl Proof {
    /// Rebuild a proof from its four fields.
    ///
    /// Nothing is checked here; a proof received from elsewhere is judged by
    /// [`Verifier`](crate::Verifier).
    pub fn from_parts(hash: String, created_at: i64, nonce: i64, leading_zeros: i32) -> Self {
        Self {
            hash,
            nonce,
            created_at,
            leading_zeros,
        }
    }

    pub fn hash(&self) -> &str {
        &self.hash
    }

    pub fn nonce(&self) -> i64 {
        self.nonce
    }

    pub fn created_at(&self) -> i64 {
        self.created_at
    }

    pub fn leading_zeros(&self) -> i32 {
        self.leading_zeros
    }
}

impl fmt::Display for Proof {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Proof(hash={}, created_at={}, nonce={}, leading_zeros={})",
            self.hash, self.created_at, self.nonce, self.leading_zeros
        )
    }
}
