//! Error types
//!
//! [`PowError`] means the search did not produce a proof. [`Rejection`] means
//! a proof did not verify. The two are never mixed: a verifier that sees a
//! `Rejection` knows the proof is bad, a miner that sees a `PowError` knows it
//! gave up or was misconfigured.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PowError {
    #[error("leading zeros must be between 1 and 128, got {leading_zeros}")]
    InvalidDifficulty { leading_zeros: i32 },

    #[error("random source failed: {0}")]
    Entropy(String),

    #[error("search cancelled after {attempts} attempts")]
    Cancelled { attempts: u64 },

    #[error("no proof found within {attempts} attempts")]
    AttemptsExhausted { attempts: u64 },

    #[error("search deadline passed after {attempts} attempts")]
    DeadlineExceeded { attempts: u64 },
}

impl PowError {
    /// Attempts made before the search stopped, if it ran at all.
    pub fn attempts(&self) -> Option<u64> {
        match self {
            Self::Cancelled { attempts }
            | Self::AttemptsExhausted { attempts }
            | Self::DeadlineExceeded { attempts } => Some(*attempts),
            Self::InvalidDifficulty { .. } | Self::Entropy(_) => None,
        }
    }
}

/// Why a proof failed verification.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    #[error("hash has {len} characters, expected 128")]
    MalformedHash { len: usize },

    #[error("proof is {age}s old, maximum is {max_age}s")]
    Expired { age: i128, max_age: u64 },

    #[error("leading zeros must be positive, got {leading_zeros}")]
    NonPositiveDifficulty { leading_zeros: i32 },

    #[error("{leading_zeros} leading zeros exceed hash length {len}")]
    DifficultyExceedsHash { leading_zeros: i32, len: usize },

    #[error("hash does not start with the claimed zeros")]
    MissingLeadingZeros,

    #[error("recomputed hash does not match")]
    HashMismatch,
}
