//! # pow512 Core
//!
//! A hashcash-style proof of work over SHA-512.
//!
//! A [`Proof`] shows that someone searched for a nonce such that
//! `SHA-512(data || created_at || nonce)` rendered as uppercase hex begins
//! with a required number of `'0'` characters. Producing one costs on
//! average `16^leading_zeros` digests; checking one costs a single digest.
//!
//! ## Payload Format
//!
//! ```text
//! payload = data || created_at || nonce
//!           ^^^^    ^^^^^^^^^^    ^^^^^
//!           any len 8 bytes       8 bytes
//!                   (LE i64)      (LE i64)
//! ```
//!
//! `created_at` is whole seconds since the Unix epoch, captured once when
//! the search starts.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use pow512_core::{verify, work};
//!
//! let data = b"dit is een test";
//! let proof = work(data, 2).unwrap();
//!
//! assert!(proof.hash().starts_with("00"));
//! assert!(verify(data, &proof, Duration::from_secs(2 * 60 * 60)));
//! assert!(!verify(b"other data", &proof, Duration::from_secs(2 * 60 * 60)));
//! ```
//!
//! ## Bounded Search
//!
//! [`work`] searches until it succeeds. Embedders that need to bound latency
//! build a [`Miner`] with [`SearchLimits`]:
//!
//! ```rust
//! use pow512_core::{Miner, PowError, SearchLimits};
//!
//! let mut miner = Miner::new().with_limits(SearchLimits::unbounded().with_max_attempts(10));
//! match miner.mine(b"payload", 64) {
//!     Err(PowError::AttemptsExhausted { attempts }) => assert_eq!(attempts, 10),
//!     other => panic!("unexpected: {other:?}"),
//! }
//! ```

mod clock;
mod error;
mod limits;
mod miner;
mod nonce;
mod params;
mod payload;
mod proof;
mod verifier;

#[cfg(feature = "parallel")]
mod parallel;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{PowError, Rejection};
pub use limits::{CancelToken, SearchLimits};
pub use miner::{Miner, work};
pub use nonce::{NonceSource, OsNonceSource, RngNonceSource};
pub use params::*;
pub use payload::{PayloadBuffer, digest, digest_hex, has_leading_zeros, payload};
pub use proof::Proof;
pub use verifier::{Verifier, verify};

#[cfg(feature = "parallel")]
pub use parallel::mine_parallel;
