//! pow512 Prover Library
//!
//! Mines and verifies SHA-512 leading-zero proofs of work.
//!
//! # Overview
//!
//! A proof binds an arbitrary payload to a creation time and a nonce such
//! that `SHA-512(data || created_at || nonce)`, written as uppercase hex,
//! starts with a chosen number of `'0'` characters.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use pow512::algorithm::{verify, work};
//!
//! let proof = work(b"dit is een test", 3).unwrap();
//! assert!(proof.hash().starts_with("000"));
//! assert!(verify(b"dit is een test", &proof, Duration::from_secs(7200)));
//! ```

// Re-export the core algorithm
pub use pow512_core as algorithm;

pub mod config;
pub mod exchange;

// Convenience re-exports
pub use algorithm::{verify, work, Miner, PowError, Proof, SearchLimits, Verifier};
pub use config::{ConfigError, PowConfig};
pub use exchange::{check_json, decode_proof, InvalidProof};
