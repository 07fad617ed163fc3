//! Fixed parameters of the proof-of-work scheme
//!
//! The digest algorithm, its textual encoding and the byte layout of the
//! hashed payload are not negotiable. Miners and verifiers built against
//! different values are incompatible.

/// SHA-512 output size in bytes
pub const DIGEST_LEN: usize = 64;

/// Length of the uppercase hex rendering of a digest
pub const HASH_HEX_LEN: usize = DIGEST_LEN * 2;

/// Size of the encoded creation timestamp (little-endian i64)
pub const TIMESTAMP_LEN: usize = 8;

/// Size of the encoded nonce (little-endian i64)
pub const NONCE_LEN: usize = 8;

/// Bytes appended after the caller's data
pub const TRAILER_LEN: usize = TIMESTAMP_LEN + NONCE_LEN;

/// Smallest accepted difficulty
pub const MIN_LEADING_ZEROS: i32 = 1;

/// Largest difficulty a 128-character hash can carry
pub const MAX_LEADING_ZEROS: i32 = HASH_HEX_LEN as i32;

/// Scheme version
pub const VERSION: u8 = 1;
