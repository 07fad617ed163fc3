//! Canonical payload assembly and SHA-512 digest helpers
//!
//! Both the miner and the verifier hash exactly
//! `data || created_at.to_le_bytes() || nonce.to_le_bytes()`.

use sha2::{Digest, Sha512};

use crate::params::{DIGEST_LEN, NONCE_LEN, TRAILER_LEN};

/// Assemble the canonical payload for one `(created_at, nonce)` pair.
pub fn payload(data: &[u8], created_at: i64, nonce: i64) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(data.len() + TRAILER_LEN);
    bytes.extend_from_slice(data);
    bytes.extend_from_slice(&created_at.to_le_bytes());
    bytes.extend_from_slice(&nonce.to_le_bytes());
    bytes
}

/// Reusable payload for a search over nonces.
///
/// The data and timestamp are written once; each attempt only rewrites the
/// trailing nonce bytes.
#[derive(Debug, Clone)]
pub struct PayloadBuffer {
    bytes: Vec<u8>,
    nonce_offset: usize,
}

impl PayloadBuffer {
    /// Create a buffer for `data` mined at `created_at`. The nonce starts at zero.
    pub fn new(data: &[u8], created_at: i64) -> Self {
        let bytes = payload(data, created_at, 0);
        let nonce_offset = bytes.len() - NONCE_LEN;
        Self {
            bytes,
            nonce_offset,
        }
    }

    /// Overwrite the nonce slot.
    #[inline]
    pub fn set_nonce(&mut self, nonce: i64) {
        self.bytes[self.nonce_offset..].copy_from_slice(&nonce.to_le_bytes());
    }

    /// The complete payload as currently assembled.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// SHA-512 of `bytes`.
#[inline]
pub fn digest(bytes: &[u8]) -> [u8; DIGEST_LEN] {
    let mut out = [0u8; DIGEST_LEN];
    out.copy_from_slice(&Sha512::digest(bytes));
    out
}

/// SHA-512 of `bytes` as 128 uppercase hex characters, no separators.
pub fn digest_hex(bytes: &[u8]) -> String {
    hex::encode_upper(digest(bytes))
}

/// Check that the first `leading_zeros` characters of `hash` are `'0'`.
///
/// Returns `false` when `hash` is shorter than `leading_zeros`.
///
/// ```rust
/// use pow512_core::has_leading_zeros;
///
/// assert!(has_leading_zeros("000A3F", 3));
/// assert!(!has_leading_zeros("000A3F", 4));
/// assert!(!has_leading_zeros("00", 3));
/// ```
#[inline]
pub fn has_leading_zeros(hash: &str, leading_zeros: usize) -> bool {
    hash.len() >= leading_zeros && hash.as_bytes()[..leading_zeros].iter().all(|&b| b == b'0')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::{HASH_HEX_LEN, TRAILER_LEN};

    #[test]
    fn layout_is_data_then_le_timestamp_then_le_nonce() {
        let bytes = payload(b"ab", 0x0102_0304_0506_0708, -1);

        assert_eq!(bytes.len(), 2 + TRAILER_LEN);
        assert_eq!(&bytes[..2], b"ab");
        assert_eq!(&bytes[2..10], &[0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&bytes[10..], &[0xFF; 8]);
    }

    #[test]
    fn empty_data_is_trailer_only() {
        assert_eq!(payload(b"", 1, 2).len(), TRAILER_LEN);
    }

    #[test]
    fn buffer_matches_fresh_payload_after_rewrites() {
        let mut buffer = PayloadBuffer::new(b"some data", 1_700_000_000);
        for nonce in [0i64, 42, -7, i64::MAX, i64::MIN] {
            buffer.set_nonce(nonce);
            assert_eq!(buffer.as_bytes(), payload(b"some data", 1_700_000_000, nonce));
        }
    }

    #[test]
    fn digest_hex_is_uppercase_128_chars() {
        let hex = digest_hex(b"abc");

        assert_eq!(hex.len(), HASH_HEX_LEN);
        assert!(hex.chars().all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c)));
    }

    #[test]
    fn digest_matches_known_vector() {
        // FIPS 180-2 SHA-512("abc")
        assert_eq!(
            digest_hex(b"abc"),
            "DDAF35A193617ABACC417349AE20413112E6FA4E89A97EA20A9EEEE64B55D39A\
             2192992A274FC1A836BA3C23A3FEEBBD454D4423643CE80E2A9AC94FA54CA49F"
        );
    }

    #[test]
    fn leading_zero_prefix() {
        assert!(has_leading_zeros("0", 1));
        assert!(has_leading_zeros("ABC", 0));
        assert!(!has_leading_zeros("", 1));
        assert!(!has_leading_zeros("0A0", 2));
    }
}
