//! Checking proofs received as JSON
//!
//! A proof that does not decode is as bad as one that decodes and fails
//! verification, so both are reported as [`InvalidProof`].

use std::time::Duration;

use thiserror::Error;

use crate::algorithm::{Clock, Proof, Rejection, Verifier};

#[derive(Error, Debug)]
pub enum InvalidProof {
    #[error("malformed proof: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error(transparent)]
    Rejected(#[from] Rejection),
}

/// Decode a proof from its JSON representation
pub fn decode_proof(json: &str) -> Result<Proof, InvalidProof> {
    Ok(serde_json::from_str(json)?)
}

/// Decode `json` and verify it against `data`
pub fn check_json<C: Clock>(
    verifier: &Verifier<C>,
    data: &[u8],
    json: &str,
    max_age: Duration,
) -> Result<Proof, InvalidProof> {
    let proof = decode_proof(json)?;
    verifier.check(data, &proof, max_age)?;
    Ok(proof)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::{FixedClock, Miner, RngNonceSource};

    const NOW: i64 = 1_700_000_000;
    const MAX_AGE: Duration = Duration::from_secs(7200);

    #[test]
    fn mined_proof_json_checks() {
        let proof = Miner::with_parts(RngNonceSource::seeded(3), FixedClock(NOW))
            .mine(b"data", 1)
            .unwrap();
        let json = serde_json::to_string(&proof).unwrap();

        let checked = check_json(&Verifier::with_clock(FixedClock(NOW)), b"data", &json, MAX_AGE);
        assert_eq!(checked.unwrap(), proof);
    }

    #[test]
    fn out_of_range_difficulty_is_malformed() {
        let json = format!(
            r#"{{"hash":"{}","nonce":1,"createdAt":{},"leadingZeros":4294967296}}"#,
            "0".repeat(128),
            NOW
        );
        let result = check_json(&Verifier::with_clock(FixedClock(NOW)), b"", &json, MAX_AGE);
        assert!(matches!(result, Err(InvalidProof::Malformed(_))));
    }

    #[test]
    fn missing_field_is_malformed() {
        let json = r#"{"hash":"00","nonce":1,"createdAt":0}"#;
        assert!(matches!(decode_proof(json), Err(InvalidProof::Malformed(_))));
    }

    #[test]
    fn rejection_is_passed_through() {
        let json = r#"{"hash":"00","nonce":1,"createdAt":0,"leadingZeros":1}"#;
        let result = check_json(&Verifier::with_clock(FixedClock(NOW)), b"", json, MAX_AGE);
        assert!(matches!(
            result,
            Err(InvalidProof::Rejected(Rejection::MalformedHash { len: 2 }))
        ));
    }
}
