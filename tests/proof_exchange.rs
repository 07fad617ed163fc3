//! Proofs travel as JSON between a miner and a verifier

use std::fs;

use pow512::algorithm::{FixedClock, RngNonceSource};
use pow512::{Miner, PowConfig, PowError, Proof, Verifier};

#[test]
fn proof_survives_json_file() {
    let config = PowConfig {
        difficulty: 2,
        ..PowConfig::default()
    };
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("proof.json");

    let mut miner = Miner::with_parts(RngNonceSource::seeded(3), FixedClock(1_700_000_000))
        .with_limits(config.limits());
    let proof = miner.mine(b"dit is een test", config.difficulty).unwrap();
    fs::write(&path, serde_json::to_string_pretty(&proof).unwrap()).unwrap();

    let received: Proof = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    let verifier = Verifier::with_clock(FixedClock(1_700_000_000 + 60));

    assert_eq!(received, proof);
    assert!(verifier.verify(b"dit is een test", &received, config.max_age()));
    assert!(!verifier.verify(b"dit is geen test", &received, config.max_age()));
}

#[test]
fn foreign_json_with_zero_difficulty_is_rejected() {
    let json = format!(
        r#"{{"hash":"{}","nonce":1,"createdAt":1700000000,"leadingZeros":0}}"#,
        "0".repeat(128)
    );
    let proof: Proof = serde_json::from_str(&json).unwrap();
    let verifier = Verifier::with_clock(FixedClock(1_700_000_000));

    assert!(!verifier.verify(b"", &proof, PowConfig::default().max_age()));
}

#[test]
fn config_attempt_bound_reaches_miner() {
    let config = PowConfig {
        difficulty: 64,
        max_attempts: Some(5),
        ..PowConfig::default()
    };
    let mut miner =
        Miner::with_parts(RngNonceSource::seeded(1), FixedClock(0)).with_limits(config.limits());

    assert_eq!(
        miner.mine(b"x", config.difficulty),
        Err(PowError::AttemptsExhausted { attempts: 5 })
    );
}
