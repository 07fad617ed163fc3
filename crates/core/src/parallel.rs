//! Multi-worker mining on the rayon thread pool

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use log::debug;
use rayon::prelude::*;

use crate::clock::{Clock, SystemClock};
use crate::limits::SearchLimits;
use crate::miner::validate_difficulty;
use crate::nonce::{NonceSource, RngNonceSource};
use crate::payload::{PayloadBuffer, digest_hex, has_leading_zeros};
use crate::{PowError, Proof};

/// Workers beyond this many per pool thread would only queue behind the stop flag
const MAX_WORKERS_PER_THREAD: usize = 4;

/// Search with `workers` independent workers sharing one timestamp.
///
/// Each worker draws nonces from its own generator seeded from OS entropy.
/// The first proof found stops every worker. `max_attempts` in `limits`
/// bounds the total across workers. `workers == 0` uses one worker per
/// thread of the current rayon pool; larger counts are capped at
/// `MAX_WORKERS_PER_THREAD` workers per pool thread.
pub fn mine_parallel(
    data: &[u8],
    leading_zeros: i32,
    workers: usize,
    limits: &SearchLimits,
) -> Result<Proof, PowError> {
    validate_difficulty(leading_zeros)?;
    let prefix_len = leading_zeros as usize;
    let pool = rayon::current_num_threads().max(1);
    let workers = match workers {
        0 => pool,
        n => n.min(pool.saturating_mul(MAX_WORKERS_PER_THREAD)),
    };

    let created_at = SystemClock.now_secs();
    let attempts = AtomicU64::new(0);
    let stop = AtomicBool::new(false);

    debug!(
        "mining {} bytes at difficulty {} on {} workers (created_at={})",
        data.len(),
        leading_zeros,
        workers,
        created_at
    );

    let outcome = (0..workers)
        .into_par_iter()
        .filter_map(|_| {
            let mut nonces = RngNonceSource::from_entropy();
            let mut payload = PayloadBuffer::new(data, created_at);

            while !stop.load(Ordering::Relaxed) {
                let attempt = attempts.fetch_add(1, Ordering::Relaxed);
                if let Err(e) = limits.check(attempt) {
                    stop.store(true, Ordering::SeqCst);
                    return Some(Err(e));
                }

                let nonce = match nonces.next_nonce() {
                    Ok(nonce) => nonce,
                    Err(e) => {
                        stop.store(true, Ordering::SeqCst);
                        return Some(Err(e));
                    }
                };
                payload.set_nonce(nonce);
                let hash = digest_hex(payload.as_bytes());

                if has_leading_zeros(&hash, prefix_len) {
                    stop.store(true, Ordering::SeqCst);
                    return Some(Ok(Proof::from_parts(
                        hash,
                        created_at,
                        nonce,
                        leading_zeros,
                    )));
                }
            }
            None
        })
        // A proof beats a limit hit by a worker racing it
        .reduce_with(|a, b| if a.is_ok() { a } else { b });

    let total = attempts.load(Ordering::Relaxed);
    match outcome {
        Some(Ok(proof)) => {
            debug!("found nonce {} after ~{} attempts", proof.nonce(), total);
            Ok(proof)
        }
        Some(Err(e)) => {
            debug!("parallel search stopped: {}", e);
            Err(e)
        }
        // Unreachable with at least one worker: stop is only raised by a worker that reports
        None => Err(PowError::Cancelled { attempts: total }),
    }
}
