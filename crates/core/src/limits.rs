//! Stopping conditions for a nonce search

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use crate::PowError;

/// Shared cancellation flag.
///
/// Clones observe the same flag, so one clone can be handed to a worker and
/// another kept by whoever decides to stop it.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// Bounds on a search. The default is unbounded.
#[derive(Debug, Clone, Default)]
pub struct SearchLimits {
    max_attempts: Option<u64>,
    deadline: Option<Instant>,
    cancel: Option<CancelToken>,
}

impl SearchLimits {
    /// No bound at all: the search runs until it finds a proof.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Give up after `max_attempts` digests.
    pub fn with_max_attempts(mut self, max_attempts: u64) -> Self {
        self.max_attempts = Some(max_attempts);
        self
    }

    /// Give up `timeout` from now.
    pub fn with_timeout(self, timeout: Duration) -> Self {
        let deadline = Instant::now().checked_add(timeout);
        match deadline {
            Some(deadline) => self.with_deadline(deadline),
            // Too far in the future to represent
            None => self,
        }
    }

    /// Give up once `deadline` has passed.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(deadline);
        self
    }

    /// Stop when `token` is cancelled.
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    pub fn max_attempts(&self) -> Option<u64> {
        self.max_attempts
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_attempts.is_none() && self.deadline.is_none() && self.cancel.is_none()
    }

    /// Decide whether attempt number `attempts + 1` may run.
    ///
    /// Cancellation is reported before the deadline, the deadline before the
    /// attempt bound.
    pub fn check(&self, attempts: u64) -> Result<(), PowError> {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return Err(PowError::Cancelled { attempts });
        }
        if self.deadline.is_some_and(|deadline| Instant::now() >= deadline) {
            return Err(PowError::DeadlineExceeded { attempts });
        }
        if self.max_attempts.is_some_and(|max| attempts >= max) {
            return Err(PowError::AttemptsExhausted { attempts });
        }
        Ok(())
    }
}
