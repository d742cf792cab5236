// src/bucket.rs

// per-identity bucket abstraction shared by both algorithms

// dependencies
use crate::config::ValidateConfig;
use std::fmt::Debug;

/// One identity's accounting state plus the algorithm that updates it.
///
/// Implementors keep `tokens` and `last_update` behind a single lock and run
/// the whole leak/refill, decide and write-back sequence inside it, so
/// concurrent checks on the same bucket behave like some sequential order.
/// Time is passed in as nanoseconds from a [`Clock`](crate::Clock).
pub trait Bucket: Send + Sync + Sized {
    type Config: ValidateConfig + Clone + Debug + Send + Sync;

    /// Build a fresh bucket whose state starts at `now`.
    fn new(config: &Self::Config, now: u64) -> Self;

    /// Apply elapsed time, then admit or reject one request.
    fn try_acquire_at(&self, now: u64) -> Decision;

    /// Apply elapsed time and report the token level without admitting.
    fn level_at(&self, now: u64) -> f64;
}

/// Outcome of a single admission check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decision {
    /// Whether the request should be allowed
    pub allowed: bool,
    /// Further requests the bucket would admit right now
    pub remaining: u64,
}

impl Decision {
    pub(crate) fn admit(remaining: u64) -> Self {
        Self {
            allowed: true,
            remaining,
        }
    }

    pub(crate) fn reject() -> Self {
        Self {
            allowed: false,
            remaining: 0,
        }
    }
}
