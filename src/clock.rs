// src/clock.rs

// clock module definition and implementations

// dependencies
use std::time::Instant;

/// Clock trait to abstract time retrieval.
/// Implementors must be thread-safe (Send + Sync).
/// The `now` method returns nanoseconds on a monotonic timeline as a u64.
/// Readings are only ever subtracted from readings of the same clock.
pub trait Clock: Send + Sync {
    fn now(&self) -> u64;
}

/// Monotonic clock backed by `std::time::Instant`.
/// Reports nanoseconds elapsed since the clock was created, so it is immune
/// to wall-clock adjustments.
/// This is the default clock used by the limiters.
#[derive(Debug, Clone, Copy)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> u64 {
        // u64 nanoseconds cover ~584 years of uptime
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Seconds elapsed between two readings, saturating at zero if `now` is behind `then`.
pub(crate) fn elapsed_seconds(then: u64, now: u64) -> f64 {
    now.saturating_sub(then) as f64 / 1_000_000_000.0
}
