// src/leaky_bucket.rs

// leaky bucket: constant-rate admission with a hard ceiling

// dependencies
use crate::bucket::{Bucket, Decision};
use crate::clock::elapsed_seconds;
use crate::config::LeakyBucketConfig;
use parking_lot::Mutex;

/// Leaky bucket for a single identity.
///
/// Every admission pours one unit into the bucket; the contents drain at
/// `rate` units per second whether or not requests arrive. A request is
/// admitted while the level is strictly below `capacity`, so at most
/// `capacity` requests pass in a burst and the sustained rate equals `rate`.
/// The bucket starts empty. With `rate == 0.0` it never drains.
///
/// The level itself is not clamped to `capacity`: an admission at a
/// fractional level such as 1.5 (capacity 2) leaves it at 2.5, so
/// [`level_at`](Bucket::level_at) may report anything below `capacity + 1`.
#[derive(Debug)]
pub struct LeakyBucket {
    capacity: u32,
    rate: f64,
    state: Mutex<LeakyState>,
}

#[derive(Debug)]
struct LeakyState {
    tokens: f64,
    last_update: u64,
}

impl LeakyState {
    // drain whatever leaked out since the last update
    fn leak(&mut self, rate: f64, now: u64) {
        let elapsed = elapsed_seconds(self.last_update, now);
        self.tokens = (self.tokens - elapsed * rate).max(0.0);
        self.last_update = self.last_update.max(now);
    }
}

impl LeakyBucket {
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    // admissions still possible while tokens < capacity
    fn remaining(&self, tokens: f64) -> u64 {
        (f64::from(self.capacity) - tokens).ceil().max(0.0) as u64
    }
}

impl Bucket for LeakyBucket {
    type Config = LeakyBucketConfig;

    fn new(config: &LeakyBucketConfig, now: u64) -> Self {
        Self {
            capacity: config.capacity,
            rate: config.rate,
            state: Mutex::new(LeakyState {
                tokens: 0.0,
                last_update: now,
            }),
        }
    }

    fn try_acquire_at(&self, now: u64) -> Decision {
        let mut state = self.state.lock();
        state.leak(self.rate, now);

        if state.tokens < f64::from(self.capacity) {
            state.tokens += 1.0;
            Decision::admit(self.remaining(state.tokens))
        } else {
            Decision::reject()
        }
    }

    fn level_at(&self, now: u64) -> f64 {
        let mut state = self.state.lock();
        state.leak(self.rate, now);
        state.tokens
    }
}
