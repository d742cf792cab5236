// src/credit_bucket.rs

// credit bucket: refill-based, burst-tolerant admission

// dependencies
use crate::bucket::{Bucket, Decision};
use crate::clock::elapsed_seconds;
use crate::config::CreditBucketConfig;
use parking_lot::Mutex;

/// Credit bucket for a single identity.
///
/// Starts full at `base_capacity` tokens and refills at `refill_rate` tokens
/// per second. Unused allowance keeps accruing as credit up to
/// `base_capacity + max_credits`, so a client that has been idle may burst
/// past its base capacity. Each admission spends one whole token.
#[derive(Debug)]
pub struct CreditBucket {
    base_capacity: u32,
    max_credits: u32,
    refill_rate: f64,
    ceiling: f64,
    state: Mutex<CreditState>,
}

#[derive(Debug)]
struct CreditState {
    tokens: f64,
    last_update: u64,
}

impl CreditState {
    fn refill(&mut self, refill_rate: f64, ceiling: f64, now: u64) {
        let elapsed = elapsed_seconds(self.last_update, now);
        self.tokens = (self.tokens + elapsed * refill_rate).min(ceiling);
        self.last_update = self.last_update.max(now);
    }
}

impl CreditBucket {
    pub fn base_capacity(&self) -> u32 {
        self.base_capacity
    }

    pub fn max_credits(&self) -> u32 {
        self.max_credits
    }

    pub fn refill_rate(&self) -> f64 {
        self.refill_rate
    }

    /// Highest level the bucket can reach: base capacity plus credits.
    pub fn ceiling(&self) -> f64 {
        self.ceiling
    }
}

impl Bucket for CreditBucket {
    type Config = CreditBucketConfig;

    fn new(config: &CreditBucketConfig, now: u64) -> Self {
        let base_capacity = f64::from(config.base_capacity);
        Self {
            base_capacity: config.base_capacity,
            max_credits: config.max_credits,
            refill_rate: config.refill_rate,
            ceiling: base_capacity + f64::from(config.max_credits),
            state: Mutex::new(CreditState {
                tokens: base_capacity,
                last_update: now,
            }),
        }
    }

    fn try_acquire_at(&self, now: u64) -> Decision {
        let mut state = self.state.lock();
        state.refill(self.refill_rate, self.ceiling, now);

        if state.tokens >= 1.0 {
            state.tokens -= 1.0;
            Decision::admit(state.tokens.floor() as u64)
        } else {
            Decision::reject()
        }
    }

    fn level_at(&self, now: u64) -> f64 {
        let mut state = self.state.lock();
        state.refill(self.refill_rate, self.ceiling, now);
        state.tokens
    }
}
