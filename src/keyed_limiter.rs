// src/keyed_limiter.rs

// keyed-limiter: per-identity rate limiting over a pluggable bucket algorithm.

// dependencies
use crate::bucket::{Bucket, Decision};
use crate::clock::{Clock, MonotonicClock};
use crate::config::{CreditBucketConfig, LeakyBucketConfig, ValidateConfig};
use crate::credit_bucket::CreditBucket;
use crate::errors::LimiterError;
use crate::leaky_bucket::LeakyBucket;
use crate::registry::KeyedRegistry;
use std::fmt::Debug;
use std::hash::Hash;

/// The main keyed limiter model.
/// K is the type used to identify clients (e.g., String, u64, etc.).
/// B is the bucket algorithm every identity gets.
/// C is the clock type, defaulting to MonotonicClock.
#[derive(Debug)]
pub struct KeyedLimiter<K, B, C = MonotonicClock>
where
    K: Hash + Eq + Clone + Debug,
    B: Bucket,
    C: Clock,
{
    registry: KeyedRegistry<K, B>,
    clock: C,
}

/// Keyed limiter where each identity gets a [`LeakyBucket`].
pub type LeakyLimiter<K, C = MonotonicClock> = KeyedLimiter<K, LeakyBucket, C>;

/// Keyed limiter where each identity gets a [`CreditBucket`].
pub type CreditLimiter<K, C = MonotonicClock> = KeyedLimiter<K, CreditBucket, C>;

impl<K, B, C> KeyedLimiter<K, B, C>
where
    K: Hash + Eq + Clone + Debug,
    B: Bucket,
    C: Clock,
{
    /// Build a limiter from a validated config and a clock.
    pub fn new(config: B::Config, clock: C) -> Result<Self, LimiterError> {
        config.validate()?;
        tracing::info!(?config, "creating keyed rate limiter");

        Ok(Self {
            registry: KeyedRegistry::new(config),
            clock,
        })
    }

    /// Decide whether a request from `identity` may proceed.
    pub fn allow(&self, identity: K) -> bool {
        self.check(identity).allowed
    }

    /// Same decision as [`allow`](Self::allow), with the remaining allowance.
    pub fn check(&self, identity: K) -> Decision {
        let now = self.clock.now();
        let decision = self.registry.acquire(&identity, now);
        if !decision.allowed {
            tracing::trace!(identity = ?identity, "request rejected");
        }
        decision
    }

    /// Current token level for `identity`, or `None` if it has never been seen.
    /// Does not create a bucket.
    pub fn level(&self, identity: &K) -> Option<f64> {
        let bucket = self.registry.get(identity)?;
        Some(bucket.level_at(self.clock.now()))
    }

    pub fn config(&self) -> &B::Config {
        self.registry.config()
    }

    /// Number of identities that have a bucket.
    pub fn tracked_identities(&self) -> usize {
        self.registry.len()
    }
}

impl<K> LeakyLimiter<K>
where
    K: Hash + Eq + Clone + Debug,
{
    /// Leaky limiter on the monotonic clock: `capacity` outstanding units, drained at `rate` per second.
    pub fn leaky(capacity: u32, rate: f64) -> Result<Self, LimiterError> {
        Self::new(LeakyBucketConfig::new(capacity, rate), MonotonicClock::new())
    }
}

impl<K> CreditLimiter<K>
where
    K: Hash + Eq + Clone + Debug,
{
    /// Credit limiter on the monotonic clock.
    pub fn credit(base_capacity: u32, max_credits: u32, refill_rate: f64) -> Result<Self, LimiterError> {
        Self::new(
            CreditBucketConfig::new(base_capacity, max_credits, refill_rate),
            MonotonicClock::new(),
        )
    }
}
