// src/config.rs

//! Configuration types for the keyed limiters

// dependencies
use crate::errors::LimiterError;
use serde::{Deserialize, Serialize};

/// Validation shared by every bucket configuration.
pub trait ValidateConfig {
    fn validate(&self) -> Result<(), LimiterError>;
}

/// Configuration for a leaky (constant-drain) bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LeakyBucketConfig {
    pub(crate) capacity: u32,
    pub(crate) rate: f64,
}

impl LeakyBucketConfig {
    /// Create a new configuration with capacity and drain rate (tokens per second)
    pub fn new(capacity: u32, rate: f64) -> Self {
        Self { capacity, rate }
    }

    /// Builder-style: set capacity
    pub fn capacity(mut self, capacity: u32) -> Self {
        self.capacity = capacity;
        self
    }

    /// Builder-style: set drain rate
    pub fn rate(mut self, rate: f64) -> Self {
        self.rate = rate;
        self
    }
}

impl ValidateConfig for LeakyBucketConfig {
    fn validate(&self) -> Result<(), LimiterError> {
        if self.capacity == 0 {
            return Err(LimiterError::InvalidCapacity);
        }
        validate_rate(self.rate)
    }
}

/// Configuration for a credit (refill) bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CreditBucketConfig {
    pub(crate) base_capacity: u32,
    #[serde(default)]
    pub(crate) max_credits: u32,
    pub(crate) refill_rate: f64,
}

impl CreditBucketConfig {
    /// Create a new configuration with base capacity, credit headroom and refill rate (tokens per second)
    pub fn new(base_capacity: u32, max_credits: u32, refill_rate: f64) -> Self {
        Self {
            base_capacity,
            max_credits,
            refill_rate,
        }
    }

    /// Builder-style: set base capacity
    pub fn base_capacity(mut self, base_capacity: u32) -> Self {
        self.base_capacity = base_capacity;
        self
    }

    /// Builder-style: set maximum accrued credits
    pub fn max_credits(mut self, max_credits: u32) -> Self {
        self.max_credits = max_credits;
        self
    }

    /// Builder-style: set refill rate
    pub fn refill_rate(mut self, refill_rate: f64) -> Self {
        self.refill_rate = refill_rate;
        self
    }
}

impl ValidateConfig for CreditBucketConfig {
    fn validate(&self) -> Result<(), LimiterError> {
        if self.base_capacity == 0 {
            return Err(LimiterError::InvalidCapacity);
        }
        validate_rate(self.refill_rate)
    }
}

// zero is a valid rate: the bucket simply never recovers
fn validate_rate(rate: f64) -> Result<(), LimiterError> {
    if !rate.is_finite() || rate < 0.0 {
        return Err(LimiterError::InvalidRate(rate));
    }
    Ok(())
}
