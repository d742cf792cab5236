// src/lib.rs

//! # Keyed Limiter
//!
//! Per-identity rate limiting with two interchangeable algorithms:
//!
//! - [`LeakyBucket`]: admitted load drains at a constant rate; at most
//!   `capacity` units may be outstanding, so bursts never exceed capacity.
//! - [`CreditBucket`]: starts full, refills continuously and banks unused
//!   allowance as credit, tolerating larger bursts after idle periods.
//!
//! Every identity gets its own bucket, created lazily on first use. Checks for
//! different identities never share a lock; checks for the same identity are
//! serialized by that bucket's mutex.
//!
//! ## Quick Example
//!
//! ```rust
//! use keyed_limiter::LeakyLimiter;
//!
//! // 3 outstanding requests; a rate of 0 never drains, so this is a hard cap
//! let limiter = LeakyLimiter::leaky(3, 0.0).unwrap();
//!
//! assert!(limiter.allow("user_123"));
//! assert!(limiter.allow("user_123"));
//! assert!(limiter.allow("user_123"));
//! assert!(!limiter.allow("user_123"));
//!
//! // other identities are unaffected
//! assert!(limiter.allow("user_456"));
//! ```

// private modules
mod bucket;
mod clock;
mod config;
mod credit_bucket;
mod errors;
mod keyed_limiter;
mod leaky_bucket;
mod registry;

// public API exports
pub use bucket::{Bucket, Decision};
pub use clock::{Clock, MonotonicClock};
pub use config::{CreditBucketConfig, LeakyBucketConfig, ValidateConfig};
pub use credit_bucket::CreditBucket;
pub use errors::LimiterError;
pub use keyed_limiter::{CreditLimiter, KeyedLimiter, LeakyLimiter};
pub use leaky_bucket::LeakyBucket;
pub use registry::KeyedRegistry;
