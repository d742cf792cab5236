// tests/ratelimiter/main.rs

mod credit_bucket_tests;
mod decision_metadata_tests;
