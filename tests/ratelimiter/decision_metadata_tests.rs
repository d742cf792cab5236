// tests/ratelimiter/decision_metadata_tests.rs

#[cfg(test)]
mod tests {

    use crate::fixtures::test_clock::TestClock;
    use keyed_limiter::{CreditBucketConfig, CreditLimiter, LeakyBucketConfig, LeakyLimiter};

    #[test]
    fn leaky_check_counts_down_remaining() {
        let clock = TestClock::new(0.0);
        let config = LeakyBucketConfig::new(3, 1.0);
        let limiter = LeakyLimiter::new(config, clock.clone()).unwrap();
        let client = "client1";

        let remaining: Vec<u64> = (0..3).map(|_| limiter.check(client).remaining).collect();
        assert_eq!(remaining, vec![2, 1, 0]);

        let blocked = limiter.check(client);
        assert!(!blocked.allowed);
        assert_eq!(blocked.remaining, 0);
    }

    #[test]
    fn credit_check_counts_down_remaining() {
        let clock = TestClock::new(0.0);
        let config = CreditBucketConfig::new(3, 5, 2.0);
        let limiter = CreditLimiter::new(config, clock.clone()).unwrap();
        let client = "client1";

        let first = limiter.check(client);
        assert!(first.allowed);
        assert_eq!(first.remaining, 2);

        clock.advance(10.0);
        let after_idle = limiter.check(client);
        assert!(after_idle.allowed);
        assert_eq!(after_idle.remaining, 7);
    }

    #[test]
    fn allow_and_check_share_state() {
        let clock = TestClock::new(0.0);
        let config = LeakyBucketConfig::new(2, 1.0);
        let limiter = LeakyLimiter::new(config, clock).unwrap();

        assert!(limiter.allow("client1"));
        assert_eq!(limiter.check("client1").remaining, 0);
        assert!(!limiter.allow("client1"));
    }
}
