// tests/ratelimiter/credit_bucket_tests.rs

#[cfg(test)]
mod tests {

    use crate::fixtures::test_clock::TestClock;
    use keyed_limiter::{CreditBucketConfig, CreditLimiter};

    fn limiter(clock: &TestClock) -> CreditLimiter<&'static str, TestClock> {
        // base capacity 3, up to 5 extra credits, 2 tokens per second
        let config = CreditBucketConfig::new(3, 5, 2.0);
        CreditLimiter::new(config, clock.clone()).unwrap()
    }

    #[test]
    fn burst_then_exhaustion() {
        let clock = TestClock::new(0.0);
        let limiter = limiter(&clock);
        let client = "client1";

        assert!(limiter.allow(client));
        assert!(limiter.allow(client));
        assert!(limiter.allow(client));
        assert!(!limiter.allow(client));
    }

    #[test]
    fn credit_accrual_is_capped() {
        let clock = TestClock::new(0.0);
        let limiter = limiter(&clock);
        let client = "client1";

        // first check creates the bucket, full at base capacity
        assert!(limiter.allow(client));

        // 10s at 2/s would be 20 tokens; clamped to 3 + 5
        clock.advance(10.0);
        for i in 0..8 {
            assert!(limiter.allow(client), "request {} should be admitted", i);
        }
        assert!(!limiter.allow(client));
    }

    #[test]
    fn refill_restores_steady_rate() {
        let clock = TestClock::new(0.0);
        let limiter = limiter(&clock);
        let client = "client1";

        for _ in 0..3 {
            assert!(limiter.allow(client));
        }
        assert!(!limiter.allow(client));

        // 2 tokens per second: one token every 0.5s
        clock.advance(0.25);
        assert!(!limiter.allow(client));
        clock.advance(0.25);
        assert!(limiter.allow(client));
        assert!(!limiter.allow(client));
    }

    #[test]
    fn partial_idle_accrues_proportional_credit() {
        let clock = TestClock::new(0.0);
        let limiter = limiter(&clock);
        let client = "client1";

        assert!(limiter.allow(client));
        assert_eq!(limiter.level(&client), Some(2.0));

        // 2 + 1.5 * 2 = 5 tokens
        clock.advance(1.5);
        let admitted = (0..10).filter(|_| limiter.allow(client)).count();
        assert_eq!(admitted, 5);
    }

    #[test]
    fn zero_refill_never_recovers() {
        let clock = TestClock::new(0.0);
        let config = CreditBucketConfig::new(2, 5, 0.0);
        let limiter = CreditLimiter::new(config, clock.clone()).unwrap();

        assert!(limiter.allow("client1"));
        assert!(limiter.allow("client1"));
        clock.advance(3_600.0);
        assert!(!limiter.allow("client1"));
    }

    #[test]
    fn rewound_clock_does_not_refill_twice() {
        let clock = TestClock::new(0.0);
        let config = CreditBucketConfig::new(1, 0, 1.0);
        let limiter = CreditLimiter::new(config, clock.clone()).unwrap();
        let client = "client1";

        clock.set_nanos(5_000_000_000);
        assert!(limiter.allow(client));

        clock.set_nanos(1_000_000_000);
        assert!(!limiter.allow(client));

        // refill measured from 5s, not from the rewound reading
        clock.set_nanos(5_500_000_000);
        assert!(!limiter.allow(client));
        assert_eq!(limiter.level(&client), Some(0.5));

        clock.advance_nanos(500_000_000);
        assert!(limiter.allow(client));
    }

    #[test]
    fn works_on_the_monotonic_clock() {
        let limiter = CreditLimiter::credit(2, 0, 0.0).unwrap();
        assert!(limiter.allow("client1".to_string()));
        assert!(limiter.allow("client1".to_string()));
        assert!(!limiter.allow("client1".to_string()));
    }
}
