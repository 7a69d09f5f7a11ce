//! Minimum-interval pacing between judge calls

use governor::{DefaultDirectRateLimiter, Quota, RateLimiter};
use std::num::NonZeroU32;
use std::time::Duration;

/// Allows one judge call per `min_interval`, with no burst
///
/// The first call never waits. A zero interval disables pacing.
pub struct Pacer {
    min_interval: Duration,
    limiter: Option<DefaultDirectRateLimiter>,
}

impl Pacer {
    /// Create a pacer with the given minimum interval
    pub fn new(min_interval: Duration) -> Self {
        // governor keeps periods as u64 nanoseconds
        let min_interval = min_interval.min(Duration::from_nanos(u64::MAX));
        let limiter = Quota::with_period(min_interval)
            .map(|quota| RateLimiter::direct(quota.allow_burst(NonZeroU32::MIN)));
        Self {
            min_interval,
            limiter,
        }
    }

    /// Create a pacer from a number of seconds; negative or non-finite values disable pacing
    pub fn from_secs_f64(seconds: f64) -> Self {
        if !seconds.is_finite() || seconds <= 0.0 {
            return Self::new(Duration::ZERO);
        }
        Self::new(Duration::try_from_secs_f64(seconds).unwrap_or(Duration::MAX))
    }

    /// Configured minimum interval
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Waits until the next call is allowed
    pub async fn until_ready(&self) {
        if let Some(limiter) = &self.limiter {
            limiter.until_ready().await;
        }
    }
}
