// Request pacing for the translation service.
//
// The public translate endpoint throttles aggressive clients. Each caller
// reserves the next free send slot (slots are 1/qps apart) and sleeps until
// it arrives, so the lock is only held long enough to claim a slot.

use anyhow::{Context, Result};
use tokio::sync::Mutex;
use tokio::time::{sleep_until, Duration, Instant};

/// Slowest pacing accepted: one request per hour.
pub const MAX_INTERVAL: Duration = Duration::from_secs(3600);

/// Gap between requests for a requests-per-second budget.
///
/// Zero means unpaced. Negative, NaN, or budgets slower than one request per
/// hour are rejected.
pub fn interval_for(requests_per_second: f64) -> Result<Duration> {
    if requests_per_second == 0.0 {
        return Ok(Duration::ZERO);
    }
    if !(requests_per_second > 0.0) {
        anyhow::bail!("request rate must be zero or positive, got {requests_per_second}");
    }

    let interval = Duration::try_from_secs_f64(1.0 / requests_per_second)
        .with_context(|| format!("request rate {requests_per_second}/s is too small"))?;
    if interval > MAX_INTERVAL {
        anyhow::bail!(
            "request rate {requests_per_second}/s is below one request per {}s",
            MAX_INTERVAL.as_secs()
        );
    }
    Ok(interval)
}

pub struct RateLimiter {
    interval: Duration,
    next_slot: Mutex<Option<Instant>>,
}

impl RateLimiter {
    pub fn new(requests_per_second: f64) -> Result<Self> {
        Ok(Self {
            interval: interval_for(requests_per_second)?,
            next_slot: Mutex::new(None),
        })
    }

    /// Claim the next send slot and wait for it.
    pub async fn acquire(&self) {
        let slot = {
            let mut next = self.next_slot.lock().await;
            let now = Instant::now();
            let slot = next.map_or(now, |n| n.max(now));
            *next = slot.checked_add(self.interval);
            slot
        };
        sleep_until(slot).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interval_for_valid_rates() {
        assert_eq!(interval_for(4.0).unwrap(), Duration::from_millis(250));
        assert_eq!(interval_for(0.0).unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_interval_for_rejects_bad_rates() {
        assert!(interval_for(-1.0).is_err());
        assert!(interval_for(f64::NAN).is_err());
        assert!(interval_for(1e-300).is_err());
        assert!(interval_for(1.0 / 7200.0).is_err());
    }

    #[test]
    fn test_tiny_rate_is_an_error_not_a_panic() {
        assert!(RateLimiter::new(1e-300).is_err());
    }

    #[tokio::test]
    async fn test_first_request_is_immediate() {
        let limiter = RateLimiter::new(1.0).unwrap();
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }

    #[tokio::test]
    async fn test_consecutive_requests_are_spaced() {
        let limiter = RateLimiter::new(4.0).unwrap();
        limiter.acquire().await;
        let start = Instant::now();
        limiter.acquire().await;
        limiter.acquire().await;
        let elapsed = start.elapsed();
        assert!(
            elapsed >= Duration::from_millis(450),
            "Expected two ~250ms gaps, got {:?}",
            elapsed
        );
    }

    #[tokio::test]
    async fn test_zero_rate_is_unpaced() {
        let limiter = RateLimiter::new(0.0).unwrap();
        limiter.acquire().await;
        let start = Instant::now();
        limiter.acquire().await;
        assert!(start.elapsed() < Duration::from_millis(50));
    }
}
