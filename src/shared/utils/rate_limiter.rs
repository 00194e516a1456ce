use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};

/// Fixed-interval pacing gate for external requests.
///
/// `wait()` sleeps out whatever remains of the configured interval since the
/// last passage, so consecutive calls are spaced at least `min_interval`
/// apart. The first call passes immediately.
pub struct RateLimiter {
    last_request: Arc<Mutex<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    pub fn new(requests_per_second: f64) -> Self {
        Self::with_interval(Duration::from_secs_f64(1.0 / requests_per_second))
    }

    pub fn with_interval(min_interval: Duration) -> Self {
        Self {
            last_request: Arc::new(Mutex::new(Instant::now() - min_interval)),
            min_interval,
        }
    }

    pub fn interval(&self) -> Duration {
        self.min_interval
    }

    pub async fn wait(&self) {
        let mut last = self.last_request.lock().await;
        let now = Instant::now();
        let elapsed = now.duration_since(*last);

        if elapsed < self.min_interval {
            let wait_time = self.min_interval - elapsed;
            sleep(wait_time).await;
        }

        *last = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn first_call_passes_immediately() {
        let limiter = RateLimiter::with_interval(Duration::from_secs(4));
        let start = Instant::now();
        limiter.wait().await;
        assert_eq!(start.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn consecutive_calls_are_spaced_by_interval() {
        let limiter = RateLimiter::with_interval(Duration::from_secs(4));
        limiter.wait().await;
        let start = Instant::now();
        limiter.wait().await;
        assert!(start.elapsed() >= Duration::from_secs(4));
    }

    #[tokio::test(start_paused = true)]
    async fn elapsed_time_counts_toward_the_interval() {
        let limiter = RateLimiter::with_interval(Duration::from_secs(4));
        limiter.wait().await;
        tokio::time::advance(Duration::from_secs(3)).await;
        let start = Instant::now();
        limiter.wait().await;
        assert_eq!(start.elapsed(), Duration::from_secs(1));
    }

    #[test]
    fn per_second_constructor_maps_to_interval() {
        let limiter = RateLimiter::new(0.25);
        assert_eq!(limiter.interval(), Duration::from_secs(4));
    }
}
