//! Retry policy for transient request failures.

use std::future::Future;
use std::time::Duration;

use rand::Rng;
use tokio::time::sleep;

use crate::error::Result;

/// How many extra attempts to make and how long to wait between them.
///
/// The default makes exactly one attempt, so a failure ends the run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RetryPolicy {
    pub retries: u32,
    pub base_delay: Duration,
}

impl RetryPolicy {
    pub fn new(retries: u32, base_delay: Duration) -> Self {
        Self {
            retries,
            base_delay,
        }
    }

    /// A policy that never retries.
    pub fn none() -> Self {
        Self::default()
    }

    /// Delay before a retry: base delay plus up to 50% jitter.
    pub fn next_delay(&self) -> Duration {
        let base_ms = u64::try_from(self.base_delay.as_millis()).unwrap_or(u64::MAX);
        let jitter_ms = rand::thread_rng().gen_range(0..=base_ms / 2);
        Duration::from_millis(base_ms.saturating_add(jitter_ms))
    }

    /// Run `op` until it succeeds, fails permanently, or attempts run out.
    pub async fn run<T, F, Fut>(&self, what: &str, mut op: F) -> Result<T>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        let mut attempt = 0;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(e) if attempt < self.retries && e.is_transient() => {
                    attempt += 1;
                    let delay = self.next_delay();
                    tracing::warn!(
                        "{} failed ({}), retry {}/{} in {:?}",
                        what,
                        e,
                        attempt,
                        self.retries,
                        delay
                    );
                    sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_no_retry_by_default() {
        let calls = Cell::new(0);
        let result: Result<()> = RetryPolicy::none()
            .run("listing", || {
                calls.set(calls.get() + 1);
                async { Err(Error::RateLimited) }
            })
            .await;

        assert!(result.is_err());
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_retries_transient_until_success() {
        let calls = Cell::new(0);
        let policy = RetryPolicy::new(3, Duration::ZERO);
        let result = policy
            .run("detail", || {
                calls.set(calls.get() + 1);
                let n = calls.get();
                async move {
                    if n < 3 {
                        Err(Error::Api {
                            status: 502,
                            message: "bad gateway".into(),
                        })
                    } else {
                        Ok(n)
                    }
                }
            })
            .await;

        assert_eq!(result.unwrap(), 3);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_permanent_error_not_retried() {
        let calls = Cell::new(0);
        let policy = RetryPolicy::new(5, Duration::ZERO);
        let result: Result<()> = policy
            .run("listing", || {
                calls.set(calls.get() + 1);
                async { Err(Error::Authentication("HTTP 401".into())) }
            })
            .await;

        assert!(matches!(result, Err(Error::Authentication(_))));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_delay_bounds() {
        let policy = RetryPolicy::new(1, Duration::from_millis(100));
        for _ in 0..20 {
            let delay = policy.next_delay();
            assert!(delay >= Duration::from_millis(100));
            assert!(delay <= Duration::from_millis(150));
        }
    }

    #[test]
    fn test_huge_delay_saturates() {
        let policy = RetryPolicy::new(1, Duration::from_millis(u64::MAX));
        assert_eq!(policy.next_delay(), Duration::from_millis(u64::MAX));

        let policy = RetryPolicy::new(1, Duration::from_millis(u64::MAX - 10));
        assert!(policy.next_delay() >= Duration::from_millis(u64::MAX - 10));
    }
}
