//! Generic retry-with-backoff helper for transient upstream failures
//!
//! A single sequential attempt loop: overload and rate-limit errors are
//! retried with exponentially growing delays, everything else propagates
//! to the caller unchanged.

use crate::error::{AppError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Default number of attempts before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Default base delay between attempts, in milliseconds
pub const DEFAULT_BASE_DELAY_MS: u64 = 1000;

/// Run `operation` up to `max_attempts` times, sleeping
/// `base_delay_ms * 2^attempt` between retryable failures.
///
/// The attempt index is 0-based, so the first retry waits `base_delay_ms`,
/// the second `2 * base_delay_ms`, and so on. Non-retryable errors and the
/// final failure are returned as-is so callers can match on the original
/// error kind. The trailing `MaxRetriesExceeded` is unreachable with
/// `max_attempts > 0`; it exists so the loop can never fall through to an
/// undefined result.
pub async fn retry_with_backoff<T, F, Fut>(
    mut operation: F,
    max_attempts: u32,
    base_delay_ms: u64,
) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    for attempt in 0..max_attempts {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(error) if error.is_retryable() && attempt + 1 < max_attempts => {
                let delay_ms = base_delay_ms * 2u64.pow(attempt);
                log::warn!(
                    "Attempt {}/{} failed ({}), retrying in {}ms",
                    attempt + 1,
                    max_attempts,
                    error,
                    delay_ms
                );
                sleep(Duration::from_millis(delay_ms)).await;
            }
            Err(error) => return Err(error),
        }
    }

    Err(AppError::MaxRetriesExceeded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::time::Instant;

    #[tokio::test]
    async fn test_success_on_first_attempt() {
        let calls = AtomicU32::new(0);
        let result = retry_with_backoff(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok::<_, AppError>(42)
            },
            DEFAULT_MAX_ATTEMPTS,
            10,
        )
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_retryable_errors_then_success() {
        let calls = AtomicU32::new(0);
        let start = Instant::now();
        let result = retry_with_backoff(
            || async {
                let n = calls.fetch_add(1, Ordering::SeqCst);
                match n {
                    0 => Err(AppError::Overloaded("529".to_string())),
                    1 => Err(AppError::RateLimited("429".to_string())),
                    _ => Ok("analysis".to_string()),
                }
            },
            3,
            10,
        )
        .await;

        assert_eq!(result.unwrap(), "analysis");
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        // Waited 10ms then 20ms between attempts
        assert!(start.elapsed() >= Duration::from_millis(30));
    }

    #[tokio::test]
    async fn test_non_retryable_error_fails_immediately() {
        let calls = AtomicU32::new(0);
        let start = Instant::now();
        let result: Result<()> = retry_with_backoff(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(AppError::InvalidInput("bad".to_string()))
            },
            3,
            1000,
        )
        .await;

        assert!(matches!(result, Err(AppError::InvalidInput(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(start.elapsed() < Duration::from_millis(500));
    }

    #[tokio::test]
    async fn test_exhausted_retries_propagate_original_error() {
        let calls = AtomicU32::new(0);
        let result: Result<()> = retry_with_backoff(
            || async {
                calls.fetch_add(1, Ordering::SeqCst);
                Err(AppError::Overloaded("still down".to_string()))
            },
            3,
            10,
        )
        .await;

        // The last upstream error comes back, not a generic wrapper
        assert!(matches!(result, Err(AppError::Overloaded(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_zero_attempts_yields_max_retries_exceeded() {
        let result: Result<()> =
            retry_with_backoff(|| async { Ok(()) }, 0, DEFAULT_BASE_DELAY_MS).await;
        assert!(matches!(result, Err(AppError::MaxRetriesExceeded)));
    }
}
