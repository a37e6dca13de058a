//! Deadline enforcement for time-bounded calls.
//!
//! The guarded future is dropped when the deadline fires, which aborts the
//! underlying connection. The timer lives inside the `timeout` future, so it
//! is released on every exit path: completion, failure or cancellation.

use std::future::Future;
use std::time::Duration;

use tracing::warn;

use newsdesk_core::{Error, Result, TimeoutPolicy};

/// Resolve a descriptor's policy against the configured read timeout.
pub(crate) fn deadline(policy: TimeoutPolicy, read_timeout: Duration) -> Option<Duration> {
    match policy {
        TimeoutPolicy::Bounded => Some(read_timeout),
        TimeoutPolicy::Unbounded => None,
    }
}

/// Run `fut`, cancelling it with [`Error::Aborted`] once `deadline` elapses.
pub(crate) async fn guard<F>(deadline: Option<Duration>, fut: F) -> Result<F::Output>
where
    F: Future,
{
    let Some(limit) = deadline else {
        return Ok(fut.await);
    };

    match tokio::time::timeout(limit, fut).await {
        Ok(output) => Ok(output),
        Err(_) => {
            let timeout_ms = u64::try_from(limit.as_millis()).unwrap_or(u64::MAX);
            warn!(timeout_ms, "Request aborted by deadline");
            Err(Error::Aborted { timeout_ms })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newsdesk_core::ErrorKind;

    const LIMIT: Duration = Duration::from_millis(30_000);

    #[test]
    fn only_bounded_policy_gets_a_deadline() {
        assert_eq!(deadline(TimeoutPolicy::Bounded, LIMIT), Some(LIMIT));
        assert_eq!(deadline(TimeoutPolicy::Unbounded, LIMIT), None);
    }

    #[tokio::test(start_paused = true)]
    async fn slow_bounded_call_is_aborted() {
        let result = guard(Some(LIMIT), async {
            tokio::time::sleep(Duration::from_millis(30_001)).await;
            "late"
        })
        .await;

        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Aborted);
        assert!(matches!(err, Error::Aborted { timeout_ms: 30_000 }));
    }

    #[tokio::test(start_paused = true)]
    async fn completion_before_deadline_is_not_an_error() {
        let result = guard(Some(LIMIT), async { 7 }).await;
        assert_eq!(result.unwrap(), 7);

        // Nothing is left to fire once the call has completed.
        tokio::time::advance(Duration::from_millis(60_000)).await;
    }

    #[tokio::test(start_paused = true)]
    async fn unbounded_call_outlives_the_limit() {
        let result = guard(None, async {
            tokio::time::sleep(Duration::from_millis(45_000)).await;
            "done"
        })
        .await;

        assert_eq!(result.unwrap(), "done");
    }
}
