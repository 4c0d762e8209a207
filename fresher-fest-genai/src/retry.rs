use crate::error::{GenAiError, Result};
use std::future::Future;

/// Attempt ceiling for predicate-gated generation.
///
/// The first version of the riddle flow retried without a cap whenever the
/// appropriateness flag came back false; a misbehaving backend could loop
/// forever. Retries are bounded here instead.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 3;

/// Run `op` until its output satisfies `predicate`, at most `max_attempts`
/// times, sequentially.
///
/// Structural failures from `op` propagate immediately; only a
/// structurally valid result that fails the predicate triggers another
/// attempt. When every attempt fails the predicate the caller gets
/// [`GenAiError::RetryExhausted`], which the UI surfaces as a retryable
/// notice rather than a crash.
pub async fn with_retry<T, F, Fut, P>(max_attempts: u32, mut op: F, predicate: P) -> Result<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T>>,
    P: Fn(&T) -> bool,
{
    for attempt in 1..=max_attempts {
        let output = op(attempt).await?;
        if predicate(&output) {
            return Ok(output);
        }
        tracing::warn!(attempt, max_attempts, "generated content rejected by predicate");
    }

    Err(GenAiError::RetryExhausted {
        attempts: max_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[tokio::test]
    async fn test_succeeds_on_kth_attempt() {
        let calls = Cell::new(0u32);

        let result = with_retry(
            5,
            |attempt| {
                calls.set(calls.get() + 1);
                async move { Ok(attempt) }
            },
            |&attempt| attempt == 3,
        )
        .await
        .unwrap();

        assert_eq!(result, 3);
        assert_eq!(calls.get(), 3);
    }

    #[tokio::test]
    async fn test_exhaustion_after_exact_budget() {
        let calls = Cell::new(0u32);

        let result = with_retry(
            4,
            |_| {
                calls.set(calls.get() + 1);
                async { Ok(()) }
            },
            |_: &()| false,
        )
        .await;

        assert!(matches!(
            result,
            Err(GenAiError::RetryExhausted { attempts: 4 })
        ));
        assert_eq!(calls.get(), 4);
    }

    #[tokio::test]
    async fn test_first_success_short_circuits() {
        let calls = Cell::new(0u32);

        let result = with_retry(
            3,
            |_| {
                calls.set(calls.get() + 1);
                async { Ok("fine") }
            },
            |_| true,
        )
        .await
        .unwrap();

        assert_eq!(result, "fine");
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_structural_error_propagates_immediately() {
        let calls = Cell::new(0u32);

        let result: Result<()> = with_retry(
            3,
            |_| {
                calls.set(calls.get() + 1);
                async { Err(GenAiError::BackendUnavailable("down".to_string())) }
            },
            |_: &()| true,
        )
        .await;

        assert!(matches!(result, Err(GenAiError::BackendUnavailable(_))));
        assert_eq!(calls.get(), 1);
    }

    #[tokio::test]
    async fn test_zero_budget_exhausts_without_calling() {
        let calls = Cell::new(0u32);

        let result: Result<()> = with_retry(
            0,
            |_| {
                calls.set(calls.get() + 1);
                async { Ok(()) }
            },
            |_: &()| true,
        )
        .await;

        assert!(matches!(
            result,
            Err(GenAiError::RetryExhausted { attempts: 0 })
        ));
        assert_eq!(calls.get(), 0);
    }
}
