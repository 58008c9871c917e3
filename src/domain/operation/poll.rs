//! Async driver for the poll state machine.

use super::{OperationStatus, PollConfig, PollState};
use crate::error::{HttpError, OperationError, SdkError};

use std::future::Future;

/// Call `check` until it reports `expected` or `config.budget` is spent.
///
/// Returns the number of checks made. `check` errors abort the run at once;
/// only a "wrong status" answer is retried.
pub async fn poll_until<F, Fut>(
    config: &PollConfig,
    expected: &OperationStatus,
    mut check: F,
) -> Result<u32, SdkError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<OperationStatus, HttpError>>,
{
    let mut attempt = 1;
    loop {
        let status = check().await?;

        if status == OperationStatus::Failed && *expected != OperationStatus::Failed {
            tracing::warn!(attempt, "Operation reported failed status");
        }

        match config.transition(attempt, status == *expected) {
            PollState::Succeeded { attempts } => {
                tracing::debug!(attempts, status = %status, "Expected status reached");
                return Ok(attempts);
            }
            PollState::Exhausted { attempts } => {
                return Err(OperationError::StatusNotReached {
                    expected: expected.to_string(),
                    attempts,
                    last_status: status.to_string(),
                }
                .into());
            }
            PollState::Pending { attempt: next } => {
                tracing::debug!(
                    attempt,
                    budget = config.budget,
                    expected = %expected,
                    current = %status,
                    "Waiting for status"
                );
                tokio::time::sleep(config.interval).await;
                attempt = next;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::time::Duration;
    use tokio::time::Instant;

    /// A check that answers `pending` for the first `k` calls, then `success`.
    fn pending_then_success(
        k: u32,
        calls: &Cell<u32>,
    ) -> impl FnMut() -> std::future::Ready<Result<OperationStatus, HttpError>> + '_ {
        move || {
            let n = calls.get();
            calls.set(n + 1);
            let status = if n < k {
                OperationStatus::Other("pending".into())
            } else {
                OperationStatus::Success
            };
            std::future::ready(Ok(status))
        }
    }

    fn assert_slept(start: Instant, times: u32, interval: Duration) {
        let elapsed = start.elapsed();
        let expected = interval * times;
        assert!(
            elapsed >= expected && elapsed < expected + interval / 2,
            "slept {elapsed:?}, expected about {expected:?}"
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_immediate_success_does_not_sleep() {
        let calls = Cell::new(0);
        let config = PollConfig::new(20);
        let start = Instant::now();

        let attempts =
            poll_until(&config, &OperationStatus::Success, pending_then_success(0, &calls))
                .await
                .unwrap();

        assert_eq!(attempts, 1);
        assert_eq!(calls.get(), 1);
        assert_slept(start, 0, config.interval);
    }

    #[tokio::test(start_paused = true)]
    async fn test_success_after_k_pending_checks() {
        for k in [1, 3, 20] {
            let calls = Cell::new(0);
            let config = PollConfig::new(20);
            let start = Instant::now();

            let attempts =
                poll_until(&config, &OperationStatus::Success, pending_then_success(k, &calls))
                    .await
                    .unwrap();

            assert_eq!(attempts, k + 1);
            assert_eq!(calls.get(), k + 1);
            assert_slept(start, k, config.interval);
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_exhausts_at_budget_plus_one() {
        let calls = Cell::new(0);
        let config = PollConfig::new(5).with_interval(Duration::from_millis(250));
        let start = Instant::now();

        let check = pending_then_success(u32::MAX, &calls);
        let err = poll_until(&config, &OperationStatus::Success, check)
            .await
            .unwrap_err();

        assert_eq!(calls.get(), 6);
        assert_slept(start, 5, config.interval);
        match err {
            SdkError::Operation(OperationError::StatusNotReached {
                expected,
                attempts,
                last_status,
            }) => {
                assert_eq!(expected, "success");
                assert_eq!(attempts, 6);
                assert_eq!(last_status, "pending");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_status_keeps_polling() {
        let calls = Cell::new(0);
        let config = PollConfig::new(2);

        let err = poll_until(&config, &OperationStatus::Success, || {
            calls.set(calls.get() + 1);
            std::future::ready(Ok(OperationStatus::Failed))
        })
        .await
        .unwrap_err();

        assert_eq!(calls.get(), 3);
        assert!(err.to_string().contains("last: failed"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_check_error_aborts() {
        let calls = Cell::new(0);
        let config = PollConfig::new(10);

        let err = poll_until(&config, &OperationStatus::Success, || {
            calls.set(calls.get() + 1);
            std::future::ready(Err(HttpError::Unauthorized))
        })
        .await
        .unwrap_err();

        assert_eq!(calls.get(), 1);
        assert!(matches!(err, SdkError::Http(HttpError::Unauthorized)));
    }
}
