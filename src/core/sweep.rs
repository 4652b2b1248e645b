/// Bounded filesystem sweeps
///
/// Both discovery walks (projects and editors) run as blocking tasks with
/// two layers of protection: the walk itself checks a deadline between
/// entries, and a tokio timeout with a small grace period is the hard
/// bound for walks stuck inside a syscall. A sweep that runs out of time
/// degrades to whatever `None`/partial result its caller expects, never
/// to an error.
use std::time::Duration;
use tracing::warn;

/// Default budget for one full recursive sweep
pub const DEFAULT_SWEEP_TIMEOUT: Duration = Duration::from_secs(5);

/// Slack on top of the walk's own deadline before the task is abandoned
const HARD_TIMEOUT_GRACE: Duration = Duration::from_millis(500);

/// Run a blocking sweep with a hard upper bound
///
/// Returns `None` when the task outlives its budget or fails to join; the
/// abandoned task keeps its own deadline and winds down on its own.
pub(crate) async fn run_bounded<T, F>(name: &'static str, timeout: Duration, sweep: F) -> Option<T>
where
    F: FnOnce() -> T + Send + 'static,
    T: Send + 'static,
{
    let task = tokio::task::spawn_blocking(sweep);
    match tokio::time::timeout(timeout + HARD_TIMEOUT_GRACE, task).await {
        Ok(Ok(result)) => Some(result),
        Ok(Err(e)) => {
            warn!(sweep = name, error = %e, "sweep task failed");
            None
        }
        Err(_) => {
            warn!(sweep = name, "sweep exceeded its hard timeout");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_completed_sweep_returns_result() {
        let result = run_bounded("test", Duration::from_secs(1), || 42).await;
        assert_eq!(result, Some(42));
    }

    #[tokio::test]
    async fn test_stuck_sweep_is_abandoned() {
        let result = run_bounded("test", Duration::from_millis(0), || {
            std::thread::sleep(Duration::from_secs(5));
            42
        })
        .await;
        assert_eq!(result, None);
    }
}
