//! A data source that never delivers.

use thiserror::Error;

/// Failure reported by [`fetch_data`]. `reason` describes what went
/// wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct FetchError {
  pub reason: String,
}

/// Pretends to fetch a list of numbers from an external source. The
/// request always fails, after yielding once to the runtime.
pub async fn fetch_data() -> Result<Vec<i64>, FetchError> {
  tokio::task::yield_now().await;
  let err = FetchError { reason: String::from("Operation failed") };
  tracing::warn!(reason = %err.reason, "Fetch failed");
  Err(err)
}
