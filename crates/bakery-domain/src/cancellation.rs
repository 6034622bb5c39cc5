//! Cooperative cancellation helpers

use crate::error::{Error, Result};
use std::future::Future;
use tokio_util::sync::CancellationToken;

/// Await `operation` unless `cancel` fires first
///
/// The token is checked before the first poll, so an already cancelled token
/// never starts the operation.
///
/// # Errors
///
/// `Cancelled` naming `operation` when the token fires, otherwise the
/// operation's own result.
pub async fn run_cancellable<T, F>(cancel: &CancellationToken, operation: &str, future: F) -> Result<T>
where
    F: Future<Output = Result<T>>,
{
    if cancel.is_cancelled() {
        return Err(Error::cancelled(operation));
    }
    match cancel.run_until_cancelled(future).await {
        Some(result) => result,
        None => Err(Error::cancelled(operation)),
    }
}
