//! Repository trait for storage health probes.

use crate::error::AppError;
use async_trait::async_trait;

/// Reports whether the backing store is reachable.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HealthRepository: Send + Sync {
    /// Runs a trivial query and returns the server version string.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be reached.
    async fn ping(&self) -> Result<String, AppError>;
}
