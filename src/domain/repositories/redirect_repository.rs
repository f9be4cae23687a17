//! Repository trait for persisted redirects.

use crate::error::StoreError;
use async_trait::async_trait;

/// Repository interface over one bucket of the persistent key-value store.
///
/// Keys are request paths and values are target URLs, both stored as raw bytes.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SledRedirectRepository`] - sled tree
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RedirectRepository: Send + Sync {
    /// Finds the URL stored for `path`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` if present
    /// - `Ok(None)` if the key is absent
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the read fails or the value is not UTF-8.
    async fn find(&self, path: &str) -> Result<Option<String>, StoreError>;

    /// Stores `url` under `path`, returning the URL it replaced.
    async fn save(&self, path: &str, url: &str) -> Result<Option<String>, StoreError>;

    /// Removes `path`. Returns `Ok(true)` if a value was removed.
    async fn remove(&self, path: &str) -> Result<bool, StoreError>;

    /// Number of stored redirects.
    async fn count(&self) -> Result<usize, StoreError>;
}
