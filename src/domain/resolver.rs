//! The lookup capability shared by every redirect source.

use crate::error::ResolveError;
use async_trait::async_trait;

/// Maps a request path to an optional target URL.
///
/// Implementations are shared across concurrently handled requests, so they
/// must not hold request-local state.
///
/// # Implementations
///
/// - [`crate::application::resolvers::MapResolver`] - Fixed in-memory mapping
/// - [`crate::application::resolvers::StoreResolver`] - Persistent store lookup
/// - [`crate::application::chain::FallbackChain`] - Ordered composition of resolvers
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Resolver: Send + Sync {
    /// Short label for logs, e.g. `"yaml"` or `"store"`.
    fn source(&self) -> &'static str;

    /// Looks up `path`.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(url))` on a match
    /// - `Ok(None)` when the path is unknown to this resolver
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError`] only when the backing source failed and the
    /// resolver cannot tell whether the path exists.
    async fn resolve(&self, path: &str) -> Result<Option<String>, ResolveError>;
}
