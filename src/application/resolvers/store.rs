//! Resolver backed by the persistent redirect store.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

use crate::domain::repositories::RedirectRepository;
use crate::domain::resolver::Resolver;
use crate::error::ResolveError;

/// Resolves paths with a read against a [`RedirectRepository`].
///
/// The store's contents can change underneath this resolver; each request
/// sees the value current at the time of its read.
pub struct StoreResolver {
    repository: Arc<dyn RedirectRepository>,
}

impl StoreResolver {
    pub fn new(repository: Arc<dyn RedirectRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl Resolver for StoreResolver {
    fn source(&self) -> &'static str {
        "store"
    }

    /// An absent key and an empty stored value are both misses. Store
    /// failures are returned as [`ResolveError::Store`].
    async fn resolve(&self, path: &str) -> Result<Option<String>, ResolveError> {
        match self.repository.find(path).await? {
            Some(url) if !url.is_empty() => Ok(Some(url)),
            Some(_) => {
                debug!("Empty stored value for {}", path);
                Ok(None)
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockRedirectRepository;
    use crate::error::StoreError;

    #[tokio::test]
    async fn test_resolve_hit() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo
            .expect_find()
            .withf(|path| path == "/abdulkader")
            .times(1)
            .returning(|_| Ok(Some("https://github.com/abdulkaderm36".to_string())));

        let resolver = StoreResolver::new(Arc::new(mock_repo));
        let url = resolver.resolve("/abdulkader").await.unwrap();

        assert_eq!(url.as_deref(), Some("https://github.com/abdulkaderm36"));
    }

    #[tokio::test]
    async fn test_resolve_absent_key() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo.expect_find().times(1).returning(|_| Ok(None));

        let resolver = StoreResolver::new(Arc::new(mock_repo));

        assert!(resolver.resolve("/missing").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_empty_value_is_miss() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo
            .expect_find()
            .times(1)
            .returning(|_| Ok(Some(String::new())));

        let resolver = StoreResolver::new(Arc::new(mock_repo));

        assert!(resolver.resolve("/empty").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_resolve_store_error_is_surfaced() {
        let mut mock_repo = MockRedirectRepository::new();
        mock_repo.expect_find().times(1).returning(|path| {
            Err(StoreError::InvalidValue {
                path: path.to_string(),
            })
        });

        let resolver = StoreResolver::new(Arc::new(mock_repo));
        let result = resolver.resolve("/broken").await;

        assert!(matches!(result, Err(ResolveError::Store(_))));
    }
}
