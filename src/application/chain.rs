//! Ordered fallback composition of resolvers.

use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error};

use crate::domain::resolver::Resolver;
use crate::error::ResolveError;

/// A successful lookup and the resolver that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    pub url: String,
    pub source: &'static str,
}

/// Resolvers tried strictly in order until one matches.
///
/// The first match wins; later resolvers are not consulted and matches are
/// never merged. When nothing matches the caller hands the request to its
/// terminal default handler.
///
/// # Resolver Errors
///
/// A resolver that fails is logged and skipped, and the chain moves on to the
/// next one. A failing store therefore degrades to the sources behind it
/// instead of failing the request.
///
/// # Example
///
/// ```rust,ignore
/// let chain = FallbackChain::new()
///     .then(yaml_resolver)
///     .then(StoreResolver::new(repository));
///
/// // Tried before everything above.
/// let chain = chain.wrap(json_resolver);
/// ```
#[derive(Clone, Default)]
pub struct FallbackChain {
    resolvers: Vec<Arc<dyn Resolver>>,
}

impl FallbackChain {
    /// Creates an empty chain that matches nothing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `resolver`; it is tried after every resolver already present.
    pub fn then<R>(mut self, resolver: R) -> Self
    where
        R: Resolver + 'static,
    {
        self.resolvers.push(Arc::new(resolver));
        self
    }

    /// Puts `resolver` in front of the chain, making it the new outermost
    /// wrapper with the existing chain as its fallback.
    pub fn wrap<R>(mut self, resolver: R) -> Self
    where
        R: Resolver + 'static,
    {
        self.resolvers.insert(0, Arc::new(resolver));
        self
    }

    pub fn len(&self) -> usize {
        self.resolvers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resolvers.is_empty()
    }

    /// Source labels in resolution order.
    pub fn sources(&self) -> Vec<&'static str> {
        self.resolvers.iter().map(|r| r.source()).collect()
    }

    /// Resolves `path` through the chain.
    ///
    /// Returns `None` when no resolver matched.
    pub async fn resolve(&self, path: &str) -> Option<Resolved> {
        for resolver in &self.resolvers {
            match resolver.resolve(path).await {
                Ok(Some(url)) => {
                    debug!("{} HIT for {}", resolver.source(), path);
                    return Some(Resolved {
                        url,
                        source: resolver.source(),
                    });
                }
                Ok(None) => {
                    debug!("{} MISS for {}", resolver.source(), path);
                }
                Err(e) => {
                    error!("{} error for {}: {}", resolver.source(), path, e);
                }
            }
        }

        None
    }
}

impl fmt::Debug for FallbackChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FallbackChain")
            .field("sources", &self.sources())
            .finish()
    }
}

#[async_trait]
impl Resolver for FallbackChain {
    fn source(&self) -> &'static str {
        "chain"
    }

    async fn resolve(&self, path: &str) -> Result<Option<String>, ResolveError> {
        Ok(FallbackChain::resolve(self, path).await.map(|r| r.url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::resolvers::MapResolver;
    use crate::domain::entities::PathMap;
    use crate::domain::resolver::MockResolver;
    use crate::error::StoreError;

    fn map(source: &'static str, entries: &[(&str, &str)]) -> MapResolver {
        let paths: PathMap = entries
            .iter()
            .map(|(p, u)| (p.to_string(), u.to_string()))
            .collect();
        MapResolver::with_source(paths, source)
    }

    #[tokio::test]
    async fn test_empty_chain_matches_nothing() {
        let chain = FallbackChain::new();
        assert!(chain.is_empty());
        assert!(chain.resolve("/x").await.is_none());
    }

    #[tokio::test]
    async fn test_first_match_wins() {
        let chain = FallbackChain::new()
            .then(map("a", &[("/x", "https://a.example.com")]))
            .then(map("b", &[("/x", "https://b.example.com")]));

        let resolved = chain.resolve("/x").await.unwrap();

        assert_eq!(resolved.url, "https://a.example.com");
        assert_eq!(resolved.source, "a");
    }

    #[tokio::test]
    async fn test_falls_through_to_later_resolver() {
        let chain = FallbackChain::new()
            .then(map("a", &[("/x", "https://a.example.com")]))
            .then(map("b", &[("/y", "https://b.example.com")]));

        let resolved = chain.resolve("/y").await.unwrap();

        assert_eq!(resolved.url, "https://b.example.com");
        assert_eq!(resolved.source, "b");
        assert!(chain.resolve("/z").await.is_none());
    }

    #[tokio::test]
    async fn test_wrap_is_tried_first() {
        let chain = FallbackChain::new()
            .then(map("inner", &[("/x", "https://inner.example.com")]))
            .wrap(map("outer", &[("/x", "https://outer.example.com")]));

        assert_eq!(chain.sources(), vec!["outer", "inner"]);
        assert_eq!(
            chain.resolve("/x").await.unwrap().url,
            "https://outer.example.com"
        );
    }

    #[tokio::test]
    async fn test_later_resolvers_not_consulted_after_match() {
        let mut first = MockResolver::new();
        first.expect_source().return_const("first");
        first
            .expect_resolve()
            .times(1)
            .returning(|_| Ok(Some("https://first.example.com".to_string())));

        let mut second = MockResolver::new();
        second.expect_source().return_const("second");
        second.expect_resolve().never();

        let chain = FallbackChain::new().then(first).then(second);

        assert_eq!(
            chain.resolve("/x").await.unwrap().url,
            "https://first.example.com"
        );
    }

    #[tokio::test]
    async fn test_resolver_error_is_skipped() {
        let mut failing = MockResolver::new();
        failing.expect_source().return_const("store");
        failing.expect_resolve().times(1).returning(|path| {
            Err(StoreError::InvalidValue {
                path: path.to_string(),
            }
            .into())
        });

        let chain = FallbackChain::new()
            .then(failing)
            .then(map("yaml", &[("/x", "https://yaml.example.com")]));

        let resolved = chain.resolve("/x").await.unwrap();

        assert_eq!(resolved.source, "yaml");
    }

    #[tokio::test]
    async fn test_chain_nests_as_resolver() {
        let inner = FallbackChain::new().then(map("inner", &[("/x", "https://inner.example.com")]));
        let outer = FallbackChain::new()
            .then(map("outer", &[("/y", "https://outer.example.com")]))
            .then(inner);

        assert_eq!(outer.sources(), vec!["outer", "chain"]);
        let resolved = outer.resolve("/x").await.unwrap();
        assert_eq!(resolved.url, "https://inner.example.com");
        assert_eq!(resolved.source, "chain");
    }
}
