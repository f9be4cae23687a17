//! Resolver over a fixed in-memory mapping.

use async_trait::async_trait;

use crate::domain::entities::PathMap;
use crate::domain::resolver::Resolver;
use crate::error::ResolveError;

/// Resolves paths against a mapping fixed at construction time.
///
/// Matching is exact and case-sensitive; no normalization or trailing-slash
/// handling is applied.
#[derive(Debug, Clone)]
pub struct MapResolver {
    paths: PathMap,
    source: &'static str,
}

impl MapResolver {
    /// Creates a resolver labelled `"map"`.
    pub fn new(paths: PathMap) -> Self {
        Self::with_source(paths, "map")
    }

    /// Creates a resolver with a custom log label.
    pub fn with_source(paths: PathMap, source: &'static str) -> Self {
        Self { paths, source }
    }

    /// Looks up `path` without going through the async trait.
    pub fn get(&self, path: &str) -> Option<&str> {
        self.paths.get(path).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[async_trait]
impl Resolver for MapResolver {
    fn source(&self) -> &'static str {
        self.source
    }

    async fn resolve(&self, path: &str) -> Result<Option<String>, ResolveError> {
        Ok(self.get(path).map(str::to_owned))
    }
}
