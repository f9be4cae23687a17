//! Redirect rule entity and mapping compilation.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Lookup table from request path to target URL.
pub type PathMap = HashMap<String, String>;

/// A single redirect: requests for `path` are sent to `url`.
///
/// Rules have no identity beyond their path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectRule {
    pub path: String,
    pub url: String,
}

impl RedirectRule {
    pub fn new(path: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            url: url.into(),
        }
    }
}

/// Compiles rules into a [`PathMap`].
///
/// Rules are inserted in sequence order, so when two rules share a path the
/// later one wins.
pub fn compile_rules<I>(rules: I) -> PathMap
where
    I: IntoIterator<Item = RedirectRule>,
{
    let mut map = PathMap::new();
    for rule in rules {
        map.insert(rule.path, rule.url);
    }
    map
}
