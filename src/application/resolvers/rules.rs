//! Resolvers compiled from YAML or JSON rule text.
//!
//! Rule text is a list of `path`/`url` records:
//!
//! ```yaml
//! - path: /some-path
//!   url: https://www.some-url.com/demo
//! ```
//!
//! ```json
//! [{ "path": "/some-path", "url": "https://www.some-url.com/demo" }]
//! ```
//!
//! Parsing never prevents a resolver from being built. On malformed input the
//! result still carries a usable, empty resolver next to the error, and the
//! caller decides whether to abort or run degraded.

use std::fmt;

use crate::application::chain::FallbackChain;
use crate::application::resolvers::MapResolver;
use crate::domain::entities::{RedirectRule, compile_rules};
use crate::error::RuleError;

/// Encoding of a rule file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleFormat {
    Yaml,
    Json,
}

impl RuleFormat {
    /// Label used as the resolver source.
    pub fn as_str(self) -> &'static str {
        match self {
            RuleFormat::Yaml => "yaml",
            RuleFormat::Json => "json",
        }
    }
}

impl fmt::Display for RuleFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A resolver together with the parse error, if any, hit while building it.
///
/// `resolver` is always usable. When `error` is set it was built from
/// whatever rules survived parsing, which is none.
#[derive(Debug)]
pub struct Compiled<T> {
    pub resolver: T,
    pub error: Option<RuleError>,
}

impl<T> Compiled<T> {
    /// Returns `true` if parsing failed and the resolver is degraded.
    pub fn is_degraded(&self) -> bool {
        self.error.is_some()
    }

    /// Strict view: the resolver only if parsing succeeded.
    ///
    /// # Errors
    ///
    /// Returns the [`RuleError`] hit while parsing.
    pub fn into_result(self) -> Result<T, RuleError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.resolver),
        }
    }

    pub fn into_parts(self) -> (T, Option<RuleError>) {
        (self.resolver, self.error)
    }
}

/// Deserializes rule text into rules, keeping source order.
///
/// YAML input with no document at all yields an empty list.
///
/// # Errors
///
/// Returns [`RuleError::InvalidYaml`] or [`RuleError::InvalidJson`] when the
/// text is not a list of `path`/`url` records.
pub fn parse_rules(input: &[u8], format: RuleFormat) -> Result<Vec<RedirectRule>, RuleError> {
    match format {
        RuleFormat::Yaml => {
            if input.iter().all(u8::is_ascii_whitespace) {
                return Ok(Vec::new());
            }
            Ok(serde_yaml::from_slice(input)?)
        }
        RuleFormat::Json => Ok(serde_json::from_slice(input)?),
    }
}

/// Parses and compiles rule text into a [`MapResolver`] labelled with the
/// format name.
pub fn rule_resolver(input: &[u8], format: RuleFormat) -> Compiled<MapResolver> {
    let (rules, error) = match parse_rules(input, format) {
        Ok(rules) => (rules, None),
        Err(e) => (Vec::new(), Some(e)),
    };

    Compiled {
        resolver: MapResolver::with_source(compile_rules(rules), format.as_str()),
        error,
    }
}

/// Builds a resolver from YAML rules and puts it in front of `fallback`.
pub fn compose_yaml(yml: &[u8], fallback: FallbackChain) -> Compiled<FallbackChain> {
    compose(yml, RuleFormat::Yaml, fallback)
}

/// Builds a resolver from JSON rules and puts it in front of `fallback`.
pub fn compose_json(json: &[u8], fallback: FallbackChain) -> Compiled<FallbackChain> {
    compose(json, RuleFormat::Json, fallback)
}

fn compose(input: &[u8], format: RuleFormat, fallback: FallbackChain) -> Compiled<FallbackChain> {
    let Compiled { resolver, error } = rule_resolver(input, format);
    Compiled {
        resolver: fallback.wrap(resolver),
        error,
    }
}
