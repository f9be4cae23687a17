//! Application layer: lookup sources and their fallback composition.
//!
//! HTTP handlers consume a single [`chain::FallbackChain`]; everything behind
//! it implements [`crate::domain::resolver::Resolver`].
//!
//! - [`resolvers`] - Mapping, persistent store and rule-text resolvers
//! - [`chain`] - Ordered fallback composition

pub mod chain;
pub mod resolvers;

pub use chain::{FallbackChain, Resolved};
