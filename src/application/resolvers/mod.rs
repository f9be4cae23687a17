//! Concrete resolvers for each redirect source.

pub mod map;
pub mod rules;
pub mod store;

pub use map::MapResolver;
pub use rules::{Compiled, RuleFormat, compose_json, compose_yaml, parse_rules, rule_resolver};
pub use store::StoreResolver;
