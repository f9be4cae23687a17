//! Core domain entities.
//!
//! - [`RedirectRule`] - A single path to URL association
//! - [`PathMap`] - Rules compiled into a lookup table

pub mod rule;

pub use rule::{PathMap, RedirectRule, compile_rules};
