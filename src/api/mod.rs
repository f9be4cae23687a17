//! HTTP layer translating requests into chain lookups.
//!
//! # Modules
//!
//! - [`handlers`] - Redirect and terminal default handlers
//! - [`middleware`] - Request tracing

pub mod handlers;
pub mod middleware;
