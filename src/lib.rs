//! # URL Redirector
//!
//! A path-based redirect service built with Axum. Each request path is looked
//! up through an ordered chain of sources; the first match is answered with a
//! `302 Found`, and a request nothing matches falls through to a plain
//! `Hello, world!` response.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Redirect rules, the [`domain::resolver::Resolver`]
//!   capability and the store repository trait
//! - **Application Layer** ([`application`]) - Concrete resolvers and the
//!   [`application::chain::FallbackChain`] that orders them
//! - **Infrastructure Layer** ([`infrastructure`]) - sled-backed redirect store
//! - **API Layer** ([`api`]) - Redirect handler and middleware
//!
//! ## Lookup Sources
//!
//! Tried in this order by the default server:
//!
//! 1. JSON rules (`--json` file or built-in)
//! 2. YAML rules (`--yaml` file or built-in)
//! 3. The persistent store bucket, seeded at startup
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod defaults;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::chain::{FallbackChain, Resolved};
    pub use crate::application::resolvers::{
        Compiled, MapResolver, RuleFormat, StoreResolver, compose_json, compose_yaml,
    };
    pub use crate::domain::entities::{PathMap, RedirectRule};
    pub use crate::domain::repositories::RedirectRepository;
    pub use crate::domain::resolver::Resolver;
    pub use crate::error::{AppError, ResolveError, RuleError, StoreError};
    pub use crate::infrastructure::persistence::{SledRedirectRepository, SledStore};
    pub use crate::state::AppState;
}
