//! Router configuration.
//!
//! # Route Structure
//!
//! - `*  /{any path}` - Redirect through the fallback chain, else `Hello, world!`
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging

use crate::api::handlers::redirect_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;

/// Constructs the application router.
///
/// The redirect handler is the router fallback, so it sees every path
/// unmodified.
pub fn app_router(state: AppState) -> Router {
    Router::new()
        .fallback(redirect_handler)
        .with_state(state)
        .layer(tracing::layer())
}
