//! Handler for path redirects.

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::api::handlers::hello_handler;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects any path that the fallback chain resolves.
///
/// # Endpoint
///
/// Every method and path (installed as the router fallback).
///
/// # Request Flow
///
/// 1. Resolve `uri.path()` through the chain, first match wins
/// 2. On a match return 302 Found with `Location` set to the URL as stored
/// 3. On a miss hand the request to [`hello_handler`]
///
/// The path is matched exactly: no decoding, case folding or trailing-slash
/// trimming.
///
/// # Errors
///
/// Returns 500 Internal Server Error if the resolved URL cannot be sent as a
/// header value.
pub async fn redirect_handler(
    State(state): State<AppState>,
    uri: Uri,
) -> Result<Response, AppError> {
    let path = uri.path();

    let Some(resolved) = state.chain.resolve(path).await else {
        debug!("No redirect for {}", path);
        return Ok(hello_handler().await.into_response());
    };

    let location = HeaderValue::from_str(&resolved.url).map_err(|e| {
        error!("Invalid redirect target from {}: {}", resolved.source, e);
        AppError::internal(
            "Invalid redirect target",
            json!({ "path": path, "source": resolved.source }),
        )
    })?;

    debug!("Redirecting {} via {}", path, resolved.source);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
