use std::sync::Arc;

use crate::application::chain::FallbackChain;

/// Shared state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub chain: Arc<FallbackChain>,
}

impl AppState {
    pub fn new(chain: FallbackChain) -> Self {
        Self {
            chain: Arc::new(chain),
        }
    }
}
