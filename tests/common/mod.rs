#![allow(dead_code)]

use axum_test::TestServer;
use std::sync::Arc;
use url_redirector::application::chain::FallbackChain;
use url_redirector::config::Config;
use url_redirector::defaults;
use url_redirector::infrastructure::persistence::{SledRedirectRepository, SledStore};
use url_redirector::routes::app_router;
use url_redirector::server::build_chain;
use url_redirector::state::AppState;

pub const BUCKET: &str = "PathsToUrls";

/// A running router over a temporary, seeded store.
pub struct TestApp {
    pub server: TestServer,
    pub store: SledStore,
    pub repository: SledRedirectRepository,
}

pub fn seeded_store() -> (SledStore, SledRedirectRepository) {
    let store = SledStore::temporary().unwrap();
    let repository = store.bucket(BUCKET).unwrap();
    repository
        .seed(defaults::STORE_SEED.iter().copied())
        .unwrap();
    (store, repository)
}

pub fn server_for(chain: FallbackChain) -> TestServer {
    TestServer::new(app_router(AppState::new(chain))).unwrap()
}

/// The default production chain (JSON, YAML, store) over a temporary store.
pub fn spawn_default_app() -> TestApp {
    let (store, repository) = seeded_store();
    let chain = build_chain(&Config::default(), Arc::new(repository.clone())).unwrap();

    TestApp {
        server: server_for(chain),
        store,
        repository,
    }
}
