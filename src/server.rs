//! HTTP server initialization and runtime setup.
//!
//! Handles store lifecycle, rule loading, chain construction and the Axum
//! server lifecycle.

use crate::application::chain::FallbackChain;
use crate::application::resolvers::{
    Compiled, RuleFormat, StoreResolver, compose_json, compose_yaml,
};
use crate::config::Config;
use crate::defaults;
use crate::domain::repositories::RedirectRepository;
use crate::infrastructure::persistence::SledStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - sled redirect store and its bucket, seeded with built-in redirects
/// - Fallback chain: JSON rules, then YAML rules, then the store
/// - Axum HTTP server with graceful shutdown on Ctrl+C / SIGTERM
///
/// The bucket is dropped and the store flushed on the way out, whether the
/// server stopped cleanly or not.
///
/// # Errors
///
/// Returns an error if:
/// - The store cannot be opened or the bucket created
/// - A rule file cannot be read, or is malformed with `strict_rules` set
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let store = SledStore::open(&config.store_path).context("Failed to open redirect store")?;

    let served = serve(&config, &store).await;

    if let Err(e) = store.drop_bucket(&config.store_bucket) {
        error!("Failed to drop bucket {}: {}", config.store_bucket, e);
    }
    store.close().context("Failed to close redirect store")?;
    info!("Redirect store closed");

    served
}

async fn serve(config: &Config, store: &SledStore) -> Result<()> {
    let repository = store
        .bucket(&config.store_bucket)
        .with_context(|| format!("Failed to create bucket {}", config.store_bucket))?;
    repository
        .seed(defaults::STORE_SEED.iter().copied())
        .context("Failed to seed redirect store")?;

    let chain = build_chain(config, Arc::new(repository))?;
    info!("Resolution order: {}", chain.sources().join(" -> "));

    let app = app_router(AppState::new(chain));

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

/// Builds the fallback chain: JSON rules, then YAML rules, then `repository`.
///
/// Rule files named in `config` replace the built-in rule sets.
///
/// # Errors
///
/// Returns an error if a rule file cannot be read, or if rules are malformed
/// and `config.strict_rules` is set. Without `strict_rules` malformed rules
/// are logged and skipped.
pub fn build_chain(
    config: &Config,
    repository: Arc<dyn RedirectRepository>,
) -> Result<FallbackChain> {
    let chain = FallbackChain::new().then(StoreResolver::new(repository));

    let yaml = read_rules(config.rules_yaml.as_deref(), defaults::YAML_RULES)?;
    let chain = settle(
        compose_yaml(&yaml, chain),
        RuleFormat::Yaml,
        config.strict_rules,
    )?;

    let json = read_rules(config.rules_json.as_deref(), defaults::JSON_RULES)?;
    settle(
        compose_json(&json, chain),
        RuleFormat::Json,
        config.strict_rules,
    )
}

fn read_rules(path: Option<&Path>, builtin: &str) -> Result<Vec<u8>> {
    match path {
        Some(path) => {
            let data = std::fs::read(path)
                .with_context(|| format!("Failed to read rule file {}", path.display()))?;
            info!("Loaded rule file {}", path.display());
            Ok(data)
        }
        None => Ok(builtin.as_bytes().to_vec()),
    }
}

fn settle(
    compiled: Compiled<FallbackChain>,
    format: RuleFormat,
    strict: bool,
) -> Result<FallbackChain> {
    match compiled.into_parts() {
        (chain, None) => Ok(chain),
        (_, Some(e)) if strict => {
            Err(anyhow::Error::new(e).context(format!("Failed to load {} rules", format)))
        }
        (chain, Some(e)) => {
            warn!("Ignoring {} rules: {}", format, e);
            Ok(chain)
        }
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("Failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("shutdown signal received (Ctrl+C)"),
        _ = terminate => info!("shutdown signal received (SIGTERM)"),
    }
}
