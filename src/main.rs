use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use url_redirector::config::{self, Config};
use url_redirector::server;

/// Path-based redirect service.
#[derive(Parser)]
#[command(name = "url-redirector")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML rule file (overrides RULES_YAML; built-in rules when absent)
    #[arg(short, long, value_name = "FILE")]
    yaml: Option<PathBuf>,

    /// JSON rule file (overrides RULES_JSON; built-in rules when absent)
    #[arg(short, long, value_name = "FILE")]
    json: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::load_from_env().context("Invalid configuration")?;
    if cli.yaml.is_some() {
        config.rules_yaml = cli.yaml;
    }
    if cli.json.is_some() {
        config.rules_json = cli.json;
    }

    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG directive '{}'", config.log_level))?;

    if config.log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    Ok(())
}
