//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//! Rule-file paths can also be given on the command line, which takes priority.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `STORE_PATH` - Directory of the sled redirect store (default: `redirects.db`)
//! - `STORE_BUCKET` - Bucket holding persisted redirects (default: `PathsToUrls`)
//! - `RULES_YAML` - YAML rule file (default: built-in rules)
//! - `RULES_JSON` - JSON rule file (default: built-in rules)
//! - `STRICT_RULES` - Abort on malformed rule files (default: `true`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub store_path: PathBuf,
    pub store_bucket: String,
    /// YAML rule file; `None` uses [`crate::defaults::YAML_RULES`].
    pub rules_yaml: Option<PathBuf>,
    /// JSON rule file; `None` uses [`crate::defaults::JSON_RULES`].
    pub rules_json: Option<PathBuf>,
    /// When false, malformed rule files are logged and the service starts
    /// without their rules.
    pub strict_rules: bool,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:8080".to_string(),
            store_path: PathBuf::from("redirects.db"),
            store_bucket: "PathsToUrls".to_string(),
            rules_yaml: None,
            rules_json: None,
            strict_rules: true,
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let store_path = env::var("STORE_PATH")
            .map(PathBuf::from)
            .unwrap_or(defaults.store_path);
        let store_bucket = env::var("STORE_BUCKET").unwrap_or(defaults.store_bucket);

        let rules_yaml = non_empty_var("RULES_YAML").map(PathBuf::from);
        let rules_json = non_empty_var("RULES_JSON").map(PathBuf::from);

        let strict_rules = env::var("STRICT_RULES")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(defaults.strict_rules);

        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            listen_addr,
            store_path,
            store_bucket,
            rules_yaml,
            rules_json,
            strict_rules,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `listen_addr` is not `host:port`
    /// - `store_bucket` is empty
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.store_bucket.is_empty() {
            anyhow::bail!("STORE_BUCKET must not be empty");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!(
            "  Store: {} (bucket {})",
            self.store_path.display(),
            self.store_bucket
        );
        tracing::info!("  YAML rules: {}", describe_source(&self.rules_yaml));
        tracing::info!("  JSON rules: {}", describe_source(&self.rules_json));
        tracing::info!("  Strict rules: {}", self.strict_rules);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.is_empty())
}

fn describe_source(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => path.display().to_string(),
        None => "built-in".to_string(),
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "LISTEN",
        "STORE_PATH",
        "STORE_BUCKET",
        "RULES_YAML",
        "RULES_JSON",
        "STRICT_RULES",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();
        assert!(config.validate().is_ok());

        config.listen_addr = "8080".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "127.0.0.1:8080".to_string();
        config.log_format = "xml".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.store_bucket = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.store_bucket, "PathsToUrls");
        assert!(config.rules_yaml.is_none());
        assert!(config.rules_json.is_none());
        assert!(config.strict_rules);
    }

    #[test]
    #[serial]
    fn test_load_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:9000");
            env::set_var("STORE_BUCKET", "Redirects");
            env::set_var("RULES_YAML", "rules.yaml");
            env::set_var("RULES_JSON", "");
            env::set_var("STRICT_RULES", "false");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.listen_addr, "127.0.0.1:9000");
        assert_eq!(config.store_bucket, "Redirects");
        assert_eq!(config.rules_yaml, Some(PathBuf::from("rules.yaml")));
        assert!(config.rules_json.is_none());
        assert!(!config.strict_rules);

        clear_env();
    }
}
