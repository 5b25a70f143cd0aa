/// Configuration loading and access helpers
///
/// Resolution order, later wins:
/// 1. Schema defaults
/// 2. TOML file (`--config <path>` or `CLOB_BRIDGE_CONFIG`), if given
/// 3. Environment (`CLOB_BRIDGE_PORT`, `CLOB_BRIDGE_HOST`, `CLOB_API_URL`)
/// 4. Command line (`--port`, `--host`)
use anyhow::{Context, Result};
use once_cell::sync::{Lazy, OnceCell};
use std::sync::RwLock;

use super::schemas::Config;
use crate::arguments;
use crate::logger::{self, LogTag};

pub const PORT_ENV: &str = "CLOB_BRIDGE_PORT";
pub const HOST_ENV: &str = "CLOB_BRIDGE_HOST";
pub const CONFIG_PATH_ENV: &str = "CLOB_BRIDGE_CONFIG";
const API_URL_ENV: &str = "CLOB_API_URL";

/// Global configuration instance, set once by `load_config`
static CONFIG: OnceCell<RwLock<Config>> = OnceCell::new();

/// Served by `with_config` before `load_config` ran (tests, library use)
static DEFAULT_CONFIG: Lazy<Config> = Lazy::new(Config::default);

/// Load the configuration from every source and install it globally
///
/// Returns the resolved configuration. Calling it twice keeps the first
/// installed value and returns an error.
pub fn load_config() -> Result<Config> {
    let path = arguments::get_config_path().or_else(|| std::env::var(CONFIG_PATH_ENV).ok());

    let mut config = match path.as_deref() {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file '{}'", path))?;
            let config = parse_config_file(&contents)
                .with_context(|| format!("Failed to parse config file '{}'", path))?;
            logger::info(LogTag::Config, &format!("Loaded configuration from {}", path));
            config
        }
        None => {
            logger::debug(LogTag::Config, "No config file given, using defaults");
            Config::default()
        }
    };

    apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
    apply_overrides(
        &mut config,
        arguments::get_port_override(),
        arguments::get_host_override(),
        "command line",
    )?;

    CONFIG
        .set(RwLock::new(config.clone()))
        .map_err(|_| anyhow::anyhow!("Config already initialized"))?;

    Ok(config)
}

/// Parse a TOML configuration document
pub fn parse_config_file(contents: &str) -> Result<Config> {
    toml::from_str::<Config>(contents).context("Invalid TOML configuration")
}

/// Apply environment variables through `lookup`
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    apply_overrides(config, lookup(PORT_ENV), lookup(HOST_ENV), PORT_ENV)?;

    if let Some(url) = lookup(API_URL_ENV).filter(|u| !u.trim().is_empty()) {
        config.client.api_url = url.trim().to_string();
    }

    Ok(())
}

/// Apply port/host overrides; `source` names the origin in error messages
pub fn apply_overrides(
    config: &mut Config,
    port: Option<String>,
    host: Option<String>,
    source: &str,
) -> Result<()> {
    if let Some(port) = port {
        config.server.port = port
            .trim()
            .parse::<u16>()
            .with_context(|| format!("Invalid port '{}' from {}", port, source))?;
    }

    if let Some(host) = host.filter(|h| !h.trim().is_empty()) {
        config.server.host = host.trim().to_string();
    }

    Ok(())
}

/// Read the configuration through a closure
///
/// # Example
/// ```ignore
/// let port = with_config(|cfg| cfg.server.port);
/// ```
pub fn with_config<F, R>(f: F) -> R
where
    F: FnOnce(&Config) -> R,
{
    match CONFIG.get() {
        Some(lock) => match lock.read() {
            Ok(config) => f(&config),
            Err(poisoned) => f(&poisoned.into_inner()),
        },
        None => f(&DEFAULT_CONFIG),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_CLOB_API_URL, DEFAULT_PORT, DEFAULT_SERVICE_NAME};
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.server.port, DEFAULT_PORT);
        assert_eq!(config.server.port, 8001);
        assert_eq!(config.server.host, "0.0.0.0");
        assert!(config.server.warm_up_client);
        assert_eq!(config.server.service_name, DEFAULT_SERVICE_NAME);
        assert_eq!(config.client.api_url, DEFAULT_CLOB_API_URL);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = parse_config_file("[server]\nport = 9000\n").unwrap();
        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.client, crate::config::ClientConfig::default());
    }

    #[test]
    fn test_toml_service_name() {
        let config = parse_config_file("[server]\nservice_name = \"bridge-eu\"\n").unwrap();
        assert_eq!(config.server.service_name, "bridge-eu");
        assert_eq!(config.server.port, DEFAULT_PORT);
    }

    #[test]
    fn test_invalid_toml_is_error() {
        assert!(parse_config_file("[server]\nport = \"abc\"\n").is_err());
    }

    #[test]
    fn test_env_port_override() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, env(&[(PORT_ENV, "8123")])).unwrap();
        assert_eq!(config.server.port, 8123);
    }

    #[test]
    fn test_env_unset_keeps_default() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, env(&[])).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_env_invalid_port_is_error() {
        let mut config = Config::default();
        let err = apply_env_overrides(&mut config, env(&[(PORT_ENV, "eighty")])).unwrap_err();
        assert!(err.to_string().contains("eighty"));
        assert!(err.to_string().contains(PORT_ENV));
    }

    #[test]
    fn test_env_api_url_and_host() {
        let mut config = Config::default();
        apply_env_overrides(
            &mut config,
            env(&[(HOST_ENV, "127.0.0.1"), ("CLOB_API_URL", "http://localhost:9999")]),
        )
        .unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.client.api_url, "http://localhost:9999");
    }

    #[test]
    fn test_command_line_wins_over_env() {
        let mut config = Config::default();
        apply_env_overrides(&mut config, env(&[(PORT_ENV, "8123")])).unwrap();
        apply_overrides(&mut config, Some("9200".to_string()), None, "command line").unwrap();
        assert_eq!(config.server.port, 9200);
    }

    // Tests never call load_config, so the global stays unset
    #[test]
    fn test_with_config_before_load_uses_defaults() {
        assert_eq!(with_config(|cfg| cfg.server.port), DEFAULT_PORT);
        assert_eq!(
            with_config(|cfg| cfg.server.service_name.clone()),
            DEFAULT_SERVICE_NAME
        );
    }
}
