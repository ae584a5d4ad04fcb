use crate::Result;
use anyhow::anyhow;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

// TOML configuration structure
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub sources: SourcesConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

#[derive(Debug, Deserialize)]
pub struct SourcesConfig {
    #[serde(default)]
    pub fred_api_key: String,
    #[serde(default = "default_fred_base_url")]
    pub fred_base_url: String,
    #[serde(default = "default_giss_base_url")]
    pub giss_base_url: String,
    #[serde(default = "default_noaa_base_url")]
    pub noaa_base_url: String,
    #[serde(default = "default_observation_limit")]
    pub observation_limit: u32,
}

#[derive(Debug, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_rust_log_format")]
    pub rust_log_format: String,
}

// Default values
fn default_bind_address() -> String {
    "0.0.0.0:8080".to_string()
}
fn default_fred_base_url() -> String {
    "https://api.stlouisfed.org/fred".to_string()
}
fn default_giss_base_url() -> String {
    "https://data.giss.nasa.gov".to_string()
}
fn default_noaa_base_url() -> String {
    "https://gml.noaa.gov".to_string()
}
fn default_observation_limit() -> u32 {
    30
}
fn default_rust_log_format() -> String {
    "term".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            fred_api_key: String::new(),
            fred_base_url: default_fred_base_url(),
            giss_base_url: default_giss_base_url(),
            noaa_base_url: default_noaa_base_url(),
            observation_limit: default_observation_limit(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            rust_log_format: default_rust_log_format(),
        }
    }
}

static CONFIG: Lazy<Config> = Lazy::new(|| {
    load_config().unwrap_or_else(|e| {
        eprintln!(
            "Warning: Failed to load config files: {}. Using defaults.",
            e
        );
        Config::default()
    })
});

static CONFIG_STORE: Lazy<Arc<Mutex<HashMap<String, String>>>> =
    Lazy::new(|| Arc::new(Mutex::new(HashMap::new())));

pub fn get(name: &str) -> Result<String> {
    // Priority 1: CONFIG_STORE (runtime overrides)
    if let Some(value) = get_from_store(name) {
        if value.is_empty() {
            return Err(anyhow!("{} is empty", name));
        }
        return Ok(value);
    }

    // Priority 2: Environment variables
    if let Ok(val) = std::env::var(name)
        && !val.is_empty()
    {
        return Ok(val);
    }

    // Priority 3: TOML config
    let toml_value = match name {
        "SERVER_BIND_ADDRESS" => Some(CONFIG.server.bind_address.clone()),
        "FRED_API_KEY" => {
            if !CONFIG.sources.fred_api_key.is_empty() {
                Some(CONFIG.sources.fred_api_key.clone())
            } else {
                None
            }
        }
        "FRED_BASE_URL" => Some(CONFIG.sources.fred_base_url.clone()),
        "GISS_BASE_URL" => Some(CONFIG.sources.giss_base_url.clone()),
        "NOAA_BASE_URL" => Some(CONFIG.sources.noaa_base_url.clone()),
        "SOURCE_OBSERVATION_LIMIT" => Some(CONFIG.sources.observation_limit.to_string()),
        "RUST_LOG_FORMAT" => Some(CONFIG.logging.rust_log_format.clone()),
        _ => None,
    };

    if let Some(value) = toml_value
        && !value.is_empty()
    {
        return Ok(value);
    }

    Err(anyhow!("Configuration key not found: {}", name))
}

pub fn set(name: &str, value: &str) {
    if let Ok(mut store) = CONFIG_STORE.lock() {
        store.insert(name.to_string(), value.to_string());
    }
}

fn get_from_store(name: &str) -> Option<String> {
    if let Ok(store) = CONFIG_STORE.lock() {
        store.get(name).cloned()
    } else {
        None
    }
}

/// Load configuration from TOML files with priority:
/// 1. config/config.local.toml (git-ignored, for local overrides)
/// 2. config/config.toml (git-managed template)
/// 3. Default values
fn load_config() -> Result<Config> {
    let mut config = Config::default();

    // Load base config from config.toml
    let base_path = "config/config.toml";
    if Path::new(base_path).exists() {
        let content = fs::read_to_string(base_path)?;
        config = toml::from_str(&content)?;
    }

    // Override with local config if exists
    let local_path = "config/config.local.toml";
    if Path::new(local_path).exists() {
        let content = fs::read_to_string(local_path)?;
        let local_config: Config = toml::from_str(&content)?;
        merge_config(&mut config, local_config);
    }

    Ok(config)
}

/// Merge local config into base config (local values override base values)
fn merge_config(base: &mut Config, local: Config) {
    // Server
    if local.server.bind_address != default_bind_address() {
        base.server.bind_address = local.server.bind_address;
    }

    // Sources
    if !local.sources.fred_api_key.is_empty() {
        base.sources.fred_api_key = local.sources.fred_api_key;
    }
    if local.sources.fred_base_url != default_fred_base_url() {
        base.sources.fred_base_url = local.sources.fred_base_url;
    }
    if local.sources.giss_base_url != default_giss_base_url() {
        base.sources.giss_base_url = local.sources.giss_base_url;
    }
    if local.sources.noaa_base_url != default_noaa_base_url() {
        base.sources.noaa_base_url = local.sources.noaa_base_url;
    }
    if local.sources.observation_limit != default_observation_limit() {
        base.sources.observation_limit = local.sources.observation_limit;
    }

    // Logging
    if local.logging.rust_log_format != default_rust_log_format() {
        base.logging.rust_log_format = local.logging.rust_log_format;
    }
}

/// Get TOML-based configuration
pub fn config() -> &'static Config {
    &CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_toml_default_values() {
        // 環境変数が設定されていない場合はTOMLのデフォルト値が使われる
        unsafe {
            std::env::remove_var("NOAA_BASE_URL");
        }
        let result = get("NOAA_BASE_URL").unwrap();
        assert_eq!(result, "https://gml.noaa.gov");
    }

    #[test]
    #[serial]
    fn test_backward_compatibility_with_env_vars() {
        // 環境変数が設定されている場合は環境変数の値が使われる
        unsafe {
            std::env::set_var("GISS_BASE_URL", "http://giss-test:8080");
        }
        let result = get("GISS_BASE_URL").unwrap();
        assert_eq!(result, "http://giss-test:8080");
        unsafe {
            std::env::remove_var("GISS_BASE_URL");
        }
    }

    #[test]
    #[serial]
    fn test_config_store_priority() {
        // CONFIG_STOREの値が最優先
        const TEST_KEY: &str = "RUST_LOG_FORMAT";
        unsafe {
            std::env::set_var(TEST_KEY, "env-value");
        }
        set(TEST_KEY, "store-value");
        let result = get(TEST_KEY).unwrap();
        assert_eq!(result, "store-value");

        // Cleanup
        if let Ok(mut store) = CONFIG_STORE.lock() {
            store.remove(TEST_KEY);
        }
        unsafe {
            std::env::remove_var(TEST_KEY);
        }
    }

    #[test]
    #[serial]
    fn test_missing_api_key_is_an_error() {
        // 未設定のAPIキーは空文字ではなくエラーになる
        unsafe {
            std::env::remove_var("FRED_API_KEY");
        }
        assert!(get("FRED_API_KEY").is_err());
    }

    #[test]
    #[serial]
    fn test_numeric_config() {
        unsafe {
            std::env::remove_var("SOURCE_OBSERVATION_LIMIT");
        }
        let result = get("SOURCE_OBSERVATION_LIMIT").unwrap();
        assert_eq!(result, "30");
    }

    #[test]
    #[serial]
    fn test_unknown_key() {
        assert!(get("NO_SUCH_KEY").is_err());
    }
}
