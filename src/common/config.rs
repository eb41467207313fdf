//! Environment-overlay configuration
//!
//! An environment is configured by deep-merging `config/<env>.toml` over
//! `config/default.toml`: scalars in the overlay replace defaults, tables
//! merge key-by-key with the overlay winning. The resulting [`Config`] is
//! built once per test session and read-only afterward.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{Error, Result};

/// Required keys checked after the merge, before deserialization
const REQUIRED_KEYS: &[&str] = &["application.base_url"];

/// Effective configuration for one environment
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    /// Environment this configuration was loaded for
    #[serde(skip_deserializing)]
    pub environment: String,

    /// Application under test
    pub application: ApplicationConfig,

    /// Browser session settings
    #[serde(default)]
    pub browser: BrowserConfig,

    /// Database connection parameters
    #[serde(default)]
    pub database: DatabaseConfig,

    /// API client settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// Application under test
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApplicationConfig {
    /// Base URL pages are opened relative to
    pub base_url: String,

    /// Human-readable application name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Browser session settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BrowserConfig {
    /// Per-interaction timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Run without a visible browser window
    #[serde(default)]
    pub headless: bool,

    /// Browser engine to launch
    #[serde(default = "default_browser")]
    pub browser: String,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            headless: false,
            browser: default_browser(),
        }
    }
}

fn default_timeout_ms() -> u64 {
    30_000
}

fn default_browser() -> String {
    "chromium".to_string()
}

/// Database connection parameters
///
/// Consumed by the session-bootstrap collaborator; the harness itself
/// never opens a connection.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DatabaseConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub service_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// API client settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL for API checks
    #[serde(default)]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_api_timeout_secs")]
    pub timeout_secs: u64,

    /// Verify TLS certificates
    #[serde(default = "default_verify_ssl")]
    pub verify_ssl: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_api_timeout_secs(),
            verify_ssl: default_verify_ssl(),
        }
    }
}

fn default_api_timeout_secs() -> u64 {
    30
}

fn default_verify_ssl() -> bool {
    true
}

impl Config {
    /// Load the effective configuration for an environment
    ///
    /// Reads `default.toml` from `config_dir` (optional; serde defaults
    /// cover a missing file) and the `<environment>.toml` overlay
    /// (required). An environment without an overlay file fails with
    /// [`Error::UnknownEnvironment`].
    pub fn load(environment: &str, config_dir: &Path) -> Result<Self> {
        let overlay_path = config_dir.join(format!("{environment}.toml"));
        if !overlay_path.exists() {
            return Err(Error::unknown_environment(
                environment,
                &[overlay_path.display().to_string()],
            ));
        }

        let default_path = config_dir.join("default.toml");
        let defaults = if default_path.exists() {
            read_toml(&default_path)?
        } else {
            toml::Value::Table(toml::map::Map::new())
        };
        let overlay = read_toml(&overlay_path)?;

        let merged = deep_merge(defaults, overlay);

        for key in REQUIRED_KEYS {
            if lookup(&merged, key).is_none() {
                return Err(Error::MissingRequiredKey {
                    key: (*key).to_string(),
                    environment: environment.to_string(),
                });
            }
        }

        let mut config: Config = merged.try_into().map_err(|e| Error::ConfigParse {
            path: overlay_path.display().to_string(),
            error: e.to_string(),
        })?;
        config.environment = environment.to_string();

        tracing::info!(environment, "loaded configuration");
        Ok(config)
    }
}

/// Deep-merge `overlay` over `base`
///
/// Tables merge recursively with overlay values winning on conflict;
/// any other value in the overlay replaces the base value outright.
fn deep_merge(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base), toml::Value::Table(overlay)) => {
            for (key, value) in overlay {
                let merged = match base.remove(&key) {
                    Some(existing) => deep_merge(existing, value),
                    None => value,
                };
                base.insert(key, merged);
            }
            toml::Value::Table(base)
        }
        (_, overlay) => overlay,
    }
}

/// Look up a dotted key path in a TOML value
fn lookup<'a>(value: &'a toml::Value, path: &str) -> Option<&'a toml::Value> {
    path.split('.')
        .try_fold(value, |current, segment| current.get(segment))
}

fn read_toml(path: &Path) -> Result<toml::Value> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| Error::ConfigParse {
        path: path.display().to_string(),
        error: e.to_string(),
    })
}
