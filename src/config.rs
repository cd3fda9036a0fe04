use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::core::Coordinate;

/// Application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub api: ApiSettings,
    #[serde(default)]
    pub ranking: RankingSettings,
    #[serde(default)]
    pub mock: MockSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: None,
        }
    }
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 8080 }

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    #[serde(default = "default_api_url")]
    pub url: String,
    #[serde(default)]
    pub token: String,
    #[serde(default = "default_use_mock")]
    pub use_mock: bool,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            url: default_api_url(),
            token: String::new(),
            use_mock: default_use_mock(),
        }
    }
}

fn default_api_url() -> String { DEFAULT_API_URL.to_string() }
fn default_use_mock() -> bool { true }

#[derive(Debug, Clone, Deserialize)]
pub struct RankingSettings {
    #[serde(default = "default_fallback_latitude")]
    pub fallback_latitude: f64,
    #[serde(default = "default_fallback_longitude")]
    pub fallback_longitude: f64,
}

impl Default for RankingSettings {
    fn default() -> Self {
        Self {
            fallback_latitude: default_fallback_latitude(),
            fallback_longitude: default_fallback_longitude(),
        }
    }
}

impl RankingSettings {
    pub fn fallback(&self) -> Coordinate {
        Coordinate::new(self.fallback_latitude, self.fallback_longitude)
    }
}

fn default_fallback_latitude() -> f64 { crate::core::DEFAULT_FALLBACK.latitude }
fn default_fallback_longitude() -> f64 { crate::core::DEFAULT_FALLBACK.longitude }

#[derive(Debug, Clone, Deserialize)]
pub struct MockSettings {
    #[serde(default = "default_min_delay_ms")]
    pub min_delay_ms: u64,
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for MockSettings {
    fn default() -> Self {
        Self {
            min_delay_ms: default_min_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl MockSettings {
    pub fn min_delay(&self) -> Duration {
        Duration::from_millis(self.min_delay_ms)
    }

    pub fn max_delay(&self) -> Duration {
        Duration::from_millis(self.max_delay_ms)
    }
}

fn default_min_delay_ms() -> u64 { 100 }
fn default_max_delay_ms() -> u64 { 300 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl LoggingSettings {
    /// Apply `LOG_LEVEL` / `LOG_FORMAT` style overrides on top of the file values
    pub fn with_overrides(mut self, level: Option<String>, format: Option<String>) -> Self {
        if let Some(level) = level.filter(|l| !l.is_empty()) {
            self.level = level;
        }
        if let Some(format) = format.filter(|f| !f.is_empty()) {
            self.format = format;
        }
        self
    }

    /// File values overridden by the `LOG_LEVEL` and `LOG_FORMAT` environment variables
    pub fn with_env_overrides(self) -> Self {
        self.with_overrides(std::env::var("LOG_LEVEL").ok(), std::env::var("LOG_FORMAT").ok())
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SUGGEST_)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SUGGEST__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("SUGGEST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path, still honouring SUGGEST__ overrides
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("SUGGEST")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            base_url: self.api.url.clone(),
            api_token: self.api.token.clone(),
        }
    }
}

/// Default suggestions endpoint when nothing is configured
pub const DEFAULT_API_URL: &str = "http://localhost:5001";

/// Connection details for the suggestions endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub api_token: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_API_URL.to_string(),
            api_token: String::new(),
        }
    }
}

impl ApiConfig {
    /// Read `API_URL` and `API_TOKEN` from a `.env` file
    ///
    /// Keys missing from the file keep their defaults. A file that cannot be
    /// opened yields the defaults with a warning; a malformed line is skipped.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        let mut api = Self::default();

        let iter = match dotenv::from_path_iter(path) {
            Ok(iter) => iter,
            Err(e) => {
                tracing::warn!("{} not accessible ({}), using default values", path.display(), e);
                return api;
            }
        };

        for item in iter {
            match item {
                Ok((key, value)) => api.apply(&key, value),
                Err(e) => tracing::warn!("Skipping malformed line in {}: {}", path.display(), e),
            }
        }

        api
    }

    fn apply(&mut self, key: &str, value: String) {
        match key {
            "API_URL" if !value.is_empty() => self.base_url = value,
            "API_TOKEN" => self.api_token = value,
            _ => {}
        }
    }
}
