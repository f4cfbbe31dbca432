//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::navigation::NavigationConfig;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub navigation: NavigationSettings,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty allows any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
        }
    }
}

/// Timing of the loading transition between sections
#[derive(Debug, Clone, Deserialize)]
pub struct NavigationSettings {
    #[serde(default = "default_loader_delay")]
    pub loader_delay_ms: u64,

    #[serde(default = "default_transition")]
    pub transition_ms: u64,
}

fn default_loader_delay() -> u64 {
    800
}

fn default_transition() -> u64 {
    300
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            loader_delay_ms: default_loader_delay(),
            transition_ms: default_transition(),
        }
    }
}

impl NavigationSettings {
    pub fn to_navigation_config(&self) -> NavigationConfig {
        NavigationConfig {
            loader_delay: Duration::from_millis(self.loader_delay_ms),
            transition: Duration::from_millis(self.transition_ms),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("medboard").join("config.toml")),
            Some(PathBuf::from("/etc/medboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::info!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        // API overrides
        if let Some(host) = var("MEDBOARD_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = var("MEDBOARD_API_PORT").and_then(|p| p.parse().ok()) {
            self.api.port = port;
        }

        // Navigation overrides
        if let Some(ms) = var("MEDBOARD_LOADER_DELAY_MS").and_then(|v| v.parse().ok()) {
            self.navigation.loader_delay_ms = ms;
        }
        if let Some(ms) = var("MEDBOARD_TRANSITION_MS").and_then(|v| v.parse().ok()) {
            self.navigation.transition_ms = ms;
        }

        // Logging overrides
        if let Some(level) = var("MEDBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = var("MEDBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Address the server binds to
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Medboard Configuration
#
# Environment variables override these settings:
# - MEDBOARD_API_HOST
# - MEDBOARD_API_PORT
# - MEDBOARD_LOADER_DELAY_MS
# - MEDBOARD_TRANSITION_MS
# - MEDBOARD_LOG_LEVEL
# - MEDBOARD_LOG_FORMAT

[api]
# Server host
host = "127.0.0.1"

# Server port
port = 8080

# Allowed CORS origins (empty allows any origin)
cors_origins = []

[navigation]
# How long the loader shows before a section is rendered (ms)
loader_delay_ms = 800

# Exit transition of the previous section (ms)
transition_ms = 300

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
