//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub exchange: ExchangeConfig,

    #[serde(default)]
    pub upstream: UpstreamConfig,

    #[serde(default)]
    pub relay: RelayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Exchange REST API configuration
#[derive(Clone, Deserialize)]
pub struct ExchangeConfig {
    #[serde(default = "default_rest_url")]
    pub rest_url: String,

    #[serde(default)]
    pub api_key: String,

    #[serde(default)]
    pub secret_key: String,

    /// Asset every balance is valued in
    #[serde(default = "default_quote_asset")]
    pub quote_asset: String,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_rest_url() -> String {
    "https://api.mexc.com".to_string()
}

fn default_quote_asset() -> String {
    "USDT".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            rest_url: default_rest_url(),
            api_key: String::new(),
            secret_key: String::new(),
            quote_asset: default_quote_asset(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ExchangeConfig {
    /// Whether both API credentials are present
    pub fn has_credentials(&self) -> bool {
        !self.api_key.is_empty() && !self.secret_key.is_empty()
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// Keys never end up in logs.
impl std::fmt::Debug for ExchangeConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeConfig")
            .field("rest_url", &self.rest_url)
            .field("api_key", &redact(&self.api_key))
            .field("secret_key", &redact(&self.secret_key))
            .field("quote_asset", &self.quote_asset)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .finish()
    }
}

fn redact(value: &str) -> &'static str {
    if value.is_empty() {
        "<unset>"
    } else {
        "<redacted>"
    }
}

/// Exchange user-data stream configuration
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_ws_url")]
    pub ws_url: String,

    #[serde(default = "default_streams")]
    pub streams: Vec<String>,

    #[serde(default = "default_ping_interval")]
    pub ping_interval_secs: u64,

    #[serde(default = "default_reconnect_delay")]
    pub reconnect_delay_ms: u64,

    #[serde(default = "default_keepalive_interval")]
    pub listen_key_keepalive_secs: u64,

    #[serde(default = "default_keepalive_retry")]
    pub listen_key_retry_secs: u64,
}

fn default_ws_url() -> String {
    "wss://wbs.mexc.com/ws".to_string()
}

fn default_streams() -> Vec<String> {
    vec!["spot@private.account.v3.api".to_string()]
}

fn default_ping_interval() -> u64 {
    20
}

fn default_reconnect_delay() -> u64 {
    1000
}

fn default_keepalive_interval() -> u64 {
    30 * 60
}

fn default_keepalive_retry() -> u64 {
    60
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            ws_url: default_ws_url(),
            streams: default_streams(),
            ping_interval_secs: default_ping_interval(),
            reconnect_delay_ms: default_reconnect_delay(),
            listen_key_keepalive_secs: default_keepalive_interval(),
            listen_key_retry_secs: default_keepalive_retry(),
        }
    }
}

impl UpstreamConfig {
    pub fn ping_interval(&self) -> Duration {
        Duration::from_secs(self.ping_interval_secs)
    }

    pub fn reconnect_delay(&self) -> Duration {
        Duration::from_millis(self.reconnect_delay_ms)
    }

    pub fn keepalive_interval(&self) -> Duration {
        Duration::from_secs(self.listen_key_keepalive_secs)
    }

    pub fn keepalive_retry(&self) -> Duration {
        Duration::from_secs(self.listen_key_retry_secs)
    }
}

/// Relay server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct RelayConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_max_clients")]
    pub max_clients: usize,
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_max_clients() -> usize {
    256
}

impl Default for RelayConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            max_clients: default_max_clients(),
        }
    }
}

impl RelayConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
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

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config = Self::parse(&content).map_err(|error| ConfigError::Parse {
            path: path.to_path_buf(),
            error,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the relay cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("exchange.request_timeout_secs", self.exchange.request_timeout_secs),
            ("upstream.ping_interval_secs", self.upstream.ping_interval_secs),
            ("upstream.reconnect_delay_ms", self.upstream.reconnect_delay_ms),
            ("upstream.listen_key_keepalive_secs", self.upstream.listen_key_keepalive_secs),
            ("upstream.listen_key_retry_secs", self.upstream.listen_key_retry_secs),
        ];

        for (key, value) in intervals {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{} must be greater than zero", key)));
            }
        }
        Ok(())
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, String> {
        toml::from_str(content).map_err(|e| e.to_string())
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
    pub fn load_default() -> Result<Self, ConfigError> {
        Self::load_or_env(Self::find_default_path().as_deref())
    }

    /// First existing file among the standard config locations
    pub fn find_default_path() -> Option<PathBuf> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("assetboard").join("config.toml")),
            Some(PathBuf::from("/etc/assetboard/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ];

        config_paths.into_iter().flatten().find(|path| path.exists())
    }

    /// Load `path` with environment overrides, or fall back to environment only.
    /// A file that exists but fails to load is an error, not a fallback.
    pub fn load_or_env(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_with_env(path),
            None => {
                let config = Self::from_env();
                config.validate()?;
                Ok(config)
            }
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Exchange overrides
        if let Some(url) = lookup("ASSETBOARD_REST_URL") {
            self.exchange.rest_url = url;
        }
        if let Some(key) = lookup("ASSETBOARD_API_KEY") {
            self.exchange.api_key = key;
        }
        if let Some(secret) = lookup("ASSETBOARD_SECRET_KEY") {
            self.exchange.secret_key = secret;
        }
        if let Some(quote) = lookup("ASSETBOARD_QUOTE_ASSET") {
            self.exchange.quote_asset = quote;
        }

        // Upstream overrides
        if let Some(url) = lookup("ASSETBOARD_STREAM_URL") {
            self.upstream.ws_url = url;
        }

        // Relay overrides
        if let Some(host) = lookup("ASSETBOARD_HOST") {
            self.relay.host = host;
        }
        if let Some(port) = lookup("ASSETBOARD_PORT") {
            if let Ok(p) = port.parse() {
                self.relay.port = p;
            }
        }

        // Logging overrides
        if let Some(level) = lookup("ASSETBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("ASSETBOARD_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Assetboard Configuration
#
# Environment variables override these settings:
# - ASSETBOARD_REST_URL
# - ASSETBOARD_API_KEY
# - ASSETBOARD_SECRET_KEY
# - ASSETBOARD_QUOTE_ASSET
# - ASSETBOARD_STREAM_URL
# - ASSETBOARD_HOST
# - ASSETBOARD_PORT
# - ASSETBOARD_LOG_LEVEL
# - ASSETBOARD_LOG_FORMAT

[exchange]
# Exchange REST API base URL
rest_url = "https://api.mexc.com"

# API credentials (prefer the environment variables)
api_key = ""
secret_key = ""

# Asset every balance is valued in
quote_asset = "USDT"

# REST request timeout in seconds
request_timeout_secs = 10

[upstream]
# Exchange user-data stream endpoint (listen key is appended)
ws_url = "wss://wbs.mexc.com/ws"

# Streams to subscribe to once connected
streams = ["spot@private.account.v3.api"]

# Application-level ping interval (seconds)
ping_interval_secs = 20

# Delay before reconnecting after the stream closes (ms)
reconnect_delay_ms = 1000

# Listen key keepalive interval and retry delay (seconds)
listen_key_keepalive_secs = 1800
listen_key_retry_secs = 60

[relay]
# Dashboard feed host and port (clients connect to ws://host:port/ws)
host = "localhost"
port = 8000

# Maximum concurrent dashboard connections
max_clients = 256

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
