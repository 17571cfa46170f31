//! Application configuration.
//!
//! Settings are layered with the `config` crate: built-in defaults, then an
//! optional TOML file, then `TREESCOPE__SECTION__KEY` environment variables.
//! The binary applies command-line overrides on top.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Root configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Defaults and bounds for tree requests.
    #[serde(default)]
    pub tree: TreeConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory holding the frontend's `index.html` and assets.
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
    /// CORS configuration.
    #[serde(default)]
    pub cors: CorsConfig,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_dir: default_static_dir(),
            cors: CorsConfig::default(),
        }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Allowed origins; `["*"]` allows any.
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
    /// Max age for preflight cache in seconds.
    #[serde(default = "default_max_age")]
    pub max_age_seconds: u64,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
            max_age_seconds: default_max_age(),
        }
    }
}

/// Tree request configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Root used when a request has no `path` parameter.
    #[serde(default = "default_path")]
    pub default_path: String,
    /// Depth used when a request has no `depth` parameter.
    #[serde(default = "default_depth")]
    pub default_depth: usize,
    /// Upper bound applied to requested depths. Unbounded when unset.
    #[serde(default)]
    pub max_depth_limit: Option<usize>,
    /// Glob patterns for entries left out of every listing.
    #[serde(default)]
    pub exclude_patterns: Vec<String>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            default_path: default_path(),
            default_depth: default_depth(),
            max_depth_limit: None,
            exclude_patterns: Vec::new(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `"trace"`, `"debug"`, `"info"`, `"warn"`, `"error"`.
    #[serde(default = "default_level")]
    pub level: String,
    /// Log format: `"json"` or `"pretty"`.
    #[serde(default = "default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from an optional TOML file and the environment.
    ///
    /// A file given explicitly must exist.
    pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(file) = file {
            builder = builder.add_source(config::File::from(file).required(true));
        }
        builder
            .add_source(
                config::Environment::with_prefix("TREESCOPE")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("frontend")
}

fn default_allowed_origins() -> Vec<String> {
    vec!["*".to_string()]
}

fn default_max_age() -> u64 {
    3600
}

fn default_path() -> String {
    "~".to_string()
}

fn default_depth() -> usize {
    3
}

fn default_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "pretty".to_string()
}
