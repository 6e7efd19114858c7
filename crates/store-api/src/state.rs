//! # Application State
//!
//! Shared state for the Axum application.
//! Holds the store delegate and the resolved configuration.

use serde::Deserialize;
use std::net::SocketAddr;
use store_core::{default_delegate, BoxedStoreDelegate, StoreError, StoreResult};

/// Default API base path (`api.base-path`)
pub const DEFAULT_BASE_PATH: &str = "/v2";

const CONFIG_PATHS: [&str; 3] = [
    "config/store.toml",
    "../config/store.toml",
    "../../config/store.toml",
];

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Pretty
        }
    }
}

/// Optional overrides read from `config/store.toml`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub base_path: Option<String>,
    pub environment: Option<String>,
    pub log_format: Option<String>,
}

impl FileConfig {
    /// Parse a TOML document; `source` names it in errors
    pub fn from_toml(content: &str, source: &str) -> StoreResult<Self> {
        toml::from_str(content)
            .map_err(|e| StoreError::Configuration(format!("Failed to parse {}: {}", source, e)))
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Normalized base path for the store routes ("" means root)
    pub base_path: String,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Log output format
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Load from `.env`, the optional config file, then environment variables
    pub fn load() -> StoreResult<Self> {
        dotenvy::dotenv().ok();

        let file = load_file_config()?;
        Ok(Self::resolve(file, |key| std::env::var(key).ok()))
    }

    /// Layer defaults < file < environment
    pub fn resolve(file: Option<FileConfig>, env: impl Fn(&str) -> Option<String>) -> Self {
        let file = file.unwrap_or_default();

        let host = env("HOST")
            .or(file.host)
            .unwrap_or_else(|| "127.0.0.1".to_string());
        let port = env("PORT")
            .and_then(|p| p.parse().ok())
            .or(file.port)
            .unwrap_or(8080);
        let base_path = env("API_BASE_PATH")
            .or(file.base_path)
            .unwrap_or_else(|| DEFAULT_BASE_PATH.to_string());
        let environment = env("ENVIRONMENT")
            .or(file.environment)
            .unwrap_or_else(|| "development".to_string());
        let log_format = env("LOG_FORMAT")
            .or(file.log_format)
            .map(|f| LogFormat::parse(&f))
            .unwrap_or_default();

        Self {
            host,
            port,
            base_path: normalize_base_path(&base_path),
            environment,
            log_format,
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> StoreResult<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                StoreError::Configuration(format!(
                    "Invalid socket address {}:{}: {}",
                    self.host, self.port, e
                ))
            })
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::resolve(None, |_| None)
    }
}

/// Leading slash, no trailing slash, root collapses to ""
pub fn normalize_base_path(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{}", trimmed)
    }
}

fn load_file_config() -> StoreResult<Option<FileConfig>> {
    for path in CONFIG_PATHS {
        if let Ok(content) = std::fs::read_to_string(path) {
            let config = FileConfig::from_toml(&content, path)?;
            tracing::info!("Loaded store config from {}", path);
            return Ok(Some(config));
        }
    }
    Ok(None)
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Business logic behind the store routes
    pub delegate: BoxedStoreDelegate,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// State backed by the no-op delegate
    pub fn new(config: AppConfig) -> Self {
        Self::with_delegate(config, default_delegate())
    }

    /// State backed by an application-supplied delegate
    pub fn with_delegate(config: AppConfig, delegate: BoxedStoreDelegate) -> Self {
        Self { delegate, config }
    }

    /// Base path the store routes are mounted under
    pub fn base_path(&self) -> &str {
        &self.config.base_path
    }
}
