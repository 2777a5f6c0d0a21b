//! Application configuration structures.

use productos_core::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application name and metadata.
    #[serde(default)]
    pub app: AppMetadata,

    /// Catalog API configuration.
    #[serde(default)]
    pub api: ApiConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Application metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppMetadata {
    /// Application name.
    pub name: String,
    /// Application version.
    pub version: String,
    /// Environment (development, staging, production).
    pub environment: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            name: "productos".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            environment: "development".to_string(),
        }
    }
}

/// Catalog API configuration.
///
/// These values are fixed for the lifetime of a gateway: they are read once
/// when the gateway is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the product collection resource.
    pub base_url: String,
    /// Value of the default `Content-Type` header.
    pub content_type: String,
    /// Overall request timeout in seconds. Unset means no timeout.
    pub timeout_secs: Option<u64>,
    /// TCP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Maximum idle connections kept per host.
    pub pool_max_idle_per_host: usize,
    /// Idle connection lifetime in seconds.
    pub pool_idle_timeout_secs: u64,
    /// `User-Agent` header sent with every request.
    pub user_agent: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080".to_string(),
            content_type: "application/json".to_string(),
            timeout_secs: None,
            connect_timeout_secs: 10,
            pool_max_idle_per_host: 16,
            pool_idle_timeout_secs: 90,
            user_agent: format!("productos/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ApiConfig {
    /// Creates a configuration pointing at `base_url` with default settings.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    /// Returns the request timeout as a Duration, if one is configured.
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Returns the connect timeout as a Duration.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }

    /// Returns the idle connection timeout as a Duration.
    #[must_use]
    pub const fn pool_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.pool_idle_timeout_secs)
    }
}
