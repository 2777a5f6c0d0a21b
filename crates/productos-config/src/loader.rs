//! Configuration loader with layered sources.

use crate::{AppConfig, ConfigValidator};
use config::{Config, ConfigError, Environment, File};
use productos_core::ProductosError;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default prefix for environment variable overrides.
pub const ENV_PREFIX: &str = "PRODUCTOS";

/// Configuration loader.
///
/// Configuration is loaded from multiple sources in order:
/// 1. Built-in defaults
/// 2. `{config_dir}/default.toml`
/// 3. `{config_dir}/{environment}.toml`
/// 4. `{config_dir}/local.toml` (not committed to version control)
/// 5. Environment variables such as `PRODUCTOS__API__BASE_URL`
/// 6. Explicit overrides set with [`ConfigLoader::with_override`]
///
/// Validation runs on the merged result, overrides included.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_dir: PathBuf,
    environment: Option<String>,
    env_prefix: String,
    overrides: Vec<(String, String)>,
}

impl ConfigLoader {
    /// Creates a new configuration loader reading from `config_dir`.
    pub fn new(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            environment: None,
            env_prefix: ENV_PREFIX.to_string(),
            overrides: Vec::new(),
        }
    }

    /// Pins the environment name instead of reading `PRODUCTOS_ENVIRONMENT`.
    #[must_use]
    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = Some(environment.into());
        self
    }

    /// Overrides the environment variable prefix.
    #[must_use]
    pub fn with_env_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Sets `key` (dotted path, e.g. `api.base_url`) above every other source.
    #[must_use]
    pub fn with_override(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((key.into(), value.into()));
        self
    }

    /// Loads and validates the configuration.
    pub fn load(&self) -> Result<AppConfig, ProductosError> {
        // Load .env file if present
        if let Err(e) = dotenvy::dotenv() {
            debug!("No .env file found or error loading it: {}", e);
        }

        let environment = self.environment.clone().unwrap_or_else(|| {
            std::env::var(format!("{}_ENVIRONMENT", self.env_prefix))
                .unwrap_or_else(|_| "development".to_string())
        });

        debug!(
            environment = %environment,
            config_dir = %self.config_dir.display(),
            "Loading configuration"
        );

        let defaults = Config::try_from(&AppConfig::default()).map_err(config_error_to_productos_error)?;
        let mut builder = Config::builder().add_source(defaults);

        for name in ["default", environment.as_str(), "local"] {
            let path = self.config_dir.join(format!("{}.toml", name));
            if Path::new(&path).exists() {
                debug!("Loading config file: {}", path.display());
                builder = builder.add_source(File::from(path).required(false));
            }
        }

        builder = builder.add_source(
            Environment::with_prefix(&self.env_prefix)
                .separator("__")
                .try_parsing(true),
        );

        for (key, value) in &self.overrides {
            debug!(key = %key, "Applying configuration override");
            builder = builder
                .set_override(key.as_str(), value.as_str())
                .map_err(config_error_to_productos_error)?;
        }

        let mut app_config: AppConfig = builder
            .build()
            .and_then(|config| config.try_deserialize())
            .map_err(config_error_to_productos_error)?;

        app_config.app.environment = environment;

        ConfigValidator::validate(&app_config).map_err(|errors| {
            let message = errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ");
            ProductosError::Configuration(message)
        })?;

        Ok(app_config)
    }
}

fn config_error_to_productos_error(err: ConfigError) -> ProductosError {
    ProductosError::Configuration(err.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, contents: &str) {
        fs::write(dir.path().join(name), contents).unwrap();
    }

    #[test]
    fn test_defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let config = ConfigLoader::new(dir.path())
            .with_environment("test")
            .with_env_prefix("PRODUCTOS_TEST_DEFAULTS")
            .load()
            .unwrap();

        assert_eq!(config.api.base_url, "http://localhost:8080");
        assert_eq!(config.api.content_type, "application/json");
        assert_eq!(config.app.environment, "test");
    }

    #[test]
    fn test_file_layering() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "default.toml",
            "[api]\nbase_url = \"http://default.example.com\"\nconnect_timeout_secs = 3\n",
        );
        write(&dir, "staging.toml", "[api]\nbase_url = \"https://staging.example.com/products\"\n");
        write(&dir, "local.toml", "[logging]\nlevel = \"debug\"\n");

        let config = ConfigLoader::new(dir.path())
            .with_environment("staging")
            .with_env_prefix("PRODUCTOS_TEST_LAYERING")
            .load()
            .unwrap();

        assert_eq!(config.api.base_url, "https://staging.example.com/products");
        assert_eq!(config.api.connect_timeout_secs, 3);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_environment_variables_override_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[api]\nbase_url = \"http://file.example.com\"\n");
        std::env::set_var("PRODUCTOS_TEST_ENV__API__BASE_URL", "http://env.example.com");
        std::env::set_var("PRODUCTOS_TEST_ENV__API__TIMEOUT_SECS", "7");

        let config = ConfigLoader::new(dir.path())
            .with_environment("test")
            .with_env_prefix("PRODUCTOS_TEST_ENV")
            .load()
            .unwrap();

        assert_eq!(config.api.base_url, "http://env.example.com");
        assert_eq!(config.api.timeout_secs, Some(7));
    }

    #[test]
    fn test_invalid_configuration_is_rejected() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[api]\nbase_url = \"not a url\"\n[logging]\nformat = \"xml\"\n");

        let err = ConfigLoader::new(dir.path())
            .with_environment("test")
            .with_env_prefix("PRODUCTOS_TEST_INVALID")
            .load()
            .unwrap_err();

        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        let message = err.to_string();
        assert!(message.contains("base URL"));
        assert!(message.contains("log format"));
    }

    #[test]
    fn test_malformed_toml_is_a_configuration_error() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[api\nbase_url = ");

        let err = ConfigLoader::new(dir.path())
            .with_environment("test")
            .with_env_prefix("PRODUCTOS_TEST_MALFORMED")
            .load()
            .unwrap_err();

        assert!(matches!(err, ProductosError::Configuration(_)));
    }

    #[test]
    fn test_override_wins_over_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, "default.toml", "[api]\nbase_url = \"http://file.example.com\"\n");

        let config = ConfigLoader::new(dir.path())
            .with_environment("test")
            .with_env_prefix("PRODUCTOS_TEST_OVERRIDE")
            .with_override("api.base_url", "https://override.example.com")
            .load()
            .unwrap();

        assert_eq!(config.api.base_url, "https://override.example.com");
    }

    #[test]
    fn test_override_is_validated() {
        let dir = TempDir::new().unwrap();

        let err = ConfigLoader::new(dir.path())
            .with_environment("test")
            .with_env_prefix("PRODUCTOS_TEST_BAD_OVERRIDE")
            .with_override("api.base_url", "ftp://catalog.example.com")
            .load()
            .unwrap_err();

        assert_eq!(err.error_code(), "CONFIGURATION_ERROR");
        assert!(err.to_string().contains("ftp"));
    }
}
