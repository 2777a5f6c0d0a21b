//! Configuration validation module.
//!
//! Collects every problem in a configuration before failing, so a broken
//! deployment reports all of its mistakes at once.

use crate::AppConfig;
use productos_core::{VALID_LOG_FORMATS, VALID_LOG_LEVELS};
use std::fmt;
use url::Url;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// URL format is invalid.
    InvalidUrl { url_type: String, message: String },
    /// URL scheme is not http or https.
    UnsupportedScheme { scheme: String },
    /// Content type header value is empty.
    EmptyContentType,
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String },
    /// Log level is invalid.
    InvalidLogLevel { value: String },
    /// Log format is invalid.
    InvalidLogFormat { value: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidUrl { url_type, message } => {
                write!(f, "Invalid {} URL: {}", url_type, message)
            }
            Self::UnsupportedScheme { scheme } => {
                write!(f, "Unsupported URL scheme '{}' (expected http or https)", scheme)
            }
            Self::EmptyContentType => write!(f, "Content type cannot be empty"),
            Self::NonPositiveTimeout { name } => {
                write!(f, "Timeout '{}' must be positive", name)
            }
            Self::InvalidLogLevel { value } => {
                write!(
                    f,
                    "Invalid log level: '{}' (valid: {})",
                    value,
                    VALID_LOG_LEVELS.join(", ")
                )
            }
            Self::InvalidLogFormat { value } => {
                write!(
                    f,
                    "Invalid log format: '{}' (valid: {})",
                    value,
                    VALID_LOG_FORMATS.join(", ")
                )
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validates the entire application configuration.
    ///
    /// Returns Ok(()) if valid, or Err with all validation errors found.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        Self::validate_api(&config.api, &mut errors);
        Self::validate_logging(&config.logging, &mut errors);

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validates API configuration.
    fn validate_api(config: &crate::ApiConfig, errors: &mut Vec<ConfigValidationError>) {
        match Url::parse(&config.base_url) {
            Ok(url) => {
                if url.scheme() != "http" && url.scheme() != "https" {
                    errors.push(ConfigValidationError::UnsupportedScheme {
                        scheme: url.scheme().to_string(),
                    });
                }
                if url.query().is_some() || url.fragment().is_some() {
                    errors.push(ConfigValidationError::InvalidUrl {
                        url_type: "base".to_string(),
                        message: "base URL cannot carry a query or fragment".to_string(),
                    });
                }
            }
            Err(e) => errors.push(ConfigValidationError::InvalidUrl {
                url_type: "base".to_string(),
                message: format!("{}: {}", e, config.base_url),
            }),
        }

        if config.content_type.trim().is_empty() {
            errors.push(ConfigValidationError::EmptyContentType);
        }

        if config.timeout_secs == Some(0) {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "api.timeout_secs".to_string(),
            });
        }
        if config.connect_timeout_secs == 0 {
            errors.push(ConfigValidationError::NonPositiveTimeout {
                name: "api.connect_timeout_secs".to_string(),
            });
        }
    }

    /// Validates logging configuration.
    fn validate_logging(config: &productos_core::LoggingConfig, errors: &mut Vec<ConfigValidationError>) {
        let level = config.level.to_lowercase();
        if !VALID_LOG_LEVELS.contains(&level.as_str()) {
            errors.push(ConfigValidationError::InvalidLogLevel {
                value: config.level.clone(),
            });
        }

        if !VALID_LOG_FORMATS.contains(&config.format.as_str()) {
            errors.push(ConfigValidationError::InvalidLogFormat {
                value: config.format.clone(),
            });
        }
    }
}
