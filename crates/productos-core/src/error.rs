//! Unified error types for the catalog client.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use thiserror::Error;

/// Boxed transport cause, kept so callers can walk the `source()` chain.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Unified error type for Productos.
///
/// `Transport`, `Http` and `NotFound` together form the request-failure
/// family: everything the remote catalog API can do to a call. The remaining
/// variants are raised locally.
#[derive(Error, Debug)]
pub enum ProductosError {
    // ============ Request Errors ============
    /// The backend reported that the resource does not exist (HTTP 404).
    #[error("Resource not found: {resource_type} with id {id}")]
    NotFound {
        resource_type: &'static str,
        id: String,
        body: String,
    },

    /// The backend answered with a non-2xx status.
    #[error("HTTP {status} during {operation}{}: {body}", target_suffix(.id))]
    Http {
        operation: &'static str,
        id: Option<String>,
        status: u16,
        body: String,
    },

    /// The backend could not be reached (connection refused, timeout, DNS).
    #[error("Transport error during {operation}{}: {source}", target_suffix(.id))]
    Transport {
        operation: &'static str,
        id: Option<String>,
        source: BoxError,
    },

    /// A successful response whose body does not match the product schema.
    #[error("Malformed response to {operation}: {message}")]
    Decode {
        operation: &'static str,
        message: String,
    },

    // ============ Local Errors ============
    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

fn target_suffix(id: &Option<String>) -> String {
    id.as_ref()
        .map_or_else(String::new, |id| format!(" of product {id}"))
}

impl ProductosError {
    /// Returns the HTTP status attached to this error, if any.
    ///
    /// Transport failures never reached the backend and carry no status.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::NotFound { .. } => Some(404),
            Self::Http { status, .. } => Some(*status),
            Self::Transport { .. }
            | Self::Decode { .. }
            | Self::Validation(_)
            | Self::Configuration(_)
            | Self::Internal(_) => None,
        }
    }

    /// Returns a machine-readable error code.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "NOT_FOUND",
            Self::Http { .. } => "HTTP_ERROR",
            Self::Transport { .. } => "TRANSPORT_ERROR",
            Self::Decode { .. } => "DECODE_ERROR",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the gateway operation that failed, for request failures.
    #[must_use]
    pub const fn operation(&self) -> Option<&'static str> {
        match self {
            Self::Http { operation, .. }
            | Self::Transport { operation, .. }
            | Self::Decode { operation, .. } => Some(*operation),
            _ => None,
        }
    }

    /// Returns the error body sent by the backend, if any.
    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::NotFound { body, .. } | Self::Http { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Creates a not found error for a resource.
    #[must_use]
    pub fn not_found<T: ToString>(resource_type: &'static str, id: T) -> Self {
        Self::NotFound {
            resource_type,
            id: id.to_string(),
            body: String::new(),
        }
    }

    /// Creates a transport error wrapping the underlying cause.
    #[must_use]
    pub fn transport<E>(operation: &'static str, id: Option<String>, source: E) -> Self
    where
        E: Into<BoxError>,
    {
        Self::Transport {
            operation,
            id,
            source: source.into(),
        }
    }

    /// Creates a validation error.
    #[must_use]
    pub fn validation<T: Into<String>>(message: T) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration<T: Into<String>>(message: T) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal<T: Into<String>>(message: T) -> Self {
        Self::Internal(message.into())
    }

    /// True for every failure that came from the remote call itself.
    #[must_use]
    pub const fn is_request_failure(&self) -> bool {
        matches!(
            self,
            Self::Transport { .. } | Self::Http { .. } | Self::NotFound { .. }
        )
    }

    /// True when the backend reported the resource missing.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// True when the backend was never reached.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }
}

impl From<serde_json::Error> for ProductosError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("JSON serialization error: {}", err))
    }
}

/// Serializable error report, printed by the CLI in JSON output mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Machine-readable error code
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// HTTP status returned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// Raw error body returned by the backend
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

impl ErrorResponse {
    /// Creates a new error response from a `ProductosError`.
    #[must_use]
    pub fn from_error(error: &ProductosError) -> Self {
        Self {
            code: error.error_code().to_string(),
            message: error.to_string(),
            status: error.status_code(),
            body: error
                .response_body()
                .filter(|body| !body.is_empty())
                .map(str::to_string),
        }
    }
}

impl From<&ProductosError> for ErrorResponse {
    fn from(error: &ProductosError) -> Self {
        Self::from_error(error)
    }
}
