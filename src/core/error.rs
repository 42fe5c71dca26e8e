//! Typed error handling for the beer catalog
//!
//! Views never surface these errors to the user: a failed catalog load leaves
//! the list unchanged, a failed detail fetch leaves the detail page empty.
//! The types exist so the failure can be logged precisely and so the HTTP
//! layer can answer with a meaningful status when something outside a view
//! (configuration, templates) goes wrong.
//!
//! # Error Categories
//!
//! - [`SourceError`]: fetching or decoding a static JSON resource
//! - [`ConfigError`]: reading or parsing the application configuration
//! - [`CatalogError::Render`]: template rendering

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;

/// The main error type for the beer catalog
#[derive(Debug)]
pub enum CatalogError {
    /// Fetching a static resource failed
    Source(SourceError),

    /// Configuration errors
    Config(ConfigError),

    /// A view could not be rendered
    Render(String),

    /// Should not happen in normal operation
    Internal(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Source(e) => write!(f, "{}", e),
            CatalogError::Config(e) => write!(f, "{}", e),
            CatalogError::Render(msg) => write!(f, "Render error: {}", msg),
            CatalogError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Source(e) => Some(e),
            CatalogError::Config(e) => Some(e),
            CatalogError::Render(_) | CatalogError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl CatalogError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::Source(e) => e.status_code(),
            CatalogError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CatalogError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            CatalogError::Source(e) => e.error_code(),
            CatalogError::Config(_) => "CONFIG_ERROR",
            CatalogError::Render(_) => "RENDER_ERROR",
            CatalogError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
        }
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Source Errors
// =============================================================================

/// Errors raised while fetching a static JSON resource
///
/// Network failures and malformed payloads are the two cases the views care
/// about; both end up as a single logged failure.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The request never produced a response
    #[error("Request to '{url}' failed: {message}")]
    Network { url: String, message: String },

    /// The server answered with a non-success status
    #[error("Request to '{url}' returned status {status}")]
    Status { url: String, status: u16 },

    /// The payload was not the expected JSON
    #[error("Malformed JSON in '{resource}': {message}")]
    Parse { resource: String, message: String },

    /// The id cannot name a detail resource
    #[error("Invalid beer id '{id}'")]
    InvalidId { id: String },

    /// Reading a file from the data directory failed
    #[error("Failed to read '{path}': {message}")]
    Io { path: String, message: String },
}

impl SourceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            SourceError::Status { status: 404, .. } => StatusCode::NOT_FOUND,
            SourceError::Io { .. } | SourceError::InvalidId { .. } => StatusCode::NOT_FOUND,
            SourceError::Network { .. } | SourceError::Status { .. } => StatusCode::BAD_GATEWAY,
            SourceError::Parse { .. } => StatusCode::BAD_GATEWAY,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            SourceError::Network { .. } => "SOURCE_NETWORK_ERROR",
            SourceError::Status { .. } => "SOURCE_STATUS_ERROR",
            SourceError::Parse { .. } => "SOURCE_PARSE_ERROR",
            SourceError::InvalidId { .. } => "SOURCE_INVALID_ID",
            SourceError::Io { .. } => "SOURCE_IO_ERROR",
        }
    }

    /// Whether the resource was reached but could not be decoded
    pub fn is_parse(&self) -> bool {
        matches!(self, SourceError::Parse { .. })
    }
}

impl From<SourceError> for CatalogError {
    fn from(err: SourceError) -> Self {
        CatalogError::Source(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Invalid value in configuration
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },

    /// IO error while reading configuration
    IoError { path: String, message: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
            ConfigError::IoError { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for CatalogError {
    fn from(err: ConfigError) -> Self {
        CatalogError::Config(err)
    }
}

// =============================================================================
// Conversions from external errors
// =============================================================================

impl From<serde_yaml::Error> for CatalogError {
    fn from(err: serde_yaml::Error) -> Self {
        CatalogError::Config(ConfigError::ParseError {
            file: None,
            message: err.to_string(),
        })
    }
}

impl From<tera::Error> for CatalogError {
    fn from(err: tera::Error) -> Self {
        // tera keeps the useful part of the message in the source chain
        let mut message = err.to_string();
        let mut source = std::error::Error::source(&err);
        while let Some(cause) = source {
            message.push_str(": ");
            message.push_str(&cause.to_string());
            source = cause.source();
        }
        CatalogError::Render(message)
    }
}

/// A specialized Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;
