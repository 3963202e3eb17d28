//! # App Error Types
//!
//! What the user sees when a command fails, plus configuration errors.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Console                            │
//! │                                                                         │
//! │  "save" typed                                                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command handler → Result<Outcome, AppError>                    │  │
//! │  │       │                                                          │  │
//! │  │       ├── CoreError::Validation ──► VALIDATION_ERROR ──────────►│  │
//! │  │       ├── CoreError::ProductNotFound ──► NOT_FOUND ────────────►│  │
//! │  │       └── unknown input ──► INVALID_COMMAND ───────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Printed as "[NOT_FOUND] Product not found: 42", loop continues.       │
//! │  Only startup errors (config, seed data, stdin) end the program.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::path::PathBuf;

use catalog_core::CoreError;
use thiserror::Error;

// =============================================================================
// Config Error
// =============================================================================

/// Failures while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for `ConfigState`.
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A value is out of range.
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Convenience type alias for config loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

// =============================================================================
// App Error
// =============================================================================

/// Error returned from command handlers and the event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for command failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Product ID not in the store
    NotFound,

    /// Form draft failed validation
    ValidationError,

    /// Input line could not be parsed
    InvalidCommand,

    /// Command not allowed right now (e.g. `save` with no form open)
    InvalidState,

    /// Bad configuration
    ConfigError,

    /// Anything else (I/O, corrupt seed data)
    Internal,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InvalidCommand => "INVALID_COMMAND",
            ErrorCode::InvalidState => "INVALID_STATE",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::Internal => "INTERNAL",
        }
    }
}

impl AppError {
    /// Creates a new app error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates an invalid command error.
    pub fn invalid_command(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::InvalidCommand, message)
    }

    /// Creates an invalid state error.
    pub fn invalid_state(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::InvalidState, message)
    }

    /// Creates an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::Internal, message)
    }
}

/// Converts core errors to app errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ProductNotFound(id) => {
                AppError::new(ErrorCode::NotFound, format!("Product not found: {}", id))
            }
            CoreError::Validation(errors) => AppError::new(
                ErrorCode::ValidationError,
                format!("Please fix {} field(s) before saving", errors.len()),
            ),
            CoreError::DuplicateProductId(id) => {
                tracing::error!(id, "Duplicate product id in store");
                AppError::internal(format!("Duplicate product id: {}", id))
            }
            CoreError::SeedData(e) => {
                tracing::error!("Seed data could not be decoded: {}", e);
                AppError::internal("Sample data is corrupt")
            }
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        tracing::error!("Terminal I/O failed: {}", err);
        AppError::internal(format!("Terminal I/O failed: {}", err))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code.as_str(), self.message)
    }
}

impl std::error::Error for AppError {}

/// Convenience type alias for command results.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{FormErrors, FormField, ValidationError};

    #[test]
    fn test_display_includes_code() {
        let err: AppError = CoreError::ProductNotFound(42).into();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.to_string(), "[NOT_FOUND] Product not found: 42");
    }

    #[test]
    fn test_validation_maps_to_validation_code() {
        let mut errors = FormErrors::new();
        errors.insert(FormField::Name, ValidationError::Required(FormField::Name));
        errors.insert(FormField::Price, ValidationError::InvalidPrice);

        let err: AppError = CoreError::Validation(errors).into();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Please fix 2 field(s) before saving");
    }

    #[test]
    fn test_config_error_maps_to_config_code() {
        let err: AppError = ConfigError::Invalid("page_size must be greater than 0".into()).into();
        assert_eq!(err.code, ErrorCode::ConfigError);
        assert!(err.message.contains("page_size"));
    }
}
