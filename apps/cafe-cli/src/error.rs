//! # Application Error Type
//!
//! Unified error type for the console session.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Café Console                       │
//! │                                                                         │
//! │  Bad item / bad quantity  ──► reported on the console, re-prompt        │
//! │                               (never becomes an AppError)               │
//! │                                                                         │
//! │  ConfigError  ─┐                                                        │
//! │  CoreError    ─┼──► AppError ──► main(): message on stderr, exit 1      │
//! │  StoreError   ─┤                                                        │
//! │  io::Error    ─┘    (console read/write failures)                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io;
use std::path::PathBuf;

use cafe_core::{CoreError, ValidationError};
use cafe_store::StoreError;
use thiserror::Error;

/// Errors that end a session.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A billing precondition was violated.
    #[error("Billing error: {0}")]
    Core(#[from] CoreError),

    /// The counter or a receipt file could not be read or written.
    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    /// Reading from or writing to the console failed.
    #[error("Console error: {0}")]
    Console(#[from] io::Error),
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Cannot read menu file {}: {source}", .path.display())]
    MenuFileUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Cannot parse menu file {}: {source}", .path.display())]
    MenuFileMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid menu: {0}")]
    InvalidMenu(#[from] ValidationError),
}

/// Result type for application operations.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err: AppError = ConfigError::InvalidValue("CAFE_GST_PERCENT".to_string()).into();
        assert_eq!(
            err.to_string(),
            "Configuration error: Invalid value for CAFE_GST_PERCENT"
        );

        let err: AppError = CoreError::EmptyOrder.into();
        assert_eq!(err.to_string(), "Billing error: Order has no items");
    }
}
