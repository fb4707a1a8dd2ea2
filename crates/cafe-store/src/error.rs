//! # Storage Error Types
//!
//! Error types for counter and receipt file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error                                                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the path that failed                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in cafe-cli) ← Ends the session                              │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A missing or unreadable counter *value* is not an error: the sequencer
//! resets to 1. Only failures of the filesystem itself surface here.

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File storage errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A read, write or directory creation failed.
    ///
    /// ## When This Occurs
    /// - Data directory is read-only
    /// - Disk full
    /// - Counter path points at a directory
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A receipt file with the same name is already archived.
    ///
    /// ## When This Occurs
    /// - The counter file was reset and the same customer was billed with
    ///   the same number within the same second
    #[error("Receipt already exists: {}", .0.display())]
    ReceiptExists(PathBuf),
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }
}

/// Result type for storage operations.
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_message_includes_path() {
        let err = StoreError::io(
            "Bills/Bill_1.txt",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.to_string(), "I/O error on Bills/Bill_1.txt: denied");
    }
}
