//! # Store Error Types
//!
//! Error types for file operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  std::io::Error / CoreError::MalformedRecord                           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the file path                         │
//! │       │                                                                 │
//! │       ├── on load: logged, file treated as absent                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AppError (in the CLI) ← on save: logged, prompt re-offered            │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::path::{Path, PathBuf};
use thiserror::Error;

/// File operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A file could not be read, written or appended.
    ///
    /// ## When This Occurs
    /// - Data directory is read-only or missing
    /// - Disk full
    /// - Path is a directory
    #[error("Cannot access {}: {source}", path.display())]
    PersistenceFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file was read but its content does not decode.
    ///
    /// ## When This Occurs
    /// - Counter file holds something that is not a number
    /// - Stall file truncated in the middle of an order
    /// - Stall file carries another stall's number
    #[error("Corrupt record in {}: {reason}", path.display())]
    CorruptRecord { path: PathBuf, reason: String },
}

impl StoreError {
    /// Wraps an I/O error with the path it happened on.
    pub fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        StoreError::PersistenceFailure {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a CorruptRecord error.
    pub fn corrupt(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        StoreError::CorruptRecord {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// The file the error is about.
    pub fn path(&self) -> &Path {
        match self {
            StoreError::PersistenceFailure { path, .. } | StoreError::CorruptRecord { path, .. } => {
                path
            }
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
