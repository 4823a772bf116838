//! # Repository Module
//!
//! One repository per file family.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FoodCourtManager                                                       │
//! │       │                                                                 │
//! │       │  store.stalls().save(&stall)                                    │
//! │       ▼                                                                 │
//! │  StallRepository                                                        │
//! │  ├── load(kind)   → Ok(None) if the file is missing                     │
//! │  └── save(&stall) → overwrite stall_<N>.txt                             │
//! │       │                                                                 │
//! │       │  record::encode / decode (foodcourt-core)                       │
//! │       ▼                                                                 │
//! │  Data directory                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`CounterFile`] - One scalar per file
//! - [`CustomerRepository`] - Customer directory and profile journal
//! - [`StallRepository`] - Per-stall order history
//! - [`LedgerRepository`] - Append-only receipt ledger
//! - [`ReportRepository`] - Sales report file

pub mod counter;
pub mod customer;
pub mod ledger;
pub mod report;
pub mod stall;

pub use counter::{CounterFile, Scalar};
pub use customer::CustomerRepository;
pub use ledger::LedgerRepository;
pub use report::ReportRepository;
pub use stall::StallRepository;

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use crate::error::{StoreError, StoreResult};

// =============================================================================
// File Helpers
// =============================================================================

/// Reads a whole file; a missing file is `Ok(None)`.
pub(crate) fn read_optional(path: &Path) -> StoreResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(StoreError::io(path, e)),
    }
}

/// Replaces a file's content.
pub(crate) fn overwrite(path: &Path, contents: &str) -> StoreResult<()> {
    fs::write(path, contents).map_err(|e| StoreError::io(path, e))
}

/// Appends to a file, creating it if needed.
pub(crate) fn append(path: &Path, contents: &str) -> StoreResult<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| StoreError::io(path, e))?;
    file.write_all(contents.as_bytes())
        .map_err(|e| StoreError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_optional(&dir.path().join("absent.txt")).unwrap().is_none());
    }

    #[test]
    fn test_append_then_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");

        append(&path, "a\n").unwrap();
        append(&path, "b\n").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("a\nb\n"));

        overwrite(&path, "c\n").unwrap();
        assert_eq!(read_optional(&path).unwrap().as_deref(), Some("c\n"));
    }

    #[test]
    fn test_directory_path_is_persistence_failure() {
        let dir = tempfile::tempdir().unwrap();
        let err = overwrite(dir.path(), "x").unwrap_err();
        assert!(matches!(err, StoreError::PersistenceFailure { .. }));
    }
}
