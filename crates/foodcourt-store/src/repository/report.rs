//! # Report Repository
//!
//! `sales_report.txt`, replaced on every generation.

use std::path::{Path, PathBuf};
use tracing::info;

use super::overwrite;
use crate::error::StoreResult;

#[derive(Debug, Clone)]
pub struct ReportRepository {
    path: PathBuf,
}

impl ReportRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ReportRepository { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn write(&self, report: &str) -> StoreResult<()> {
        overwrite(&self.path, report)?;
        info!(path = %self.path.display(), "Sales report written");
        Ok(())
    }
}
