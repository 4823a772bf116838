//! # Event Log
//!
//! The durable, human-readable log: `food_court_log.txt`.
//!
//! ```text
//! [Fri Oct 16 12:30:00 2026] New customer registered: Asha (9876543210)
//! [Fri Oct 16 12:31:12 2026] Invalid dosa selection 99 (choose 1 to 4)
//! ```
//!
//! Every message is also emitted through `tracing` under the
//! `foodcourt::event` target. A failed append is reported through `tracing`
//! and otherwise ignored, so logging never interrupts a customer.

use chrono::{DateTime, Local};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use foodcourt_core::receipt::TIMESTAMP_FORMAT;

use crate::repository::append;

/// Append-only event log, created once by the application and passed by
/// reference to whatever needs to record events.
#[derive(Debug, Clone)]
pub struct EventLog {
    path: PathBuf,
}

impl EventLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        EventLog { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends `[timestamp] message`.
    pub fn record(&self, message: impl AsRef<str>) {
        self.record_at(Local::now(), message.as_ref());
    }

    fn record_at(&self, at: DateTime<Local>, message: &str) {
        info!(target: "foodcourt::event", "{}", message);

        let line = format!("[{}] {}\n", at.format(TIMESTAMP_FORMAT), message);
        if let Err(e) = append(&self.path, &line) {
            warn!(error = %e, "Event log append failed");
        }
    }
}
