//! # Commands Module
//!
//! The two menus a logged-in user can reach.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (shared error handling)
//! ├── customer.rs  ◄─── Stall choice, order building, checkout
//! └── admin.rs     ◄─── Stall info, totals, sales report
//! ```
//!
//! ## Error Handling in Menus
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  action returns AppResult<T>                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  recover(prompter, log, result)                                        │
//! │       ├── Ok(v)                 → Ok(Some(v))                          │
//! │       ├── Err(recoverable)      → print + EventLog, Ok(None)           │
//! │       └── Err(other)            → Err(other), menu returns             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod admin;
pub mod customer;

use std::io::{BufRead, Write};

use tracing::debug;

use foodcourt_store::EventLog;

use crate::error::AppResult;
use crate::prompt::Prompter;

/// Option number that leaves either menu.
pub const EXIT_CHOICE: i64 = 8;

/// Turns a recoverable error into `Ok(None)` after reporting it.
pub(crate) fn recover<T, R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    log: &EventLog,
    result: AppResult<T>,
) -> AppResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.is_recoverable() => {
            debug!(error = %e, "Recoverable error, prompting again");
            log.record(e.to_string());
            prompter.say(format!("Error: {}", e))?;
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
