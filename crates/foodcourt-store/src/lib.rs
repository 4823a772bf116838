//! # foodcourt-store: Flat-File Persistence for the Food Court POS
//!
//! Reads and writes the plain-text data files. Decoding and encoding of the
//! records themselves lives in `foodcourt-core`; this crate adds paths, I/O
//! and error context.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Food Court Data Flow                               │
//! │                                                                         │
//! │  FoodCourtManager::complete_order                                      │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  foodcourt-store (THIS CRATE)                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │ FoodCourtStore│    │  Repositories │    │   EventLog   │  │   │
//! │  │   │  (store.rs)   │    │               │    │              │  │   │
//! │  │   │               │    │ CounterFile   │    │ [time] msg   │  │   │
//! │  │   │ StoreConfig   │◄───│ StallRepo     │    │              │  │   │
//! │  │   │ load_snapshot │    │ CustomerRepo  │    │              │  │   │
//! │  │   │               │    │ Ledger/Report │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Data directory (text files)                  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - Store handle and start-up load
//! - [`layout`] - File names and paths
//! - [`repository`] - One repository per file family
//! - [`event_log`] - Timestamped durable log
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use foodcourt_store::{FoodCourtStore, StoreConfig};
//!
//! let store = FoodCourtStore::open(StoreConfig::new("./data"))?;
//! let log = store.event_log();
//! let snapshot = store.load_snapshot(&log);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod event_log;
pub mod layout;
pub mod repository;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{StoreError, StoreResult};
pub use event_log::EventLog;
pub use layout::StoreConfig;
pub use store::{FoodCourtStore, Snapshot};

pub use repository::{
    CounterFile, CustomerRepository, LedgerRepository, ReportRepository, StallRepository,
};
