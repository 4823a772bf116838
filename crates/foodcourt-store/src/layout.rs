//! # Data Directory Layout
//!
//! Where each file lives.
//!
//! ```text
//! <data_dir>/
//! ├── customers.txt          phone, name pairs
//! ├── customer_data.txt      name, phone, id per registration (append)
//! ├── customer_counter.txt   scalar
//! ├── order_counter.txt      scalar
//! ├── total_sales.txt        scalar amount
//! ├── stall_1.txt .. stall_4.txt
//! ├── all_orders.txt         receipt ledger (append, never read)
//! ├── sales_report.txt       overwritten per report
//! └── food_court_log.txt     event log (append)
//! ```

use std::path::{Path, PathBuf};

use foodcourt_core::StallKind;

pub const CUSTOMERS_FILE: &str = "customers.txt";
pub const CUSTOMER_JOURNAL_FILE: &str = "customer_data.txt";
pub const CUSTOMER_COUNTER_FILE: &str = "customer_counter.txt";
pub const ORDER_COUNTER_FILE: &str = "order_counter.txt";
pub const TOTAL_SALES_FILE: &str = "total_sales.txt";
pub const LEDGER_FILE: &str = "all_orders.txt";
pub const REPORT_FILE: &str = "sales_report.txt";
pub const EVENT_LOG_FILE: &str = "food_court_log.txt";

/// Store configuration.
///
/// ## Example
/// ```rust,ignore
/// let config = StoreConfig::new("./data").create_dir(true);
/// let store = FoodCourtStore::open(config)?;
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Directory holding every data file.
    /// Default: the current directory.
    pub data_dir: PathBuf,

    /// Whether `open` creates a missing data directory.
    /// Default: true
    pub create_dir: bool,
}

impl StoreConfig {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        StoreConfig {
            data_dir: data_dir.into(),
            create_dir: true,
        }
    }

    /// Sets whether a missing data directory is created on open.
    pub fn create_dir(mut self, create: bool) -> Self {
        self.create_dir = create;
        self
    }

    fn file(&self, name: &str) -> PathBuf {
        self.data_dir.join(name)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn customers_path(&self) -> PathBuf {
        self.file(CUSTOMERS_FILE)
    }

    pub fn customer_journal_path(&self) -> PathBuf {
        self.file(CUSTOMER_JOURNAL_FILE)
    }

    pub fn customer_counter_path(&self) -> PathBuf {
        self.file(CUSTOMER_COUNTER_FILE)
    }

    pub fn order_counter_path(&self) -> PathBuf {
        self.file(ORDER_COUNTER_FILE)
    }

    pub fn total_sales_path(&self) -> PathBuf {
        self.file(TOTAL_SALES_FILE)
    }

    /// `stall_<N>.txt`, N being the stall number.
    pub fn stall_path(&self, kind: StallKind) -> PathBuf {
        self.file(&format!("stall_{}.txt", kind.number()))
    }

    /// `stall_<N>.txt.corrupt`: where an undecodable stall file is copied
    /// before the stall starts over empty.
    pub fn corrupt_stall_path(&self, kind: StallKind) -> PathBuf {
        self.file(&format!("stall_{}.txt.corrupt", kind.number()))
    }

    pub fn ledger_path(&self) -> PathBuf {
        self.file(LEDGER_FILE)
    }

    pub fn report_path(&self) -> PathBuf {
        self.file(REPORT_FILE)
    }

    pub fn event_log_path(&self) -> PathBuf {
        self.file(EVENT_LOG_FILE)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new(".")
    }
}
