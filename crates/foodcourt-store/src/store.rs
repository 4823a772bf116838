//! # Food Court Store
//!
//! The handle the application opens once at start-up.
//!
//! ## Start-up Load
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FoodCourtStore::open(config)      ← creates the data dir if asked     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  load_snapshot(&log)                                                   │
//! │       ├── order_counter.txt      ┐                                     │
//! │       ├── customer_counter.txt   ├─ absent or corrupt → stays zero      │
//! │       ├── total_sales.txt        ┘                                     │
//! │       ├── stall_1..4.txt         ── absent or corrupt → empty stall     │
//! │       │                             corrupt → copied to *.corrupt first │
//! │       ├── customers.txt + customer_data.txt                            │
//! │       └── reconcile overall sales with Σ stall totals                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Snapshot { counters, stalls, customers, reconciliation }              │
//! │  (owned by the manager from here on)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The store holds no domain state. Callers own the counters and stalls and
//! ask the store to persist them after each change.

use std::fs;
use tracing::{info, warn};

use foodcourt_core::{
    Counters, CustomerRegistry, Money, SalesReconciliation, Stall, StallKind,
};

use crate::error::{StoreError, StoreResult};
use crate::event_log::EventLog;
use crate::layout::StoreConfig;
use crate::repository::{
    CounterFile, CustomerRepository, LedgerRepository, ReportRepository, StallRepository,
};

/// Everything loaded at start-up.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub counters: Counters,
    /// One per [`StallKind`], in stall-number order.
    pub stalls: Vec<Stall>,
    pub customers: CustomerRegistry,
    pub reconciliation: SalesReconciliation,
}

/// Main store handle providing repository access.
#[derive(Debug, Clone)]
pub struct FoodCourtStore {
    config: StoreConfig,
    order_counter: CounterFile<u64>,
    customer_counter: CounterFile<u64>,
    total_sales: CounterFile<Money>,
}

impl FoodCourtStore {
    /// Opens the data directory.
    ///
    /// ## Errors
    /// `PersistenceFailure` if the directory cannot be created, or is missing
    /// while `create_dir` is off.
    pub fn open(config: StoreConfig) -> StoreResult<Self> {
        info!(data_dir = %config.data_dir.display(), "Opening food court store");

        if config.create_dir {
            fs::create_dir_all(&config.data_dir).map_err(|e| StoreError::io(&config.data_dir, e))?;
        } else if !config.data_dir.is_dir() {
            return Err(StoreError::io(
                &config.data_dir,
                std::io::Error::new(std::io::ErrorKind::NotFound, "data directory not found"),
            ));
        }

        Ok(FoodCourtStore {
            order_counter: CounterFile::new(config.order_counter_path()),
            customer_counter: CounterFile::new(config.customer_counter_path()),
            total_sales: CounterFile::new(config.total_sales_path()),
            config,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    // -------------------------------------------------------------------------
    // Repositories
    // -------------------------------------------------------------------------

    pub fn order_counter(&self) -> &CounterFile<u64> {
        &self.order_counter
    }

    pub fn customer_counter(&self) -> &CounterFile<u64> {
        &self.customer_counter
    }

    pub fn total_sales(&self) -> &CounterFile<Money> {
        &self.total_sales
    }

    pub fn customers(&self) -> CustomerRepository {
        CustomerRepository::new(
            self.config.customers_path(),
            self.config.customer_journal_path(),
        )
    }

    pub fn stalls(&self) -> StallRepository {
        StallRepository::new(self.config.clone())
    }

    pub fn ledger(&self) -> LedgerRepository {
        LedgerRepository::new(self.config.ledger_path())
    }

    pub fn reports(&self) -> ReportRepository {
        ReportRepository::new(self.config.report_path())
    }

    /// The event log for this data directory.
    pub fn event_log(&self) -> EventLog {
        EventLog::new(self.config.event_log_path())
    }

    // -------------------------------------------------------------------------
    // Counter persistence
    // -------------------------------------------------------------------------

    pub fn save_order_counter(&self, counters: &Counters) -> StoreResult<()> {
        self.order_counter.save(counters.total_orders())
    }

    pub fn save_customer_counter(&self, counters: &Counters) -> StoreResult<()> {
        self.customer_counter.save(counters.total_customers())
    }

    pub fn save_total_sales(&self, counters: &Counters) -> StoreResult<()> {
        self.total_sales.save(counters.overall_sales())
    }

    // -------------------------------------------------------------------------
    // Start-up load
    // -------------------------------------------------------------------------

    /// Loads every file, best effort.
    ///
    /// A file that cannot be read or decoded is reported to `log` and treated
    /// as absent; this never fails. A stall file that does not decode is
    /// copied to `stall_<N>.txt.corrupt` before its stall starts over empty.
    pub fn load_snapshot(&self, log: &EventLog) -> Snapshot {
        let mut counters = Counters::new();
        if let Some(v) = best_effort(log, self.order_counter.load()).flatten() {
            counters.restore_last_order_id(v);
        }
        if let Some(v) = best_effort(log, self.customer_counter.load()).flatten() {
            counters.restore_customer_count(v);
        }
        if let Some(v) = best_effort(log, self.total_sales.load()).flatten() {
            counters.restore_overall_sales(v);
        }

        let repo = self.stalls();
        let stalls: Vec<Stall> = StallKind::ALL
            .into_iter()
            .map(|kind| match repo.load(kind) {
                Ok(stall) => stall.unwrap_or_else(|| Stall::new(kind)),
                Err(e) => {
                    report_unreadable(log, &e);
                    if matches!(e, StoreError::CorruptRecord { .. }) {
                        keep_corrupt_copy(log, &repo, kind);
                    }
                    Stall::new(kind)
                }
            })
            .collect();

        let customers = best_effort(log, self.customers().load()).unwrap_or_default();

        let reconciliation = SalesReconciliation::compute(&counters, &stalls);
        if !reconciliation.is_consistent() {
            warn!(
                persisted = %reconciliation.persisted,
                derived = %reconciliation.derived,
                "Overall sales do not match stall histories"
            );
            log.record(format!(
                "Sales mismatch: total_sales.txt has {}, stall files sum to {}",
                reconciliation.persisted, reconciliation.derived
            ));
        }

        info!(
            orders = counters.total_orders(),
            customers = counters.total_customers(),
            overall_sales = %counters.overall_sales(),
            "Food court state loaded"
        );

        Snapshot {
            counters,
            stalls,
            customers,
            reconciliation,
        }
    }
}

fn best_effort<T>(log: &EventLog, result: StoreResult<T>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            report_unreadable(log, &e);
            None
        }
    }
}

fn report_unreadable(log: &EventLog, e: &StoreError) {
    warn!(path = %e.path().display(), error = %e, "Ignoring unreadable file");
    log.record(format!("Ignoring unreadable file: {}", e));
}

fn keep_corrupt_copy(log: &EventLog, repo: &StallRepository, kind: StallKind) {
    match repo.preserve_corrupt(kind) {
        Ok(copy) => {
            warn!(stall = kind.number(), copy = %copy.display(), "Kept copy of corrupt stall file");
            log.record(format!("Kept corrupt stall file as {}", copy.display()));
        }
        Err(e) => {
            warn!(stall = kind.number(), error = %e, "Could not keep copy of corrupt stall file");
            log.record(format!("Could not keep corrupt stall file: {}", e));
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
