//! # Food Court Manager
//!
//! Owns the live state (counters, stalls, customers) and performs every
//! state change together with the file writes that follow it.
//!
//! ## Order Completion Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  start_order()                                                          │
//! │     1. counters.allocate_order_id()                                     │
//! │     2. save order_counter.txt           ← id is spent even if abandoned │
//! │                                                                         │
//! │  complete_order(kind, order)                                            │
//! │     1. stall.record_order(order)        ← history + overall sales       │
//! │     2. append receipt to all_orders.txt                                 │
//! │     3. rewrite stall_<N>.txt                                            │
//! │     4. save total_sales.txt                                             │
//! │                                                                         │
//! │  Steps 2-4 are separate writes. A failure part way leaves the files     │
//! │  out of step; the next start-up reports it as a sales mismatch.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Local, Utc};
use tracing::{debug, info};

use foodcourt_core::{
    render_receipt, Counters, CustomerProfile, CustomerRegistry, Order, OverallTotals,
    Registration, SalesReport, Stall, StallKind, StallSummary,
};
use foodcourt_store::{EventLog, FoodCourtStore};

use crate::error::AppResult;

pub struct FoodCourtManager<'log> {
    store: FoodCourtStore,
    log: &'log EventLog,
    counters: Counters,
    stalls: Vec<Stall>,
    customers: CustomerRegistry,
}

impl<'log> FoodCourtManager<'log> {
    /// Loads all saved state from the store.
    pub fn load(store: FoodCourtStore, log: &'log EventLog) -> Self {
        let snapshot = store.load_snapshot(log);
        FoodCourtManager {
            store,
            log,
            counters: snapshot.counters,
            stalls: snapshot.stalls,
            customers: snapshot.customers,
        }
    }

    pub fn log(&self) -> &'log EventLog {
        self.log
    }

    pub fn store(&self) -> &FoodCourtStore {
        &self.store
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn customers(&self) -> &CustomerRegistry {
        &self.customers
    }

    pub fn stalls(&self) -> &[Stall] {
        &self.stalls
    }

    pub fn stall(&self, kind: StallKind) -> Option<&Stall> {
        self.stalls.iter().find(|s| s.kind() == kind)
    }

    // -------------------------------------------------------------------------
    // Customers
    // -------------------------------------------------------------------------

    /// Registers a customer login.
    ///
    /// A new phone allocates an id and rewrites the directory, the customer
    /// counter and the profile journal. A known phone changes nothing.
    pub fn register_customer(&mut self, name: &str, phone: &str) -> AppResult<Registration> {
        let registration = self.customers.register(name, phone, &mut self.counters);

        match &registration {
            Registration::New(customer) => {
                self.store.customers().save(&self.customers)?;
                self.store.save_customer_counter(&self.counters)?;
                if let Some(profile) = CustomerProfile::of(customer) {
                    self.store.customers().append_profile(&profile)?;
                }
                self.log.record(format!(
                    "New customer registered: {} ({})",
                    customer.name, customer.phone
                ));
            }
            Registration::Returning(customer) => {
                self.log.record(format!(
                    "Existing customer logged in: {} ({})",
                    customer.name, customer.phone
                ));
            }
        }

        Ok(registration)
    }

    /// Rewrites the customer counter file.
    pub fn save_customer_counter(&self) -> AppResult<()> {
        self.store.save_customer_counter(&self.counters)?;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Orders
    // -------------------------------------------------------------------------

    /// Starts an order with a freshly allocated, already persisted id.
    pub fn start_order(
        &mut self,
        customer_name: &str,
        customer_phone: &str,
        now: DateTime<Utc>,
    ) -> AppResult<Order> {
        let id = self.counters.allocate_order_id();
        self.store.save_order_counter(&self.counters)?;
        debug!(order_id = id, "Order started");
        Ok(Order::new(id, customer_name, customer_phone, now))
    }

    /// Files a finished order with its stall and persists it.
    ///
    /// Returns the rendered receipt.
    pub fn complete_order(&mut self, kind: StallKind, order: Order) -> AppResult<String> {
        let receipt = render_receipt(&order, &Local);
        let order_id = order.id();

        let index = match self.stalls.iter().position(|s| s.kind() == kind) {
            Some(index) => index,
            None => {
                self.stalls.push(Stall::new(kind));
                self.stalls.len() - 1
            }
        };
        let stall = &mut self.stalls[index];
        let total = stall.record_order(order, &mut self.counters);

        self.store.ledger().append_receipt(order_id, &receipt)?;
        self.store.stalls().save(stall)?;
        self.store.save_total_sales(&self.counters)?;

        info!(
            order_id,
            stall = %stall.name(),
            total = %total,
            overall_sales = %self.counters.overall_sales(),
            "Order completed"
        );
        Ok(receipt)
    }

    // -------------------------------------------------------------------------
    // Admin views
    // -------------------------------------------------------------------------

    pub fn stall_summaries(&self) -> Vec<StallSummary> {
        self.stalls.iter().map(Stall::summary).collect()
    }

    pub fn totals(&self) -> OverallTotals {
        OverallTotals::from_counters(&self.counters)
    }

    /// Builds the sales report and overwrites `sales_report.txt`.
    pub fn generate_report(&self, now: DateTime<Utc>) -> AppResult<SalesReport> {
        let report = SalesReport::build(now, &self.counters, &self.stalls);
        self.store.reports().write(&report.render(&Local))?;
        self.log.record("Sales report generated");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodcourt_core::{Money, Selection};
    use foodcourt_store::StoreConfig;

    fn open(dir: &tempfile::TempDir) -> (FoodCourtStore, EventLog) {
        let store = FoodCourtStore::open(StoreConfig::new(dir.path())).unwrap();
        let log = store.event_log();
        (store, log)
    }

    #[test]
    fn test_completed_order_updates_every_file() {
        let dir = tempfile::tempdir().unwrap();
        let (store, log) = open(&dir);
        let mut manager = FoodCourtManager::load(store, &log);

        let mut order = manager.start_order("Asha", "100", Utc::now()).unwrap();
        let pizza = StallKind::Pizza.build_item(Selection::pizza(2, 3)).unwrap();
        order.add_line(pizza, 2).unwrap();
        let receipt = manager.complete_order(StallKind::Pizza, order).unwrap();

        assert!(receipt.contains("Order #1"));
        assert_eq!(manager.counters().overall_sales(), Money::from_rupees(1000));

        let config = manager.store().config().clone();
        assert_eq!(std::fs::read_to_string(config.order_counter_path()).unwrap(), "1");
        assert_eq!(
            std::fs::read_to_string(config.total_sales_path()).unwrap(),
            "1000.00"
        );
        assert!(std::fs::read_to_string(config.ledger_path())
            .unwrap()
            .contains("Large Pepperoni Pizza"));
        assert!(config.stall_path(StallKind::Pizza).exists());
    }

    #[test]
    fn test_unwritable_order_counter_is_recoverable() {
        let dir = tempfile::tempdir().unwrap();
        let (store, log) = open(&dir);
        std::fs::create_dir(store.config().order_counter_path()).unwrap();
        let mut manager = FoodCourtManager::load(store, &log);

        let err = manager.start_order("Asha", "100", Utc::now()).unwrap_err();
        assert!(err.is_recoverable());
        assert!(err.to_string().starts_with("Cannot access"));
    }

    #[test]
    fn test_register_customer_persists_new_only() {
        let dir = tempfile::tempdir().unwrap();
        let (store, log) = open(&dir);
        let mut manager = FoodCourtManager::load(store, &log);

        assert!(manager.register_customer("Asha", "100").unwrap().is_new());
        assert!(!manager.register_customer("Asha", "100").unwrap().is_new());
        assert_eq!(manager.counters().total_customers(), 1);

        let config = manager.store().config().clone();
        assert_eq!(
            std::fs::read_to_string(config.customers_path()).unwrap(),
            "100\nAsha\n"
        );
        assert_eq!(
            std::fs::read_to_string(config.customer_journal_path()).unwrap(),
            "Asha\n100\n1\n"
        );
        let logged = std::fs::read_to_string(log.path()).unwrap();
        assert!(logged.contains("New customer registered: Asha (100)"));
        assert!(logged.contains("Existing customer logged in: Asha (100)"));
    }

    #[test]
    fn test_report_written() {
        let dir = tempfile::tempdir().unwrap();
        let (store, log) = open(&dir);
        let manager = FoodCourtManager::load(store, &log);

        let report = manager.generate_report(Utc::now()).unwrap();
        assert_eq!(report.stalls.len(), 4);
        let text = std::fs::read_to_string(manager.store().config().report_path()).unwrap();
        assert!(text.contains("GRAND TOTAL: Rs. 0.00"));
    }
}
