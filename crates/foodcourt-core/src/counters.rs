//! # Counters
//!
//! The three durable scalars: last order id, customer count, overall sales.
//!
//! ## Ownership
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  FoodCourtManager (owns)                                                │
//! │     └── Counters ──── &mut ───► Stall::record_order  (overall sales)    │
//! │             │                                                           │
//! │             ├──────── &mut ───► store.allocate_order_id                 │
//! │             └──────── &mut ───► store.register_customer                 │
//! │                                                                         │
//! │  Nothing here touches a file. The store saves a counter right after    │
//! │  every mutation; this type only does the arithmetic.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::money::Money;
use crate::order::OrderId;
use crate::stall::Stall;

/// Process-wide customer identifier; 1 is the first customer ever registered.
pub type CustomerId = u64;

/// Running counters shared by every stall.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counters {
    last_order_id: OrderId,
    customer_count: u64,
    overall_sales: Money,
}

impl Counters {
    /// Fresh counters, as on a first run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances and returns the next order id.
    pub fn allocate_order_id(&mut self) -> OrderId {
        self.last_order_id += 1;
        self.last_order_id
    }

    /// Advances and returns the next customer id.
    pub fn allocate_customer_id(&mut self) -> CustomerId {
        self.customer_count += 1;
        self.customer_count
    }

    /// Adds a completed order's total to the shared sales figure.
    pub fn record_sale(&mut self, amount: Money) {
        self.overall_sales += amount;
    }

    /// Orders ever created (the last allocated id).
    pub fn total_orders(&self) -> u64 {
        self.last_order_id
    }

    /// Customers ever registered.
    pub fn total_customers(&self) -> u64 {
        self.customer_count
    }

    /// Shared sales total as persisted in `total_sales.txt`.
    pub fn overall_sales(&self) -> Money {
        self.overall_sales
    }

    // -------------------------------------------------------------------------
    // Restore (used by the store when loading files)
    // -------------------------------------------------------------------------

    pub fn restore_last_order_id(&mut self, value: OrderId) {
        self.last_order_id = value;
    }

    pub fn restore_customer_count(&mut self, value: u64) {
        self.customer_count = value;
    }

    pub fn restore_overall_sales(&mut self, value: Money) {
        self.overall_sales = value;
    }
}

// =============================================================================
// Reconciliation
// =============================================================================

/// Persisted overall sales compared with what the stall histories add up to.
///
/// The two are written by separate file operations, so a crash between them
/// leaves them different. This type makes that visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesReconciliation {
    /// From `total_sales.txt`.
    pub persisted: Money,
    /// Σ `Stall::total_sales()` over all stalls.
    pub derived: Money,
}

impl SalesReconciliation {
    pub fn compute(counters: &Counters, stalls: &[Stall]) -> Self {
        SalesReconciliation {
            persisted: counters.overall_sales(),
            derived: stalls.iter().map(Stall::total_sales).sum(),
        }
    }

    pub fn is_consistent(&self) -> bool {
        self.persisted == self.derived
    }

    /// persisted − derived; positive means the counter is ahead.
    pub fn drift(&self) -> Money {
        self.persisted - self.derived
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
