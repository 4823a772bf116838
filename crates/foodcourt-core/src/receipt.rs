//! # Receipts and Reports
//!
//! Text rendering for everything a person reads: the order receipt (console
//! and ledger), the admin totals view, and the sales report file.
//!
//! Rendering takes a time zone instead of reading the clock or the local
//! zone, so the output is deterministic under test.

use chrono::{DateTime, TimeZone, Utc};
use serde::Serialize;
use std::fmt::{Display, Write};

use crate::counters::{Counters, SalesReconciliation};
use crate::money::Money;
use crate::order::Order;
use crate::stall::{Stall, StallSummary};

/// `Fri Oct 16 12:30:00 2026`
pub const TIMESTAMP_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

const RULE: &str = "---------------------------------";
const CLOSE: &str = "=================================";
const REPORT_RULE: &str = "============================================";
const REPORT_DIVIDER: &str = "--------------------------------------------";

/// Formats a UTC instant in the given zone using [`TIMESTAMP_FORMAT`].
pub fn format_timestamp<Tz>(at: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    at.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string()
}

// =============================================================================
// Order Receipt
// =============================================================================

/// Renders the order block shown after checkout and appended to the ledger.
///
/// ```text
/// ========= Order #7 =========
/// Customer: Asha
/// Phone: 9876543210
/// Order Time: Fri Oct 16 12:30:00 2026
/// ---------------------------------
/// Large Pepperoni Pizza     x 2   = Rs. 1000.00
/// ---------------------------------
///                         Total: Rs. 1000.00
/// =================================
/// ```
pub fn render_receipt<Tz>(order: &Order, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let mut out = String::new();
    let _ = writeln!(out, "========= Order #{} =========", order.id());
    let _ = writeln!(out, "Customer: {}", order.customer_name());
    let _ = writeln!(out, "Phone: {}", order.customer_phone());
    let _ = writeln!(
        out,
        "Order Time: {}",
        format_timestamp(order.placed_at(), tz)
    );
    let _ = writeln!(out, "{}", RULE);

    for line in order.lines() {
        let _ = writeln!(
            out,
            "{:<25} x {:<3} = {}",
            line.item().name(),
            line.quantity(),
            line.line_total()
        );
    }

    let _ = writeln!(out, "{}", RULE);
    let _ = writeln!(
        out,
        "{:>35}{}",
        "Total: Rs. ",
        order.total().to_amount_string()
    );
    let _ = writeln!(out, "{}", CLOSE);
    out
}

// =============================================================================
// Totals View
// =============================================================================

/// The admin "view total sales" figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct OverallTotals {
    pub overall_sales: Money,
    pub total_customers: u64,
    pub total_orders: u64,
}

impl OverallTotals {
    pub fn from_counters(counters: &Counters) -> Self {
        OverallTotals {
            overall_sales: counters.overall_sales(),
            total_customers: counters.total_customers(),
            total_orders: counters.total_orders(),
        }
    }
}

impl Display for OverallTotals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Total Sales across all stalls: {}", self.overall_sales)?;
        writeln!(f, "Total Customers: {}", self.total_customers)?;
        write!(f, "Total Orders: {}", self.total_orders)
    }
}

// =============================================================================
// Sales Report
// =============================================================================

/// Snapshot written to `sales_report.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesReport {
    pub generated_at: DateTime<Utc>,
    pub stalls: Vec<StallSummary>,
    pub totals: OverallTotals,
    pub reconciliation: SalesReconciliation,
}

impl SalesReport {
    pub fn build(generated_at: DateTime<Utc>, counters: &Counters, stalls: &[Stall]) -> Self {
        SalesReport {
            generated_at,
            stalls: stalls.iter().map(Stall::summary).collect(),
            totals: OverallTotals::from_counters(counters),
            reconciliation: SalesReconciliation::compute(counters, stalls),
        }
    }

    /// Renders the report body.
    ///
    /// The grand total is the persisted counter. When it disagrees with the
    /// stall histories, a reconciliation line shows the derived figure too.
    pub fn render<Tz>(&self, tz: &Tz) -> String
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "Sales Report - {}\n",
            format_timestamp(self.generated_at, tz)
        );
        let _ = writeln!(out, "{}", REPORT_RULE);

        for stall in &self.stalls {
            let _ = writeln!(out, "Stall: {}", stall.name);
            let _ = writeln!(out, "Total Sales: {}", stall.total_sales);
            let _ = writeln!(out, "{}", REPORT_DIVIDER);
        }

        let _ = writeln!(out, "\nGRAND TOTAL: {}", self.totals.overall_sales);
        if !self.reconciliation.is_consistent() {
            let _ = writeln!(
                out,
                "Reconciliation: stall histories sum to {} (difference {})",
                self.reconciliation.derived,
                self.reconciliation.drift()
            );
        }
        let _ = writeln!(out, "Total Customers: {}", self.totals.total_customers);
        let _ = writeln!(out, "Total Orders: {}", self.totals.total_orders);
        let _ = writeln!(out, "{}", REPORT_RULE);
        out
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
