//! # Stalls
//!
//! A stall's identity and its history of completed orders.
//!
//! ## Two Sales Figures
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Stall::total_sales()         Counters::overall_sales()                 │
//! │  ─────────────────────        ─────────────────────────                 │
//! │  Σ this stall's orders        one number for ALL stalls                 │
//! │  derived from history         incremented per completed order           │
//! │  saved in stall_<N>.txt       saved in total_sales.txt                  │
//! │                                                                         │
//! │  Both are bumped by record_order(); they live in different files.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;

use crate::catalog::StallKind;
use crate::counters::Counters;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::order::Order;
use crate::record::{Record, RecordReader, RecordWriter};

/// A vendor and the orders it has fulfilled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stall {
    kind: StallKind,
    name: String,
    orders: Vec<Order>,
}

impl Stall {
    /// A stall with no history, named after its kind.
    pub fn new(kind: StallKind) -> Self {
        Stall {
            kind,
            name: kind.display_name().to_string(),
            orders: Vec::new(),
        }
    }

    pub fn kind(&self) -> StallKind {
        self.kind
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> u8 {
        self.kind.number()
    }

    /// Completed orders, oldest first.
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    /// Σ `total()` over this stall's orders.
    pub fn total_sales(&self) -> Money {
        self.orders.iter().map(Order::total).sum()
    }

    /// Appends a finished order and adds its total to the shared counter.
    ///
    /// Returns the order's total. Persisting the stall file and the sales
    /// counter is the caller's job.
    pub fn record_order(&mut self, order: Order, counters: &mut Counters) -> Money {
        let total = order.total();
        self.orders.push(order);
        counters.record_sale(total);
        total
    }

    /// Read-only snapshot for admin views.
    pub fn summary(&self) -> StallSummary {
        StallSummary {
            name: self.name.clone(),
            number: self.number(),
            order_count: self.order_count(),
            total_sales: self.total_sales(),
        }
    }
}

/// ```text
/// stall name
/// stall number
/// order count
/// { order record } × order count
/// ```
impl Record for Stall {
    fn write_record(&self, out: &mut RecordWriter) {
        out.field(&self.name)
            .field(self.number())
            .field(self.orders.len());
        for order in &self.orders {
            order.write_record(out);
        }
    }

    fn read_record(reader: &mut RecordReader<'_>) -> CoreResult<Self> {
        let name = reader.next_field()?.to_string();

        let number_index = reader.position();
        let number: i64 = reader.next_parsed("stall number")?;
        let kind = StallKind::from_number(number).map_err(|_| CoreError::MalformedRecord {
            field_index: number_index,
            reason: format!("unknown stall number {}", number),
        })?;

        let count: usize = reader.next_parsed("order count")?;
        let mut orders = Vec::with_capacity(count.min(1024));
        for _ in 0..count {
            orders.push(Order::read_record(reader)?);
        }

        Ok(Stall { kind, name, orders })
    }
}

/// What the admin "stall information" view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StallSummary {
    pub name: String,
    pub number: u8,
    pub order_count: usize,
    pub total_sales: Money,
}

impl std::fmt::Display for StallSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Stall Name: {}", self.name)?;
        writeln!(f, "Stall Number: {}", self.number)?;
        writeln!(f, "Total Orders: {}", self.order_count)?;
        write!(f, "Total Sales: {}", self.total_sales)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
