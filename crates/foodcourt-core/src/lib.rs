//! # foodcourt-core: Pure Domain Logic for the Food Court POS
//!
//! Menus, items, orders, stalls and counters, with no I/O of any kind.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Food Court POS Architecture                        │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 foodcourt-cli (terminal app)                    │   │
//! │  │    Auth ──► Customer Menu ──► Take Order ──► Receipt            │   │
//! │  │         └─► Admin Menu ──► Stall Info / Totals / Report         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ foodcourt-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐ ┌──────────┐ ┌──────────┐ ┌──────────────────┐  │   │
//! │  │   │ catalog  │ │  order   │ │  stall   │ │ record / receipt │  │   │
//! │  │   │  Item    │ │  Order   │ │  Stall   │ │  text codec      │  │   │
//! │  │   │ StallKind│ │ OrderLine│ │ Counters │ │  report render   │  │   │
//! │  │   └──────────┘ └──────────┘ └──────────┘ └──────────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO FILES • NO CLOCK • PURE FUNCTIONS                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              foodcourt-store (flat-file persistence)            │   │
//! │  │        counters, customers, stall files, ledger, event log      │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money in paise (no floating point)
//! - [`item`] - The four item kinds as one enum
//! - [`catalog`] - Stall kinds, menus, item builder
//! - [`order`] - Orders and order lines
//! - [`stall`] - Stall history and per-stall sales
//! - [`counters`] - Order/customer ids and overall sales
//! - [`customer`] - Customer registry and profile journal
//! - [`record`] - Line-oriented record codec for data files
//! - [`receipt`] - Receipt, totals and report rendering
//! - [`validation`] - Input checks for names, phones, quantities
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::Utc;
//! use foodcourt_core::{Counters, Order, Selection, StallKind, Money};
//!
//! let mut counters = Counters::new();
//! let id = counters.allocate_order_id();
//! let mut order = Order::new(id, "Asha", "9876543210", Utc::now());
//!
//! // Pepperoni (flavor 2), Large (size 3)
//! let pizza = StallKind::Pizza.build_item(Selection::pizza(2, 3)).unwrap();
//! order.add_line(pizza, 2).unwrap();
//!
//! assert_eq!(order.total(), Money::from_rupees(1000));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod counters;
pub mod customer;
pub mod error;
pub mod item;
pub mod money;
pub mod order;
pub mod receipt;
pub mod record;
pub mod stall;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{MenuEntry, Selection, StallKind};
pub use counters::{Counters, CustomerId, SalesReconciliation};
pub use customer::{Customer, CustomerProfile, CustomerRegistry, Registration};
pub use error::{CoreError, CoreResult, ValidationError};
pub use item::{Item, ItemKind};
pub use money::Money;
pub use order::{Order, OrderId, OrderLine};
pub use receipt::{render_receipt, OverallTotals, SalesReport};
pub use record::{Record, RecordReader, RecordWriter};
pub use stall::{Stall, StallSummary};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum quantity of a single order line.
///
/// Catches a mistyped quantity (1000 instead of 10) before it is priced.
pub const MAX_ITEM_QUANTITY: i64 = 999;
