//! # Orders
//!
//! One customer's purchase at a single stall visit.
//!
//! ## Order Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Order Lifecycle                                   │
//! │                                                                         │
//! │  1. CREATE                                                             │
//! │     └── Counters::allocate_order_id() → id (persisted immediately)     │
//! │     └── Order::new(id, name, phone, now)                               │
//! │                                                                         │
//! │  2. BUILD (interactive, append-only)                                   │
//! │     └── add_line(item, qty)  qty ≤ 0 → InvalidQuantity, no change      │
//! │     └── the prompt caps qty at 999; files may hold more                │
//! │                                                                         │
//! │  3. COMPLETE                                                           │
//! │     └── Stall::record_order(order) → order is frozen in history        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The total is never stored: [`Order::total`] sums the lines every time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::money::Money;
use crate::record::{Record, RecordReader, RecordWriter};
use crate::validation::validate_quantity;

/// Process-wide order identifier; 1 is the first order ever placed.
pub type OrderId = u64;

// =============================================================================
// Order Line
// =============================================================================

/// An item and how many of it. Quantity is always positive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderLine {
    item: Item,
    quantity: i64,
}

impl OrderLine {
    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.item.price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Order
// =============================================================================

/// A customer order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer_name: String,
    customer_phone: String,
    placed_at: DateTime<Utc>,
    lines: Vec<OrderLine>,
}

impl Order {
    /// Starts an empty order.
    ///
    /// The id must already be allocated (and persisted) by the caller.
    pub fn new(
        id: OrderId,
        customer_name: impl Into<String>,
        customer_phone: impl Into<String>,
        placed_at: DateTime<Utc>,
    ) -> Self {
        Order {
            id,
            customer_name: customer_name.into(),
            customer_phone: customer_phone.into(),
            placed_at,
            lines: Vec::new(),
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn customer_phone(&self) -> &str {
        &self.customer_phone
    }

    pub fn placed_at(&self) -> DateTime<Utc> {
        self.placed_at
    }

    /// Lines in the order they were added.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Appends a line.
    ///
    /// ## Errors
    /// - `InvalidQuantity` if `quantity <= 0`
    /// - `LineTotalOutOfRange` if price × quantity exceeds `Money::MAX_AMOUNT`
    ///
    /// On error the order is left exactly as it was.
    pub fn add_line(&mut self, item: Item, quantity: i64) -> CoreResult<()> {
        validate_quantity(quantity)?;
        if item.price().checked_multiply_quantity(quantity).is_none() {
            return Err(CoreError::LineTotalOutOfRange {
                quantity,
                price: item.price(),
            });
        }
        self.lines.push(OrderLine { item, quantity });
        Ok(())
    }

    /// Sum of price × quantity over all lines.
    pub fn total(&self) -> Money {
        self.lines.iter().map(OrderLine::line_total).sum()
    }
}

// =============================================================================
// Record
// =============================================================================

/// ```text
/// id
/// placed_at (unix seconds)
/// customer name
/// customer phone
/// line count
/// { item record, quantity } × line count
/// ```
impl Record for Order {
    fn write_record(&self, out: &mut RecordWriter) {
        out.field(self.id)
            .field(self.placed_at.timestamp())
            .field(&self.customer_name)
            .field(&self.customer_phone)
            .field(self.lines.len());

        for line in &self.lines {
            line.item.write_record(out);
            out.field(line.quantity);
        }
    }

    fn read_record(reader: &mut RecordReader<'_>) -> CoreResult<Self> {
        let id: OrderId = reader.next_parsed("order id")?;

        let stamp_index = reader.position();
        let seconds: i64 = reader.next_parsed("order timestamp")?;
        let placed_at =
            DateTime::from_timestamp(seconds, 0).ok_or_else(|| CoreError::MalformedRecord {
                field_index: stamp_index,
                reason: format!("timestamp {} out of range", seconds),
            })?;

        let customer_name = reader.next_field()?;
        let customer_phone = reader.next_field()?;
        let mut order = Order::new(id, customer_name, customer_phone, placed_at);

        let line_count: usize = reader.next_parsed("line count")?;
        for _ in 0..line_count {
            let item = Item::read_record(reader)?;

            // The quantity belongs to the line even when the item is unknown.
            let qty_index = reader.position();
            let quantity: i64 = reader.next_parsed("quantity")?;

            if let Some(item) = item {
                order
                    .add_line(item, quantity)
                    .map_err(|e| CoreError::MalformedRecord {
                        field_index: qty_index,
                        reason: e.to_string(),
                    })?;
            }
        }

        Ok(order)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Selection, StallKind};
    use crate::record::{decode, encode};
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 16, 12, 30, 0).unwrap()
    }

    fn item(kind: StallKind, selection: Selection) -> Item {
        kind.build_item(selection).unwrap()
    }

    #[test]
    fn test_pepperoni_large_times_two() {
        let mut order = Order::new(1, "Asha", "9876543210", at());
        let pizza = item(StallKind::Pizza, Selection::pizza(2, 3));
        order.add_line(pizza, 2).unwrap();

        assert_eq!(order.lines()[0].line_total(), Money::from_rupees(1000));
        assert_eq!(order.total(), Money::from_rupees(1000));
    }

    #[test]
    fn test_non_positive_quantity_leaves_order_unchanged() {
        let mut order = Order::new(1, "Asha", "9876543210", at());
        order
            .add_line(item(StallKind::Dosa, Selection::item(1)), 1)
            .unwrap();
        let before = order.clone();

        for qty in [0, -1, -50] {
            let err = order
                .add_line(item(StallKind::Dosa, Selection::item(2)), qty)
                .unwrap_err();
            assert!(matches!(err, CoreError::InvalidQuantity(ref q) if *q == qty.to_string()));
            assert_eq!(order, before);
        }
    }

    #[test]
    fn test_round_trip_every_kind() {
        let mut order = Order::new(42, "Ravi", "+91 99999 00000", at());
        order
            .add_line(item(StallKind::Pizza, Selection::pizza(4, 1)), 1)
            .unwrap();
        order
            .add_line(item(StallKind::Dosa, Selection::item(3)), 2)
            .unwrap();
        order
            .add_line(item(StallKind::Sandwich, Selection::item(1)), 3)
            .unwrap();
        order
            .add_line(item(StallKind::Beverage, Selection::item(4)), 4)
            .unwrap();

        let restored: Order = decode(&encode(&order)).unwrap();
        assert_eq!(restored, order);
        assert_eq!(restored.total(), order.total());
    }

    #[test]
    fn test_unknown_line_dropped_and_stream_stays_aligned() {
        let text = "9\n1760617800\nMeera\n9000000000\n3\n\
                    DOSA\nMasala\n70.00\n2\n\
                    COMBO\nThali\n150.00\n1\n\
                    BEVERAGE\nTea\n15.00\n4\n\
                    TRAILING\n";
        let mut reader = RecordReader::new(text);
        let order = Order::read_record(&mut reader).unwrap();

        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.lines()[0].item().name(), "Masala Dosa");
        assert_eq!(order.lines()[1].item().name(), "Tea");
        assert_eq!(order.lines()[1].quantity(), 4);
        assert_eq!(reader.next_field().unwrap(), "TRAILING");
    }

    #[test]
    fn test_truncated_record_is_malformed() {
        let text = "9\n1760617800\nMeera\n9000000000\n2\nDOSA\nMasala\n70.00\n2\n";
        assert!(matches!(
            decode::<Order>(text),
            Err(CoreError::MalformedRecord { .. })
        ));
    }

    #[test]
    fn test_zero_quantity_in_file_is_malformed() {
        let text = "9\n1760617800\nMeera\n9000000000\n1\nDOSA\nMasala\n70.00\n0\n";
        assert!(matches!(
            decode::<Order>(text),
            Err(CoreError::MalformedRecord { field_index: 8, .. })
        ));
    }

    #[test]
    fn test_quantity_above_prompt_cap_decodes() {
        let text = "9\n1760617800\nMeera\n9000000000\n1\nDOSA\nMasala\n70.00\n1500\n";
        let order: Order = decode(text).unwrap();

        assert_eq!(order.lines()[0].quantity(), 1500);
        assert_eq!(order.total(), Money::from_rupees(105_000));
    }

    #[test]
    fn test_oversized_line_total_is_malformed() {
        let huge_price = "9\n1760617800\nMeera\n9000000000\n1\nDOSA\nMasala\n99999999999.00\n2\n";
        assert!(matches!(
            decode::<Order>(huge_price),
            Err(CoreError::MalformedRecord { field_index: 8, .. })
        ));

        let huge_qty = "9\n1760617800\nMeera\n9000000000\n1\nDOSA\nMasala\n70.00\n9223372036854775807\n";
        assert!(matches!(
            decode::<Order>(huge_qty),
            Err(CoreError::MalformedRecord { field_index: 8, .. })
        ));
    }

    #[test]
    fn test_unknown_line_with_numeric_field_is_skipped_whole() {
        let text = "9\n1760617800\nMeera\n9000000000\n2\n\
                    COMBO\n2\nThali\n150.00\n1\n\
                    DOSA\nMasala\n70.00\n1\n";
        let order: Order = decode(text).unwrap();

        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.lines()[0].item().name(), "Masala Dosa");
        assert_eq!(order.total(), Money::from_rupees(70));
    }

    fn any_item() -> impl Strategy<Value = Item> {
        prop_oneof![
            (1i64..=4, 1i64..=3)
                .prop_map(|(f, s)| item(StallKind::Pizza, Selection::pizza(f, s))),
            (1i64..=4).prop_map(|c| item(StallKind::Dosa, Selection::item(c))),
            (1i64..=4).prop_map(|c| item(StallKind::Sandwich, Selection::item(c))),
            (1i64..=4).prop_map(|c| item(StallKind::Beverage, Selection::item(c))),
        ]
    }

    proptest! {
        #[test]
        fn test_total_is_exact_sum_in_any_order(
            lines in prop::collection::vec((any_item(), 1i64..=999), 0..20)
        ) {
            let expected: i64 = lines
                .iter()
                .map(|(item, qty)| item.price().paise() * qty)
                .sum();

            let mut forward = Order::new(1, "A", "1", at());
            for (item, qty) in lines.iter().cloned() {
                forward.add_line(item, qty).unwrap();
            }

            let mut reversed = Order::new(1, "A", "1", at());
            for (item, qty) in lines.iter().rev().cloned() {
                reversed.add_line(item, qty).unwrap();
            }

            prop_assert_eq!(forward.total().paise(), expected);
            prop_assert_eq!(reversed.total(), forward.total());
        }
    }
}
