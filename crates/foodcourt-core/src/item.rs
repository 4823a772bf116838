//! # Items
//!
//! The four kinds of purchasable product, modelled as one sum type.
//!
//! ## Record Layout
//! ```text
//! ┌──────────────┬───────────────────────────────────────────┐
//! │ Kind         │ Fields (one per line)                     │
//! ├──────────────┼───────────────────────────────────────────┤
//! │ Pizza        │ PIZZA, flavor, size, price                │
//! │ Dosa         │ DOSA, variety, price                      │
//! │ Sandwich     │ SANDWICH, variety, price                  │
//! │ Beverage     │ BEVERAGE, variety, price                  │
//! └──────────────┴───────────────────────────────────────────┘
//! ```
//!
//! An unrecognized tag is not an error: [`Item::read_record`] returns
//! `Ok(None)` after consuming the unknown record, so the caller can skip the
//! line and keep reading.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::CoreResult;
use crate::money::Money;
use crate::record::{RecordReader, RecordWriter};

// =============================================================================
// Item Kind
// =============================================================================

/// Discriminator for [`Item`], with its record tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    Pizza,
    Dosa,
    Sandwich,
    Beverage,
}

impl ItemKind {
    /// The tag written as the first field of an item record.
    pub const fn tag(&self) -> &'static str {
        match self {
            ItemKind::Pizza => "PIZZA",
            ItemKind::Dosa => "DOSA",
            ItemKind::Sandwich => "SANDWICH",
            ItemKind::Beverage => "BEVERAGE",
        }
    }

    /// Looks up a kind by record tag. Tags are exact and case-sensitive.
    pub fn from_tag(tag: &str) -> Option<ItemKind> {
        match tag.trim() {
            "PIZZA" => Some(ItemKind::Pizza),
            "DOSA" => Some(ItemKind::Dosa),
            "SANDWICH" => Some(ItemKind::Sandwich),
            "BEVERAGE" => Some(ItemKind::Beverage),
            _ => None,
        }
    }
}

// =============================================================================
// Item
// =============================================================================

/// An immutable purchasable product.
///
/// Equality is structural: two Large Pepperoni pizzas at Rs. 500 are the same
/// item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Item {
    /// Priced by size only; the flavor is cosmetic.
    Pizza {
        flavor: String,
        size: String,
        price: Money,
    },
    Dosa { variety: String, price: Money },
    Sandwich { variety: String, price: Money },
    Beverage { variety: String, price: Money },
}

impl Item {
    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Pizza { .. } => ItemKind::Pizza,
            Item::Dosa { .. } => ItemKind::Dosa,
            Item::Sandwich { .. } => ItemKind::Sandwich,
            Item::Beverage { .. } => ItemKind::Beverage,
        }
    }

    /// Display name, e.g. `Large Pepperoni Pizza`, `Masala Dosa`, `Cold Coffee`.
    pub fn name(&self) -> String {
        match self {
            Item::Pizza { flavor, size, .. } => format!("{} {} Pizza", size, flavor),
            Item::Dosa { variety, .. } => format!("{} Dosa", variety),
            Item::Sandwich { variety, .. } => format!("{} Sandwich", variety),
            Item::Beverage { variety, .. } => variety.clone(),
        }
    }

    /// Unit price.
    pub fn price(&self) -> Money {
        match self {
            Item::Pizza { price, .. }
            | Item::Dosa { price, .. }
            | Item::Sandwich { price, .. }
            | Item::Beverage { price, .. } => *price,
        }
    }

    /// Writes the tagged item record, price last.
    pub fn write_record(&self, out: &mut RecordWriter) {
        out.field(self.kind().tag());
        match self {
            Item::Pizza { flavor, size, .. } => {
                out.field(flavor).field(size);
            }
            Item::Dosa { variety, .. }
            | Item::Sandwich { variety, .. }
            | Item::Beverage { variety, .. } => {
                out.field(variety);
            }
        }
        out.amount(self.price());
    }

    /// Reads one item record.
    ///
    /// ## Returns
    /// - `Ok(Some(item))` for a known tag
    /// - `Ok(None)` for an unknown tag, after skipping its fields up to the quantity
    /// - `Err(MalformedRecord)` if the input ends or a known record is damaged
    pub fn read_record(reader: &mut RecordReader<'_>) -> CoreResult<Option<Item>> {
        let tag = reader.next_field()?;

        let kind = match ItemKind::from_tag(tag) {
            Some(kind) => kind,
            None => {
                reader.skip_item_fields()?;
                return Ok(None);
            }
        };

        let item = match kind {
            ItemKind::Pizza => {
                let flavor = reader.next_field()?.to_string();
                let size = reader.next_field()?.to_string();
                let price = reader.next_amount("pizza price")?;
                Item::Pizza {
                    flavor,
                    size,
                    price,
                }
            }
            ItemKind::Dosa => {
                let variety = reader.next_field()?.to_string();
                let price = reader.next_amount("dosa price")?;
                Item::Dosa { variety, price }
            }
            ItemKind::Sandwich => {
                let variety = reader.next_field()?.to_string();
                let price = reader.next_amount("sandwich price")?;
                Item::Sandwich { variety, price }
            }
            ItemKind::Beverage => {
                let variety = reader.next_field()?.to_string();
                let price = reader.next_amount("beverage price")?;
                Item::Beverage { variety, price }
            }
        };

        Ok(Some(item))
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.price())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
