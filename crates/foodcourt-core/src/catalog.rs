//! # Catalog
//!
//! The four stalls, their fixed menus, and the item builder that turns a menu
//! selection into an [`Item`].
//!
//! ## Menus
//! ```text
//! ┌──────┬──────────────────┬────────────────────────────────────────────┐
//! │  #   │ Stall            │ Menu                                       │
//! ├──────┼──────────────────┼────────────────────────────────────────────┤
//! │  1   │ Pizza Palace     │ flavor: 1 Margherita 2 Pepperoni           │
//! │      │                  │         3 Vegetarian 4 Hawaiian            │
//! │      │                  │ size:   1 Small 200  2 Medium 350          │
//! │      │                  │         3 Large 500                        │
//! │  2   │ Dosa Corner      │ 1 Plain 50  2 Masala 70  3 Cheese 90       │
//! │      │                  │ 4 Onion 60                                 │
//! │  3   │ Sandwich Delight │ 1 Veg 60  2 Cheese 80  3 Grilled 100       │
//! │      │                  │ 4 Club 120                                 │
//! │  4   │ Chai Point       │ 1 Tea 15  2 Coffee 20  3 Cold Coffee 40    │
//! │      │                  │ 4 Green Tea 25                             │
//! └──────┴──────────────────┴────────────────────────────────────────────┘
//! ```
//!
//! Pizza is a two-stage selection: the flavor code picks the label, the size
//! code picks both the size label and the price.

use serde::{Deserialize, Serialize};
use std::fmt::Write;

use crate::error::{CoreError, CoreResult};
use crate::item::Item;
use crate::money::Money;

// =============================================================================
// Menu Tables
// =============================================================================

/// One row of a menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub code: i64,
    pub label: &'static str,
    /// Zero for pizza flavors, which carry no price of their own.
    pub price: Money,
}

const fn entry(code: i64, label: &'static str, rupees: i64) -> MenuEntry {
    MenuEntry {
        code,
        label,
        price: Money::from_rupees(rupees),
    }
}

const PIZZA_FLAVORS: &[MenuEntry] = &[
    entry(1, "Margherita", 0),
    entry(2, "Pepperoni", 0),
    entry(3, "Vegetarian", 0),
    entry(4, "Hawaiian", 0),
];

const PIZZA_SIZES: &[MenuEntry] = &[
    entry(1, "Small", 200),
    entry(2, "Medium", 350),
    entry(3, "Large", 500),
];

const DOSA_MENU: &[MenuEntry] = &[
    entry(1, "Plain", 50),
    entry(2, "Masala", 70),
    entry(3, "Cheese", 90),
    entry(4, "Onion", 60),
];

const SANDWICH_MENU: &[MenuEntry] = &[
    entry(1, "Veg", 60),
    entry(2, "Cheese", 80),
    entry(3, "Grilled", 100),
    entry(4, "Club", 120),
];

const BEVERAGE_MENU: &[MenuEntry] = &[
    entry(1, "Tea", 15),
    entry(2, "Coffee", 20),
    entry(3, "Cold Coffee", 40),
    entry(4, "Green Tea", 25),
];

fn invalid_selection(table: &[MenuEntry], field: &'static str, input: String) -> CoreError {
    CoreError::InvalidSelection {
        field,
        input,
        min: table.first().map_or(0, |e| e.code),
        max: table.last().map_or(0, |e| e.code),
    }
}

fn lookup(table: &'static [MenuEntry], field: &'static str, code: i64) -> CoreResult<MenuEntry> {
    table
        .iter()
        .find(|e| e.code == code)
        .copied()
        .ok_or_else(|| invalid_selection(table, field, code.to_string()))
}

/// Like [`lookup`], for raw prompt text. Non-numeric text is a bad selection.
fn lookup_input(table: &'static [MenuEntry], field: &'static str, input: &str) -> CoreResult<MenuEntry> {
    let input = input.trim();
    match input.parse::<i64>() {
        Ok(code) => lookup(table, field, code),
        Err(_) => Err(invalid_selection(table, field, input.to_string())),
    }
}

// =============================================================================
// Stall Kind
// =============================================================================

/// The fixed set of vendors. Each kind has exactly one stall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StallKind {
    Pizza,
    Dosa,
    Sandwich,
    Beverage,
}

impl StallKind {
    /// Every stall, in stall-number order.
    pub const ALL: [StallKind; 4] = [
        StallKind::Pizza,
        StallKind::Dosa,
        StallKind::Sandwich,
        StallKind::Beverage,
    ];

    /// Stall number, 1..=4.
    pub const fn number(&self) -> u8 {
        match self {
            StallKind::Pizza => 1,
            StallKind::Dosa => 2,
            StallKind::Sandwich => 3,
            StallKind::Beverage => 4,
        }
    }

    /// Resolves a stall number typed at the customer menu.
    pub fn from_number(number: i64) -> CoreResult<StallKind> {
        StallKind::ALL
            .into_iter()
            .find(|k| i64::from(k.number()) == number)
            .ok_or_else(|| CoreError::InvalidSelection {
                field: "stall",
                input: number.to_string(),
                min: 1,
                max: StallKind::ALL.len() as i64,
            })
    }

    /// The stall's trading name.
    pub const fn display_name(&self) -> &'static str {
        match self {
            StallKind::Pizza => "Pizza Palace",
            StallKind::Dosa => "Dosa Corner",
            StallKind::Sandwich => "Sandwich Delight",
            StallKind::Beverage => "Chai Point",
        }
    }

    /// Label on the customer menu, e.g. `Pizza Stall`.
    pub const fn menu_label(&self) -> &'static str {
        match self {
            StallKind::Pizza => "Pizza Stall",
            StallKind::Dosa => "Dosa Stall",
            StallKind::Sandwich => "Sandwich Stall",
            StallKind::Beverage => "Beverage Stall",
        }
    }

    /// Whether an item needs a second (size) selection.
    pub const fn requires_size(&self) -> bool {
        matches!(self, StallKind::Pizza)
    }

    /// Primary menu: pizza flavors, or the priced item list.
    pub fn primary_menu(&self) -> &'static [MenuEntry] {
        match self {
            StallKind::Pizza => PIZZA_FLAVORS,
            StallKind::Dosa => DOSA_MENU,
            StallKind::Sandwich => SANDWICH_MENU,
            StallKind::Beverage => BEVERAGE_MENU,
        }
    }

    /// Size menu; empty for stalls without sizes.
    pub fn size_menu(&self) -> &'static [MenuEntry] {
        match self {
            StallKind::Pizza => PIZZA_SIZES,
            _ => &[],
        }
    }

    fn primary_field(&self) -> &'static str {
        match self {
            StallKind::Pizza => "flavor",
            StallKind::Dosa => "dosa",
            StallKind::Sandwich => "sandwich",
            StallKind::Beverage => "beverage",
        }
    }

    /// Checks a primary code without building anything.
    ///
    /// Lets the prompt reject a bad flavor before asking for a size.
    pub fn primary_entry(&self, code: i64) -> CoreResult<MenuEntry> {
        lookup(self.primary_menu(), self.primary_field(), code)
    }

    /// Checks a size code. Only meaningful when [`requires_size`](Self::requires_size).
    pub fn size_entry(&self, code: i64) -> CoreResult<MenuEntry> {
        lookup(self.size_menu(), "size", code)
    }

    /// [`primary_entry`](Self::primary_entry) for text typed at the prompt.
    pub fn parse_primary(&self, input: &str) -> CoreResult<MenuEntry> {
        lookup_input(self.primary_menu(), self.primary_field(), input)
    }

    /// [`size_entry`](Self::size_entry) for text typed at the prompt.
    pub fn parse_size(&self, input: &str) -> CoreResult<MenuEntry> {
        lookup_input(self.size_menu(), "size", input)
    }

    /// Builds the item for a selection.
    ///
    /// ## Pricing
    /// - Pizza: the size entry's price; flavor never affects it
    /// - Others: the primary entry's price
    ///
    /// ## Errors
    /// `InvalidSelection` if any code is outside its table, including a
    /// missing size for pizza.
    pub fn build_item(&self, selection: Selection) -> CoreResult<Item> {
        let primary = self.primary_entry(selection.code)?;
        let variety = primary.label.to_string();

        let item = match self {
            StallKind::Pizza => {
                let size = self.size_entry(selection.size.unwrap_or(0))?;
                Item::Pizza {
                    flavor: variety,
                    size: size.label.to_string(),
                    price: size.price,
                }
            }
            StallKind::Dosa => Item::Dosa {
                variety,
                price: primary.price,
            },
            StallKind::Sandwich => Item::Sandwich {
                variety,
                price: primary.price,
            },
            StallKind::Beverage => Item::Beverage {
                variety,
                price: primary.price,
            },
        };

        Ok(item)
    }

    /// Menu text shown before each selection prompt.
    pub fn menu_text(&self) -> String {
        let mut text = String::new();
        let _ = writeln!(text, "\n===== {} Menu =====", self.display_name());

        match self {
            StallKind::Pizza => {
                let _ = writeln!(text, "Pizza Flavors:");
                for e in PIZZA_FLAVORS {
                    let _ = writeln!(text, "{}. {}", e.code, e.label);
                }
                let _ = writeln!(text, "\nSizes:");
                for e in PIZZA_SIZES {
                    let _ = writeln!(text, "{}. {} - {}", e.code, e.label, e.price);
                }
            }
            _ => {
                for e in self.primary_menu() {
                    let item = self.build_item(Selection::item(e.code));
                    let name = item.map(|i| i.name()).unwrap_or_else(|_| e.label.to_string());
                    let _ = writeln!(text, "{}. {} - {}", e.code, name, e.price);
                }
            }
        }

        text
    }
}

impl std::fmt::Display for StallKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

// =============================================================================
// Selection
// =============================================================================

/// What the customer picked: a primary code and, for pizza, a size code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub code: i64,
    pub size: Option<i64>,
}

impl Selection {
    /// A single-code selection (dosa, sandwich, beverage).
    pub const fn item(code: i64) -> Self {
        Selection { code, size: None }
    }

    /// A pizza selection: flavor code, then size code.
    pub const fn pizza(flavor: i64, size: i64) -> Self {
        Selection {
            code: flavor,
            size: Some(size),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stall_numbers_round_trip() {
        for kind in StallKind::ALL {
            assert_eq!(StallKind::from_number(kind.number().into()).unwrap(), kind);
        }
        assert!(StallKind::from_number(0).is_err());
        assert!(StallKind::from_number(5).is_err());
    }

    #[test]
    fn test_pizza_price_from_size_only() {
        let pepperoni = StallKind::Pizza.build_item(Selection::pizza(2, 3)).unwrap();
        let margherita = StallKind::Pizza.build_item(Selection::pizza(1, 3)).unwrap();

        assert_eq!(pepperoni.name(), "Large Pepperoni Pizza");
        assert_eq!(pepperoni.price(), Money::from_rupees(500));
        assert_eq!(pepperoni.price(), margherita.price());
    }

    #[test]
    fn test_selection_out_of_range() {
        let err = StallKind::Dosa.build_item(Selection::item(99)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidSelection {
                ref input,
                min: 1,
                max: 4,
                ..
            } if input == "99"
        ));
    }

    #[test]
    fn test_non_numeric_selection_is_invalid_selection() {
        let err = StallKind::Dosa.parse_primary("masala").unwrap_err();
        assert_eq!(err.to_string(), "Invalid dosa selection masala (choose 1 to 4)");

        let err = StallKind::Pizza.parse_size(" big ").unwrap_err();
        assert!(matches!(err, CoreError::InvalidSelection { field: "size", ref input, .. } if input == "big"));

        assert_eq!(StallKind::Dosa.parse_primary(" 2 ").unwrap().label, "Masala");
        assert_eq!(StallKind::Pizza.parse_size("3").unwrap().price, Money::from_rupees(500));
    }

    #[test]
    fn test_pizza_without_size_is_invalid() {
        let err = StallKind::Pizza.build_item(Selection::item(1)).unwrap_err();
        assert!(matches!(
            err,
            CoreError::InvalidSelection { field: "size", .. }
        ));
        assert!(StallKind::Pizza.build_item(Selection::pizza(1, 4)).is_err());
        assert!(StallKind::Pizza.build_item(Selection::pizza(5, 1)).is_err());
    }

    #[test]
    fn test_flat_price_tables() {
        let cases = [
            (StallKind::Dosa, 2, "Masala Dosa", 70),
            (StallKind::Sandwich, 4, "Club Sandwich", 120),
            (StallKind::Beverage, 3, "Cold Coffee", 40),
        ];
        for (kind, code, name, rupees) in cases {
            let item = kind.build_item(Selection::item(code)).unwrap();
            assert_eq!(item.name(), name);
            assert_eq!(item.price(), Money::from_rupees(rupees));
        }
    }

    #[test]
    fn test_menu_text_lists_prices() {
        let text = StallKind::Beverage.menu_text();
        assert!(text.contains("Chai Point Menu"));
        assert!(text.contains("3. Cold Coffee - Rs. 40.00"));

        let pizza = StallKind::Pizza.menu_text();
        assert!(pizza.contains("2. Pepperoni"));
        assert!(pizza.contains("3. Large - Rs. 500.00"));
    }
}
