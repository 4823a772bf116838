//! # Customer Commands
//!
//! ## Order Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Customer Menu ── 1..4 ──► take_order(stall)                            │
//! │       │                     │                                           │
//! │       │                     ├─ start_order()       id allocated + saved │
//! │       │                     │                                           │
//! │       │                     ├─ loop                                     │
//! │       │                     │    menu, selection, quantity              │
//! │       │                     │    bad input ──► logged, asked again      │
//! │       │                     │    "Add more items? (Y/N)"                │
//! │       │                     │                                           │
//! │       │                     └─ complete_order()    receipt + files      │
//! │       │                                                                 │
//! │       └── 8 ──► "Thank you for visiting!", customer counter saved       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::io::{BufRead, Write};

use chrono::Utc;
use tracing::info;

use foodcourt_core::validation::parse_quantity;
use foodcourt_core::{Customer, Order, Selection, StallKind};

use super::{recover, EXIT_CHOICE};
use crate::error::{AppError, AppResult};
use crate::prompt::Prompter;
use crate::state::FoodCourtManager;

const MENU_CHOICES: &str = "1 to 4, or 8";

/// Runs the customer menu until the customer exits.
pub fn customer_menu<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    manager: &mut FoodCourtManager<'_>,
    customer: &Customer,
) -> AppResult<()> {
    let log = manager.log();

    loop {
        prompter.say("\n======== Customer Menu ========")?;
        for kind in StallKind::ALL {
            prompter.say(format!("{}. {}", kind.number(), kind.menu_label()))?;
        }
        prompter.say(format!("{}. Exit", EXIT_CHOICE))?;

        let choice = prompter.ask_number("Enter your choice: ", MENU_CHOICES);
        let Some(choice) = recover(prompter, log, choice)? else {
            continue;
        };

        if choice == EXIT_CHOICE {
            prompter.say("Thank you for visiting!")?;
            manager.save_customer_counter()?;
            return Ok(());
        }

        let kind = StallKind::from_number(choice)
            .map_err(|_| AppError::invalid_choice(choice.to_string(), MENU_CHOICES));
        let Some(kind) = recover(prompter, log, kind)? else {
            continue;
        };

        let placed = take_order(prompter, manager, kind, customer);
        if recover(prompter, log, placed)?.is_some() {
            prompter.pause()?;
        }
    }
}

/// Builds one order at `kind` and completes it.
///
/// ## Errors
/// `InputClosed` if input ends while the order is open; the order is dropped
/// and its id stays spent.
pub fn take_order<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    manager: &mut FoodCourtManager<'_>,
    kind: StallKind,
    customer: &Customer,
) -> AppResult<()> {
    let log = manager.log();
    let mut order = manager.start_order(&customer.name, &customer.phone, Utc::now())?;

    if let Err(e) = build_order(prompter, manager, kind, &mut order) {
        if matches!(e, AppError::InputClosed) {
            log.record(format!("Order #{} abandoned: input closed", order.id()));
        }
        return Err(e);
    }

    let order_id = order.id();
    let total = order.total();
    let receipt = manager.complete_order(kind, order)?;

    prompter.say(format!("\n{}", receipt))?;
    prompter.say("Order placed successfully!")?;
    log.record(format!(
        "Order #{} placed at {}: {}",
        order_id,
        kind.display_name(),
        total
    ));
    info!(order_id, stall = kind.number(), "Checkout finished");
    Ok(())
}

fn build_order<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    manager: &FoodCourtManager<'_>,
    kind: StallKind,
    order: &mut Order,
) -> AppResult<()> {
    let log = manager.log();

    loop {
        prompter.say(kind.menu_text())?;

        let added = add_item(prompter, kind, order);
        if recover(prompter, log, added)?.is_none() {
            continue;
        }

        if !prompter.confirm("Add more items? (Y/N): ")? {
            return Ok(());
        }
    }
}

/// Reads one selection and quantity and appends the line.
///
/// Menu codes are checked against the stall's tables, so non-numeric text at
/// an item prompt is an `InvalidSelection` and at the quantity prompt an
/// `InvalidQuantity`. On any error the order is unchanged.
fn add_item<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    kind: StallKind,
    order: &mut Order,
) -> AppResult<()> {
    let selection = if kind.requires_size() {
        let label = format!("Select flavor (1-{}): ", kind.primary_menu().len());
        let flavor = kind.parse_primary(&prompter.ask(&label)?)?;

        let label = format!("Select size (1-{}): ", kind.size_menu().len());
        let size = kind.parse_size(&prompter.ask(&label)?)?;
        Selection::pizza(flavor.code, size.code)
    } else {
        Selection::item(kind.parse_primary(&prompter.ask("Enter your choice: ")?)?.code)
    };

    let item = kind.build_item(selection)?;
    let quantity = parse_quantity(&prompter.ask("Enter quantity: ")?)?;
    let name = item.name();
    order.add_line(item, quantity)?;

    prompter.say(format!("Added {} x {}", quantity, name))?;
    Ok(())
}
