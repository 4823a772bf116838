//! # Admin Commands
//!
//! Read-only views over the live state, plus report generation.

use std::io::{BufRead, Write};

use chrono::Utc;

use super::{recover, EXIT_CHOICE};
use crate::error::{AppError, AppResult};
use crate::prompt::Prompter;
use crate::state::FoodCourtManager;

const MENU_CHOICES: &str = "5 to 8";

/// Admin menu options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAction {
    StallInfo,
    TotalSales,
    SalesReport,
    Exit,
}

impl AdminAction {
    pub fn from_choice(choice: i64) -> AppResult<Self> {
        match choice {
            5 => Ok(AdminAction::StallInfo),
            6 => Ok(AdminAction::TotalSales),
            7 => Ok(AdminAction::SalesReport),
            EXIT_CHOICE => Ok(AdminAction::Exit),
            other => Err(AppError::invalid_choice(other.to_string(), MENU_CHOICES)),
        }
    }
}

/// Runs the admin menu until logout.
pub fn admin_menu<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    manager: &FoodCourtManager<'_>,
) -> AppResult<()> {
    let log = manager.log();

    loop {
        prompter.say("\n======== Admin Menu ========")?;
        prompter.say("5. View Stall Information")?;
        prompter.say("6. View Total Sales")?;
        prompter.say("7. Generate Sales Report")?;
        prompter.say(format!("{}. Exit", EXIT_CHOICE))?;

        let action = prompter
            .ask_number("Enter your choice: ", MENU_CHOICES)
            .and_then(AdminAction::from_choice);
        let Some(action) = recover(prompter, log, action)? else {
            continue;
        };

        let done = match action {
            AdminAction::StallInfo => show_stall_info(prompter, manager),
            AdminAction::TotalSales => show_totals(prompter, manager),
            AdminAction::SalesReport => generate_report(prompter, manager),
            AdminAction::Exit => {
                prompter.say("Logging out...")?;
                return Ok(());
            }
        };
        if recover(prompter, log, done)?.is_some() {
            prompter.pause()?;
        }
    }
}

fn show_stall_info<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    manager: &FoodCourtManager<'_>,
) -> AppResult<()> {
    for summary in manager.stall_summaries() {
        prompter.say(format!("\n{}", summary))?;
    }
    Ok(())
}

fn show_totals<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    manager: &FoodCourtManager<'_>,
) -> AppResult<()> {
    prompter.say(format!("\n{}", manager.totals()))
}

fn generate_report<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    manager: &FoodCourtManager<'_>,
) -> AppResult<()> {
    manager.generate_report(Utc::now())?;
    prompter.say("Sales report generated successfully!")
}
