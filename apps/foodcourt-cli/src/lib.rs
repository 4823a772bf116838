//! # Food Court Terminal
//!
//! The interactive point-of-sale session: login, then the customer or admin
//! menu, over stdin/stdout.
//!
//! ## Module Organization
//! ```text
//! foodcourt_cli/
//! ├── lib.rs          ◄─── You are here (tracing setup, session loop)
//! ├── main.rs         ◄─── Binary entry, flags, fatal error reporting
//! ├── config.rs       ◄─── AppConfig (TOML + env + flags), CliArgs
//! ├── auth.rs         ◄─── Role menu, admin and customer login
//! ├── prompt.rs       ◄─── Prompter over any BufRead + Write
//! ├── state/
//! │   ├── mod.rs      ◄─── State exports
//! │   └── manager.rs  ◄─── FoodCourtManager (owns counters, stalls)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Shared recoverable-error handling
//! │   ├── customer.rs ◄─── Customer menu, order taking
//! │   └── admin.rs    ◄─── Stall info, totals, sales report
//! └── error.rs        ◄─── AppError
//! ```
//!
//! ## Session
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. Open the store, load counters, stalls and customers                 │
//! │  2. Login menu, repeated until a login succeeds                         │
//! │  3. Admin menu or customer menu, until option 8                         │
//! │                                                                         │
//! │  End of input at any prompt ends the session normally.                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod prompt;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::info;
use tracing_subscriber::EnvFilter;

use foodcourt_store::{FoodCourtStore, StoreConfig};

use auth::Role;
use commands::recover;
use config::AppConfig;
use error::{AppError, AppResult};
use prompt::Prompter;
use state::FoodCourtManager;

/// Initializes the tracing subscriber.
///
/// `RUST_LOG` wins over `default_filter`. Output goes to stderr so it stays
/// apart from the prompts on stdout.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Runs one session against the terminal.
pub fn run(config: &AppConfig) -> AppResult<()> {
    let store = FoodCourtStore::open(StoreConfig::new(config.store.data_dir.clone()))?;
    let log = store.event_log();
    let mut manager = FoodCourtManager::load(store, &log);

    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    run_session(&mut prompter, config, &mut manager)
}

/// Login followed by the role's menu.
///
/// Failed logins are reported and the login menu is shown again.
pub fn run_session<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    config: &AppConfig,
    manager: &mut FoodCourtManager<'_>,
) -> AppResult<()> {
    let log = manager.log();
    prompter.say("Welcome to the Food Court!")?;

    let role = loop {
        let attempt = auth::authenticate(prompter, &config.admin, manager);
        match recover(prompter, log, attempt) {
            Ok(Some(role)) => break role,
            Ok(None) => continue,
            Err(AppError::InputClosed) => return Ok(()),
            Err(e) => return Err(e),
        }
    };

    let outcome = match role {
        Role::Admin => commands::admin::admin_menu(prompter, manager),
        Role::Customer(customer) => commands::customer::customer_menu(prompter, manager, &customer),
    };

    match outcome {
        Err(AppError::InputClosed) => {
            info!("Input closed, ending session");
            Ok(())
        }
        other => other,
    }
}
