//! # Food Court Entry Point
//!
//! ## Startup Sequence
//! 1. Parse flags (`--config`, `--data-dir`, `--help`)
//! 2. Load configuration (file, env, flags)
//! 3. Initialize tracing
//! 4. Run the session
//!
//! Anything that escapes the session is fatal: printed to stderr, exit code 1.

use anyhow::Context;
use tracing::{error, info};

use foodcourt_cli::config::{AppConfig, CliArgs, USAGE};

fn main() {
    if let Err(e) = try_main() {
        error!(error = %e, "Fatal error");
        eprintln!("Fatal error: {:#}", e);
        std::process::exit(1);
    }
}

fn try_main() -> anyhow::Result<()> {
    let args = CliArgs::parse(std::env::args().skip(1)).context("Invalid arguments")?;
    if args.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let mut config = AppConfig::load(args.config.clone()).context("Failed to load configuration")?;
    config.apply_args(&args);

    foodcourt_cli::init_tracing(&config.logging.filter);
    info!(data_dir = %config.store.data_dir.display(), "Starting food court");

    foodcourt_cli::run(&config)?;

    info!("Food court session ended");
    Ok(())
}
