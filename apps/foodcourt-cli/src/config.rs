//! # Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command line (highest priority)                                    │
//! │     --data-dir ./data                                                  │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     FOODCOURT_DATA_DIR, FOODCOURT_ADMIN_USER,                          │
//! │     FOODCOURT_ADMIN_PASSWORD, FOODCOURT_LOG                            │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <path>, else FOODCOURT_CONFIG, else                       │
//! │     ~/.config/foodcourt/foodcourt.toml (Linux)                         │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     data in the current directory, admin / admin@12345                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! [store]
//! data_dir = "/var/lib/foodcourt"
//!
//! [admin]
//! username = "admin"
//! password = "admin@12345"
//!
//! [logging]
//! filter = "info,foodcourt=debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

pub const CONFIG_FILE_NAME: &str = "foodcourt.toml";
pub const DEFAULT_LOG_FILTER: &str = "info,foodcourt=debug";

// =============================================================================
// Sections
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Directory holding every data file.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for StoreSettings {
    fn default() -> Self {
        StoreSettings {
            data_dir: default_data_dir(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminSettings {
    #[serde(default = "default_admin_username")]
    pub username: String,

    #[serde(default = "default_admin_password")]
    pub password: String,
}

fn default_admin_username() -> String {
    "admin".to_string()
}

fn default_admin_password() -> String {
    "admin@12345".to_string()
}

impl Default for AdminSettings {
    fn default() -> Self {
        AdminSettings {
            username: default_admin_username(),
            password: default_admin_password(),
        }
    }
}

impl AdminSettings {
    pub fn matches(&self, username: &str, password: &str) -> bool {
        self.username == username && self.password == password
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive; `RUST_LOG` wins over it.
    #[serde(default = "default_log_filter")]
    pub filter: String,
}

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_log_filter(),
        }
    }
}

// =============================================================================
// App Config
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub store: StoreSettings,

    #[serde(default)]
    pub admin: AdminSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl AppConfig {
    /// Loads configuration: defaults, then file, then env, then validation.
    ///
    /// An explicit `config_path` that does not exist is an error; a missing
    /// default config file is not.
    pub fn load(config_path: Option<PathBuf>) -> AppResult<Self> {
        let explicit = config_path
            .or_else(|| std::env::var_os("FOODCOURT_CONFIG").map(PathBuf::from));

        let mut config = match explicit {
            Some(path) => Self::from_file(&path)?,
            None => match Self::default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                Some(path) => {
                    debug!(?path, "Config file not found, using defaults");
                    Self::default()
                }
                None => Self::default(),
            },
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Parses a TOML file. Missing sections and keys take their defaults.
    pub fn from_file(path: &std::path::Path) -> AppResult<Self> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> AppResult<Self> {
        toml::from_str(contents).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Rejects configurations the app cannot run with.
    pub fn validate(&self) -> AppResult<()> {
        if self.admin.username.trim().is_empty() {
            return Err(AppError::Config("admin username must not be empty".into()));
        }
        if self.admin.password.is_empty() {
            return Err(AppError::Config("admin password must not be empty".into()));
        }
        if self.store.data_dir.as_os_str().is_empty() {
            return Err(AppError::Config("data_dir must not be empty".into()));
        }
        Ok(())
    }

    /// Applies command line overrides (highest priority).
    pub fn apply_args(&mut self, args: &CliArgs) {
        if let Some(dir) = &args.data_dir {
            self.store.data_dir = dir.clone();
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Some(dir) = std::env::var_os("FOODCOURT_DATA_DIR") {
            debug!(data_dir = ?dir, "Overriding data dir from environment");
            self.store.data_dir = PathBuf::from(dir);
        }

        if let Ok(user) = std::env::var("FOODCOURT_ADMIN_USER") {
            self.admin.username = user;
        }

        if let Ok(password) = std::env::var("FOODCOURT_ADMIN_PASSWORD") {
            self.admin.password = password;
        }

        if let Ok(filter) = std::env::var("FOODCOURT_LOG") {
            self.logging.filter = filter;
        }
    }

    /// Platform config location, e.g. `~/.config/foodcourt/foodcourt.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "foodcourt", "foodcourt")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}

// =============================================================================
// Command Line
// =============================================================================

/// Parsed command line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub data_dir: Option<PathBuf>,
    pub help: bool,
}

pub const USAGE: &str = "\
Usage: foodcourt [OPTIONS]

Options:
  --config <PATH>     Config file (default: platform config dir/foodcourt.toml)
  --data-dir <PATH>   Directory for data files (default: current directory)
  -h, --help          Print this help
";

impl CliArgs {
    /// Parses flags, excluding the program name.
    pub fn parse<I>(args: I) -> AppResult<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut parsed = CliArgs::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    parsed.config = Some(PathBuf::from(Self::value(&mut args, "--config")?));
                }
                "--data-dir" => {
                    parsed.data_dir = Some(PathBuf::from(Self::value(&mut args, "--data-dir")?));
                }
                "-h" | "--help" => parsed.help = true,
                other => {
                    return Err(AppError::Config(format!("unknown argument '{}'", other)));
                }
            }
        }

        Ok(parsed)
    }

    fn value(args: &mut impl Iterator<Item = String>, flag: &str) -> AppResult<String> {
        args.next()
            .ok_or_else(|| AppError::Config(format!("{} requires a value", flag)))
    }
}
