//! # App Error Type
//!
//! What the menu loops see when something goes wrong.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Food Court                         │
//! │                                                                         │
//! │  Prompt loop                                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Command returns AppResult<T>                                           │
//! │       │                                                                 │
//! │       ├── is_recoverable() ─► EventLog::record(msg), prompt again       │
//! │       │     InvalidSelection / InvalidQuantity / QuantityTooLarge       │
//! │       │     Validation / InvalidChoice                                  │
//! │       │     PersistenceFailure / AuthenticationFailure                  │
//! │       │                                                                 │
//! │       ├── InputClosed ──────► session ends, exit code 0                 │
//! │       │                                                                 │
//! │       └── anything else ────► main(): "Fatal error: ...", exit code 1   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use foodcourt_core::CoreError;
use foodcourt_store::StoreError;
use thiserror::Error;

/// Application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// Domain rule violation (bad selection, bad quantity, bad name).
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A data file could not be read or written.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Admin credentials did not match.
    #[error("Authentication failed! Invalid credentials.")]
    AuthenticationFailure,

    /// Menu input that is not one of the offered options.
    ///
    /// ## When This Occurs
    /// - `9` on the customer menu
    /// - `abc` where a number is expected
    #[error("Invalid choice '{input}'. Please choose one of {expected}")]
    InvalidChoice { input: String, expected: String },

    /// Standard input reached end of file.
    #[error("Input closed")]
    InputClosed,

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing to the terminal failed.
    #[error("Console I/O failed: {0}")]
    Console(#[from] std::io::Error),
}

impl AppError {
    pub fn invalid_choice(input: impl Into<String>, expected: impl Into<String>) -> Self {
        AppError::InvalidChoice {
            input: input.into(),
            expected: expected.into(),
        }
    }

    /// Whether the enclosing prompt should log this and ask again.
    pub fn is_recoverable(&self) -> bool {
        match self {
            AppError::Core(e) => e.is_input_error(),
            AppError::Store(StoreError::PersistenceFailure { .. }) => true,
            AppError::AuthenticationFailure | AppError::InvalidChoice { .. } => true,
            _ => false,
        }
    }
}

/// Result type for app operations.
pub type AppResult<T> = Result<T, AppError>;
