//! Error types for guildgate.

use guildgate_core::CoreError;
use guildgate_perms::PermsError;
use thiserror::Error;

/// Errors that can occur while preparing permission checks.
#[derive(Debug, Error)]
pub enum Error {
    /// Core parsing error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Permission input error.
    #[error("permission error: {0}")]
    Permission(#[from] PermsError),

    /// Logging could not be initialized.
    #[error("logging setup failed: {0}")]
    Logging(String),
}

/// Result type for guildgate operations.
pub type Result<T> = std::result::Result<T, Error>;
