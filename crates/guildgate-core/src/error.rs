//! Error types for guildgate Core.

use thiserror::Error;

/// Errors raised while parsing core values from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    #[error("unknown permission: {0}")]
    UnknownPermission(String),

    #[error("invalid snowflake id: {0}")]
    InvalidId(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
