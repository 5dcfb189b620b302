//! Error types for the permissions module.

use guildgate_core::{GuildId, RoleId};
use thiserror::Error;

/// Errors that can occur while preparing permission inputs.
///
/// Resolution itself never fails; these come from building snapshots and
/// configuration.
#[derive(Debug, Error)]
pub enum PermsError {
    /// A role was referenced that the guild does not define.
    #[error("role {role} is not part of guild {guild}")]
    UnknownRole { guild: GuildId, role: RoleId },

    /// Core error.
    #[error("core error: {0}")]
    Core(#[from] guildgate_core::CoreError),
}

/// Result type for permission operations.
pub type Result<T> = std::result::Result<T, PermsError>;
