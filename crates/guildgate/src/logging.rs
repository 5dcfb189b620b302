//! Logging setup.
//!
//! The library crates only emit `tracing` events. Binaries and test harnesses
//! that want to see them install a subscriber once, at startup.

use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "guildgate=info,guildgate_perms=info";

/// Install a formatting subscriber filtered by `RUST_LOG`.
///
/// Resolution decisions are logged at `debug`, per-stage bits at `trace`:
/// `RUST_LOG=guildgate_perms=trace` shows the full computation.
///
/// Fails if a global subscriber is already installed.
pub fn init_tracing() -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))?;

    tracing::debug!("tracing initialized");
    Ok(())
}
