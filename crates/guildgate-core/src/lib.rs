//! # guildgate Core
//!
//! Pure primitives for channel permission resolution: permission kinds,
//! permission bitmasks, grant/deny overrides, and roles.
//!
//! This crate contains no I/O and no shared state. Every type is a plain
//! value that can be copied or cloned into a resolution call.
//!
//! ## Key Types
//!
//! - [`Permission`] - One permission kind with a stable bit offset
//! - [`Permissions`] - A 64-bit set of permission kinds
//! - [`PermissionOverride`] - A grant/deny pair layered over a bitmask
//! - [`Role`] - A guild role and its base permissions
//! - [`UserId`], [`RoleId`], [`GuildId`], [`ChannelId`] - Snowflake identifiers
//!
//! ## Override Algebra
//!
//! ```rust
//! use guildgate_core::{Permission, PermissionOverride, Permissions};
//!
//! let base = Permissions::MESSAGE_READ | Permissions::MESSAGE_WRITE;
//! let muted = PermissionOverride::NONE.forbid(Permission::MessageWrite);
//! let readonly = muted.apply(base);
//!
//! assert!(readonly.has(Permission::MessageRead));
//! assert!(!readonly.has(Permission::MessageWrite));
//! ```

pub mod error;
pub mod overrides;
pub mod permission;
pub mod role;
pub mod types;

pub use error::{CoreError, Result};
pub use overrides::PermissionOverride;
pub use permission::{Permission, Permissions};
pub use role::Role;
pub use types::{ChannelId, GuildId, RoleId, UserId};
