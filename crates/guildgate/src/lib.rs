//! # guildgate
//!
//! The unified API for resolving what a guild member may do in a channel.
//!
//! ## Overview
//!
//! guildgate computes effective channel permissions from:
//!
//! - **Roles**: the `@everyone` role's base permissions, plus every role a
//!   member holds (consulted only for the bypass check)
//! - **Role overrides**: per-channel grant/deny pairs keyed by role
//! - **Member overrides**: per-channel grant/deny pairs keyed by member
//!
//! The guild owner and holders of the bypass kind (`MANAGE_ROLES` by
//! default) skip the computation and are allowed everything.
//!
//! ## Key Concepts
//!
//! - **Override**: `(perms & !deny) | grant`. Never an error when absent.
//! - **Folding**: role overrides collapse into one, highest-ranked role last.
//! - **Snapshot**: an immutable read view of a guild or channel. Resolution
//!   never mutates anything, so snapshots can be shared across threads.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use guildgate::{
//!     ChannelId, ChannelSnapshot, GuildId, GuildSnapshot, Permission, PermissionOverride,
//!     PermissionResolver, Permissions, Role, RoleId, UserId,
//! };
//!
//! # fn main() -> guildgate::Result<()> {
//! let everyone = Role::new(RoleId::new(1), "@everyone")
//!     .with_permissions(Permissions::VOICE_CONNECT | Permissions::VOICE_SPEAK);
//! let listener = Role::new(RoleId::new(2), "Listener").with_position(1);
//! let alice = UserId::new(10);
//!
//! let guild = GuildSnapshot::new(GuildId::new(1), UserId::new(9), everyone)
//!     .with_role(listener.clone())
//!     .with_member_roles(alice, [listener.id])?;
//!
//! let stage = ChannelSnapshot::new(ChannelId::new(5), Arc::new(guild))
//!     .with_role_override(listener.id, PermissionOverride::NONE.forbid(Permission::VoiceSpeak))?;
//!
//! let resolver = PermissionResolver::default();
//! assert!(resolver.resolve(alice, &stage, Permission::VoiceConnect));
//! assert!(!resolver.resolve(alice, &stage, Permission::VoiceSpeak));
//! # Ok(())
//! # }
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `guildgate::core` - Permission kinds, bitmasks, overrides, roles, ids
//! - `guildgate::perms` - Collaborator traits, resolver, snapshots

pub mod error;
pub mod logging;

// Re-export component crates
pub use guildgate_core as core;
pub use guildgate_perms as perms;

// Re-export main types for convenience
pub use error::{Error, Result};
pub use logging::init_tracing;

pub use guildgate_core::{
    ChannelId, GuildId, Permission, PermissionOverride, Permissions, Role, RoleId, UserId,
};
pub use guildgate_perms::{
    compute_permissions, ChannelSnapshot, GroupContext, GuildSnapshot, OverrideTable,
    PermissionInputs, PermissionResolver, Resource, ResolverConfig, RoleOrder,
};
