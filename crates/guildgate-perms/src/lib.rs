//! # guildgate Permissions
//!
//! Resolution of effective channel permissions for a guild member.
//!
//! ## Overview
//!
//! A member's permissions in a channel are computed in layers:
//!
//! 1. **Bypass**: the guild owner, and holders of a bypass kind (by default
//!    `MANAGE_ROLES`), are allowed everything
//! 2. **Baseline**: the `@everyone` role's permissions
//! 3. **Public override**: the channel's override for `@everyone`
//! 4. **Role overrides**: the channel's overrides for the member's roles,
//!    folded in hierarchy order and applied as one
//! 5. **Member override**: the channel's override for the member, applied last
//!
//! The computation itself is the pure function [`compute_permissions`].
//! [`PermissionResolver`] gathers its inputs from collaborators that
//! implement [`GroupContext`] and [`Resource`].
//!
//! ## Snapshots
//!
//! [`GuildSnapshot`] and [`ChannelSnapshot`] are immutable read views that
//! implement the collaborator traits. They are `Send + Sync`; share them
//! behind an `Arc` and build a new snapshot to change anything.
//!
//! ## Usage
//!
//! ```rust
//! use std::sync::Arc;
//! use guildgate_core::{ChannelId, GuildId, Permission, PermissionOverride, Permissions, Role, RoleId, UserId};
//! use guildgate_perms::{ChannelSnapshot, GuildSnapshot, PermissionResolver};
//!
//! let everyone = Role::new(RoleId::new(1), "@everyone")
//!     .with_permissions(Permissions::MESSAGE_READ | Permissions::MESSAGE_WRITE);
//! let muted = Role::new(RoleId::new(2), "Muted").with_position(1);
//! let user = UserId::new(100);
//!
//! let guild = GuildSnapshot::new(GuildId::new(1), UserId::new(99), everyone)
//!     .with_role(muted.clone())
//!     .with_member_roles(user, [muted.id])
//!     .unwrap();
//!
//! let channel = ChannelSnapshot::new(ChannelId::new(10), Arc::new(guild))
//!     .with_role_override(muted.id, PermissionOverride::NONE.forbid(Permission::MessageWrite))
//!     .unwrap();
//!
//! let resolver = PermissionResolver::default();
//! assert!(resolver.resolve(user, &channel, Permission::MessageRead));
//! assert!(!resolver.resolve(user, &channel, Permission::MessageWrite));
//! ```

pub mod compute;
pub mod config;
pub mod context;
pub mod error;
pub mod resolver;
pub mod snapshot;

pub use compute::{compute_permissions, is_bypassed, PermissionInputs};
pub use config::{ResolverConfig, RoleOrder};
pub use context::{GroupContext, OverrideTable, Resource};
pub use error::{PermsError, Result};
pub use resolver::PermissionResolver;
pub use snapshot::{ChannelSnapshot, GuildSnapshot};
