//! Test fixtures and helpers.
//!
//! A [`TestFixture`] collects roles, members, and overrides mutably, then
//! produces the immutable snapshots the resolver reads.

use std::sync::Arc;

use guildgate_core::{
    ChannelId, GuildId, PermissionOverride, Permissions, Role, RoleId, UserId,
};
use guildgate_perms::{ChannelSnapshot, GuildSnapshot, Result};

/// A guild and a single channel under construction.
pub struct TestFixture {
    pub guild_id: GuildId,
    pub channel_id: ChannelId,
    pub owner: UserId,
    pub everyone: Role,
    roles: Vec<Role>,
    members: Vec<(UserId, Vec<RoleId>)>,
    role_overrides: Vec<(RoleId, PermissionOverride)>,
    member_overrides: Vec<(UserId, PermissionOverride)>,
    next_id: u64,
}

impl TestFixture {
    /// Create a fixture with random snowflakes and the given `@everyone` permissions.
    pub fn new(everyone: Permissions) -> Self {
        // Leave headroom so sequential ids never overflow
        Self::with_base_id(rand::random::<u64>() >> 8, everyone)
    }

    /// Create a fixture with deterministic ids starting at `base`.
    ///
    /// The guild, its `@everyone` role, and the channel share `base`; the
    /// owner is `base + 1`.
    pub fn with_base_id(base: u64, everyone: Permissions) -> Self {
        Self {
            guild_id: GuildId::new(base),
            channel_id: ChannelId::new(base),
            owner: UserId::new(base + 1),
            everyone: Role::new(RoleId::new(base), "@everyone").with_permissions(everyone),
            roles: Vec::new(),
            members: Vec::new(),
            role_overrides: Vec::new(),
            member_overrides: Vec::new(),
            next_id: base + 2,
        }
    }

    fn allocate(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Define a role and return its id.
    pub fn add_role(&mut self, name: &str, permissions: Permissions, position: i32) -> RoleId {
        let id = RoleId::new(self.allocate());
        self.roles.push(
            Role::new(id, name)
                .with_permissions(permissions)
                .with_position(position),
        );
        id
    }

    /// Register a member holding `roles`, in the given order.
    pub fn add_member(&mut self, roles: &[RoleId]) -> UserId {
        let id = UserId::new(self.allocate());
        self.members.push((id, roles.to_vec()));
        id
    }

    /// Set the channel override for a role, `@everyone` included.
    pub fn override_role(&mut self, role: RoleId, ovr: PermissionOverride) {
        self.role_overrides.push((role, ovr));
    }

    /// Set the channel override for a member.
    pub fn override_member(&mut self, member: UserId, ovr: PermissionOverride) {
        self.member_overrides.push((member, ovr));
    }

    /// Build the guild snapshot.
    pub fn guild(&self) -> Result<GuildSnapshot> {
        let guild = self
            .roles
            .iter()
            .cloned()
            .fold(
                GuildSnapshot::new(self.guild_id, self.owner, self.everyone.clone()),
                GuildSnapshot::with_role,
            );

        self.members
            .iter()
            .try_fold(guild, |guild, (member, roles)| {
                guild.with_member_roles(*member, roles.iter().copied())
            })
    }

    /// Build the channel snapshot together with its guild.
    pub fn channel(&self) -> Result<ChannelSnapshot> {
        let channel = ChannelSnapshot::new(self.channel_id, Arc::new(self.guild()?));

        let channel = self
            .role_overrides
            .iter()
            .try_fold(channel, |channel, (role, ovr)| {
                channel.with_role_override(*role, *ovr)
            })?;

        Ok(self
            .member_overrides
            .iter()
            .fold(channel, |channel, (member, ovr)| {
                channel.with_member_override(*member, *ovr)
            }))
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new(Permissions::empty())
    }
}
