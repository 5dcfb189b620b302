//! Immutable guild and channel snapshots.
//!
//! Snapshots are the read views a host hands to the resolver. They are built
//! once with consuming builder methods and never mutated afterwards; to
//! change a guild, build a new snapshot and swap the `Arc`.

use std::collections::HashMap;
use std::sync::Arc;

use guildgate_core::{ChannelId, GuildId, PermissionOverride, Role, RoleId, UserId};

use crate::context::{GroupContext, Resource};
use crate::error::{PermsError, Result};

/// A read view of one guild's roles and memberships.
#[derive(Debug, Clone)]
pub struct GuildSnapshot {
    id: GuildId,
    owner_id: UserId,
    public_role: Role,
    /// Roles other than `@everyone`, indexed by id.
    roles: HashMap<RoleId, Role>,
    /// Index: member -> held roles.
    members: HashMap<UserId, Vec<RoleId>>,
}

impl GuildSnapshot {
    /// Create a snapshot with an owner and an `@everyone` role.
    pub fn new(id: GuildId, owner_id: UserId, public_role: Role) -> Self {
        Self {
            id,
            owner_id,
            public_role,
            roles: HashMap::new(),
            members: HashMap::new(),
        }
    }

    /// Add or replace a role. A role with the `@everyone` id replaces it.
    #[must_use]
    pub fn with_role(mut self, role: Role) -> Self {
        if role.id == self.public_role.id {
            self.public_role = role;
        } else {
            self.roles.insert(role.id, role);
        }
        self
    }

    /// Set the roles a member holds.
    ///
    /// Fails if any role is not defined in this guild.
    pub fn with_member_roles<I>(mut self, member: UserId, roles: I) -> Result<Self>
    where
        I: IntoIterator<Item = RoleId>,
    {
        let roles: Vec<RoleId> = roles.into_iter().collect();
        for role in &roles {
            self.check_role(*role)?;
        }
        self.members.insert(member, roles);
        Ok(self)
    }

    /// The guild id.
    pub fn id(&self) -> GuildId {
        self.id
    }

    /// Look up a role by id, including `@everyone`.
    pub fn role(&self, id: RoleId) -> Option<&Role> {
        if id == self.public_role.id {
            Some(&self.public_role)
        } else {
            self.roles.get(&id)
        }
    }

    /// Whether `user` has been registered as a member.
    pub fn is_member(&self, user: UserId) -> bool {
        self.members.contains_key(&user)
    }

    fn check_role(&self, role: RoleId) -> Result<()> {
        if self.role(role).is_some() {
            Ok(())
        } else {
            Err(PermsError::UnknownRole {
                guild: self.id,
                role,
            })
        }
    }
}

impl GroupContext for GuildSnapshot {
    fn owner_id(&self) -> UserId {
        self.owner_id
    }

    fn public_role(&self) -> &Role {
        &self.public_role
    }

    fn roles_of(&self, subject: UserId) -> Vec<&Role> {
        self.members
            .get(&subject)
            .map(|ids| ids.iter().filter_map(|id| self.role(*id)).collect())
            .unwrap_or_default()
    }
}

/// A read view of one channel's overrides, bound to its guild.
#[derive(Debug, Clone)]
pub struct ChannelSnapshot {
    id: ChannelId,
    guild: Arc<GuildSnapshot>,
    role_overrides: HashMap<RoleId, PermissionOverride>,
    member_overrides: HashMap<UserId, PermissionOverride>,
}

impl ChannelSnapshot {
    /// Create a channel with no overrides.
    pub fn new(id: ChannelId, guild: Arc<GuildSnapshot>) -> Self {
        Self {
            id,
            guild,
            role_overrides: HashMap::new(),
            member_overrides: HashMap::new(),
        }
    }

    /// Set the override for a role. Fails if the guild does not define it.
    pub fn with_role_override(mut self, role: RoleId, ovr: PermissionOverride) -> Result<Self> {
        self.guild.check_role(role)?;
        self.role_overrides.insert(role, ovr);
        Ok(self)
    }

    /// Set the override for a member.
    #[must_use]
    pub fn with_member_override(mut self, member: UserId, ovr: PermissionOverride) -> Self {
        self.member_overrides.insert(member, ovr);
        self
    }

    /// The channel id.
    pub fn id(&self) -> ChannelId {
        self.id
    }

    /// The guild this channel belongs to.
    pub fn guild(&self) -> &Arc<GuildSnapshot> {
        &self.guild
    }
}

impl Resource for ChannelSnapshot {
    type Group = GuildSnapshot;
    type RoleOverrides = HashMap<RoleId, PermissionOverride>;
    type SubjectOverrides = HashMap<UserId, PermissionOverride>;

    fn group(&self) -> &GuildSnapshot {
        &self.guild
    }

    fn role_overrides(&self) -> &Self::RoleOverrides {
        &self.role_overrides
    }

    fn subject_overrides(&self) -> &Self::SubjectOverrides {
        &self.member_overrides
    }
}
