//! Collaborator traits.
//!
//! The resolver reads guild and channel data through these traits and never
//! owns it. Implementations must present a consistent view for the duration
//! of one resolution call.

use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use guildgate_core::{PermissionOverride, Role, RoleId, UserId};

/// Guild-level data a resolution reads.
pub trait GroupContext {
    /// The guild owner.
    fn owner_id(&self) -> UserId;

    /// The `@everyone` role every member implicitly holds.
    fn public_role(&self) -> &Role;

    /// Roles held by `subject`, in no particular order.
    ///
    /// Members without roles, and users unknown to the guild, hold none.
    fn roles_of(&self, subject: UserId) -> Vec<&Role>;
}

/// Keyed lookup of channel overrides.
pub trait OverrideTable<K> {
    /// The override for `key`, or `None` when there is none.
    fn lookup(&self, key: &K) -> Option<PermissionOverride>;
}

impl<K, S> OverrideTable<K> for HashMap<K, PermissionOverride, S>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn lookup(&self, key: &K) -> Option<PermissionOverride> {
        self.get(key).copied()
    }
}

impl<K: Ord> OverrideTable<K> for BTreeMap<K, PermissionOverride> {
    fn lookup(&self, key: &K) -> Option<PermissionOverride> {
        self.get(key).copied()
    }
}

/// A permission-scoped entity, such as a channel.
pub trait Resource {
    type Group: GroupContext + ?Sized;
    type RoleOverrides: OverrideTable<RoleId> + ?Sized;
    type SubjectOverrides: OverrideTable<UserId> + ?Sized;

    /// The guild that owns this resource.
    fn group(&self) -> &Self::Group;

    /// Overrides keyed by role.
    fn role_overrides(&self) -> &Self::RoleOverrides;

    /// Overrides keyed by member.
    fn subject_overrides(&self) -> &Self::SubjectOverrides;
}
