//! The permission resolver.
//!
//! Gathers the inputs of [`compute_permissions`] from a channel and its
//! guild, and answers permission checks.

use tracing::debug;

use guildgate_core::{Permission, Permissions, UserId};

use crate::compute::{compute_permissions, PermissionInputs};
use crate::config::ResolverConfig;
use crate::context::{GroupContext, OverrideTable, Resource};

/// Resolves channel permissions for guild members.
///
/// Holds nothing but its configuration, so it is `Copy` and can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct PermissionResolver {
    config: ResolverConfig,
}

impl PermissionResolver {
    /// Create a resolver with the given configuration.
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    /// Get the configuration.
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Check whether `subject` may perform `action` in `resource`.
    pub fn resolve<R>(&self, subject: UserId, resource: &R, action: Permission) -> bool
    where
        R: Resource + ?Sized,
    {
        let allowed = self.effective_permissions(subject, resource).has(action);
        debug!(%subject, %action, allowed, "permission resolved");
        allowed
    }

    /// Check whether `subject` may perform every one of `actions`.
    ///
    /// An empty list is trivially allowed.
    pub fn resolve_all<R>(&self, subject: UserId, resource: &R, actions: &[Permission]) -> bool
    where
        R: Resource + ?Sized,
    {
        let required: Permissions = actions.iter().copied().collect();
        let allowed = self.effective_permissions(subject, resource).contains(required);
        debug!(%subject, required = required.bits(), allowed, "permissions resolved");
        allowed
    }

    /// Compute the full permission set of `subject` in `resource`.
    ///
    /// Bypassing members get [`Permissions::EVERYTHING`].
    pub fn effective_permissions<R>(&self, subject: UserId, resource: &R) -> Permissions
    where
        R: Resource + ?Sized,
    {
        let group = resource.group();
        let public_role = group.public_role();
        let role_table = resource.role_overrides();

        let mut roles = group.roles_of(subject);
        self.config.role_order.arrange(&mut roles);

        // The public override is applied on its own, never as a held role
        let role_overrides = roles
            .iter()
            .filter(|role| role.id != public_role.id)
            .filter_map(|role| role_table.lookup(&role.id));

        let inputs = PermissionInputs {
            subject,
            owner_id: group.owner_id(),
            public_role,
            roles: roles.as_slice(),
            public_override: role_table.lookup(&public_role.id),
            role_overrides,
            subject_override: resource.subject_overrides().lookup(&subject),
        };

        compute_permissions(inputs, self.config.bypass)
    }
}
