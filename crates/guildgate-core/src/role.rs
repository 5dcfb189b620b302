//! Guild roles.

use serde::{Deserialize, Serialize};

use crate::permission::{Permission, Permissions};
use crate::types::RoleId;

/// A guild role with its base permissions.
///
/// `position` is the role's rank in the guild hierarchy; higher positions
/// outrank lower ones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Role {
    pub id: RoleId,
    pub name: String,
    pub permissions: Permissions,
    pub position: i32,
}

impl Role {
    /// Create a role with no permissions at position 0.
    pub fn new(id: RoleId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            permissions: Permissions::empty(),
            position: 0,
        }
    }

    /// Set the base permissions.
    #[must_use]
    pub fn with_permissions(mut self, permissions: Permissions) -> Self {
        self.permissions = permissions;
        self
    }

    /// Set the hierarchy position.
    #[must_use]
    pub fn with_position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    /// Check the role's base permissions for a kind.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.has(permission)
    }

    /// Whether the role carries any of the given bypass kinds.
    pub fn carries_any(&self, perms: Permissions) -> bool {
        self.permissions.intersects(perms)
    }

    /// Sort key for hierarchy order: ascending position, ties broken by id.
    pub fn rank_key(&self) -> (i32, RoleId) {
        (self.position, self.id)
    }
}
