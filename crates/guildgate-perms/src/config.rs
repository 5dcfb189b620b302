//! Resolver configuration.

use serde::{Deserialize, Serialize};

use guildgate_core::{Permission, Permissions, Role};

use crate::error::Result;

/// Order in which a member's role overrides are folded.
///
/// The last role folded wins conflicting grant/deny bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleOrder {
    /// Ascending `(position, id)`: the highest-ranked role folds last.
    #[default]
    ByPosition,
    /// Fold in the order the guild context returns roles.
    AsProvided,
}

impl RoleOrder {
    /// Arrange `roles` into folding order.
    pub fn arrange(self, roles: &mut [&Role]) {
        match self {
            RoleOrder::ByPosition => roles.sort_by_key(|r| r.rank_key()),
            RoleOrder::AsProvided => {}
        }
    }
}

/// Configuration for the [`PermissionResolver`](crate::PermissionResolver).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Kinds whose possession skips override evaluation.
    ///
    /// Empty disables role-based bypass; the guild owner always bypasses.
    pub bypass: Permissions,
    /// Folding order for role overrides.
    pub role_order: RoleOrder,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            bypass: Permission::BYPASS.raw(),
            role_order: RoleOrder::default(),
        }
    }
}

impl ResolverConfig {
    /// Build a configuration whose bypass set is given by permission names.
    pub fn from_bypass_names<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let bypass = names
            .into_iter()
            .map(|name| name.as_ref().parse::<Permission>())
            .collect::<std::result::Result<Permissions, _>>()?;

        Ok(Self {
            bypass,
            ..Self::default()
        })
    }

    /// Set the folding order.
    #[must_use]
    pub fn with_role_order(mut self, role_order: RoleOrder) -> Self {
        self.role_order = role_order;
        self
    }
}
