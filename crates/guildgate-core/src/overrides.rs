//! Grant/deny overrides and their algebra.
//!
//! An override adjusts an incoming permission set: denied bits are cleared,
//! then granted bits are set. Overrides compose, so a stack of overrides can
//! be collapsed into one before it is applied.

use serde::{Deserialize, Serialize};

use crate::permission::{Permission, Permissions};

/// A pair of grant and deny masks layered over a permission set.
///
/// The masks may overlap. [`apply`](Self::apply) clears denied bits before
/// setting granted ones, so a bit present in both masks ends up granted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PermissionOverride {
    /// Bits forced on.
    pub grant: Permissions,

    /// Bits forced off.
    pub deny: Permissions,
}

impl PermissionOverride {
    /// The identity override.
    pub const NONE: Self = Self {
        grant: Permissions::empty(),
        deny: Permissions::empty(),
    };

    /// Create an override from grant and deny masks.
    pub const fn new(grant: Permissions, deny: Permissions) -> Self {
        Self { grant, deny }
    }

    /// Create an override from raw bitmasks.
    pub const fn from_bits(grant: u64, deny: u64) -> Self {
        Self {
            grant: Permissions::from_bits_retain(grant),
            deny: Permissions::from_bits_retain(deny),
        }
    }

    /// Add bits to the grant mask.
    #[must_use]
    pub const fn grant(self, perms: Permissions) -> Self {
        Self {
            grant: self.grant.union(perms),
            deny: self.deny,
        }
    }

    /// Add bits to the deny mask.
    #[must_use]
    pub const fn deny(self, perms: Permissions) -> Self {
        Self {
            grant: self.grant,
            deny: self.deny.union(perms),
        }
    }

    /// Grant a single permission kind.
    #[must_use]
    pub const fn allow(self, permission: Permission) -> Self {
        self.grant(permission.raw())
    }

    /// Deny a single permission kind.
    #[must_use]
    pub const fn forbid(self, permission: Permission) -> Self {
        self.deny(permission.raw())
    }

    /// Apply this override to a permission set: `(perms & !deny) | grant`.
    #[must_use]
    pub const fn apply(self, perms: Permissions) -> Permissions {
        perms.difference(self.deny).union(self.grant)
    }

    /// Compose with an earlier override.
    ///
    /// The result applies `earlier` first and `self` second, so `self` wins
    /// wherever the two disagree.
    #[must_use]
    pub const fn after(self, earlier: Self) -> Self {
        Self {
            grant: earlier.grant.difference(self.deny).union(self.grant),
            deny: earlier.deny.union(self.deny),
        }
    }

    /// Compose with a later override. Equivalent to `later.after(self)`.
    #[must_use]
    pub const fn then(self, later: Self) -> Self {
        later.after(self)
    }

    /// Whether applying this override changes nothing.
    pub const fn is_empty(self) -> bool {
        self.grant.is_empty() && self.deny.is_empty()
    }

    /// Bits present in both masks. They resolve to granted.
    pub const fn conflicts(self) -> Permissions {
        self.grant.intersection(self.deny)
    }
}
