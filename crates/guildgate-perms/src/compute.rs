//! Permission computation.
//!
//! Computes the effective permissions of one member in one channel from
//! explicit inputs. No lookups happen here; see
//! [`PermissionResolver`](crate::PermissionResolver) for gathering the
//! inputs from a guild and a channel.

use tracing::trace;

use guildgate_core::{PermissionOverride, Permissions, Role, UserId};

/// Everything one computation reads.
///
/// `role_overrides` is consumed lazily, after the bypass check, and must
/// yield overrides lowest priority first.
#[derive(Debug, Clone)]
pub struct PermissionInputs<'a, I> {
    /// The member being checked.
    pub subject: UserId,
    /// The guild owner.
    pub owner_id: UserId,
    /// The guild's `@everyone` role.
    pub public_role: &'a Role,
    /// Roles held by the member.
    pub roles: &'a [&'a Role],
    /// Channel override for `@everyone`.
    pub public_override: Option<PermissionOverride>,
    /// Channel overrides for the member's roles, in folding order.
    pub role_overrides: I,
    /// Channel override for the member.
    pub subject_override: Option<PermissionOverride>,
}

/// Check whether a member skips override evaluation entirely.
///
/// True for the guild owner, and when `@everyone` or any held role carries
/// one of the `bypass` kinds.
pub fn is_bypassed(
    subject: UserId,
    owner_id: UserId,
    public_role: &Role,
    roles: &[&Role],
    bypass: Permissions,
) -> bool {
    subject == owner_id
        || public_role.carries_any(bypass)
        || roles.iter().any(|role| role.carries_any(bypass))
}

/// Compute effective channel permissions.
///
/// Resolution order:
/// 1. Bypassing members have every bit set
/// 2. Start with `@everyone` permissions
/// 3. Apply the `@everyone` channel override
/// 4. Fold the role overrides into one and apply it
/// 5. Apply the member override
pub fn compute_permissions<I>(inputs: PermissionInputs<'_, I>, bypass: Permissions) -> Permissions
where
    I: IntoIterator<Item = PermissionOverride>,
{
    let PermissionInputs {
        subject,
        owner_id,
        public_role,
        roles,
        public_override,
        role_overrides,
        subject_override,
    } = inputs;

    if is_bypassed(subject, owner_id, public_role, roles, bypass) {
        trace!(%subject, "bypass granted");
        return Permissions::EVERYTHING;
    }

    let mut perms = public_role.permissions;
    trace!(%subject, bits = perms.bits(), "baseline from public role");

    if let Some(ovr) = public_override {
        perms = ovr.apply(perms);
        trace!(%subject, bits = perms.bits(), "public role override applied");
    }

    // Later overrides take precedence on conflicting bits
    if let Some(ovr) = role_overrides.into_iter().reduce(|acc, next| next.after(acc)) {
        perms = ovr.apply(perms);
        trace!(%subject, bits = perms.bits(), "role overrides applied");
    }

    if let Some(ovr) = subject_override {
        perms = ovr.apply(perms);
        trace!(%subject, bits = perms.bits(), "member override applied");
    }

    perms
}

#[cfg(test)]
mod tests {
    use super::*;
    use guildgate_core::{Permission, RoleId};
    use proptest::prelude::*;

    const OWNER: UserId = UserId::new(1);
    const MEMBER: UserId = UserId::new(2);

    fn everyone(bits: u64) -> Role {
        Role::new(RoleId::new(100), "@everyone").with_permissions(Permissions::from_bits_retain(bits))
    }

    fn inputs<'a>(
        public_role: &'a Role,
        roles: &'a [&'a Role],
        role_overrides: Vec<PermissionOverride>,
    ) -> PermissionInputs<'a, Vec<PermissionOverride>> {
        PermissionInputs {
            subject: MEMBER,
            owner_id: OWNER,
            public_role,
            roles,
            public_override: None,
            role_overrides,
            subject_override: None,
        }
    }

    #[test]
    fn test_owner_has_all_permissions() {
        let public = everyone(0);
        let mut input = inputs(&public, &[], vec![PermissionOverride::from_bits(0, u64::MAX)]);
        input.subject = OWNER;

        let perms = compute_permissions(input, Permissions::MANAGE_ROLES);
        assert_eq!(perms, Permissions::EVERYTHING);
    }

    #[test]
    fn test_public_role_with_bypass_grants_everyone_all() {
        let public = everyone(Permissions::MANAGE_ROLES.bits());
        let mut input = inputs(&public, &[], vec![]);
        input.subject_override = Some(PermissionOverride::from_bits(0, u64::MAX));

        let perms = compute_permissions(input, Permissions::MANAGE_ROLES);
        assert_eq!(perms, Permissions::EVERYTHING);
    }

    #[test]
    fn test_owner_set_contains_unknown_bits() {
        let public = everyone(Permissions::MESSAGE_READ.bits() | 1 << 40);

        let member = compute_permissions(inputs(&public, &[], vec![]), Permissions::MANAGE_ROLES);
        let mut input = inputs(&public, &[], vec![]);
        input.subject = OWNER;
        let owner = compute_permissions(input, Permissions::MANAGE_ROLES);

        assert_eq!(member.bits(), Permissions::MESSAGE_READ.bits() | 1 << 40);
        assert!(owner.contains(member));
    }

    #[test]
    fn test_held_bypass_role_ignores_denies() {
        let public = everyone(0);
        let admin = Role::new(RoleId::new(5), "Admin").with_permissions(Permissions::MANAGE_ROLES);
        let roles = [&admin];
        let deny_all = PermissionOverride::from_bits(0, u64::MAX);
        let mut input = inputs(&public, &roles, vec![deny_all]);
        input.public_override = Some(deny_all);
        input.subject_override = Some(deny_all);

        let perms = compute_permissions(input, Permissions::MANAGE_ROLES);
        assert!(perms.has(Permission::MessageRead));
        assert!(perms.has(Permission::VoiceUseVad));
    }

    #[test]
    fn test_empty_bypass_set_only_exempts_owner() {
        let public = everyone(Permissions::MANAGE_ROLES.bits());
        let perms = compute_permissions(inputs(&public, &[], vec![]), Permissions::empty());
        assert_eq!(perms, Permissions::MANAGE_ROLES);
    }

    #[test]
    fn test_no_roles_no_overrides_is_public_bitmask() {
        let public = everyone(0b1010_0000_0000);
        let perms = compute_permissions(inputs(&public, &[], vec![]), Permissions::MANAGE_ROLES);
        assert_eq!(perms.bits(), 0b1010_0000_0000);
    }

    #[test]
    fn test_public_override_alone() {
        let public = everyone(Permissions::MESSAGE_READ.bits() | Permissions::MESSAGE_WRITE.bits());
        let mut input = inputs(&public, &[], vec![]);
        input.public_override = Some(PermissionOverride::NONE.forbid(Permission::MessageWrite));

        let perms = compute_permissions(input, Permissions::MANAGE_ROLES);
        assert_eq!(perms, Permissions::MESSAGE_READ);
    }

    #[test]
    fn test_role_grant_leaves_other_bits() {
        // Default grants offset 0; role override grants offset 1.
        let public = everyone(0b0001);
        let role = Role::new(RoleId::new(7), "R");
        let roles = [&role];
        let input = inputs(&public, &roles, vec![PermissionOverride::from_bits(0b0010, 0)]);

        let perms = compute_permissions(input, Permissions::empty());
        assert_eq!(perms.bits(), 0b0011);
    }

    #[test]
    fn test_member_override_restores_role_deny() {
        let public = everyone(0b0011);
        let role = Role::new(RoleId::new(7), "R");
        let roles = [&role];
        let mut input = inputs(&public, &roles, vec![PermissionOverride::from_bits(0, 0b0001)]);
        input.subject_override = Some(PermissionOverride::from_bits(0b0001, 0));

        let perms = compute_permissions(input, Permissions::empty());
        assert_eq!(perms.bits(), 0b0011);
    }

    #[test]
    fn test_later_role_override_wins() {
        let public = everyone(0);
        let grant = PermissionOverride::NONE.allow(Permission::VoiceSpeak);
        let deny = PermissionOverride::NONE.forbid(Permission::VoiceSpeak);

        let denied = compute_permissions(inputs(&public, &[], vec![grant, deny]), Permissions::empty());
        let granted = compute_permissions(inputs(&public, &[], vec![deny, grant]), Permissions::empty());

        assert!(!denied.has(Permission::VoiceSpeak));
        assert!(granted.has(Permission::VoiceSpeak));
    }

    #[test]
    fn test_role_overrides_not_consumed_on_bypass() {
        let public = everyone(0);
        let mut input = inputs(&public, &[], vec![]);
        input.subject = OWNER;

        let lazy = PermissionInputs {
            subject: input.subject,
            owner_id: input.owner_id,
            public_role: input.public_role,
            roles: input.roles,
            public_override: None,
            role_overrides: std::iter::from_fn(|| -> Option<PermissionOverride> {
                panic!("role overrides read after bypass")
            }),
            subject_override: None,
        };

        assert_eq!(compute_permissions(lazy, Permissions::empty()), Permissions::EVERYTHING);
    }

    fn override_() -> impl Strategy<Value = PermissionOverride> {
        (any::<u64>(), any::<u64>()).prop_map(|(g, d)| PermissionOverride::from_bits(g, d))
    }

    proptest! {
        #[test]
        fn prop_matches_sequential_application(
            base in any::<u64>(),
            public_override in proptest::option::of(override_()),
            role_overrides in proptest::collection::vec(override_(), 0..6),
            subject_override in proptest::option::of(override_()),
        ) {
            let public = everyone(base);
            let mut input = inputs(&public, &[], role_overrides.clone());
            input.public_override = public_override;
            input.subject_override = subject_override;

            let mut expected = public.permissions;
            for ovr in public_override.iter().chain(role_overrides.iter()).chain(subject_override.iter()) {
                expected = ovr.apply(expected);
            }

            prop_assert_eq!(compute_permissions(input, Permissions::empty()), expected);
        }

        #[test]
        fn prop_owner_always_has_all(
            base in any::<u64>(),
            role_overrides in proptest::collection::vec(override_(), 0..6),
            subject_override in proptest::option::of(override_()),
        ) {
            let public = everyone(base);
            let mut input = inputs(&public, &[], role_overrides);
            input.subject = OWNER;
            input.subject_override = subject_override;

            prop_assert_eq!(compute_permissions(input, Permissions::empty()), Permissions::EVERYTHING);
        }
    }
}
