//! Proptest generators for property-based testing.

use proptest::prelude::*;

use guildgate_core::{Permission, PermissionOverride, Permissions, UserId};
use guildgate_perms::ChannelSnapshot;

use crate::fixtures::TestFixture;

/// Generate any permission kind.
pub fn permission() -> impl Strategy<Value = Permission> {
    proptest::sample::select(Permission::ALL.to_vec())
}

/// Generate an arbitrary 64-bit mask, unknown bits included.
pub fn permissions() -> impl Strategy<Value = Permissions> {
    any::<u64>().prop_map(Permissions::from_bits_retain)
}

/// Generate a mask that never carries the default bypass kind.
pub fn non_bypass_permissions() -> impl Strategy<Value = Permissions> {
    permissions().prop_map(|p| p.difference(Permission::BYPASS.raw()))
}

/// Generate an override with arbitrary, possibly overlapping masks.
pub fn permission_override() -> impl Strategy<Value = PermissionOverride> {
    (permissions(), permissions()).prop_map(|(grant, deny)| PermissionOverride::new(grant, deny))
}

/// Parameters for one role held by the scenario member.
#[derive(Debug, Clone)]
pub struct RoleParams {
    pub position: i32,
    pub permissions: Permissions,
    pub channel_override: Option<PermissionOverride>,
}

/// Generate a role that does not bypass.
pub fn role_params() -> impl Strategy<Value = RoleParams> {
    (
        -4i32..=4i32, // narrow range so ties happen
        non_bypass_permissions(),
        proptest::option::of(permission_override()),
    )
        .prop_map(|(position, permissions, channel_override)| RoleParams {
            position,
            permissions,
            channel_override,
        })
}

/// Parameters for a guild with one non-owner member and one channel.
#[derive(Debug, Clone)]
pub struct ScenarioParams {
    pub everyone: Permissions,
    pub everyone_override: Option<PermissionOverride>,
    pub roles: Vec<RoleParams>,
    pub member_override: Option<PermissionOverride>,
}

impl Arbitrary for ScenarioParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (
            non_bypass_permissions(),
            proptest::option::of(permission_override()),
            proptest::collection::vec(role_params(), 0..6),
            proptest::option::of(permission_override()),
        )
            .prop_map(|(everyone, everyone_override, roles, member_override)| ScenarioParams {
                everyone,
                everyone_override,
                roles,
                member_override,
            })
            .boxed()
    }
}

impl ScenarioParams {
    /// Build a fixture whose member lists its roles in `listing` order.
    ///
    /// `listing` holds indices into `roles`. Role ids follow `roles` order,
    /// whatever the listing.
    pub fn fixture_with_listing(&self, listing: &[usize]) -> (TestFixture, UserId) {
        let mut fixture = TestFixture::with_base_id(1 << 40, self.everyone);

        if let Some(ovr) = self.everyone_override {
            fixture.override_role(fixture.everyone.id, ovr);
        }

        let ids: Vec<_> = self
            .roles
            .iter()
            .enumerate()
            .map(|(i, r)| {
                let id = fixture.add_role(&format!("role-{i}"), r.permissions, r.position);
                if let Some(ovr) = r.channel_override {
                    fixture.override_role(id, ovr);
                }
                id
            })
            .collect();

        let held: Vec<_> = listing.iter().map(|&i| ids[i]).collect();
        let member = fixture.add_member(&held);

        if let Some(ovr) = self.member_override {
            fixture.override_member(member, ovr);
        }

        (fixture, member)
    }

    /// Build the member and channel with roles listed in definition order.
    pub fn build(&self) -> (UserId, ChannelSnapshot) {
        let listing: Vec<_> = (0..self.roles.len()).collect();
        self.build_with_listing(&listing)
    }

    /// Build the member and channel with roles listed in `listing` order.
    pub fn build_with_listing(&self, listing: &[usize]) -> (UserId, ChannelSnapshot) {
        let (fixture, member) = self.fixture_with_listing(listing);
        let channel = fixture
            .channel()
            .expect("generated scenarios only reference their own roles");
        (member, channel)
    }
}

/// Generate scenario parameters together with a shuffled role listing.
pub fn scenario_with_shuffled_listing() -> impl Strategy<Value = (ScenarioParams, Vec<usize>)> {
    any::<ScenarioParams>().prop_flat_map(|params| {
        let listing: Vec<usize> = (0..params.roles.len()).collect();
        (Just(params), Just(listing).prop_shuffle())
    })
}
