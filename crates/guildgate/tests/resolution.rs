//! End-to-end resolution through the facade.

use std::sync::Arc;
use std::thread;

use guildgate::{
    ChannelId, ChannelSnapshot, GuildId, GuildSnapshot, Permission, PermissionOverride,
    PermissionResolver, Permissions, ResolverConfig, Role, RoleId, RoleOrder, UserId,
};

const OWNER: UserId = UserId::new(1);
const ALICE: UserId = UserId::new(10);
const BOB: UserId = UserId::new(11);
const CAROL: UserId = UserId::new(12);

const EVERYONE: RoleId = RoleId::new(100);
const MODERATOR: RoleId = RoleId::new(101);
const MUTED: RoleId = RoleId::new(102);
const ADMIN: RoleId = RoleId::new(103);

fn guild() -> GuildSnapshot {
    let everyone = Role::new(EVERYONE, "@everyone").with_permissions(
        Permissions::MESSAGE_READ
            | Permissions::MESSAGE_WRITE
            | Permissions::MESSAGE_HISTORY
            | Permissions::VOICE_CONNECT
            | Permissions::VOICE_SPEAK,
    );

    GuildSnapshot::new(GuildId::new(100), OWNER, everyone)
        .with_role(
            Role::new(MODERATOR, "Moderator")
                .with_permissions(Permissions::MESSAGE_MANAGE | Permissions::KICK_MEMBERS)
                .with_position(5),
        )
        .with_role(Role::new(MUTED, "Muted").with_position(10))
        .with_role(
            Role::new(ADMIN, "Admin")
                .with_permissions(Permissions::MANAGE_ROLES)
                .with_position(20),
        )
        .with_member_roles(ALICE, [MODERATOR])
        .unwrap()
        .with_member_roles(BOB, [MODERATOR, MUTED])
        .unwrap()
        .with_member_roles(CAROL, [ADMIN, MUTED])
        .unwrap()
}

/// `#staff`: hidden from @everyone, visible to moderators, muted members can't write.
fn staff_channel(guild: Arc<GuildSnapshot>) -> ChannelSnapshot {
    ChannelSnapshot::new(ChannelId::new(200), guild)
        .with_role_override(EVERYONE, PermissionOverride::NONE.forbid(Permission::MessageRead))
        .unwrap()
        .with_role_override(
            MODERATOR,
            PermissionOverride::NONE
                .allow(Permission::MessageRead)
                .allow(Permission::MessageManage),
        )
        .unwrap()
        .with_role_override(MUTED, PermissionOverride::NONE.forbid(Permission::MessageWrite))
        .unwrap()
}

#[test]
fn outsider_sees_public_override_only() {
    let channel = staff_channel(Arc::new(guild()));
    let stranger = UserId::new(999);

    let perms = PermissionResolver::default().effective_permissions(stranger, &channel);

    assert!(!perms.has(Permission::MessageRead));
    assert!(perms.has(Permission::MessageWrite));
    assert!(perms.has(Permission::VoiceConnect));
}

#[test]
fn moderator_role_override_reopens_channel() {
    let channel = staff_channel(Arc::new(guild()));
    let resolver = PermissionResolver::default();

    assert!(resolver.resolve(ALICE, &channel, Permission::MessageRead));
    assert!(resolver.resolve(ALICE, &channel, Permission::MessageWrite));
    assert!(resolver.resolve(ALICE, &channel, Permission::MessageManage));
    // Role base permissions are not channel permissions
    assert!(!resolver.resolve(ALICE, &channel, Permission::KickMembers));
}

#[test]
fn muted_moderator_reads_but_cannot_write() {
    let channel = staff_channel(Arc::new(guild()));
    let resolver = PermissionResolver::default();

    assert!(resolver.resolve(BOB, &channel, Permission::MessageRead));
    assert!(!resolver.resolve(BOB, &channel, Permission::MessageWrite));
    assert!(!resolver.resolve_all(
        BOB,
        &channel,
        &[Permission::MessageRead, Permission::MessageWrite]
    ));
}

#[test]
fn member_override_lifts_mute() {
    let channel = staff_channel(Arc::new(guild()))
        .with_member_override(BOB, PermissionOverride::NONE.allow(Permission::MessageWrite));

    assert!(PermissionResolver::default().resolve(BOB, &channel, Permission::MessageWrite));
}

#[test]
fn admin_bypasses_mute_and_hidden_channel() {
    let channel = staff_channel(Arc::new(guild()))
        .with_member_override(CAROL, PermissionOverride::from_bits(0, u64::MAX));
    let resolver = PermissionResolver::default();

    for action in Permission::ALL {
        assert!(resolver.resolve(CAROL, &channel, action), "admin denied {action}");
    }
}

#[test]
fn owner_bypasses_everything() {
    let channel = staff_channel(Arc::new(guild()))
        .with_member_override(OWNER, PermissionOverride::from_bits(0, u64::MAX));

    assert_eq!(
        PermissionResolver::default().effective_permissions(OWNER, &channel),
        Permissions::EVERYTHING
    );
}

#[test]
fn bypass_can_be_disabled_for_roles() {
    let channel = staff_channel(Arc::new(guild()));
    let config = ResolverConfig::from_bypass_names(Vec::<&str>::new()).unwrap();
    let resolver = PermissionResolver::new(config);

    // Carol's Admin role no longer bypasses, so Muted applies
    assert!(!resolver.resolve(CAROL, &channel, Permission::MessageWrite));
    assert!(resolver.resolve(OWNER, &channel, Permission::MessageWrite));
}

#[test]
fn role_order_policy_changes_tie_break() {
    // Moderator (position 5) grants WRITE, Muted (position 10) denies it.
    let guild = Arc::new(guild());
    let channel = ChannelSnapshot::new(ChannelId::new(201), Arc::clone(&guild))
        .with_role_override(MODERATOR, PermissionOverride::NONE.allow(Permission::MessageWrite))
        .unwrap()
        .with_role_override(MUTED, PermissionOverride::NONE.forbid(Permission::MessageWrite))
        .unwrap();

    let by_position = PermissionResolver::default();
    assert!(!by_position.resolve(BOB, &channel, Permission::MessageWrite));

    // Bob lists Moderator before Muted, so provided order agrees here
    let as_provided =
        PermissionResolver::new(ResolverConfig::default().with_role_order(RoleOrder::AsProvided));
    assert!(!as_provided.resolve(BOB, &channel, Permission::MessageWrite));

    // Listing Muted first lets Moderator's grant fold last under AsProvided
    let reordered = Arc::new(
        GuildSnapshot::clone(&guild)
            .with_member_roles(BOB, [MUTED, MODERATOR])
            .unwrap(),
    );
    let channel = ChannelSnapshot::new(ChannelId::new(201), reordered)
        .with_role_override(MODERATOR, PermissionOverride::NONE.allow(Permission::MessageWrite))
        .unwrap()
        .with_role_override(MUTED, PermissionOverride::NONE.forbid(Permission::MessageWrite))
        .unwrap();

    assert!(as_provided.resolve(BOB, &channel, Permission::MessageWrite));
    assert!(!by_position.resolve(BOB, &channel, Permission::MessageWrite));
}

#[test]
fn concurrent_resolution_is_consistent() {
    let channel = Arc::new(staff_channel(Arc::new(guild())));
    let resolver = PermissionResolver::default();
    let expected = resolver.effective_permissions(BOB, channel.as_ref());

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let channel = Arc::clone(&channel);
            thread::spawn(move || {
                (0..1000)
                    .map(|_| resolver.effective_permissions(BOB, channel.as_ref()))
                    .all(|perms| perms == expected)
            })
        })
        .collect();

    for handle in handles {
        assert!(handle.join().unwrap());
    }
}

mod properties {
    use super::*;
    use guildgate_testkit::generators::permission;
    use guildgate_testkit::ScenarioParams;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn resolve_matches_effective_set(params: ScenarioParams, action in permission()) {
            let (member, channel) = params.build();
            let resolver = PermissionResolver::default();

            prop_assert_eq!(
                resolver.resolve(member, &channel, action),
                resolver.effective_permissions(member, &channel).has(action)
            );
        }

        #[test]
        fn resolve_all_is_conjunction(params: ScenarioParams, actions in proptest::collection::vec(permission(), 0..6)) {
            let (member, channel) = params.build();
            let resolver = PermissionResolver::default();

            let each = actions.iter().all(|&a| resolver.resolve(member, &channel, a));
            prop_assert_eq!(resolver.resolve_all(member, &channel, &actions), each);
        }
    }
}
