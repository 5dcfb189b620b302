//! Golden permission scenarios.
//!
//! Each scenario fixes a guild, one channel, and one member, together with
//! the exact permission bits the member must end up with. Any resolver
//! implementation must reproduce these bits.

use guildgate_core::{PermissionOverride, Permissions, UserId};
use guildgate_perms::{ChannelSnapshot, PermissionResolver};

use crate::fixtures::TestFixture;

const READ: u64 = Permissions::MESSAGE_READ.bits();
const WRITE: u64 = Permissions::MESSAGE_WRITE.bits();
const TTS: u64 = Permissions::MESSAGE_TTS.bits();
const ATTACH: u64 = Permissions::MESSAGE_ATTACH_FILES.bits();
const CONNECT: u64 = Permissions::VOICE_CONNECT.bits();
const SPEAK: u64 = Permissions::VOICE_SPEAK.bits();
const MANAGE_ROLES: u64 = Permissions::MANAGE_ROLES.bits();
const ALL: u64 = Permissions::EVERYTHING.bits();

/// A role held by the scenario member, with its optional channel override.
#[derive(Debug, Clone, Copy)]
pub struct ScenarioRole {
    pub position: i32,
    pub permissions: u64,
    /// `(grant, deny)` bits.
    pub channel_override: Option<(u64, u64)>,
}

/// A golden scenario.
#[derive(Debug, Clone)]
pub struct GoldenScenario {
    /// Human-readable name for the scenario.
    pub name: &'static str,
    /// `@everyone` permission bits.
    pub everyone: u64,
    /// `@everyone` channel override, `(grant, deny)`.
    pub everyone_override: Option<(u64, u64)>,
    /// Roles held by the member, in the order the guild lists them.
    pub roles: Vec<ScenarioRole>,
    /// Member channel override, `(grant, deny)`.
    pub member_override: Option<(u64, u64)>,
    /// Whether the member owns the guild.
    pub is_owner: bool,
    /// Expected effective bits.
    pub expected: u64,
}

const fn role(position: i32, permissions: u64, channel_override: Option<(u64, u64)>) -> ScenarioRole {
    ScenarioRole {
        position,
        permissions,
        channel_override,
    }
}

/// Get all golden scenarios.
pub fn all_scenarios() -> Vec<GoldenScenario> {
    vec![
        GoldenScenario {
            name: "role grant keeps default bit",
            everyone: 0b0001,
            everyone_override: None,
            roles: vec![role(1, 0, Some((0b0010, 0)))],
            member_override: None,
            is_owner: false,
            expected: 0b0011,
        },
        GoldenScenario {
            name: "member override restores role deny",
            everyone: 0b0011,
            everyone_override: None,
            roles: vec![role(1, 0, Some((0, 0b0001)))],
            member_override: Some((0b0001, 0)),
            is_owner: false,
            expected: 0b0011,
        },
        GoldenScenario {
            name: "no roles no overrides",
            everyone: READ | CONNECT,
            everyone_override: None,
            roles: vec![],
            member_override: None,
            is_owner: false,
            expected: READ | CONNECT,
        },
        GoldenScenario {
            name: "everyone override only",
            everyone: READ | WRITE,
            everyone_override: Some((0, WRITE)),
            roles: vec![],
            member_override: None,
            is_owner: false,
            expected: READ,
        },
        GoldenScenario {
            name: "higher role deny wins",
            everyone: 0,
            everyone_override: None,
            roles: vec![role(1, 0, Some((SPEAK, 0))), role(2, 0, Some((0, SPEAK)))],
            member_override: None,
            is_owner: false,
            expected: 0,
        },
        GoldenScenario {
            name: "higher role grant wins regardless of listing order",
            everyone: 0,
            everyone_override: None,
            roles: vec![role(2, 0, Some((SPEAK, 0))), role(1, 0, Some((0, SPEAK)))],
            member_override: None,
            is_owner: false,
            expected: SPEAK,
        },
        GoldenScenario {
            name: "three roles fold",
            everyone: 0,
            everyone_override: None,
            roles: vec![
                role(3, 0, Some((TTS, 0))),
                role(1, 0, Some((READ | WRITE, 0))),
                role(2, 0, Some((0, WRITE))),
            ],
            member_override: None,
            is_owner: false,
            expected: READ | TTS,
        },
        GoldenScenario {
            name: "member deny after role grant",
            everyone: READ | WRITE,
            everyone_override: None,
            roles: vec![role(1, 0, Some((ATTACH, 0)))],
            member_override: Some((0, READ)),
            is_owner: false,
            expected: WRITE | ATTACH,
        },
        GoldenScenario {
            name: "overlapping masks grant",
            everyone: 0,
            everyone_override: Some((SPEAK, SPEAK)),
            roles: vec![],
            member_override: None,
            is_owner: false,
            expected: SPEAK,
        },
        GoldenScenario {
            name: "role without override is inert",
            everyone: READ,
            everyone_override: None,
            roles: vec![role(1, WRITE, None)],
            member_override: None,
            is_owner: false,
            expected: READ,
        },
        GoldenScenario {
            name: "owner bypass",
            everyone: 0,
            everyone_override: Some((0, u64::MAX)),
            roles: vec![],
            member_override: Some((0, u64::MAX)),
            is_owner: true,
            expected: ALL,
        },
        GoldenScenario {
            name: "held role bypass",
            everyone: 0,
            everyone_override: None,
            roles: vec![role(1, MANAGE_ROLES, Some((0, u64::MAX)))],
            member_override: Some((0, u64::MAX)),
            is_owner: false,
            expected: ALL,
        },
        GoldenScenario {
            name: "everyone bypass",
            everyone: MANAGE_ROLES,
            everyone_override: Some((0, u64::MAX)),
            roles: vec![],
            member_override: None,
            is_owner: false,
            expected: ALL,
        },
    ]
}

/// Build the member and channel described by a scenario.
pub fn build_scenario(scenario: &GoldenScenario) -> (UserId, ChannelSnapshot) {
    let mut fixture = TestFixture::with_base_id(1 << 32, Permissions::from_bits_retain(scenario.everyone));

    if let Some((grant, deny)) = scenario.everyone_override {
        fixture.override_role(fixture.everyone.id, PermissionOverride::from_bits(grant, deny));
    }

    let mut held = Vec::with_capacity(scenario.roles.len());
    for (i, r) in scenario.roles.iter().enumerate() {
        let id = fixture.add_role(
            &format!("role-{i}"),
            Permissions::from_bits_retain(r.permissions),
            r.position,
        );
        if let Some((grant, deny)) = r.channel_override {
            fixture.override_role(id, PermissionOverride::from_bits(grant, deny));
        }
        held.push(id);
    }

    let member = if scenario.is_owner {
        fixture.owner
    } else {
        fixture.add_member(&held)
    };

    if let Some((grant, deny)) = scenario.member_override {
        fixture.override_member(member, PermissionOverride::from_bits(grant, deny));
    }

    let channel = fixture
        .channel()
        .expect("golden scenarios only reference their own roles");
    (member, channel)
}

/// Resolve every scenario with the default resolver.
///
/// Returns `(name, expected, actual)` for each scenario that disagrees.
pub fn verify_all_scenarios() -> Vec<(&'static str, Permissions, Permissions)> {
    let resolver = PermissionResolver::default();

    all_scenarios()
        .into_iter()
        .filter_map(|scenario| {
            let (member, channel) = build_scenario(&scenario);
            let expected = Permissions::from_bits_retain(scenario.expected);
            let actual = resolver.effective_permissions(member, &channel);
            (actual != expected).then_some((scenario.name, expected, actual))
        })
        .collect()
}
