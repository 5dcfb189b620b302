//! # guildgate Testkit
//!
//! Testing utilities for guildgate.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden scenarios**: Known guild/channel setups with expected permission bits
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: A mutable builder that produces guild and channel snapshots
//!
//! ## Golden Scenarios
//!
//! ```rust
//! use guildgate_testkit::vectors::{all_scenarios, verify_all_scenarios};
//!
//! assert!(!all_scenarios().is_empty());
//! assert!(verify_all_scenarios().is_empty());
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use guildgate_perms::PermissionResolver;
//! use guildgate_testkit::generators::ScenarioParams;
//!
//! proptest! {
//!     #[test]
//!     fn resolution_is_deterministic(params: ScenarioParams) {
//!         let (member, channel) = params.build();
//!         let resolver = PermissionResolver::default();
//!         prop_assert_eq!(
//!             resolver.effective_permissions(member, &channel),
//!             resolver.effective_permissions(member, &channel),
//!         );
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use guildgate_core::{Permission, PermissionOverride, Permissions};
//! use guildgate_perms::PermissionResolver;
//! use guildgate_testkit::fixtures::TestFixture;
//!
//! let mut fixture = TestFixture::new(Permissions::MESSAGE_READ);
//! let muted = fixture.add_role("Muted", Permissions::empty(), 1);
//! let member = fixture.add_member(&[muted]);
//! fixture.override_role(muted, PermissionOverride::NONE.forbid(Permission::MessageRead));
//!
//! let channel = fixture.channel().unwrap();
//! assert!(!PermissionResolver::default().resolve(member, &channel, Permission::MessageRead));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::TestFixture;
pub use generators::ScenarioParams;
pub use vectors::{all_scenarios, build_scenario, verify_all_scenarios, GoldenScenario};
