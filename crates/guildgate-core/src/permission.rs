//! Permission kinds and permission bitmasks.
//!
//! A [`Permission`] is one action a subject may take in a channel. Each kind
//! owns a stable bit offset, and a [`Permissions`] value is the 64-bit set of
//! kinds currently allowed.
//!
//! Offsets are grouped by concern:
//! - General (bits 0-5): invites, member and guild management
//! - Text (bits 10-17): message permissions
//! - Voice (bits 20-25): voice channel permissions

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

bitflags! {
    /// Channel permissions represented as a 64-bit bitfield.
    ///
    /// Arithmetic on this type never drops unknown bits, so a mask read from
    /// elsewhere survives resolution untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct Permissions: u64 {
        // === General (bits 0-5) ===
        /// Permission to create invites to the channel
        const CREATE_INSTANT_INVITE    = 1 << 0;
        /// Permission to kick members from the guild
        const KICK_MEMBERS             = 1 << 1;
        /// Permission to ban members from the guild
        const BAN_MEMBERS              = 1 << 2;
        /// Permission to manage roles; bypasses channel overrides
        const MANAGE_ROLES             = 1 << 3;
        /// Permission to edit and delete the channel
        const MANAGE_CHANNEL           = 1 << 4;
        /// Permission to modify guild settings
        const MANAGE_SERVER            = 1 << 5;

        // === Text (bits 10-17) ===
        /// Permission to see the channel and read new messages
        const MESSAGE_READ             = 1 << 10;
        /// Permission to send messages
        const MESSAGE_WRITE            = 1 << 11;
        /// Permission to send text-to-speech messages
        const MESSAGE_TTS              = 1 << 12;
        /// Permission to delete messages of other members
        const MESSAGE_MANAGE           = 1 << 13;
        /// Permission to embed links in messages
        const MESSAGE_EMBED_LINKS      = 1 << 14;
        /// Permission to attach files to messages
        const MESSAGE_ATTACH_FILES     = 1 << 15;
        /// Permission to read the message history
        const MESSAGE_HISTORY          = 1 << 16;
        /// Permission to mention @everyone
        const MESSAGE_MENTION_EVERYONE = 1 << 17;

        // === Voice (bits 20-25) ===
        /// Permission to connect to the voice channel
        const VOICE_CONNECT            = 1 << 20;
        /// Permission to speak in the voice channel
        const VOICE_SPEAK              = 1 << 21;
        /// Permission to mute other members
        const VOICE_MUTE_OTHERS        = 1 << 22;
        /// Permission to deafen other members
        const VOICE_DEAF_OTHERS        = 1 << 23;
        /// Permission to move members between voice channels
        const VOICE_MOVE_OTHERS        = 1 << 24;
        /// Permission to use voice activity detection
        const VOICE_USE_VAD            = 1 << 25;
    }
}

impl Permissions {
    /// Number of bits available for permission offsets.
    pub const WIDTH: u32 = u64::BITS;

    /// Every bit set, known kinds and unknown bits alike.
    ///
    /// Unlike [`Permissions::all`], this contains any mask.
    pub const EVERYTHING: Self = Self::from_bits_retain(u64::MAX);

    /// Check if this set includes the given permission kind.
    ///
    /// # Examples
    ///
    /// ```
    /// use guildgate_core::{Permission, Permissions};
    ///
    /// let perms = Permissions::MESSAGE_READ | Permissions::VOICE_CONNECT;
    /// assert!(perms.has(Permission::MessageRead));
    /// assert!(!perms.has(Permission::BanMembers));
    /// ```
    #[must_use]
    pub const fn has(self, permission: Permission) -> bool {
        self.contains(permission.raw())
    }

    /// Iterate the known permission kinds present in this set, by offset.
    pub fn kinds(self) -> impl Iterator<Item = Permission> {
        Permission::ALL.into_iter().filter(move |p| self.has(*p))
    }
}

impl Default for Permissions {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Permission> for Permissions {
    fn from(permission: Permission) -> Self {
        permission.raw()
    }
}

impl FromIterator<Permission> for Permissions {
    fn from_iter<I: IntoIterator<Item = Permission>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::empty(), |acc, p| acc.union(p.raw()))
    }
}

/// A single permission kind.
///
/// The discriminant of each variant is its bit offset in [`Permissions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum Permission {
    CreateInstantInvite = 0,
    KickMembers = 1,
    BanMembers = 2,
    ManageRoles = 3,
    ManageChannel = 4,
    ManageServer = 5,

    MessageRead = 10,
    MessageWrite = 11,
    MessageTts = 12,
    MessageManage = 13,
    MessageEmbedLinks = 14,
    MessageAttachFiles = 15,
    MessageHistory = 16,
    MessageMentionEveryone = 17,

    VoiceConnect = 20,
    VoiceSpeak = 21,
    VoiceMuteOthers = 22,
    VoiceDeafOthers = 23,
    VoiceMoveOthers = 24,
    VoiceUseVad = 25,
}

impl Permission {
    /// Every permission kind, ordered by offset.
    pub const ALL: [Permission; 20] = [
        Permission::CreateInstantInvite,
        Permission::KickMembers,
        Permission::BanMembers,
        Permission::ManageRoles,
        Permission::ManageChannel,
        Permission::ManageServer,
        Permission::MessageRead,
        Permission::MessageWrite,
        Permission::MessageTts,
        Permission::MessageManage,
        Permission::MessageEmbedLinks,
        Permission::MessageAttachFiles,
        Permission::MessageHistory,
        Permission::MessageMentionEveryone,
        Permission::VoiceConnect,
        Permission::VoiceSpeak,
        Permission::VoiceMuteOthers,
        Permission::VoiceDeafOthers,
        Permission::VoiceMoveOthers,
        Permission::VoiceUseVad,
    ];

    /// The administrator-equivalent kind. Holding it skips override evaluation.
    pub const BYPASS: Permission = Permission::ManageRoles;

    /// Bit offset of this kind.
    pub const fn offset(self) -> u8 {
        self as u8
    }

    /// Single-bit mask for this kind.
    pub const fn raw(self) -> Permissions {
        Permissions::from_bits_retain(1u64 << self.offset())
    }

    /// Look up the kind at a bit offset.
    pub fn from_offset(offset: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.offset() == offset)
    }

    /// Canonical SCREAMING_SNAKE_CASE name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Permission::CreateInstantInvite => "CREATE_INSTANT_INVITE",
            Permission::KickMembers => "KICK_MEMBERS",
            Permission::BanMembers => "BAN_MEMBERS",
            Permission::ManageRoles => "MANAGE_ROLES",
            Permission::ManageChannel => "MANAGE_CHANNEL",
            Permission::ManageServer => "MANAGE_SERVER",
            Permission::MessageRead => "MESSAGE_READ",
            Permission::MessageWrite => "MESSAGE_WRITE",
            Permission::MessageTts => "MESSAGE_TTS",
            Permission::MessageManage => "MESSAGE_MANAGE",
            Permission::MessageEmbedLinks => "MESSAGE_EMBED_LINKS",
            Permission::MessageAttachFiles => "MESSAGE_ATTACH_FILES",
            Permission::MessageHistory => "MESSAGE_HISTORY",
            Permission::MessageMentionEveryone => "MESSAGE_MENTION_EVERYONE",
            Permission::VoiceConnect => "VOICE_CONNECT",
            Permission::VoiceSpeak => "VOICE_SPEAK",
            Permission::VoiceMuteOthers => "VOICE_MUTE_OTHERS",
            Permission::VoiceDeafOthers => "VOICE_DEAF_OTHERS",
            Permission::VoiceMoveOthers => "VOICE_MOVE_OTHERS",
            Permission::VoiceUseVad => "VOICE_USE_VAD",
        }
    }
}

// Offsets must fit the bitmask width.
const _: () = {
    let mut i = 0;
    while i < Permission::ALL.len() {
        assert!((Permission::ALL[i].offset() as u32) < Permissions::WIDTH);
        i += 1;
    }
};

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Permission {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownPermission(s.to_string()))
    }
}
