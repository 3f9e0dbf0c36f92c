//! Startup configuration for Herald.
//!
//! `HeraldConfig` represents `herald.toml`: the fixed guild/channel/role
//! identifiers, interaction verification key, announcement styling, and the
//! optional presence rotation. All identifiers are configured at startup
//! and are not runtime-mutable. The bot token is NOT part of this file --
//! it comes from the `DISCORD_TOKEN` environment variable.

use serde::{Deserialize, Serialize};

use crate::id::{ChannelId, GuildId, RoleId};

/// Top-level configuration, loaded from `herald.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeraldConfig {
    /// The single guild this bot serves.
    pub guild_id: GuildId,

    /// Channel where session announcements are posted.
    pub session_channel_id: ChannelId,

    /// Application ID used for command registration and interaction replies.
    pub application_id: u64,

    /// Hex-encoded ed25519 public key for interaction signature checks.
    pub public_key: String,

    /// Role mentioned in the session-started announcement, if any.
    #[serde(default)]
    pub ping_role_id: Option<RoleId>,

    /// Role allowed to run session commands. When unset, members need the
    /// ADMINISTRATOR permission instead.
    #[serde(default)]
    pub manager_role_id: Option<RoleId>,

    /// Path of the persisted session record.
    #[serde(default = "default_data_file")]
    pub data_file: String,

    /// Announcement styling (title, join code, embed images).
    pub announcements: AnnouncementStyle,

    /// Optional presence rotation. Absent means no rotation.
    #[serde(default)]
    pub presence: Option<PresenceConfig>,
}

fn default_data_file() -> String {
    "data.json".to_string()
}

/// Styling for the three session-status embeds.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementStyle {
    /// Embed title for the started announcement (e.g., the server name).
    pub title: String,

    /// Join code shown in the started announcement.
    pub join_code: String,

    /// Location string attached to scheduled events (e.g., a game name).
    pub event_location: String,

    #[serde(default)]
    pub started_image_url: Option<String>,

    #[serde(default)]
    pub ended_image_url: Option<String>,

    #[serde(default)]
    pub offline_image_url: Option<String>,
}

/// Presence rotation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PresenceConfig {
    /// Ordered list of status strings to cycle through.
    pub statuses: Vec<String>,

    /// Seconds between presence updates.
    #[serde(default = "default_presence_interval")]
    pub interval_secs: u64,
}

fn default_presence_interval() -> u64 {
    300
}
