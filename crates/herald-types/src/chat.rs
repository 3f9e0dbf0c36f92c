//! Platform-agnostic outbound chat types.
//!
//! These describe what Herald wants to say, independent of the Discord wire
//! format. The REST client in herald-infra maps them onto API payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::id::RoleId;

/// Embed colors used by the three session-status messages.
pub mod color {
    /// Blue, for the started announcement.
    pub const STARTED: u32 = 0x3498db;
    /// Red, for the ended notice.
    pub const ENDED: u32 = 0xe74c3c;
    /// Dark gray, for the offline placeholder.
    pub const OFFLINE: u32 = 0x607d8b;
}

/// A message to be sent or edited into a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutboundMessage {
    /// Plain text above the embed. Role mentions go here.
    #[serde(default)]
    pub content: Option<String>,

    /// The status embed, if any.
    #[serde(default)]
    pub embed: Option<Embed>,

    /// Roles the platform may actually notify. Mentions of roles not listed
    /// here render as text but ping nobody.
    #[serde(default)]
    pub mentionable_roles: Vec<RoleId>,
}

impl OutboundMessage {
    /// A message carrying only an embed.
    pub fn embed(embed: Embed) -> Self {
        Self {
            content: None,
            embed: Some(embed),
            mentionable_roles: Vec::new(),
        }
    }
}

/// A rich embed: title, body, accent color, optional image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    pub title: String,
    pub description: String,
    pub color: u32,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// A guild scheduled event to be created on the platform.
///
/// Instants are absolute UTC; the Unix timestamp supplied by the user is
/// converted without any local-timezone interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionEvent {
    pub name: String,
    pub description: String,
    pub starts_at: DateTime<Utc>,
    pub ends_at: DateTime<Utc>,
    /// External-event location string (required by the platform).
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_only_message_has_no_mentions() {
        let message = OutboundMessage::embed(Embed {
            title: "Server Offline".to_string(),
            description: "There is no session at the moment.".to_string(),
            color: color::OFFLINE,
            image_url: None,
        });
        assert!(message.content.is_none());
        assert!(message.mentionable_roles.is_empty());
    }
}
