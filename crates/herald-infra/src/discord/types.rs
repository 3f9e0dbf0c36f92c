//! Outbound Discord wire payloads.
//!
//! These are Discord-specific request/response structures for HTTP
//! communication with the REST API. They are NOT the platform-agnostic
//! chat types from herald-types -- those stay wire-format-free. Snowflakes
//! cross this boundary as JSON strings, per the API contract.

use serde::{Deserialize, Serialize};

use herald_types::chat::{OutboundMessage, SessionEvent};
use herald_types::error::ChatError;
use herald_types::id::MessageId;

/// Request body for message create/edit.
#[derive(Debug, Clone, Serialize)]
pub struct MessagePayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub embeds: Vec<EmbedPayload>,
    pub allowed_mentions: AllowedMentions,
}

impl From<&OutboundMessage> for MessagePayload {
    fn from(message: &OutboundMessage) -> Self {
        Self {
            content: message.content.clone(),
            embeds: message.embed.iter().map(EmbedPayload::from).collect(),
            allowed_mentions: AllowedMentions {
                parse: Vec::new(),
                roles: message
                    .mentionable_roles
                    .iter()
                    .map(|role| role.to_string())
                    .collect(),
            },
        }
    }
}

/// Mention allowlist. An empty allowlist suppresses all pings, so the
/// payload always carries one: only the roles Herald explicitly names may
/// be notified.
#[derive(Debug, Clone, Serialize)]
pub struct AllowedMentions {
    pub parse: Vec<String>,
    pub roles: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedPayload {
    pub title: String,
    pub description: String,
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<EmbedImage>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EmbedImage {
    pub url: String,
}

impl From<&herald_types::chat::Embed> for EmbedPayload {
    fn from(embed: &herald_types::chat::Embed) -> Self {
        Self {
            title: embed.title.clone(),
            description: embed.description.clone(),
            color: embed.color,
            image: embed
                .image_url
                .clone()
                .map(|url| EmbedImage { url }),
        }
    }
}

/// The slice of a message-object response Herald reads back.
#[derive(Debug, Clone, Deserialize)]
pub struct MessageRef {
    pub id: String,
}

impl MessageRef {
    /// Parse the string snowflake into a [`MessageId`].
    pub fn message_id(&self) -> Result<MessageId, ChatError> {
        self.id
            .parse()
            .map_err(|_| ChatError::Unavailable(format!("malformed message id '{}'", self.id)))
    }
}

/// Guild scheduled event entity types. Herald only creates external events.
const ENTITY_TYPE_EXTERNAL: u8 = 3;
/// The only valid privacy level for guild scheduled events.
const PRIVACY_GUILD_ONLY: u8 = 2;

/// Request body for creating a guild scheduled event.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduledEventPayload {
    pub name: String,
    pub description: String,
    pub scheduled_start_time: String,
    pub scheduled_end_time: String,
    pub entity_type: u8,
    pub privacy_level: u8,
    pub entity_metadata: EntityMetadata,
}

#[derive(Debug, Clone, Serialize)]
pub struct EntityMetadata {
    pub location: String,
}

impl From<&SessionEvent> for ScheduledEventPayload {
    fn from(event: &SessionEvent) -> Self {
        Self {
            name: event.name.clone(),
            description: event.description.clone(),
            scheduled_start_time: event.starts_at.to_rfc3339(),
            scheduled_end_time: event.ends_at.to_rfc3339(),
            entity_type: ENTITY_TYPE_EXTERNAL,
            privacy_level: PRIVACY_GUILD_ONLY,
            entity_metadata: EntityMetadata {
                location: event.location.clone(),
            },
        }
    }
}

/// A slash command definition for guild registration.
#[derive(Debug, Clone, Serialize)]
pub struct CommandDefinition {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<CommandOptionDefinition>,
}

/// Application command option type for integers.
pub const OPTION_TYPE_INTEGER: u8 = 4;

#[derive(Debug, Clone, Serialize)]
pub struct CommandOptionDefinition {
    #[serde(rename = "type")]
    pub kind: u8,
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
}
