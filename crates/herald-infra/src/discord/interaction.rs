//! Inbound interaction payloads and response builders.
//!
//! Discord POSTs an interaction object to the configured endpoint for each
//! slash-command invocation (and for its periodic PING checks). Only the
//! fields Herald reads are modeled; everything else is ignored.

use serde::{Deserialize, Serialize};

use herald_types::id::{RoleId, UserId};

/// Interaction types Herald handles.
pub mod kind {
    pub const PING: u8 = 1;
    pub const APPLICATION_COMMAND: u8 = 2;
}

/// Interaction callback types.
mod callback {
    pub const PONG: u8 = 1;
    pub const CHANNEL_MESSAGE: u8 = 4;
}

/// Message flag marking a response visible only to the invoker.
const EPHEMERAL: u64 = 1 << 6;

/// An inbound interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct Interaction {
    #[serde(rename = "type")]
    pub kind: u8,
    /// Token for follow-up webhook calls on this interaction.
    pub token: String,
    #[serde(default)]
    pub data: Option<CommandData>,
    #[serde(default)]
    pub member: Option<Member>,
}

impl Interaction {
    /// The guild member who invoked the command, if this is a command.
    pub fn invoker(&self) -> Option<&User> {
        self.member.as_ref().and_then(|member| member.user.as_ref())
    }
}

/// The command payload of an APPLICATION_COMMAND interaction.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandData {
    pub name: String,
    #[serde(default)]
    pub options: Vec<CommandOption>,
}

impl CommandData {
    /// Look up an integer option by name.
    pub fn integer_option(&self, name: &str) -> Option<i64> {
        self.options
            .iter()
            .find(|option| option.name == name)
            .and_then(|option| option.value.as_i64())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CommandOption {
    pub name: String,
    #[serde(default)]
    pub value: serde_json::Value,
}

/// The invoking guild member.
#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub user: Option<User>,
    /// Role snowflakes, as strings on the wire.
    #[serde(default)]
    pub roles: Vec<String>,
    /// The member's computed permission bitfield, as a decimal string.
    #[serde(default)]
    pub permissions: Option<String>,
}

impl Member {
    /// Whether the member carries the given role.
    pub fn has_role(&self, role: RoleId) -> bool {
        let wanted = role.to_string();
        self.roles.iter().any(|r| *r == wanted)
    }

    /// The member's permission bitfield, when present and well-formed.
    pub fn permission_bits(&self) -> Option<u64> {
        self.permissions.as_deref().and_then(|p| p.parse().ok())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct User {
    pub id: String,
    #[serde(default)]
    pub username: String,
}

impl User {
    /// Parse the string snowflake into a [`UserId`].
    pub fn user_id(&self) -> Option<UserId> {
        self.id.parse().ok()
    }
}

/// An interaction response body.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionResponse {
    #[serde(rename = "type")]
    kind: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<ResponseData>,
}

#[derive(Debug, Clone, Serialize)]
struct ResponseData {
    content: String,
    flags: u64,
}

impl InteractionResponse {
    /// Reply to a PING health check.
    pub fn pong() -> Self {
        Self {
            kind: callback::PONG,
            data: None,
        }
    }

    /// An immediate ephemeral text reply. The original response stays
    /// editable through the interaction token afterwards.
    pub fn ephemeral(content: impl Into<String>) -> Self {
        Self {
            kind: callback::CHANNEL_MESSAGE,
            data: Some(ResponseData {
                content: content.into(),
                flags: EPHEMERAL,
            }),
        }
    }
}
