//! DiscordClient -- concrete [`ChatClient`] implementation over the
//! Discord REST API.
//!
//! The bot token is wrapped in [`secrecy::SecretString`] and is only
//! exposed when constructing the Authorization header; it never appears in
//! Debug output or tracing logs.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use herald_core::chat::{ChatClient, RemoteMessage};
use herald_types::chat::{OutboundMessage, SessionEvent};
use herald_types::error::ChatError;
use herald_types::id::{ChannelId, GuildId, MessageId};

use super::types::{CommandDefinition, MessagePayload, MessageRef, ScheduledEventPayload};

/// Production API base.
const API_BASE: &str = "https://discord.com/api/v10";

/// Discord REST client.
#[derive(Clone)]
pub struct DiscordClient {
    client: reqwest::Client,
    token: SecretString,
    base_url: String,
    application_id: u64,
}

// DiscordClient intentionally does NOT derive Debug, so the token can
// never be printed through it.

impl DiscordClient {
    pub fn new(token: SecretString, application_id: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            token,
            base_url: API_BASE.to_string(),
            application_id,
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn auth_header(&self) -> String {
        format!("Bot {}", self.token.expose_secret())
    }

    /// Turn a non-success response into the error taxonomy.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ChatError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(classify_status(status.as_u16(), body))
    }

    async fn send(&self, request: reqwest::RequestBuilder) -> Result<reqwest::Response, ChatError> {
        let response = request
            .header("Authorization", self.auth_header())
            .send()
            .await
            .map_err(|err| ChatError::Unavailable(format!("http transport error: {err}")))?;
        Self::ensure_success(response).await
    }

    /// Edit the original ephemeral reply of an interaction (the progress
    /// acknowledgement) with the final outcome text.
    pub async fn edit_interaction_reply(
        &self,
        interaction_token: &str,
        content: &str,
    ) -> Result<(), ChatError> {
        let url = self.url(&format!(
            "/webhooks/{}/{}/messages/@original",
            self.application_id, interaction_token
        ));
        self.send(
            self.client
                .patch(&url)
                .json(&serde_json::json!({ "content": content })),
        )
        .await?;
        Ok(())
    }

    /// Replace the guild's slash-command set.
    pub async fn register_guild_commands(
        &self,
        guild: GuildId,
        commands: &[CommandDefinition],
    ) -> Result<(), ChatError> {
        let url = self.url(&format!(
            "/applications/{}/guilds/{guild}/commands",
            self.application_id
        ));
        self.send(self.client.put(&url).json(commands)).await?;
        tracing::info!(guild = %guild, count = commands.len(), "guild commands registered");
        Ok(())
    }
}

impl ChatClient for DiscordClient {
    async fn send_message(
        &self,
        channel: ChannelId,
        message: &OutboundMessage,
    ) -> Result<MessageId, ChatError> {
        let url = self.url(&format!("/channels/{channel}/messages"));
        let response = self
            .send(self.client.post(&url).json(&MessagePayload::from(message)))
            .await?;

        let message: MessageRef = response
            .json()
            .await
            .map_err(|err| ChatError::Unavailable(format!("malformed message response: {err}")))?;
        message.message_id()
    }

    async fn fetch_message(
        &self,
        channel: ChannelId,
        id: MessageId,
    ) -> Result<Option<RemoteMessage>, ChatError> {
        let url = self.url(&format!("/channels/{channel}/messages/{id}"));
        match self.send(self.client.get(&url)).await {
            Ok(_) => Ok(Some(RemoteMessage { id })),
            Err(ChatError::NotFound) => Ok(None),
            Err(err) => Err(err),
        }
    }

    async fn edit_message(
        &self,
        channel: ChannelId,
        id: MessageId,
        message: &OutboundMessage,
    ) -> Result<(), ChatError> {
        let url = self.url(&format!("/channels/{channel}/messages/{id}"));
        self.send(self.client.patch(&url).json(&MessagePayload::from(message)))
            .await?;
        Ok(())
    }

    async fn delete_message(&self, channel: ChannelId, id: MessageId) -> Result<(), ChatError> {
        let url = self.url(&format!("/channels/{channel}/messages/{id}"));
        self.send(self.client.delete(&url)).await?;
        Ok(())
    }

    async fn create_scheduled_event(
        &self,
        guild: GuildId,
        event: &SessionEvent,
    ) -> Result<(), ChatError> {
        let url = self.url(&format!("/guilds/{guild}/scheduled-events"));
        self.send(
            self.client
                .post(&url)
                .json(&ScheduledEventPayload::from(event)),
        )
        .await?;
        Ok(())
    }

    // Presence is authoritative only over the gateway; a gateway-backed
    // ChatClient must replace this call for rotation to take effect in
    // production. The rotator tolerates the failures either way.
    async fn update_presence(&self, status: &str) -> Result<(), ChatError> {
        let url = self.url("/users/@me/settings");
        self.send(
            self.client
                .patch(&url)
                .json(&serde_json::json!({ "custom_status": { "text": status } })),
        )
        .await?;
        Ok(())
    }
}

/// Map an HTTP status to the error taxonomy: 404 is the typed "already
/// gone" outcome callers recover from, 401/403 are permission problems,
/// 400 carries the platform's rejection reason, everything else is a
/// generic unavailability.
fn classify_status(status: u16, body: String) -> ChatError {
    match status {
        404 => ChatError::NotFound,
        401 | 403 => ChatError::PermissionDenied,
        400 => ChatError::InvalidArgument(body),
        _ => ChatError::Unavailable(format!("HTTP {status}: {body}")),
    }
}
