//! Chat platform port.
//!
//! Every outbound call the lifecycle needs is a fallible remote call on
//! this trait. "Message not found" is modeled as a typed outcome rather
//! than intercepted exceptions: `fetch_message` returns `Ok(None)` for a
//! missing message, and `delete_message` reports it as
//! [`ChatError::NotFound`], which callers match on explicitly wherever
//! "already gone" is the desired end state.

use herald_types::chat::{OutboundMessage, SessionEvent};
use herald_types::error::ChatError;
use herald_types::id::{ChannelId, GuildId, MessageId};

/// A message as it exists on the platform.
///
/// Herald only ever needs to know that the tracked message still exists;
/// the body is not read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoteMessage {
    pub id: MessageId,
}

/// Outbound calls to the chat platform.
///
/// Implementations live in herald-infra (`DiscordClient`).
pub trait ChatClient: Send + Sync {
    /// Send a message, returning the new message's ID.
    fn send_message(
        &self,
        channel: ChannelId,
        message: &OutboundMessage,
    ) -> impl std::future::Future<Output = Result<MessageId, ChatError>> + Send;

    /// Fetch a message by ID. `Ok(None)` means the message no longer
    /// exists; any other failure is an error.
    fn fetch_message(
        &self,
        channel: ChannelId,
        id: MessageId,
    ) -> impl std::future::Future<Output = Result<Option<RemoteMessage>, ChatError>> + Send;

    /// Replace a message's content.
    fn edit_message(
        &self,
        channel: ChannelId,
        id: MessageId,
        message: &OutboundMessage,
    ) -> impl std::future::Future<Output = Result<(), ChatError>> + Send;

    /// Delete a message. A message that is already gone surfaces as
    /// [`ChatError::NotFound`].
    fn delete_message(
        &self,
        channel: ChannelId,
        id: MessageId,
    ) -> impl std::future::Future<Output = Result<(), ChatError>> + Send;

    /// Create an external guild scheduled event.
    fn create_scheduled_event(
        &self,
        guild: GuildId,
        event: &SessionEvent,
    ) -> impl std::future::Future<Output = Result<(), ChatError>> + Send;

    /// Update the bot's displayed status text.
    fn update_presence(
        &self,
        status: &str,
    ) -> impl std::future::Future<Output = Result<(), ChatError>> + Send;
}
