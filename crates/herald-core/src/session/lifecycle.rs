//! Session lifecycle controller.
//!
//! Orchestrates the Idle -> Active -> Ended -> Idle transitions against the
//! chat platform, recording the tracked message through the
//! [`SessionTracker`]. All operations serialize on a single mutex around
//! the tracker -- the per-guild operation gate -- so `start`, `end`, and
//! `schedule` never interleave at their suspension points. The gate is held
//! across the ended-notice delay, which means the delayed deletion always
//! targets the message it was scheduled for.

use std::time::Duration;

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use herald_types::chat::SessionEvent;
use herald_types::config::AnnouncementStyle;
use herald_types::error::{ChatError, LifecycleError};
use herald_types::id::{ChannelId, GuildId, MessageId, RoleId, UserId};
use herald_types::session::EndOutcome;

use crate::chat::ChatClient;
use crate::session::announce;
use crate::session::tracker::SessionTracker;
use crate::storage::RecordStore;

/// How long the "session ended" notice stays up before deletion.
const DEFAULT_ENDED_NOTICE_TTL: Duration = Duration::from_secs(10);

/// The fixed guild, channel, and optional ping role this bot serves.
#[derive(Debug, Clone, Copy)]
pub struct GuildBinding {
    pub guild: GuildId,
    pub channel: ChannelId,
    pub ping_role: Option<RoleId>,
}

/// Orchestrates session start/end/schedule against the chat platform.
pub struct SessionLifecycle<S: RecordStore, C: ChatClient> {
    chat: C,
    tracker: Mutex<SessionTracker<S>>,
    binding: GuildBinding,
    style: AnnouncementStyle,
    ended_notice_ttl: Duration,
}

impl<S: RecordStore, C: ChatClient> SessionLifecycle<S, C> {
    pub fn new(
        chat: C,
        tracker: SessionTracker<S>,
        binding: GuildBinding,
        style: AnnouncementStyle,
    ) -> Self {
        Self {
            chat,
            tracker: Mutex::new(tracker),
            binding,
            style,
            ended_notice_ttl: DEFAULT_ENDED_NOTICE_TTL,
        }
    }

    /// Override the ended-notice delay.
    pub fn with_ended_notice_ttl(mut self, ttl: Duration) -> Self {
        self.ended_notice_ttl = ttl;
        self
    }

    /// Start a session: retire the previously tracked message if it still
    /// exists, post the started announcement, and track its ID.
    ///
    /// A previous message that is already gone is not an error -- the
    /// desired end state ("no stale message") already holds.
    pub async fn start(&self, started_by: UserId) -> Result<MessageId, LifecycleError> {
        let mut tracker = self.tracker.lock().await;

        if let Some(previous) = tracker.current() {
            match self.chat.delete_message(self.binding.channel, previous).await {
                Ok(()) => {
                    tracing::debug!(message_id = %previous, "retired previous session message");
                }
                Err(ChatError::NotFound) => {
                    tracing::debug!(message_id = %previous, "previous session message already gone");
                }
                Err(err) => return Err(err.into()),
            }
        }

        let announcement =
            announce::session_started(&self.style, started_by, self.binding.ping_role);
        let id = self
            .chat
            .send_message(self.binding.channel, &announcement)
            .await?;
        tracker.update(Some(id)).await?;

        tracing::info!(message_id = %id, started_by = %started_by, "session started");
        Ok(id)
    }

    /// End the current session.
    ///
    /// With nothing tracked this is a no-op that still reports completion.
    /// Otherwise the tracked message -- unless it was deleted externally in
    /// the meantime -- is edited into the ended notice, deleted after the
    /// ended-notice delay, and replaced by a fresh offline placeholder
    /// whose ID becomes the new tracked value.
    pub async fn end(&self) -> Result<EndOutcome, LifecycleError> {
        let mut tracker = self.tracker.lock().await;

        let Some(tracked) = tracker.current() else {
            tracing::debug!("end requested with no tracked session message");
            return Ok(EndOutcome::NoSessionTracked);
        };

        match self.chat.fetch_message(self.binding.channel, tracked).await? {
            Some(_) => {
                let notice = announce::session_ended(&self.style);
                match self
                    .chat
                    .edit_message(self.binding.channel, tracked, &notice)
                    .await
                {
                    Ok(()) => {
                        tokio::time::sleep(self.ended_notice_ttl).await;

                        match self.chat.delete_message(self.binding.channel, tracked).await {
                            Ok(()) | Err(ChatError::NotFound) => {}
                            Err(err) => return Err(err.into()),
                        }
                    }
                    // Deleted between the fetch and the edit: nothing left
                    // to show the notice on or to delete later.
                    Err(ChatError::NotFound) => {
                        tracing::debug!(message_id = %tracked, "tracked message vanished before the ended notice");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
            None => {
                tracing::debug!(message_id = %tracked, "tracked message deleted externally");
            }
        }

        let offline = announce::server_offline(&self.style);
        let id = self
            .chat
            .send_message(self.binding.channel, &offline)
            .await?;
        tracker.update(Some(id)).await?;

        tracing::info!(message_id = %id, "session ended, offline placeholder posted");
        Ok(EndOutcome::Ended)
    }

    /// Create a two-hour external scheduled event starting at the given
    /// Unix timestamp (seconds, already absolute -- no local-timezone
    /// interpretation).
    ///
    /// A timestamp that is not a valid instant or not strictly in the
    /// future is rejected before any platform call; neither case mutates
    /// the persisted record.
    pub async fn schedule(
        &self,
        unix_ts: i64,
        scheduled_by: &str,
    ) -> Result<SessionEvent, LifecycleError> {
        let _gate = self.tracker.lock().await;

        let starts_at = DateTime::<Utc>::from_timestamp(unix_ts, 0)
            .ok_or(LifecycleError::InvalidTimestamp(unix_ts))?;
        if starts_at <= Utc::now() {
            return Err(LifecycleError::TimestampInPast(unix_ts));
        }

        let event = announce::scheduled_session(&self.style, starts_at, scheduled_by);
        self.chat
            .create_scheduled_event(self.binding.guild, &event)
            .await?;

        tracing::info!(starts_at = %event.starts_at, "session event scheduled");
        Ok(event)
    }

    /// The currently tracked message, for diagnostics.
    pub async fn tracked_message(&self) -> Option<MessageId> {
        self.tracker.lock().await.current()
    }
}
