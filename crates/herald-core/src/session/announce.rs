//! Construction of the three session-status messages and the scheduled
//! event payload, from the configured announcement style.
//!
//! The role notification is embedded directly in the started announcement's
//! content with an explicit mention allowlist, rather than sent as a
//! separate short-lived ping message. The mention stays visible for as long
//! as the announcement exists.

use chrono::{DateTime, Duration, Utc};

use herald_types::chat::{Embed, OutboundMessage, SessionEvent, color};
use herald_types::config::AnnouncementStyle;
use herald_types::id::{RoleId, UserId};

/// Fixed duration of a scheduled session event.
const SESSION_EVENT_HOURS: i64 = 2;

/// The "session started" announcement, mentioning the ping role when one
/// is configured.
pub fn session_started(
    style: &AnnouncementStyle,
    started_by: UserId,
    ping_role: Option<RoleId>,
) -> OutboundMessage {
    let embed = Embed {
        title: style.title.clone(),
        description: format!(
            "A session has been started by: <@{started_by}>\n\nPlease join with code: **{}**",
            style.join_code
        ),
        color: color::STARTED,
        image_url: style.started_image_url.clone(),
    };

    let (content, mentionable_roles) = match ping_role {
        Some(role) => (Some(format!("<@&{role}>")), vec![role]),
        None => (None, Vec::new()),
    };

    OutboundMessage {
        content,
        embed: Some(embed),
        mentionable_roles,
    }
}

/// The transient "session ended" notice the announcement is edited into.
pub fn session_ended(style: &AnnouncementStyle) -> OutboundMessage {
    OutboundMessage::embed(Embed {
        title: "Session Ended".to_string(),
        description: "The session has ended.\nThanks for participating!".to_string(),
        color: color::ENDED,
        image_url: style.ended_image_url.clone(),
    })
}

/// The idle placeholder posted after a session ends.
pub fn server_offline(style: &AnnouncementStyle) -> OutboundMessage {
    OutboundMessage::embed(Embed {
        title: "Server Offline".to_string(),
        description: "There is no session at the moment.\nPlease wait for the next one."
            .to_string(),
        color: color::OFFLINE,
        image_url: style.offline_image_url.clone(),
    })
}

/// The scheduled event payload for a session starting at `starts_at`.
pub fn scheduled_session(
    style: &AnnouncementStyle,
    starts_at: DateTime<Utc>,
    scheduled_by: &str,
) -> SessionEvent {
    SessionEvent {
        name: "Session".to_string(),
        description: format!("A server session created by {scheduled_by}"),
        starts_at,
        ends_at: starts_at + Duration::hours(SESSION_EVENT_HOURS),
        location: style.event_location.clone(),
    }
}
