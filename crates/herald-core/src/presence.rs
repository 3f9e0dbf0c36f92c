//! Presence rotation.
//!
//! Cycles the bot's displayed status text through a fixed ordered list on a
//! recurring interval. Purely process-local: the index resets to the start
//! of the list on restart. A failing presence update is logged and the
//! rotation continues on the next tick -- it never takes down the host.

use std::time::Duration;

use tokio::time::MissedTickBehavior;
use tokio_util::sync::CancellationToken;

use crate::chat::ChatClient;

/// Rotates through a non-empty list of status strings.
pub struct PresenceRotator {
    statuses: Vec<String>,
    period: Duration,
}

impl PresenceRotator {
    /// Returns `None` for an empty status list (rotation disabled).
    pub fn new(statuses: Vec<String>, period: Duration) -> Option<Self> {
        if statuses.is_empty() {
            return None;
        }
        Some(Self { statuses, period })
    }

    /// Run the rotation until cancelled. The first status is pushed
    /// immediately on startup, then one per period.
    pub async fn run<C: ChatClient>(&self, chat: &C, cancel: CancellationToken) {
        let mut ticker = tokio::time::interval(self.period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut index = 0usize;

        loop {
            tokio::select! {
                _ = cancel.cancelled() => break,
                _ = ticker.tick() => {
                    let status = &self.statuses[index];
                    if let Err(err) = chat.update_presence(status).await {
                        tracing::warn!(error = %err, status, "presence update failed");
                    }
                    index = (index + 1) % self.statuses.len();
                }
            }
        }
    }
}
