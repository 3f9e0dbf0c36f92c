//! In-memory mirror of the persisted session record.

use herald_types::error::StoreError;
use herald_types::id::MessageId;
use herald_types::session::SessionRecord;

use crate::storage::RecordStore;

/// Owns the session record: an in-memory copy plus write-through to the
/// backing [`RecordStore`]. No other component touches the store directly.
///
/// `update` saves to durable storage before touching the in-memory value
/// and does not suspend between the two steps, so a failed save leaves the
/// mirror on the last durable state and no observer ever sees memory and
/// disk disagree.
pub struct SessionTracker<S: RecordStore> {
    store: S,
    current: Option<MessageId>,
}

impl<S: RecordStore> SessionTracker<S> {
    /// Load the tracker from the store. Corrupt persisted state propagates
    /// here and is treated as fatal by the caller at startup.
    pub async fn load(store: S) -> Result<Self, StoreError> {
        let record = store.load().await?;
        Ok(Self {
            store,
            current: record.session_msg_id,
        })
    }

    /// The currently tracked status message, if any.
    pub fn current(&self) -> Option<MessageId> {
        self.current
    }

    /// Replace the tracked message ID, persisting the full record.
    pub async fn update(&mut self, id: Option<MessageId>) -> Result<(), StoreError> {
        self.store
            .save(&SessionRecord { session_msg_id: id })
            .await?;
        self.current = id;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryStore;

    #[tokio::test]
    async fn test_load_mirrors_stored_record() {
        let store = MemoryStore::with_record(SessionRecord::tracking(MessageId(41)));
        let tracker = SessionTracker::load(store).await.unwrap();
        assert_eq!(tracker.current(), Some(MessageId(41)));
    }

    #[tokio::test]
    async fn test_update_writes_through() {
        let store = MemoryStore::new();
        let mut tracker = SessionTracker::load(store.clone()).await.unwrap();

        tracker.update(Some(MessageId(7))).await.unwrap();

        assert_eq!(tracker.current(), Some(MessageId(7)));
        assert_eq!(store.stored().session_msg_id, Some(MessageId(7)));
    }

    #[tokio::test]
    async fn test_update_round_trips_through_a_fresh_load() {
        let store = MemoryStore::new();
        let mut tracker = SessionTracker::load(store.clone()).await.unwrap();
        tracker.update(Some(MessageId(123))).await.unwrap();

        let reloaded = SessionTracker::load(store).await.unwrap();
        assert_eq!(reloaded.current(), Some(MessageId(123)));
    }

    #[tokio::test]
    async fn test_failed_save_leaves_mirror_untouched() {
        let store = MemoryStore::with_record(SessionRecord::tracking(MessageId(1)));
        store.fail_next_save();
        let mut tracker = SessionTracker::load(store.clone()).await.unwrap();

        let result = tracker.update(Some(MessageId(2))).await;

        assert!(result.is_err());
        assert_eq!(tracker.current(), Some(MessageId(1)));
        assert_eq!(store.stored().session_msg_id, Some(MessageId(1)));
    }

    #[tokio::test]
    async fn test_clearing_the_tracked_message() {
        let store = MemoryStore::with_record(SessionRecord::tracking(MessageId(9)));
        let mut tracker = SessionTracker::load(store.clone()).await.unwrap();

        tracker.update(None).await.unwrap();

        assert_eq!(tracker.current(), None);
        assert_eq!(store.stored().session_msg_id, None);
    }
}
