//! The persisted session record.

use serde::{Deserialize, Serialize};

use crate::id::MessageId;

/// The sole persisted entity: which message currently represents the
/// session's status in the announcement channel.
///
/// The ID, when present, refers to the most recently sent session-status
/// message (started, ended, or offline placeholder) -- not necessarily the
/// most recent message in the channel. A missing `session_msg_id` key in
/// the stored JSON deserializes to `None`, and unknown keys are ignored, so
/// older builds can read records written by newer ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionRecord {
    /// The currently tracked status message, if any.
    #[serde(default)]
    pub session_msg_id: Option<MessageId>,
}

impl SessionRecord {
    /// A record tracking the given message.
    pub fn tracking(id: MessageId) -> Self {
        Self {
            session_msg_id: Some(id),
        }
    }
}

/// Outcome of a completed `end` operation, reported back to the invoker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EndOutcome {
    /// A tracked message existed and the session was wound down.
    Ended,
    /// Nothing was tracked; the operation completed as a no-op.
    NoSessionTracked,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_record_tracks_nothing() {
        let record = SessionRecord::default();
        assert_eq!(record.session_msg_id, None);
    }

    #[test]
    fn test_record_serializes_to_flat_json_object() {
        let record = SessionRecord::tracking(MessageId(1456443628770820237));
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"session_msg_id":1456443628770820237}"#);
    }

    #[test]
    fn test_null_id_round_trips() {
        let json = r#"{"session_msg_id":null}"#;
        let record: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.session_msg_id, None);
        assert_eq!(serde_json::to_string(&record).unwrap(), json);
    }

    #[test]
    fn test_missing_key_reads_as_null() {
        let record: SessionRecord = serde_json::from_str("{}").unwrap();
        assert_eq!(record.session_msg_id, None);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let json = r#"{"session_msg_id":7,"added_in_some_future_version":true}"#;
        let record: SessionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.session_msg_id, Some(MessageId(7)));
    }
}
