//! In-memory fakes for the storage and chat ports, shared across the
//! crate's unit tests.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use herald_types::chat::{OutboundMessage, SessionEvent};
use herald_types::error::{ChatError, StoreError};
use herald_types::id::{ChannelId, GuildId, MessageId};
use herald_types::session::SessionRecord;

use crate::chat::{ChatClient, RemoteMessage};
use crate::storage::RecordStore;

/// In-memory [`RecordStore`]. Clones share the same backing record.
#[derive(Clone)]
pub(crate) struct MemoryStore {
    inner: Arc<MemoryStoreInner>,
}

struct MemoryStoreInner {
    record: Mutex<SessionRecord>,
    saves: AtomicUsize,
    fail_next_save: Mutex<bool>,
}

impl MemoryStore {
    pub(crate) fn new() -> Self {
        Self::with_record(SessionRecord::default())
    }

    pub(crate) fn with_record(record: SessionRecord) -> Self {
        Self {
            inner: Arc::new(MemoryStoreInner {
                record: Mutex::new(record),
                saves: AtomicUsize::new(0),
                fail_next_save: Mutex::new(false),
            }),
        }
    }

    pub(crate) fn stored(&self) -> SessionRecord {
        *self.inner.record.lock().unwrap()
    }

    pub(crate) fn save_count(&self) -> usize {
        self.inner.saves.load(Ordering::SeqCst)
    }

    pub(crate) fn fail_next_save(&self) {
        *self.inner.fail_next_save.lock().unwrap() = true;
    }
}

impl RecordStore for MemoryStore {
    async fn load(&self) -> Result<SessionRecord, StoreError> {
        Ok(self.stored())
    }

    async fn save(&self, record: &SessionRecord) -> Result<(), StoreError> {
        let mut fail = self.inner.fail_next_save.lock().unwrap();
        if *fail {
            *fail = false;
            return Err(StoreError::Io(std::io::Error::other("injected save failure")));
        }
        *self.inner.record.lock().unwrap() = *record;
        self.inner.saves.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// In-memory [`ChatClient`] backed by a map of live messages. Clones share
/// state, so tests can hand one clone to the lifecycle and inspect the
/// other.
#[derive(Clone)]
pub(crate) struct FakeChat {
    state: Arc<Mutex<FakeChatState>>,
}

#[derive(Default)]
struct FakeChatState {
    next_id: u64,
    messages: BTreeMap<u64, OutboundMessage>,
    events: Vec<SessionEvent>,
    statuses: Vec<String>,
    presence_attempts: usize,
    fail_sends: bool,
    fail_presence: bool,
    vanish_before_edit: bool,
}

impl FakeChat {
    pub(crate) fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(FakeChatState {
                next_id: 1000,
                ..FakeChatState::default()
            })),
        }
    }

    pub(crate) fn fail_sends(&self, fail: bool) {
        self.state.lock().unwrap().fail_sends = fail;
    }

    pub(crate) fn fail_presence(&self, fail: bool) {
        self.state.lock().unwrap().fail_presence = fail;
    }

    /// Make the next edit find its target deleted out from under it.
    pub(crate) fn vanish_before_edit(&self) {
        self.state.lock().unwrap().vanish_before_edit = true;
    }

    pub(crate) fn message_ids(&self) -> Vec<u64> {
        self.state.lock().unwrap().messages.keys().copied().collect()
    }

    pub(crate) fn message(&self, id: u64) -> Option<OutboundMessage> {
        self.state.lock().unwrap().messages.get(&id).cloned()
    }

    pub(crate) fn events(&self) -> Vec<SessionEvent> {
        self.state.lock().unwrap().events.clone()
    }

    pub(crate) fn statuses(&self) -> Vec<String> {
        self.state.lock().unwrap().statuses.clone()
    }

    pub(crate) fn presence_attempts(&self) -> usize {
        self.state.lock().unwrap().presence_attempts
    }
}

impl ChatClient for FakeChat {
    async fn send_message(
        &self,
        _channel: ChannelId,
        message: &OutboundMessage,
    ) -> Result<MessageId, ChatError> {
        let mut state = self.state.lock().unwrap();
        if state.fail_sends {
            return Err(ChatError::Unavailable("injected send failure".to_string()));
        }
        state.next_id += 1;
        let id = state.next_id;
        state.messages.insert(id, message.clone());
        Ok(MessageId(id))
    }

    async fn fetch_message(
        &self,
        _channel: ChannelId,
        id: MessageId,
    ) -> Result<Option<RemoteMessage>, ChatError> {
        let state = self.state.lock().unwrap();
        Ok(state
            .messages
            .contains_key(&id.get())
            .then_some(RemoteMessage { id }))
    }

    async fn edit_message(
        &self,
        _channel: ChannelId,
        id: MessageId,
        message: &OutboundMessage,
    ) -> Result<(), ChatError> {
        let mut state = self.state.lock().unwrap();
        if state.vanish_before_edit {
            state.vanish_before_edit = false;
            state.messages.remove(&id.get());
            return Err(ChatError::NotFound);
        }
        match state.messages.get_mut(&id.get()) {
            Some(existing) => {
                *existing = message.clone();
                Ok(())
            }
            None => Err(ChatError::NotFound),
        }
    }

    async fn delete_message(
        &self,
        _channel: ChannelId,
        id: MessageId,
    ) -> Result<(), ChatError> {
        let mut state = self.state.lock().unwrap();
        match state.messages.remove(&id.get()) {
            Some(_) => Ok(()),
            None => Err(ChatError::NotFound),
        }
    }

    async fn create_scheduled_event(
        &self,
        _guild: GuildId,
        event: &SessionEvent,
    ) -> Result<(), ChatError> {
        self.state.lock().unwrap().events.push(event.clone());
        Ok(())
    }

    async fn update_presence(&self, status: &str) -> Result<(), ChatError> {
        let mut state = self.state.lock().unwrap();
        state.presence_attempts += 1;
        if state.fail_presence {
            return Err(ChatError::Unavailable(
                "injected presence failure".to_string(),
            ));
        }
        state.statuses.push(status.to_string());
        Ok(())
    }
}
