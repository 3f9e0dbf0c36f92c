//! JSON file implementation of the record store.

use std::path::PathBuf;

use herald_core::storage::RecordStore;
use herald_types::error::StoreError;
use herald_types::session::SessionRecord;

/// File-backed [`RecordStore`] holding the single session record as a flat
/// JSON object.
///
/// Loading fails soft: an absent or empty file is initialized with the
/// default record and the default is returned. A file that exists but does
/// not parse is [`StoreError::Corrupt`] -- the caller treats that as fatal
/// at startup, and the file is left untouched so nothing is lost silently.
///
/// No locking: exactly one process owns the file and all access happens
/// sequentially behind the lifecycle gate.
pub struct JsonRecordStore {
    path: PathBuf,
}

impl JsonRecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The file backing this store.
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    async fn bootstrap(&self) -> Result<SessionRecord, StoreError> {
        let record = SessionRecord::default();
        self.save(&record).await?;
        tracing::info!(path = %self.path.display(), "initialized session record");
        Ok(record)
    }
}

impl RecordStore for JsonRecordStore {
    async fn load(&self) -> Result<SessionRecord, StoreError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return self.bootstrap().await;
            }
            Err(err) => return Err(err.into()),
        };

        if content.trim().is_empty() {
            return self.bootstrap().await;
        }

        serde_json::from_str(&content).map_err(|err| StoreError::Corrupt {
            path: self.path.display().to_string(),
            reason: err.to_string(),
        })
    }

    async fn save(&self, record: &SessionRecord) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(record)
            .map_err(|err| StoreError::Io(std::io::Error::other(err)))?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}
