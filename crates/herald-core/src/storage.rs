//! Record store port.

use herald_types::error::StoreError;
use herald_types::session::SessionRecord;

/// Persistence for the single session record.
///
/// Implementations live in herald-infra (e.g., `JsonRecordStore`).
/// Uses native async fn in traits (Rust 2024 edition, no async_trait macro).
pub trait RecordStore: Send + Sync {
    /// Load the record, failing soft: a store that has never been written
    /// initializes itself with the default record and returns it. A store
    /// whose backing data exists but cannot be parsed must return
    /// [`StoreError::Corrupt`] -- never a silently reset default.
    fn load(&self) -> impl std::future::Future<Output = Result<SessionRecord, StoreError>> + Send;

    /// Overwrite the record in durable storage.
    fn save(
        &self,
        record: &SessionRecord,
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;
}
