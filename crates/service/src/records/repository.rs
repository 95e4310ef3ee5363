use async_trait::async_trait;

use super::domain::Record;
use crate::errors::ServiceError;

/// Store abstraction for records, keyed by record id.
///
/// Implementations must keep the key equal to the stored record's `id`.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Snapshot of all records in listing order.
    async fn list(&self) -> Vec<Record>;
    async fn get(&self, id: &str) -> Result<Record, ServiceError>;
    /// Full replacement at `id`; the record's own `id` is overwritten with `id`.
    async fn put(&self, id: &str, record: Record) -> Record;
    /// Idempotent; returns whether a record was removed.
    async fn remove(&self, id: &str) -> bool;
    async fn len(&self) -> usize;
}
