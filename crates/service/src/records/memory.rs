use async_trait::async_trait;
use tracing::debug;

use super::domain::Record;
use super::repository::RecordStore;
use crate::errors::ServiceError;
use crate::storage::memory_map_store::MemoryMapStore;

/// In-memory record store; last write wins on a shared id.
#[derive(Clone, Default)]
pub struct MemoryRecordStore {
    store: MemoryMapStore<String, Record>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn list(&self) -> Vec<Record> {
        let mut records = self.store.values().await;
        records.sort_by(Record::listing_order);
        records
    }

    async fn get(&self, id: &str) -> Result<Record, ServiceError> {
        self.store
            .get(&id.to_string())
            .await
            .ok_or_else(|| ServiceError::not_found(id))
    }

    async fn put(&self, id: &str, mut record: Record) -> Record {
        record.id = id.to_string();
        let replaced = self.store.insert(record.id.clone(), record.clone()).await.is_some();
        debug!(event = "record_put", %id, replaced, "record stored");
        record
    }

    async fn remove(&self, id: &str) -> bool {
        let existed = self.store.remove(&id.to_string()).await;
        debug!(event = "record_removed", %id, existed, "record delete");
        existed
    }

    async fn len(&self) -> usize {
        self.store.len().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn cow(id: &str, name: &str) -> Record {
        Record { id: id.into(), name: name.into(), ..Default::default() }
    }

    #[tokio::test]
    async fn put_then_get_round_trips() -> Result<(), anyhow::Error> {
        let store = MemoryRecordStore::new();
        let rec = Record { finder: "Farmer Joe".into(), ..cow("x", "Bessie") };
        store.put("x", rec.clone()).await;
        assert_eq!(store.get("x").await?, rec);
        Ok(())
    }

    #[tokio::test]
    async fn get_unknown_is_not_found() {
        let store = MemoryRecordStore::new();
        assert!(matches!(store.get("nope").await, Err(ServiceError::NotFound(id)) if id == "nope"));
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn put_uses_key_as_id_and_replaces() -> Result<(), anyhow::Error> {
        let store = MemoryRecordStore::new();
        store.put("x", Record { date: "2020-01-01".into(), ..cow("x", "Bessie") }).await;
        let stored = store.put("x", cow("other", "Clarabelle")).await;
        assert_eq!(stored.id, "x");

        let got = store.get("x").await?;
        assert_eq!(got, cow("x", "Clarabelle"));
        assert!(store.get("other").await.is_err());
        Ok(())
    }

    #[tokio::test]
    async fn empty_id_is_a_valid_key() -> Result<(), anyhow::Error> {
        let store = MemoryRecordStore::new();
        store.put("", cow("", "Nameless")).await;
        assert_eq!(store.get("").await?.name, "Nameless");
        Ok(())
    }

    #[tokio::test]
    async fn remove_is_idempotent() {
        let store = MemoryRecordStore::new();
        store.put("x", cow("x", "Bessie")).await;
        assert!(store.remove("x").await);
        assert!(!store.remove("x").await);
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn list_is_sorted_regardless_of_insert_order() {
        let store = MemoryRecordStore::new();
        store.put("c", cow("c", "clarabelle")).await;
        store.put("a", cow("a", "Annabelle")).await;
        store.put("b", cow("b", "bessie")).await;
        let ids: Vec<_> = store.list().await.into_iter().map(|r| r.id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_puts_are_not_lost() -> Result<(), anyhow::Error> {
        let store: Arc<dyn RecordStore> = Arc::new(MemoryRecordStore::new());
        let mut tasks = Vec::new();
        for i in 0..100 {
            let store = Arc::clone(&store);
            tasks.push(tokio::spawn(async move {
                let id = format!("cow-{i}");
                store.put(&id, cow(&id, &format!("name {i}"))).await;
            }));
        }
        for t in tasks {
            t.await?;
        }
        assert_eq!(store.len().await, 100);
        assert_eq!(store.list().await.len(), 100);
        Ok(())
    }
}
