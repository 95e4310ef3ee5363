use std::{collections::HashMap, hash::Hash, sync::Arc};
use tokio::sync::Mutex;

/// Process-local key-value map guarded by a single mutex.
///
/// Every read and write goes through the same lock, so operations are
/// linearized. Nothing is persisted; contents live as long as the last clone.
#[derive(Clone)]
pub struct MemoryMapStore<K, V> {
    inner: Arc<Mutex<HashMap<K, V>>>,
}

impl<K, V> Default for MemoryMapStore<K, V> {
    fn default() -> Self {
        Self { inner: Arc::new(Mutex::new(HashMap::new())) }
    }
}

impl<K, V> MemoryMapStore<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of every value, taken under one lock acquisition.
    pub async fn values(&self) -> Vec<V> {
        let map = self.inner.lock().await;
        map.values().cloned().collect()
    }

    pub async fn get(&self, key: &K) -> Option<V> {
        let map = self.inner.lock().await;
        map.get(key).cloned()
    }

    /// Insert or overwrite; returns the previous value, if any.
    pub async fn insert(&self, key: K, value: V) -> Option<V> {
        let mut map = self.inner.lock().await;
        map.insert(key, value)
    }

    /// Remove a key; returns whether it existed.
    pub async fn remove(&self, key: &K) -> bool {
        let mut map = self.inner.lock().await;
        map.remove(key).is_some()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }
}
