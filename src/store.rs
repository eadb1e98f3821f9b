use async_trait::async_trait;
use dashmap::DashMap;

use crate::cache::{CacheEntry, Fingerprint};
use crate::error::StoreError;

/// Key-value store backing the response cache.
///
/// Implementations must make a single `get`/`put` atomic; nothing here
/// needs cross-entry transactions.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, fingerprint: &Fingerprint) -> Result<Option<CacheEntry>, StoreError>;
    async fn put(&self, entry: CacheEntry) -> Result<(), StoreError>;
    async fn len(&self) -> Result<usize, StoreError>;
}

// In-process store, unbounded
#[derive(Default)]
pub struct MemoryStore {
    entries: DashMap<Fingerprint, CacheEntry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, fingerprint: &Fingerprint) -> Result<Option<CacheEntry>, StoreError> {
        Ok(self.entries.get(fingerprint).map(|e| e.value().clone()))
    }

    async fn put(&self, entry: CacheEntry) -> Result<(), StoreError> {
        self.entries.insert(entry.fingerprint.clone(), entry);
        Ok(())
    }

    async fn len(&self) -> Result<usize, StoreError> {
        Ok(self.entries.len())
    }
}
