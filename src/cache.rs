use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::error::StoreError;
use crate::metrics::{CACHE_HITS, CACHE_MISSES, CACHE_SIZE};
use crate::store::CacheStore;

/// SHA-256 of the prompt text, lowercase hex.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of(prompt: &str) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(prompt.as_bytes());
        Fingerprint(format!("{:x}", hasher.finalize()))
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// Cache entry with timestamp, never mutated once written
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheEntry {
    pub fingerprint: Fingerprint,
    pub prompt: String,
    pub response: String,
    pub created_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(prompt: &str, response: &str) -> Self {
        Self {
            fingerprint: Fingerprint::of(prompt),
            prompt: prompt.to_string(),
            response: response.to_string(),
            created_at: Utc::now(),
        }
    }
}

/// Prompt -> completion cache over an injected backing store.
#[derive(Clone)]
pub struct ResponseCache {
    store: Arc<dyn CacheStore>,
}

impl ResponseCache {
    pub fn new(store: Arc<dyn CacheStore>) -> Self {
        Self { store }
    }

    pub async fn lookup(&self, prompt: &str) -> Result<Option<String>, StoreError> {
        let fingerprint = Fingerprint::of(prompt);
        match self.store.get(&fingerprint).await? {
            Some(entry) => {
                CACHE_HITS.inc();
                debug!(%fingerprint, "cache hit");
                Ok(Some(entry.response))
            }
            None => {
                CACHE_MISSES.inc();
                debug!(%fingerprint, "cache miss");
                Ok(None)
            }
        }
    }

    // Last writer wins; equal prompts map to the same key
    pub async fn store(&self, prompt: &str, response: &str) -> Result<(), StoreError> {
        let entry = CacheEntry::new(prompt, response);
        debug!(fingerprint = %entry.fingerprint, "caching completion");
        self.store.put(entry).await?;
        match self.store.len().await {
            Ok(size) => CACHE_SIZE.set(size as f64),
            Err(e) => debug!(error = %e, "cache size unavailable"),
        }
        Ok(())
    }
}
