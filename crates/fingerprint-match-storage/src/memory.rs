//! In-memory implementation of RecordStore.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

use fingerprint_match_core::error::CoreResult;
use fingerprint_match_core::traits::RecordStore;
use fingerprint_match_core::types::{IdentityKey, StoredIdentity};

/// Insertion-ordered in-memory identity store.
///
/// Uses a simple vector behind an `RwLock` for concurrent access. Reads
/// (including the anonymous full scan) proceed concurrently; writes take
/// the lock exclusively. Records keep their first-seen position across
/// upserts, preserving the tie-break order the resolver depends on.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    identities: Arc<RwLock<Vec<StoredIdentity>>>,
}

impl MemoryRecordStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            identities: Arc::new(RwLock::new(Vec::new())),
        }
    }
}

#[async_trait]
impl RecordStore for MemoryRecordStore {
    async fn get_by_linked_subject(&self, subject: &str) -> CoreResult<Option<StoredIdentity>> {
        let identities = self.identities.read().await;
        Ok(identities
            .iter()
            .find(|identity| identity.linked_subject.as_deref() == Some(subject))
            .cloned())
    }

    async fn get_all(&self) -> CoreResult<Vec<StoredIdentity>> {
        let identities = self.identities.read().await;
        Ok(identities.clone())
    }

    async fn upsert(&self, identity: StoredIdentity) -> CoreResult<IdentityKey> {
        let key = identity.key;
        let mut identities = self.identities.write().await;
        match identities.iter_mut().find(|existing| existing.key == key) {
            Some(existing) => {
                *existing = identity;
                debug!(key = %key, "overwrote stored identity");
            }
            None => {
                identities.push(identity);
                debug!(key = %key, "inserted stored identity");
            }
        }
        Ok(key)
    }

    async fn touch_last_seen(&self, key: IdentityKey) -> CoreResult<bool> {
        let mut identities = self.identities.write().await;
        match identities.iter_mut().find(|existing| existing.key == key) {
            Some(existing) => {
                existing.last_seen = chrono::Utc::now();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn identity_count_sync(&self) -> usize {
        // try_read for sync access; may undercount during writes.
        self.identities.try_read().map(|i| i.len()).unwrap_or(0)
    }

    fn linked_count_sync(&self) -> usize {
        self.identities
            .try_read()
            .map(|identities| {
                identities
                    .iter()
                    .filter(|identity| identity.linked_subject.is_some())
                    .count()
            })
            .unwrap_or(0)
    }
}
