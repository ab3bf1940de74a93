//! Record store trait: the minimal persistence contract the resolver needs.

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::{IdentityKey, StoredIdentity};

/// Keyed persistence for stored fingerprint identities.
///
/// The resolver treats this as an external collaborator: any failure maps to
/// `CoreError::StorageUnavailable` and aborts the request retryably, with no
/// partial state committed.
///
/// # Ordering
///
/// `get_all` must return identities in first-seen order. Candidate ranking
/// breaks similarity ties by this order, so it is part of the contract.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Fetch the one identity linked to an authenticated subject, if any.
    async fn get_by_linked_subject(&self, subject: &str) -> CoreResult<Option<StoredIdentity>>;

    /// Fetch every stored identity, linked or not, in first-seen order.
    async fn get_all(&self) -> CoreResult<Vec<StoredIdentity>>;

    /// Insert or overwrite an identity by key, returning the key.
    async fn upsert(&self, identity: StoredIdentity) -> CoreResult<IdentityKey>;

    /// Refresh an identity's last-seen timestamp.
    ///
    /// Returns false when no identity carries the key.
    async fn touch_last_seen(&self, key: IdentityKey) -> CoreResult<bool>;

    /// Current identity count. Sync for cheap use in stats paths; may
    /// undercount during concurrent writes.
    fn identity_count_sync(&self) -> usize;

    /// Count of identities linked to a subject. Sync, same caveat.
    fn linked_count_sync(&self) -> usize;
}
