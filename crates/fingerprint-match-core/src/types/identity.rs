//! Stored identities and transient candidate matches.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::record::MultiFingerprintRecord;

/// Unique key of a stored fingerprint identity.
pub type IdentityKey = Uuid;

/// A persisted fingerprint identity.
///
/// Lifecycle: created on first submission from an authenticated subject, or
/// on an anonymous submission with no acceptable match; updated in place
/// (record overwritten, last-seen refreshed) on later submissions from the
/// same linked subject. Anonymous matching never creates or mutates records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredIdentity {
    pub key: IdentityKey,
    pub record: MultiFingerprintRecord,
    /// Authenticated subject this identity is linked to; `None` for
    /// anonymous-origin records.
    pub linked_subject: Option<String>,
    pub last_seen: DateTime<Utc>,
}

impl StoredIdentity {
    /// Create a fresh identity with a new key and a current last-seen stamp.
    pub fn new(record: MultiFingerprintRecord, linked_subject: Option<String>) -> Self {
        Self {
            key: Uuid::new_v4(),
            record,
            linked_subject,
            last_seen: Utc::now(),
        }
    }

    /// Human-readable label for candidate lists: the linked subject when
    /// present, otherwise a key-derived placeholder.
    pub fn display_label(&self) -> String {
        match &self.linked_subject {
            Some(subject) => subject.clone(),
            None => {
                let key = self.key.simple().to_string();
                format!("ID-{}", &key[..8])
            }
        }
    }
}

/// One ranked candidate produced during anonymous resolution.
///
/// Transient per request; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateMatch {
    pub identity_key: IdentityKey,
    pub display_label: String,
    /// Aggregate similarity in [0, 100].
    pub similarity: f64,
}
