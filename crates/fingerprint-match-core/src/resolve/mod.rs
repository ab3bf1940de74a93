//! Identity resolution policy.
//!
//! Orchestrates the matching workflow for one submitted fingerprint:
//! validates the payload, retrieves candidate records, runs the weighted
//! aggregator against each, ranks results, applies acceptance thresholds,
//! and branches behavior for authenticated vs. anonymous subjects.
//!
//! Each resolution request is independent and stateless aside from its
//! storage reads/writes. The anonymous path is read-only by design; the
//! authenticated read-then-write is deliberately non-atomic (last write
//! wins), acceptable because stored records are a best-effort cache of the
//! last known fingerprint, not a source of truth.

pub mod config;

pub use config::ResolutionConfig;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::aggregate::{aggregate_similarity, component_set_only_similarity};
use crate::diff::diff_component_sets;
use crate::error::{CoreError, CoreResult};
use crate::traits::RecordStore;
use crate::types::{CandidateMatch, IdentityKey, MultiFingerprintRecord, StoredIdentity};

/// Outcome of one resolution request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResolutionResult {
    /// Authenticated subject had no stored identity; one was created.
    AuthenticatedNew { identity_key: IdentityKey },
    /// Authenticated subject's stored identity was overwritten in place.
    AuthenticatedUpdated {
        identity_key: IdentityKey,
        similarity: f64,
        /// True when similarity fell below the divergence threshold,
        /// signaling the device/browser profile drifted materially.
        changed: bool,
    },
    /// Anonymous submission matched stored identities; ranked best-first.
    AnonymousMatched { candidates: Vec<CandidateMatch> },
    /// Anonymous submission matched nothing acceptable: a brand-new visitor.
    AnonymousUnmatched,
}

impl ResolutionResult {
    /// Human-readable summary for the caller's UI or logs.
    pub fn summary(&self) -> String {
        match self {
            Self::AuthenticatedNew { .. } => "Stored new fingerprint identity".to_string(),
            Self::AuthenticatedUpdated {
                similarity, changed, ..
            } => {
                if *changed {
                    format!(
                        "Fingerprint updated (similarity {:.1}%); profile diverged materially",
                        similarity
                    )
                } else {
                    format!("Fingerprint updated (similarity {:.1}%)", similarity)
                }
            }
            Self::AnonymousMatched { candidates } => {
                let mut lines = Vec::with_capacity(candidates.len() + 1);
                lines.push(format!("Found {} similar identities:", candidates.len()));
                for (rank, candidate) in candidates.iter().enumerate() {
                    lines.push(format!(
                        "{}. {}: {:.1}%",
                        rank + 1,
                        candidate.display_label,
                        candidate.similarity
                    ));
                }
                lines.join("\n")
            }
            Self::AnonymousUnmatched => {
                "No similar fingerprints found; treating as a brand-new visitor".to_string()
            }
        }
    }
}

/// Outcome of the secondary best-single-match lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum IdentifyOutcome {
    /// A linked subject matched above the strict acceptance threshold.
    Match(CandidateMatch),
    /// Linked subjects exist but none matched strongly enough.
    NoMatch,
    /// No linked subjects are stored at all.
    NoLinkedSubjects,
}

/// The resolution policy over a record store collaborator.
pub struct Resolver<S: RecordStore> {
    store: Arc<S>,
    config: ResolutionConfig,
}

impl<S: RecordStore> Resolver<S> {
    /// Create a resolver with default thresholds.
    pub fn new(store: Arc<S>) -> Self {
        Self::with_config(store, ResolutionConfig::default())
    }

    /// Create a resolver with explicit thresholds.
    pub fn with_config(store: Arc<S>, config: ResolutionConfig) -> Self {
        Self { store, config }
    }

    pub fn config(&self) -> &ResolutionConfig {
        &self.config
    }

    /// Resolve one submitted fingerprint.
    ///
    /// With a subject key the submission is stored or updated under that
    /// subject; without one it is matched read-only against every stored
    /// identity.
    ///
    /// # Errors
    ///
    /// - [`CoreError::InvalidSubmission`] before any storage access when the
    ///   payload carries neither a component set nor a canvas payload.
    /// - [`CoreError::StorageUnavailable`] when the record store fails;
    ///   retryable, no partial state committed.
    pub async fn resolve(
        &self,
        submission: &MultiFingerprintRecord,
        subject_key: Option<&str>,
    ) -> CoreResult<ResolutionResult> {
        Self::validate_submission(submission)?;

        match subject_key {
            Some(subject) => self.resolve_authenticated(submission, subject).await,
            None => self.resolve_anonymous(submission).await,
        }
    }

    /// Secondary lookup: the single most likely linked subject for a
    /// submission, using the legacy component-set-only score against linked
    /// identities with the strict `linked_accept` threshold.
    pub async fn identify(
        &self,
        submission: &MultiFingerprintRecord,
    ) -> CoreResult<IdentifyOutcome> {
        if !submission.has_components() {
            return Err(CoreError::InvalidSubmission(
                "identification requires a non-empty component set".to_string(),
            ));
        }

        let identities = self.store.get_all().await?;
        let linked: Vec<&StoredIdentity> = identities
            .iter()
            .filter(|identity| identity.linked_subject.is_some())
            .collect();
        if linked.is_empty() {
            return Ok(IdentifyOutcome::NoLinkedSubjects);
        }

        let mut best: Option<CandidateMatch> = None;
        for identity in linked {
            let similarity = match component_set_only_similarity(&identity.record, submission) {
                Ok(similarity) => similarity,
                Err(error) => {
                    warn!(key = %identity.key, %error, "skipping unscorable linked identity");
                    continue;
                }
            };
            if best
                .as_ref()
                .map_or(true, |current| similarity > current.similarity)
            {
                best = Some(CandidateMatch {
                    identity_key: identity.key,
                    display_label: identity.display_label(),
                    similarity,
                });
            }
        }

        match best {
            Some(candidate) if candidate.similarity >= self.config.linked_accept => {
                info!(
                    label = %candidate.display_label,
                    similarity = candidate.similarity,
                    "high-confidence subject identification"
                );
                Ok(IdentifyOutcome::Match(candidate))
            }
            _ => Ok(IdentifyOutcome::NoMatch),
        }
    }

    fn validate_submission(submission: &MultiFingerprintRecord) -> CoreResult<()> {
        if !submission.has_components() && !submission.has_canvas() {
            return Err(CoreError::InvalidSubmission(
                "submission carries neither a component set nor a canvas payload".to_string(),
            ));
        }
        Ok(())
    }

    async fn resolve_authenticated(
        &self,
        submission: &MultiFingerprintRecord,
        subject: &str,
    ) -> CoreResult<ResolutionResult> {
        match self.store.get_by_linked_subject(subject).await? {
            None => {
                let identity =
                    StoredIdentity::new(submission.clone(), Some(subject.to_string()));
                let key = self.store.upsert(identity).await?;
                info!(subject, key = %key, "stored new fingerprint identity");
                Ok(ResolutionResult::AuthenticatedNew { identity_key: key })
            }
            Some(mut identity) => {
                let similarity = aggregate_similarity(&identity.record, submission)?;
                let changes =
                    diff_component_sets(&identity.record.components, &submission.components);
                debug!(
                    subject,
                    similarity,
                    changed_components = changes.len(),
                    ?changes,
                    "refreshing stored fingerprint"
                );

                identity.record = submission.clone();
                identity.last_seen = chrono::Utc::now();
                let key = self.store.upsert(identity).await?;

                let changed = similarity < self.config.divergence;
                if changed {
                    info!(subject, similarity, "fingerprint profile diverged materially");
                }
                Ok(ResolutionResult::AuthenticatedUpdated {
                    identity_key: key,
                    similarity,
                    changed,
                })
            }
        }
    }

    async fn resolve_anonymous(
        &self,
        submission: &MultiFingerprintRecord,
    ) -> CoreResult<ResolutionResult> {
        let identities = self.store.get_all().await?;

        // Pure O(n) scan; each comparison is side-effect free.
        let mut scored: Vec<CandidateMatch> = Vec::new();
        for identity in &identities {
            let similarity = match aggregate_similarity(&identity.record, submission) {
                Ok(similarity) => similarity,
                Err(error) => {
                    warn!(key = %identity.key, %error, "skipping unscorable stored identity");
                    continue;
                }
            };
            debug!(
                key = %identity.key,
                label = %identity.display_label(),
                similarity,
                "scored stored identity"
            );
            if similarity > 0.0 {
                scored.push(CandidateMatch {
                    identity_key: identity.key,
                    display_label: identity.display_label(),
                    similarity,
                });
            }
        }

        // Stable sort: similarity ties keep first-seen storage order.
        scored.sort_by(|a, b| {
            b.similarity
                .partial_cmp(&a.similarity)
                .unwrap_or(Ordering::Equal)
        });
        scored.truncate(self.config.top_candidates);

        match scored.first() {
            Some(best) if best.similarity >= self.config.anonymous_accept => {
                info!(
                    candidates = scored.len(),
                    best = best.similarity,
                    "anonymous submission matched stored identities"
                );
                Ok(ResolutionResult::AnonymousMatched { candidates: scored })
            }
            _ => {
                debug!("no stored identity above the anonymous acceptance threshold");
                Ok(ResolutionResult::AnonymousUnmatched)
            }
        }
    }
}
