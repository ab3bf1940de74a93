//! Fingerprint Match Core Library
//!
//! Multi-signal identity correlation over browser fingerprints: given a
//! newly observed fingerprint composed of several independent
//! sub-fingerprints (canvas render hash, WebGL parameters, audio-stack
//! hash, font enumeration, hardware descriptors, and a catch-all component
//! bundle), decide whether it matches a previously stored identity and, if
//! not certain, rank the most plausible candidates.
//!
//! # Architecture
//!
//! - `types` — fingerprint components, full records, stored identities
//! - `compare` — pure per-category similarity comparators
//! - `aggregate` — fixed-weight combination into one 0-100 score
//! - `diff` — component-level change auditing
//! - `resolve` — the resolution policy over a [`RecordStore`] collaborator
//!
//! This is a best-effort correlation heuristic, not a security boundary:
//! false positives and negatives are tolerated by design.
//!
//! # Example
//!
//! ```
//! use fingerprint_match_core::compare::set_similarity;
//!
//! let old = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
//! let new = ["B", "C", "D"].iter().map(|s| s.to_string()).collect();
//! assert_eq!(set_similarity(&old, &new), 50.0);
//! ```

pub mod aggregate;
pub mod compare;
pub mod config;
pub mod diff;
pub mod error;
pub mod resolve;
pub mod traits;
pub mod types;

// Re-exports for convenience
pub use aggregate::{aggregate_similarity, component_set_only_similarity, Category};
pub use config::Config;
pub use diff::{diff_component_sets, ComponentChange};
pub use error::{CoreError, CoreResult};
pub use resolve::{IdentifyOutcome, ResolutionConfig, ResolutionResult, Resolver};
pub use traits::RecordStore;
pub use types::{
    CandidateMatch, ComponentSet, FingerprintComponent, IdentityKey, MultiFingerprintRecord,
    StoredIdentity,
};
