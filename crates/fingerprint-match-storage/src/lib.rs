//! Record store adapters for the fingerprint correlation engine.
//!
//! Implements the [`fingerprint_match_core::RecordStore`] contract. The
//! in-memory adapter keeps identities in first-seen order, which candidate
//! ranking relies on for tie-breaking.

mod memory;

pub use memory::MemoryRecordStore;
