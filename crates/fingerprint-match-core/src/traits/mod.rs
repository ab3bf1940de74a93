//! Trait contracts consumed by the resolution policy.

mod record_store;

pub use record_store::RecordStore;
