//! Domain types: fingerprint components, full records, stored identities.

pub mod component;
pub mod identity;
pub mod record;

pub use component::{ComponentSet, FingerprintComponent};
pub use identity::{CandidateMatch, IdentityKey, StoredIdentity};
pub use record::{
    AudioInfo, CustomAttributes, FontsInfo, HardwareInfo, MultiFingerprintRecord, ScreenInfo,
    WebglInfo,
};
