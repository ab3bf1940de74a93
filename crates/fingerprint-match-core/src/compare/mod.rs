//! Feature comparators: pure similarity functions, one per sub-fingerprint
//! category, each producing a score in [0, 100] for a pair of same-category
//! feature values.

pub mod classification;
pub mod comparators;
pub mod component_set;

pub use classification::{classify, CategoryClass, CATEGORY_CLASSES};
pub use comparators::{
    audio_similarity, canvas_similarity, custom_similarity, fonts_similarity,
    hardware_similarity, set_similarity, webgl_similarity,
};
pub use component_set::component_set_similarity;
