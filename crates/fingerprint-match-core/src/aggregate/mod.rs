//! Weighted aggregation of per-category similarity scores.
//!
//! Combines comparator outputs into a single 0-100 score using fixed
//! category weights. A category participates only when both records carry
//! non-empty data for it; a missing category contributes to neither the
//! numerator nor the denominator, so partial fingerprints are scored on the
//! intersection of available categories instead of being penalized for
//! unknowns.

use crate::compare::{
    audio_similarity, canvas_similarity, component_set_similarity, custom_similarity,
    fonts_similarity, hardware_similarity, webgl_similarity,
};
use crate::error::{CoreError, CoreResult};
use crate::types::MultiFingerprintRecord;

/// One sub-fingerprint category participating in aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Components,
    Canvas,
    Webgl,
    Audio,
    Fonts,
    Hardware,
    Custom,
}

impl Category {
    /// All categories, in weight order.
    pub const ALL: [Category; 7] = [
        Category::Components,
        Category::Canvas,
        Category::Webgl,
        Category::Audio,
        Category::Fonts,
        Category::Hardware,
        Category::Custom,
    ];

    /// Fixed category weight. The weights sum to 100 when every category
    /// is present on both sides.
    pub fn weight(self) -> f64 {
        match self {
            Category::Components => 30.0,
            Category::Canvas => 20.0,
            Category::Webgl => 15.0,
            Category::Audio => 10.0,
            Category::Fonts => 10.0,
            Category::Hardware => 10.0,
            Category::Custom => 5.0,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Category::Components => "components",
            Category::Canvas => "canvas",
            Category::Webgl => "webgl",
            Category::Audio => "audio",
            Category::Fonts => "fonts",
            Category::Hardware => "hardware",
            Category::Custom => "custom",
        }
    }
}

/// Run the matching comparator for one category, or `None` when either side
/// lacks non-empty data for it.
fn category_score(
    category: Category,
    old: &MultiFingerprintRecord,
    new: &MultiFingerprintRecord,
) -> Option<f64> {
    match category {
        Category::Components => (old.has_components() && new.has_components())
            .then(|| component_set_similarity(&old.components, &new.components)),
        Category::Canvas => match (old.canvas.as_deref(), new.canvas.as_deref()) {
            (Some(a), Some(b)) if old.has_canvas() && new.has_canvas() => {
                Some(canvas_similarity(a, b))
            }
            _ => None,
        },
        Category::Webgl => match (&old.webgl, &new.webgl) {
            (Some(a), Some(b)) => Some(webgl_similarity(a, b)),
            _ => None,
        },
        Category::Audio => match (&old.audio, &new.audio) {
            (Some(a), Some(b)) => Some(audio_similarity(a, b)),
            _ => None,
        },
        Category::Fonts => match (&old.fonts, &new.fonts) {
            (Some(a), Some(b)) if old.has_fonts() && new.has_fonts() => {
                Some(fonts_similarity(a, b))
            }
            _ => None,
        },
        Category::Hardware => match (&old.hardware, &new.hardware) {
            (Some(a), Some(b)) => Some(hardware_similarity(a, b)),
            _ => None,
        },
        Category::Custom => match (&old.custom, &new.custom) {
            (Some(a), Some(b)) => Some(custom_similarity(a, b)),
            _ => None,
        },
    }
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn weighted_over(
    categories: &[Category],
    old: &MultiFingerprintRecord,
    new: &MultiFingerprintRecord,
) -> CoreResult<f64> {
    let mut numerator = 0.0f64;
    let mut denominator = 0.0f64;

    for &category in categories {
        let Some(score) = category_score(category, old, new) else {
            continue;
        };
        if !score.is_finite() {
            return Err(CoreError::Comparison(format!(
                "non-finite similarity in category '{}'",
                category.name()
            )));
        }
        numerator += score * category.weight();
        denominator += category.weight();
    }

    if denominator == 0.0 {
        return Ok(0.0);
    }

    // The single rounding step. Comparators never round, so category scores
    // cannot compound rounding drift.
    Ok(round_one_decimal(numerator / denominator))
}

/// Full multi-signal aggregate similarity between two records, in [0, 100]
/// with one decimal place. Returns 0 when no category is comparable.
pub fn aggregate_similarity(
    old: &MultiFingerprintRecord,
    new: &MultiFingerprintRecord,
) -> CoreResult<f64> {
    weighted_over(&Category::ALL, old, new)
}

/// Legacy single-feature score: the same aggregator restricted to the
/// generic component-set comparator at full weight. Used by the
/// high-confidence secondary lookup path.
pub fn component_set_only_similarity(
    old: &MultiFingerprintRecord,
    new: &MultiFingerprintRecord,
) -> CoreResult<f64> {
    weighted_over(&[Category::Components], old, new)
}
