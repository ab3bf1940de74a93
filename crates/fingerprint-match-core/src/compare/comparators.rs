//! Per-category feature comparators.
//!
//! Each comparator is a pure function over two same-shaped feature values
//! returning a similarity in [0, 100]. They never touch storage and never
//! round; rounding happens once, at the final aggregate.

use sha2::{Digest, Sha256};
use std::collections::BTreeSet;

use crate::types::{AudioInfo, CustomAttributes, FontsInfo, HardwareInfo, WebglInfo};

/// Jaccard index over two string sets, as a percentage.
///
/// `set_similarity({A,B,C}, {B,C,D})` = 2/4 * 100 = 50.0.
/// An empty union scores 0.
pub fn set_similarity(old: &BTreeSet<String>, new: &BTreeSet<String>) -> f64 {
    let union = old.union(new).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = old.intersection(new).count();
    (intersection as f64 / union as f64) * 100.0
}

fn canvas_digest(payload: &str) -> [u8; 32] {
    Sha256::digest(payload.trim().as_bytes()).into()
}

/// Binary canvas comparison over the normalized payload hash.
///
/// Canvas output is deterministic per rendering stack, so a near-miss is a
/// full mismatch: 100 on hash equality, 0 otherwise.
pub fn canvas_similarity(old: &str, new: &str) -> f64 {
    if old == new || canvas_digest(old) == canvas_digest(new) {
        100.0
    } else {
        0.0
    }
}

/// WebGL comparison: renderer, vendor and version at one point each, plus a
/// half-point from the Jaccard index over supported extensions, out of 3.5.
pub fn webgl_similarity(old: &WebglInfo, new: &WebglInfo) -> f64 {
    let mut points = 0.0f64;
    if old.renderer == new.renderer {
        points += 1.0;
    }
    if old.vendor == new.vendor {
        points += 1.0;
    }
    if old.version == new.version {
        points += 1.0;
    }
    points += set_similarity(&old.extensions, &new.extensions) / 100.0 * 0.5;
    (points / 3.5) * 100.0
}

/// Audio comparison: 100 on exact fingerprint match; 50 when only the sample
/// rate matches (the device audio-stack class matches even though the
/// timing-derived hash drifted); 0 otherwise.
pub fn audio_similarity(old: &AudioInfo, new: &AudioInfo) -> f64 {
    if old.fingerprint == new.fingerprint {
        100.0
    } else if old.sample_rate == new.sample_rate {
        50.0
    } else {
        0.0
    }
}

/// Font comparison: Jaccard index over the available-font sets.
pub fn fonts_similarity(old: &FontsInfo, new: &FontsInfo) -> f64 {
    set_similarity(&old.available, &new.available)
}

/// Hardware comparison: equally weighted match count over cores, memory and
/// touch points, out of 3.
pub fn hardware_similarity(old: &HardwareInfo, new: &HardwareInfo) -> f64 {
    let mut matches = 0u32;
    if old.cores == new.cores {
        matches += 1;
    }
    if old.memory == new.memory {
        matches += 1;
    }
    if old.touch_points == new.touch_points {
        matches += 1;
    }
    (matches as f64 / 3.0) * 100.0
}

/// Custom-attribute comparison: equally weighted match count over screen
/// width, height, color depth and timezone, out of 4.
pub fn custom_similarity(old: &CustomAttributes, new: &CustomAttributes) -> f64 {
    let mut matches = 0u32;
    if old.screen.width == new.screen.width {
        matches += 1;
    }
    if old.screen.height == new.screen.height {
        matches += 1;
    }
    if old.screen.color_depth == new.screen.color_depth {
        matches += 1;
    }
    if old.timezone == new.timezone {
        matches += 1;
    }
    (matches as f64 / 4.0) * 100.0
}
