//! The full multi-signal fingerprint snapshot submitted per visit.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::component::ComponentSet;

/// WebGL rendering-stack descriptors.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct WebglInfo {
    pub renderer: String,
    pub vendor: String,
    pub version: String,
    #[serde(default)]
    pub extensions: BTreeSet<String>,
}

/// Audio-stack fingerprint: a timing-derived hash plus the device sample rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AudioInfo {
    pub fingerprint: String,
    pub sample_rate: f64,
}

/// Enumerated fonts the browser reported as available.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FontsInfo {
    #[serde(default)]
    pub available: BTreeSet<String>,
}

/// Hardware descriptors reported by the browser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareInfo {
    pub cores: u32,
    pub memory: f64,
    pub touch_points: u32,
}

/// Physical screen geometry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenInfo {
    pub width: u32,
    pub height: u32,
    pub color_depth: u32,
}

/// Custom-collected attributes outside the generic component bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomAttributes {
    pub screen: ScreenInfo,
    pub timezone: String,
}

/// The full identity snapshot composed of independent sub-fingerprints.
///
/// Every sub-field is independently optional: an absent category means
/// "unknown" and contributes zero weight during aggregation, which is
/// distinct from "known different" (a present category that mismatches).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MultiFingerprintRecord {
    /// Catch-all bundle of browser-reported attributes.
    #[serde(default)]
    pub components: ComponentSet,
    /// Opaque hash derived from the raw canvas render payload.
    pub canvas: Option<String>,
    pub webgl: Option<WebglInfo>,
    pub audio: Option<AudioInfo>,
    pub fonts: Option<FontsInfo>,
    pub hardware: Option<HardwareInfo>,
    pub custom: Option<CustomAttributes>,
}

impl MultiFingerprintRecord {
    /// Whether the generic component bundle carries any data.
    pub fn has_components(&self) -> bool {
        !self.components.is_empty()
    }

    /// Whether a non-blank canvas payload is present.
    pub fn has_canvas(&self) -> bool {
        self.canvas
            .as_deref()
            .is_some_and(|c| !c.trim().is_empty())
    }

    /// Whether a non-empty font enumeration is present.
    pub fn has_fonts(&self) -> bool {
        self.fonts
            .as_ref()
            .is_some_and(|f| !f.available.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::component::FingerprintComponent;
    use serde_json::json;

    #[test]
    fn test_default_record_is_fully_absent() {
        let record = MultiFingerprintRecord::default();
        assert!(!record.has_components());
        assert!(!record.has_canvas());
        assert!(!record.has_fonts());
        assert!(record.webgl.is_none());
        assert!(record.audio.is_none());
    }

    #[test]
    fn test_blank_canvas_counts_as_absent() {
        let record = MultiFingerprintRecord {
            canvas: Some("   ".to_string()),
            ..Default::default()
        };
        assert!(!record.has_canvas());
    }

    #[test]
    fn test_empty_font_set_counts_as_absent() {
        let record = MultiFingerprintRecord {
            fonts: Some(FontsInfo::default()),
            ..Default::default()
        };
        assert!(!record.has_fonts());
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let mut components = ComponentSet::new();
        components.insert(
            "platform".to_string(),
            FingerprintComponent::new(json!("Linux x86_64")),
        );
        let record = MultiFingerprintRecord {
            components,
            canvas: Some("d41d8cd9".to_string()),
            webgl: Some(WebglInfo {
                renderer: "ANGLE (NVIDIA)".to_string(),
                vendor: "Google Inc.".to_string(),
                version: "WebGL 2.0".to_string(),
                extensions: ["EXT_float_blend".to_string()].into(),
            }),
            audio: Some(AudioInfo {
                fingerprint: "124.04347527516074".to_string(),
                sample_rate: 48000.0,
            }),
            fonts: Some(FontsInfo {
                available: ["Arial".to_string(), "Roboto".to_string()].into(),
            }),
            hardware: Some(HardwareInfo {
                cores: 8,
                memory: 16.0,
                touch_points: 0,
            }),
            custom: Some(CustomAttributes {
                screen: ScreenInfo {
                    width: 1920,
                    height: 1080,
                    color_depth: 24,
                },
                timezone: "Europe/Berlin".to_string(),
            }),
        };

        let encoded = serde_json::to_string(&record).unwrap();
        let decoded: MultiFingerprintRecord = serde_json::from_str(&encoded).unwrap();
        assert_eq!(record, decoded);
    }
}
