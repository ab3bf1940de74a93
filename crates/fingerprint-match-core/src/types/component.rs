//! The catch-all component bundle: named browser-reported attributes.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Mapping from component-category name to its collected value.
///
/// `BTreeMap` keeps iteration ordered by category name so comparison and
/// diffing are stable regardless of collection order. Iteration order must
/// never affect an aggregate score.
pub type ComponentSet = BTreeMap<String, FingerprintComponent>;

/// One collected browser attribute (screen resolution, platform, language,
/// timezone, hardware concurrency, ...).
///
/// When `error` is set the collector failed for this category and the value
/// is excluded from comparison on both sides. `duration` records collection
/// time in milliseconds and never participates in equality.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FingerprintComponent {
    /// The collected value, kept as JSON for structural comparison.
    pub value: Value,
    /// Collection duration in milliseconds.
    #[serde(default)]
    pub duration: f64,
    /// True when collection failed; errored components never score.
    #[serde(default)]
    pub error: bool,
}

impl FingerprintComponent {
    /// Create a successfully collected component.
    pub fn new(value: Value) -> Self {
        Self {
            value,
            duration: 0.0,
            error: false,
        }
    }

    /// Create a component whose collection failed.
    pub fn errored() -> Self {
        Self {
            value: Value::Null,
            duration: 0.0,
            error: true,
        }
    }

    /// Set the collection duration.
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    /// Structural value equality, ignoring duration and error metadata.
    pub fn value_matches(&self, other: &Self) -> bool {
        self.value == other.value
    }
}
