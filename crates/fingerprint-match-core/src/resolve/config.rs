//! Configuration for the identity resolution policy.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};

/// Thresholds and limits steering resolution decisions.
///
/// The three thresholds are deliberately independent rather than unified:
/// they answer different questions (candidate discovery, drift detection,
/// and high-confidence linking) and are tuned separately.
///
/// # Example
///
/// ```
/// use fingerprint_match_core::resolve::ResolutionConfig;
///
/// let config = ResolutionConfig::default()
///     .with_anonymous_accept(55.0)
///     .with_top_candidates(3);
/// assert_eq!(config.top_candidates, 3);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionConfig {
    /// Minimum best-candidate similarity for an anonymous submission to be
    /// reported as matched. Looser than `linked_accept`: discovery, not
    /// identification. Default: 40.0.
    pub anonymous_accept: f64,

    /// Aggregate similarity below which an authenticated resubmission is
    /// flagged as a materially drifted device/browser profile.
    /// Default: 90.0.
    pub divergence: f64,

    /// Minimum legacy component-set similarity for the secondary
    /// best-single-match lookup to name a linked subject. Default: 70.0.
    pub linked_accept: f64,

    /// How many ranked candidates an anonymous match reports. Default: 5.
    pub top_candidates: usize,
}

impl Default for ResolutionConfig {
    fn default() -> Self {
        Self {
            anonymous_accept: 40.0,
            divergence: 90.0,
            linked_accept: 70.0,
            top_candidates: 5,
        }
    }
}

impl ResolutionConfig {
    pub fn with_anonymous_accept(mut self, threshold: f64) -> Self {
        self.anonymous_accept = threshold;
        self
    }

    pub fn with_divergence(mut self, threshold: f64) -> Self {
        self.divergence = threshold;
        self
    }

    pub fn with_linked_accept(mut self, threshold: f64) -> Self {
        self.linked_accept = threshold;
        self
    }

    pub fn with_top_candidates(mut self, count: usize) -> Self {
        self.top_candidates = count;
        self
    }

    /// Validate threshold ranges.
    pub fn validate(&self) -> CoreResult<()> {
        for (name, value) in [
            ("anonymous_accept", self.anonymous_accept),
            ("divergence", self.divergence),
            ("linked_accept", self.linked_accept),
        ] {
            if !(0.0..=100.0).contains(&value) || !value.is_finite() {
                return Err(CoreError::Config(format!(
                    "threshold '{}' must be within [0, 100], got {}",
                    name, value
                )));
            }
        }
        if self.top_candidates == 0 {
            return Err(CoreError::Config(
                "top_candidates must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
