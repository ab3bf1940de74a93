//! Generic comparator for the catch-all component bundle.

use std::collections::BTreeSet;

use super::classification::{classify, CategoryClass};
use crate::types::ComponentSet;

/// Score two component bundles in [0, 100].
///
/// Iterates the union of category keys present in either bundle:
///
/// - session-scoped categories and components flagged errored on either side
///   are skipped entirely (neither presence nor value affects scoring);
/// - volatile categories earn half credit on mismatch;
/// - every other category earns full credit only on structural value
///   equality, with collection duration ignored.
///
/// The important subset's match ratio is tracked independently and blended
/// with the overall ratio at 70/30. When no important category is in scope
/// the important ratio defaults to 100 so only the overall ratio counts.
///
/// Either bundle empty scores 0. The result is not rounded; rounding is
/// applied once at the final aggregate.
pub fn component_set_similarity(old: &ComponentSet, new: &ComponentSet) -> f64 {
    if old.is_empty() || new.is_empty() {
        return 0.0;
    }

    let mut total = 0usize;
    let mut matching = 0.0f64;
    let mut important_total = 0usize;
    let mut important_matches = 0usize;

    let categories: BTreeSet<&str> = old.keys().chain(new.keys()).map(String::as_str).collect();

    for category in categories {
        let old_component = old.get(category);
        let new_component = new.get(category);
        let class = classify(category);

        if class == CategoryClass::SessionScoped
            || old_component.is_some_and(|c| c.error)
            || new_component.is_some_and(|c| c.error)
        {
            continue;
        }

        total += 1;
        let important = class == CategoryClass::Important;
        if important {
            important_total += 1;
        }

        // A category present on only one side counts toward the total but
        // can never match.
        if let (Some(old_c), Some(new_c)) = (old_component, new_component) {
            if old_c.value_matches(new_c) {
                matching += 1.0;
                if important {
                    important_matches += 1;
                }
            } else if class == CategoryClass::Volatile {
                matching += 0.5;
            }
        }
    }

    if total == 0 {
        return 0.0;
    }

    let overall_ratio = matching / total as f64 * 100.0;
    let important_ratio = if important_total > 0 {
        important_matches as f64 / important_total as f64 * 100.0
    } else {
        100.0
    };

    important_ratio * 0.7 + overall_ratio * 0.3
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::FingerprintComponent;
    use serde_json::json;

    fn set(entries: &[(&str, serde_json::Value)]) -> ComponentSet {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), FingerprintComponent::new(v.clone())))
            .collect()
    }

    #[test]
    fn test_identical_sets_score_100() {
        let s = set(&[
            ("canvas", json!("abc")),
            ("platform", json!("Linux")),
            ("languages", json!(["en-US"])),
        ]);
        assert!((component_set_similarity(&s, &s) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_side_scores_zero() {
        let s = set(&[("platform", json!("Linux"))]);
        assert_eq!(component_set_similarity(&s, &ComponentSet::new()), 0.0);
        assert_eq!(component_set_similarity(&ComponentSet::new(), &s), 0.0);
        assert_eq!(
            component_set_similarity(&ComponentSet::new(), &ComponentSet::new()),
            0.0
        );
    }

    #[test]
    fn test_session_scoped_categories_never_score() {
        let old = set(&[
            ("platform", json!("Linux")),
            ("sessionStorage", json!(true)),
            ("localStorage", json!(true)),
        ]);
        let new = set(&[
            ("platform", json!("Linux")),
            ("sessionStorage", json!(false)),
            ("indexedDB", json!(true)),
        ]);
        // Only "platform" is in scope and it matches.
        assert!((component_set_similarity(&old, &new) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_errored_components_are_skipped_on_either_side() {
        let mut old = set(&[("platform", json!("Linux"))]);
        old.insert("audio".to_string(), FingerprintComponent::errored());
        let new = set(&[("platform", json!("Linux")), ("audio", json!("124.04"))]);
        assert!((component_set_similarity(&old, &new) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_volatile_mismatch_earns_half_credit() {
        let old = set(&[("viewport", json!([1200, 800]))]);
        let new = set(&[("viewport", json!([900, 600]))]);
        // No important categories in scope: overall ratio 0.5 at 30% weight
        // plus defaulted important ratio at 70%.
        let expected = 100.0 * 0.7 + 50.0 * 0.3;
        assert!((component_set_similarity(&old, &new) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_important_subset_dominates() {
        let old = set(&[
            ("canvas", json!("aaa")),
            ("platform", json!("Linux")),
            ("languages", json!(["en-US"])),
            ("colorGamut", json!("srgb")),
        ]);
        let mut new = old.clone();
        new.insert(
            "canvas".to_string(),
            FingerprintComponent::new(json!("bbb")),
        );
        // Important: canvas mismatches, platform matches -> 50.
        // Overall: 3 of 4 match -> 75.
        let expected = 50.0 * 0.7 + 75.0 * 0.3;
        assert!((component_set_similarity(&old, &new) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_one_sided_category_counts_against_overall() {
        let old = set(&[("platform", json!("Linux"))]);
        let new = set(&[("platform", json!("Linux")), ("languages", json!(["en"]))]);
        // Overall: 1 match of 2 in scope -> 50; important: platform matches.
        let expected = 100.0 * 0.7 + 50.0 * 0.3;
        assert!((component_set_similarity(&old, &new) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_duration_differences_do_not_matter() {
        let mut old = ComponentSet::new();
        old.insert(
            "platform".to_string(),
            FingerprintComponent::new(json!("Linux")).with_duration(2.0),
        );
        let mut new = ComponentSet::new();
        new.insert(
            "platform".to_string(),
            FingerprintComponent::new(json!("Linux")).with_duration(40.0),
        );
        assert!((component_set_similarity(&old, &new) - 100.0).abs() < 1e-9);
    }
}
