//! Component-level change detection between two fingerprint bundles.
//!
//! Audit-only: the resolver logs these changes when refreshing a stored
//! identity; they never feed back into similarity scoring.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

use crate::types::ComponentSet;

/// One detected change for a component category.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ComponentChange {
    /// Present only in the new bundle.
    Added { category: String, new_value: Value },
    /// Present only in the old bundle.
    Removed { category: String, old_value: Value },
    /// Present in both with structurally different values.
    Changed {
        category: String,
        old_value: Value,
        new_value: Value,
    },
}

impl ComponentChange {
    pub fn category(&self) -> &str {
        match self {
            Self::Added { category, .. }
            | Self::Removed { category, .. }
            | Self::Changed { category, .. } => category,
        }
    }
}

/// List every added, removed and changed category between two bundles,
/// ordered by category name. Collection durations are excluded from the
/// comparison; only the collected values count.
pub fn diff_component_sets(old: &ComponentSet, new: &ComponentSet) -> Vec<ComponentChange> {
    let categories: BTreeSet<&str> = old.keys().chain(new.keys()).map(String::as_str).collect();
    let mut changes = Vec::new();

    for category in categories {
        match (old.get(category), new.get(category)) {
            (None, Some(new_c)) => changes.push(ComponentChange::Added {
                category: category.to_string(),
                new_value: new_c.value.clone(),
            }),
            (Some(old_c), None) => changes.push(ComponentChange::Removed {
                category: category.to_string(),
                old_value: old_c.value.clone(),
            }),
            (Some(old_c), Some(new_c)) if !old_c.value_matches(new_c) => {
                changes.push(ComponentChange::Changed {
                    category: category.to_string(),
                    old_value: old_c.value.clone(),
                    new_value: new_c.value.clone(),
                })
            }
            _ => {}
        }
    }

    changes
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
    fn test_added_removed_changed() {
        let old = set(&[
            ("canvas", json!("x")),
            ("fonts", json!(["Arial"])),
            ("plugins", json!(["P"])),
        ]);
        let new = set(&[
            ("canvas", json!("y")),
            ("fonts", json!(["Arial", "Roboto"])),
            ("extra", json!(123)),
        ]);

        let changes = diff_component_sets(&old, &new);
        assert_eq!(changes.len(), 4);
        assert_eq!(
            changes[0],
            ComponentChange::Changed {
                category: "canvas".to_string(),
                old_value: json!("x"),
                new_value: json!("y"),
            }
        );
        assert_eq!(
            changes[1],
            ComponentChange::Added {
                category: "extra".to_string(),
                new_value: json!(123),
            }
        );
        assert_eq!(
            changes[2],
            ComponentChange::Changed {
                category: "fonts".to_string(),
                old_value: json!(["Arial"]),
                new_value: json!(["Arial", "Roboto"]),
            }
        );
        assert_eq!(
            changes[3],
            ComponentChange::Removed {
                category: "plugins".to_string(),
                old_value: json!(["P"]),
            }
        );
    }

    #[test]
    fn test_identical_sets_produce_no_changes() {
        let s = set(&[("canvas", json!("x")), ("platform", json!("Linux"))]);
        assert!(diff_component_sets(&s, &s).is_empty());
    }

    #[test]
    fn test_duration_drift_is_not_a_change() {
        let mut old = ComponentSet::new();
        old.insert(
            "platform".to_string(),
            FingerprintComponent::new(json!("Linux")).with_duration(1.0),
        );
        let mut new = ComponentSet::new();
        new.insert(
            "platform".to_string(),
            FingerprintComponent::new(json!("Linux")).with_duration(55.0),
        );
        assert!(diff_component_sets(&old, &new).is_empty());
    }

    #[test]
    fn test_changes_are_ordered_by_category_name() {
        let old = set(&[("zed", json!(1))]);
        let new = set(&[("alpha", json!(2)), ("mid", json!(3))]);
        let changes = diff_component_sets(&old, &new);
        let names: Vec<&str> = changes.iter().map(|c| c.category()).collect();
        assert_eq!(names, vec!["alpha", "mid", "zed"]);
    }
}
