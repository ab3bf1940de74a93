//! Classification of component categories for generic-set scoring.
//!
//! The category lists are deliberately one explicit table rather than
//! literals scattered through the scoring arithmetic, so classification
//! policy can be audited and tested on its own.

/// How a component category behaves across visits from the same device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryClass {
    /// High-signal category: tracked separately with 70% weight in the
    /// component-set score.
    Important,
    /// Changes easily between visits (window resize, travel); a mismatch
    /// earns half credit instead of zero.
    Volatile,
    /// Resets with the browser session (storage-availability probes);
    /// skipped entirely on both sides.
    SessionScoped,
    /// Everything else: full credit on exact match only.
    Standard,
}

/// Hand-maintained classification table, keyed by FingerprintJS-style
/// component names.
pub const CATEGORY_CLASSES: &[(&str, CategoryClass)] = &[
    ("canvas", CategoryClass::Important),
    ("webgl", CategoryClass::Important),
    ("audio", CategoryClass::Important),
    ("fonts", CategoryClass::Important),
    ("screenResolution", CategoryClass::Important),
    ("hardwareConcurrency", CategoryClass::Important),
    ("deviceMemory", CategoryClass::Important),
    ("platform", CategoryClass::Important),
    ("viewport", CategoryClass::Volatile),
    ("timezone", CategoryClass::Volatile),
    ("domBlockers", CategoryClass::SessionScoped),
    ("sessionStorage", CategoryClass::SessionScoped),
    ("localStorage", CategoryClass::SessionScoped),
    ("indexedDB", CategoryClass::SessionScoped),
];

/// Look up the class of a category; unknown categories are [`CategoryClass::Standard`].
pub fn classify(category: &str) -> CategoryClass {
    CATEGORY_CLASSES
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, class)| *class)
        .unwrap_or(CategoryClass::Standard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_important_categories() {
        for name in [
            "canvas",
            "webgl",
            "audio",
            "fonts",
            "screenResolution",
            "hardwareConcurrency",
            "deviceMemory",
            "platform",
        ] {
            assert_eq!(classify(name), CategoryClass::Important, "{name}");
        }
    }

    #[test]
    fn test_session_scoped_categories() {
        for name in ["domBlockers", "sessionStorage", "localStorage", "indexedDB"] {
            assert_eq!(classify(name), CategoryClass::SessionScoped, "{name}");
        }
    }

    #[test]
    fn test_volatile_and_standard() {
        assert_eq!(classify("viewport"), CategoryClass::Volatile);
        assert_eq!(classify("timezone"), CategoryClass::Volatile);
        assert_eq!(classify("languages"), CategoryClass::Standard);
        assert_eq!(classify("colorGamut"), CategoryClass::Standard);
    }

    #[test]
    fn test_table_has_no_duplicate_entries() {
        for (i, (name, _)) in CATEGORY_CLASSES.iter().enumerate() {
            let dup = CATEGORY_CLASSES[i + 1..].iter().any(|(n, _)| n == name);
            assert!(!dup, "duplicate classification for {name}");
        }
    }
}
