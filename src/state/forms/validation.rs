//! Length validation for single-field forms

use super::field::FieldConfig;
use serde::Serialize;
use std::collections::BTreeSet;

/// A bound the value failed to satisfy
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Violation {
    TooShort,
    TooLong,
}

impl Violation {
    /// Human readable explanation for a given config
    pub fn describe(&self, config: &FieldConfig) -> String {
        match self {
            Violation::TooShort => format!(
                "{} must contain at least {} characters",
                config.label, config.min_length()
            ),
            Violation::TooLong => format!(
                "{} must contain at most {} characters",
                config.label, config.max_length()
            ),
        }
    }
}

/// Result of validating a value against a field config
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validation {
    pub violations: BTreeSet<Violation>,
}

impl Validation {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }
}

/// Check `value` against the inclusive length bounds of `config`.
///
/// Length is measured in characters, so multi-byte text is not penalised.
pub fn validate(value: &str, config: &FieldConfig) -> Validation {
    let length = value.chars().count();
    let mut violations = BTreeSet::new();

    if length < config.min_length() {
        violations.insert(Violation::TooShort);
    }
    if length > config.max_length() {
        violations.insert(Violation::TooLong);
    }

    Validation { violations }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn config(min: usize, max: usize) -> FieldConfig {
        FieldConfig::new(min, max).unwrap()
    }

    #[test]
    fn test_within_bounds_is_valid() {
        let cfg = config(2, 50);
        let longest = "x".repeat(50);
        for value in ["ab", "test-string", longest.as_str()] {
            assert!(validate(value, &cfg).is_valid(), "{value:?} should be valid");
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let cfg = config(3, 5);
        assert!(validate("abc", &cfg).is_valid());
        assert!(validate("abcde", &cfg).is_valid());
    }

    #[test]
    fn test_too_short() {
        let result = validate("a", &config(2, 50));
        assert!(!result.is_valid());
        assert_eq!(result.violations, BTreeSet::from([Violation::TooShort]));
    }

    #[test]
    fn test_too_long() {
        let result = validate(&"a".repeat(51), &config(2, 50));
        assert_eq!(result.violations, BTreeSet::from([Violation::TooLong]));
    }

    #[test]
    fn test_empty_value() {
        assert!(!validate("", &config(2, 50)).is_valid());
        assert!(validate("", &config(0, 10)).is_valid());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        let cfg = config(2, 3);
        // Three characters, nine bytes
        assert!(validate("日本語", &cfg).is_valid());
        assert_eq!(
            validate("日本語!", &cfg).violations,
            BTreeSet::from([Violation::TooLong])
        );
    }

    #[test]
    fn test_zero_width_range() {
        let cfg = config(4, 4);
        assert!(validate("abcd", &cfg).is_valid());
        assert!(!validate("abc", &cfg).is_valid());
        assert!(!validate("abcde", &cfg).is_valid());
    }

    #[test]
    fn test_describe_uses_label() {
        let cfg = config(2, 50).with_label("Folder Path");
        assert_eq!(
            Violation::TooShort.describe(&cfg),
            "Folder Path must contain at least 2 characters"
        );
        assert_eq!(
            Violation::TooLong.describe(&cfg),
            "Folder Path must contain at most 50 characters"
        );
    }

    #[test]
    fn test_deterministic() {
        let cfg = config(2, 5);
        assert_eq!(validate("abcdef", &cfg), validate("abcdef", &cfg));
    }
}
