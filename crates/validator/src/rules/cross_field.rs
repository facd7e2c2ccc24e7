//! Cross-field rules
//!
//! These rules read sibling fields from the [`Snapshot`], i.e. the values the
//! record held before any rule ran.

use crate::foundation::{FieldValue, Rule, Snapshot, Step, ValidationError};

/// Validates that the value equals the original value of another field.
///
/// A field missing from the snapshot compares as [`FieldValue::Null`].
///
/// # Examples
///
/// ```
/// use fieldguard::foundation::{Rule, Snapshot};
/// use fieldguard::rules::same_as;
///
/// let snapshot: Snapshot = [("password", "1234")].into_iter().collect();
/// let rule = same_as("password");
///
/// assert!(rule.apply("password_validation", "1234".into(), &snapshot).is_ok());
/// assert!(!rule.apply("password_validation", "4321".into(), &snapshot).is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SameAs {
    pub other: String,
}

impl SameAs {
    #[must_use]
    pub fn new(other: impl Into<String>) -> Self {
        Self {
            other: other.into(),
        }
    }
}

impl Rule for SameAs {
    fn apply(&self, field: &str, value: FieldValue, snapshot: &Snapshot) -> Step {
        let expected = snapshot.get(&self.other).unwrap_or(&FieldValue::Null);
        if *expected == value {
            return Step::pass(value);
        }

        let error = ValidationError::new("same_as", format!("must be the same as {}", self.other))
            .with_field(field.to_owned())
            .with_param("other", self.other.clone());
        Step::fail(value, error)
    }

    fn name(&self) -> &str {
        "SameAs"
    }

    fn references(&self) -> Option<&str> {
        Some(&self.other)
    }
}

/// Creates a [`SameAs`] rule.
#[must_use]
pub fn same_as(other: impl Into<String>) -> SameAs {
    SameAs::new(other)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> Snapshot {
        [("password", "1234")].into_iter().collect()
    }

    #[test]
    fn test_same_value_passes() {
        let step = same_as("password").apply("password_validation", "1234".into(), &snapshot());
        assert!(step.is_ok());
        assert_eq!(step.value, FieldValue::from("1234"));
    }

    #[test]
    fn test_different_value_fails() {
        let step = same_as("password").apply("password_validation", "12345".into(), &snapshot());
        let error = step.error.unwrap();
        assert_eq!(error.message, "must be the same as password");
        assert_eq!(error.param("other"), Some("password"));
        assert_eq!(error.field.as_deref(), Some("password_validation"));
    }

    #[test]
    fn test_equality_is_typed() {
        let snapshot: Snapshot = [("pin", 1234)].into_iter().collect();
        assert!(!same_as("pin").apply("pin2", "1234".into(), &snapshot).is_ok());
        assert!(same_as("pin").apply("pin2", 1234.into(), &snapshot).is_ok());
    }

    #[test]
    fn test_missing_field_compares_as_null() {
        let empty = Snapshot::new();
        assert!(same_as("ghost").apply("x", FieldValue::Null, &empty).is_ok());
        assert!(!same_as("ghost").apply("x", "a".into(), &empty).is_ok());
    }

    #[test]
    fn test_references() {
        assert_eq!(same_as("password").references(), Some("password"));
    }
}
