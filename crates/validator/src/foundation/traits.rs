//! The rule step contract
//!
//! A [`Rule`] is one atomic check or transform applied to a single field's
//! value. It always returns a value to pass forward, whether it failed or not,
//! so the next step of a chain still has something to work with.

use crate::foundation::{FieldValue, Snapshot, ValidationError};

// ============================================================================
// STEP
// ============================================================================

/// Result of applying one rule.
#[derive(Debug, Clone, PartialEq)]
#[must_use = "a step carries the value for the next rule"]
pub struct Step {
    /// Value handed to the next rule of the chain.
    pub value: FieldValue,
    /// Set when the rule failed.
    pub error: Option<ValidationError>,
}

impl Step {
    /// The rule accepted the value (possibly transformed).
    pub const fn pass(value: FieldValue) -> Self {
        Self { value, error: None }
    }

    /// The rule rejected the value; `value` is what the rule forwards anyway.
    pub const fn fail(value: FieldValue, error: ValidationError) -> Self {
        Self {
            value,
            error: Some(error),
        }
    }

    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

// ============================================================================
// RULE TRAIT
// ============================================================================

/// One validation step.
///
/// `field` is the name the chain runs for, `value` is the output of the
/// previous step and `snapshot` holds the original value of every declared
/// field.
///
/// Closures with the same shape are rules too:
///
/// ```
/// use fieldguard::foundation::{FieldValue, Rule, Snapshot, Step, ValidationError};
///
/// let positive = |_field: &str, value: FieldValue, _snapshot: &Snapshot| match value {
///     FieldValue::I32(n) if n <= 0 => {
///         Step::fail(value, ValidationError::new("positive", "must be positive"))
///     }
///     other => Step::pass(other),
/// };
///
/// let step = positive.apply("count", FieldValue::from(-1), &Snapshot::new());
/// assert!(!step.is_ok());
/// ```
pub trait Rule: Send + Sync {
    /// Applies the rule to `value`.
    fn apply(&self, field: &str, value: FieldValue, snapshot: &Snapshot) -> Step;

    /// Returns the name of this rule.
    ///
    /// Used in trace logs.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    /// Fields this rule reads from the snapshot.
    fn references(&self) -> Option<&str> {
        None
    }
}

impl<F> Rule for F
where
    F: Fn(&str, FieldValue, &Snapshot) -> Step + Send + Sync,
{
    fn apply(&self, field: &str, value: FieldValue, snapshot: &Snapshot) -> Step {
        self(field, value, snapshot)
    }

    fn name(&self) -> &str {
        "custom"
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    struct Uppercase;

    impl Rule for Uppercase {
        fn apply(&self, _field: &str, value: FieldValue, _snapshot: &Snapshot) -> Step {
            match value {
                FieldValue::Str(s) => Step::pass(FieldValue::Str(s.to_uppercase())),
                other => Step::pass(other),
            }
        }
    }

    #[test]
    fn test_rule_trait() {
        let step = Uppercase.apply("name", FieldValue::from("abc"), &Snapshot::new());
        assert_eq!(step.value, FieldValue::from("ABC"));
        assert!(step.is_ok());
    }

    #[test]
    fn test_rule_name() {
        assert!(Uppercase.name().contains("Uppercase"));
    }

    #[test]
    fn test_closure_is_rule() {
        let reject = |_: &str, value: FieldValue, _: &Snapshot| {
            Step::fail(value, ValidationError::new("reject", "rejected"))
        };
        let step = reject.apply("name", FieldValue::Null, &Snapshot::new());
        assert_eq!(step.value, FieldValue::Null);
        assert_eq!(step.error.map(|e| e.code), Some("reject".into()));
        assert_eq!(reject.name(), "custom");
    }
}
