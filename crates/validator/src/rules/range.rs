//! Numeric bound rules
//!
//! Both rules coerce the value with [`FieldValue::coerce_f64`], so they work
//! on every integer width, both float widths, and numeric strings. On success
//! they forward the coerced `f64`; on failure they forward the original value.

use crate::foundation::{CoercionError, FieldValue, Rule, Snapshot, Step, ValidationError};

/// Builds the error for a value that could not be coerced.
fn invalid_value(value: &FieldValue, reason: &CoercionError) -> ValidationError {
    ValidationError::new("invalid_value", format!("invalid value informed: \"{value}\""))
        .with_param("reason", reason.to_string())
}

/// Shared body of the bound rules.
fn bounded(
    field: &str,
    value: FieldValue,
    within: impl FnOnce(f64) -> bool,
    violation: impl FnOnce() -> ValidationError,
) -> Step {
    match value.coerce_f64() {
        Ok(n) if within(n) => Step::pass(FieldValue::F64(n)),
        Ok(n) => {
            let error = violation()
                .with_param("actual", n.to_string())
                .with_field(field.to_owned());
            Step::fail(value, error)
        }
        Err(reason) => {
            let error = invalid_value(&value, &reason).with_field(field.to_owned());
            Step::fail(value, error)
        }
    }
}

// ============================================================================
// MIN VALUE
// ============================================================================

/// Validates that a numeric value is at least a minimum.
///
/// # Examples
///
/// ```
/// use fieldguard::foundation::{FieldValue, Rule, Snapshot};
/// use fieldguard::rules::min_value;
///
/// let step = min_value(10.0).apply("age", "11".into(), &Snapshot::new());
/// assert!(step.is_ok());
/// assert_eq!(step.value, FieldValue::F64(11.0));
///
/// let step = min_value(10.0).apply("age", 9.into(), &Snapshot::new());
/// assert_eq!(step.error.unwrap().message, "minimum value must be 10.00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MinValue {
    pub min: f64,
}

impl MinValue {
    #[must_use]
    pub const fn new(min: f64) -> Self {
        Self { min }
    }
}

impl Rule for MinValue {
    fn apply(&self, field: &str, value: FieldValue, _snapshot: &Snapshot) -> Step {
        bounded(
            field,
            value,
            |n| n >= self.min,
            || {
                ValidationError::new("min_value", format!("minimum value must be {:.2}", self.min))
                    .with_param("min", self.min.to_string())
            },
        )
    }

    fn name(&self) -> &str {
        "MinValue"
    }
}

/// Creates a [`MinValue`] rule.
#[must_use]
pub const fn min_value(min: f64) -> MinValue {
    MinValue::new(min)
}

// ============================================================================
// MAX VALUE
// ============================================================================

/// Validates that a numeric value does not exceed a maximum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaxValue {
    pub max: f64,
}

impl MaxValue {
    #[must_use]
    pub const fn new(max: f64) -> Self {
        Self { max }
    }
}

impl Rule for MaxValue {
    fn apply(&self, field: &str, value: FieldValue, _snapshot: &Snapshot) -> Step {
        bounded(
            field,
            value,
            |n| n <= self.max,
            || {
                ValidationError::new("max_value", format!("maximum value must be {:.2}", self.max))
                    .with_param("max", self.max.to_string())
            },
        )
    }

    fn name(&self) -> &str {
        "MaxValue"
    }
}

/// Creates a [`MaxValue`] rule.
#[must_use]
pub const fn max_value(max: f64) -> MaxValue {
    MaxValue::new(max)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run(rule: &impl Rule, value: FieldValue) -> Step {
        rule.apply("amount", value, &Snapshot::new())
    }

    #[test]
    fn test_min_value() {
        assert!(run(&min_value(10.0), "11".into()).is_ok());
        assert!(run(&min_value(10.0), 10.into()).is_ok());

        let step = run(&min_value(10.0), 9.into());
        assert_eq!(step.value, FieldValue::I32(9));
        let error = step.error.unwrap();
        assert_eq!(error.message, "minimum value must be 10.00");
        assert_eq!(error.param("actual"), Some("9"));
        assert_eq!(error.field.as_deref(), Some("amount"));
    }

    #[test]
    fn test_max_value() {
        assert!(run(&max_value(10.0), "9".into()).is_ok());

        let step = run(&max_value(10.0), 11.into());
        assert_eq!(step.error.unwrap().message, "maximum value must be 10.00");
    }

    #[test]
    fn test_fractional_bound_message() {
        let step = run(&max_value(2.5), 3.into());
        assert_eq!(step.error.unwrap().message, "maximum value must be 2.50");
    }

    #[rstest]
    #[case(FieldValue::I8(12))]
    #[case(FieldValue::I16(12))]
    #[case(FieldValue::I64(12))]
    #[case(FieldValue::U8(12))]
    #[case(FieldValue::U16(12))]
    #[case(FieldValue::U32(12))]
    #[case(FieldValue::U64(12))]
    #[case(FieldValue::F32(12.0))]
    #[case(FieldValue::F64(12.0))]
    #[case(FieldValue::from("12"))]
    fn test_success_forwards_coerced_float(#[case] value: FieldValue) {
        let step = run(&min_value(10.0), value);
        assert!(step.is_ok());
        assert_eq!(step.value, FieldValue::F64(12.0));
    }

    #[test]
    fn test_unparseable_string() {
        let step = run(&min_value(10.0), "ten".into());
        assert_eq!(step.value, FieldValue::from("ten"));
        let error = step.error.unwrap();
        assert_eq!(error.code, "invalid_value");
        assert_eq!(error.message, "invalid value informed: \"ten\"");
    }

    #[test]
    fn test_unsupported_type_names_it() {
        let step = run(&max_value(10.0), true.into());
        let error = step.error.unwrap();
        assert_eq!(error.message, "invalid value informed: \"true\"");
        assert_eq!(error.param("reason"), Some("unknown type bool"));
    }

    #[test]
    fn test_null_is_invalid() {
        let step = run(&min_value(0.0), FieldValue::Null);
        assert_eq!(step.error.unwrap().code, "invalid_value");
    }
}
