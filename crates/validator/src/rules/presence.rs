//! Presence rules

use crate::foundation::{FieldValue, ValidationError};

crate::rule! {
    /// Fails when the value is absent or a string that is empty after
    /// trimming whitespace.
    ///
    /// Every other value is present, including `0` and `false`.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldguard::foundation::{FieldValue, Rule, Snapshot};
    /// use fieldguard::rules::required;
    ///
    /// let snapshot = Snapshot::new();
    /// assert!(required().apply("name", "Alexandre".into(), &snapshot).is_ok());
    /// assert!(!required().apply("name", "   ".into(), &snapshot).is_ok());
    /// assert!(!required().apply("name", FieldValue::Null, &snapshot).is_ok());
    /// ```
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub Required;
    check(value) {
        match value {
            FieldValue::Null => false,
            FieldValue::Str(s) => !s.trim().is_empty(),
            _ => true,
        }
    }
    error(value) { ValidationError::new("required", "this field is required") }
    fn required();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{Rule, Snapshot};
    use rstest::rstest;

    #[rstest]
    #[case::empty(FieldValue::from(""))]
    #[case::blank(FieldValue::from("   "))]
    #[case::tabs(FieldValue::from("\t\n"))]
    #[case::null(FieldValue::Null)]
    fn test_missing(#[case] value: FieldValue) {
        let step = required().apply("name", value.clone(), &Snapshot::new());
        let error = step.error.expect("value should be missing");
        assert_eq!(error.message, "this field is required");
        assert_eq!(error.field.as_deref(), Some("name"));
        assert_eq!(step.value, value);
    }

    #[rstest]
    #[case::text(FieldValue::from("Alexandre"))]
    #[case::padded(FieldValue::from("  a  "))]
    #[case::zero(FieldValue::from(0))]
    #[case::falsy(FieldValue::from(false))]
    #[case::float_zero(FieldValue::from(0.0))]
    fn test_present(#[case] value: FieldValue) {
        assert!(required().apply("name", value, &Snapshot::new()).is_ok());
    }
}
