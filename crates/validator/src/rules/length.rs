//! String length rules
//!
//! Length is measured in Unicode scalar values (chars) by default. Use the
//! `.bytes()` constructors for byte-length counting.
//! Non-string values are not checked.

use crate::foundation::ValidationError;

// ============================================================================
// LENGTH MODE
// ============================================================================

/// How to count string length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LengthMode {
    /// Count bytes.
    Bytes,
    /// Count Unicode scalar values.
    #[default]
    Chars,
}

impl LengthMode {
    /// Measures the length of a string according to this mode.
    #[inline]
    #[must_use]
    pub fn measure(self, input: &str) -> usize {
        match self {
            LengthMode::Bytes => input.len(),
            LengthMode::Chars => input.chars().count(),
        }
    }
}

// ============================================================================
// MIN LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string has at least a minimum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MinLength { min: usize, mode: LengthMode };
    check(self, value) { value.as_str().is_none_or(|s| self.mode.measure(s) >= self.min) }
    error(self, value) {
        ValidationError::new("min_length", format!("minimum length must be {}", self.min))
            .with_param("min", self.min.to_string())
    }
    new(min: usize) { Self { min, mode: LengthMode::Chars } }
    fn min_length(min: usize);
}

impl MinLength {
    /// Creates a minimum length rule that counts bytes.
    #[must_use]
    pub fn bytes(min: usize) -> Self {
        Self {
            min,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// MAX LENGTH
// ============================================================================

crate::rule! {
    /// Validates that a string does not exceed a maximum length.
    #[derive(Copy, PartialEq, Eq, Hash)]
    pub MaxLength { max: usize, mode: LengthMode };
    check(self, value) { value.as_str().is_none_or(|s| self.mode.measure(s) <= self.max) }
    error(self, value) {
        ValidationError::new("max_length", format!("maximum length must be {}", self.max))
            .with_param("max", self.max.to_string())
    }
    new(max: usize) { Self { max, mode: LengthMode::Chars } }
    fn max_length(max: usize);
}

impl MaxLength {
    /// Creates a maximum length rule that counts bytes.
    #[must_use]
    pub fn bytes(max: usize) -> Self {
        Self {
            max,
            mode: LengthMode::Bytes,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::{FieldValue, Rule, Snapshot};

    fn run(rule: &impl Rule, value: impl Into<FieldValue>) -> crate::foundation::Step {
        rule.apply("name", value.into(), &Snapshot::new())
    }

    #[test]
    fn test_min_length() {
        let step = run(&min_length(10), "Tes");
        assert_eq!(step.error.unwrap().message, "minimum length must be 10");
        assert!(run(&min_length(10), "Testing name").is_ok());
    }

    #[test]
    fn test_max_length() {
        assert!(run(&max_length(3), "abc").is_ok());
        let step = run(&max_length(3), "abcd");
        assert_eq!(step.error.unwrap().message, "maximum length must be 3");
    }

    #[test]
    fn test_non_strings_are_unchecked() {
        assert!(run(&min_length(10), 5).is_ok());
        assert!(run(&max_length(0), FieldValue::Null).is_ok());
    }

    #[test]
    fn test_chars_vs_bytes() {
        // "café" is 4 chars, 5 bytes
        assert!(run(&max_length(4), "café").is_ok());
        assert!(!run(&MaxLength::bytes(4), "café").is_ok());
        assert!(run(&MinLength::bytes(5), "café").is_ok());
        assert!(!run(&min_length(5), "café").is_ok());
    }

    #[test]
    fn test_default_mode() {
        assert_eq!(min_length(1).mode, LengthMode::Chars);
        assert_eq!(LengthMode::default(), LengthMode::Chars);
    }
}
