//! Normalizing rules
//!
//! Rules here rewrite the value and never fail.

use crate::foundation::{FieldValue, Rule, Snapshot, Step};

/// Strips leading and trailing spaces from strings.
///
/// Only the space character is stripped; tabs and newlines are kept.
/// Non-string values pass through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Trim;

impl Rule for Trim {
    fn apply(&self, _field: &str, value: FieldValue, _snapshot: &Snapshot) -> Step {
        match value {
            FieldValue::Str(s) => Step::pass(FieldValue::Str(s.trim_matches(' ').to_owned())),
            other => Step::pass(other),
        }
    }

    fn name(&self) -> &str {
        "Trim"
    }
}

/// Creates a [`Trim`] rule.
#[must_use]
pub const fn trim() -> Trim {
    Trim
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trim_string() {
        let step = trim().apply("name", "  Alexandre          ".into(), &Snapshot::new());
        assert!(step.is_ok());
        assert_eq!(step.value, FieldValue::from("Alexandre"));
        assert_eq!(step.value.as_str().map(str::len), Some(9));
    }

    #[test]
    fn test_trim_keeps_other_whitespace() {
        let step = trim().apply("name", " \tA\t ".into(), &Snapshot::new());
        assert_eq!(step.value, FieldValue::from("\tA\t"));
    }

    #[test]
    fn test_trim_passes_non_strings() {
        let step = trim().apply("age", 42.into(), &Snapshot::new());
        assert!(step.is_ok());
        assert_eq!(step.value, FieldValue::I32(42));
    }
}
