//! Macros for declaring rules with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`rule!`]: declare a check-only rule (struct + `Rule` impl + factory fn)
//!
//! A check-only rule never transforms its input: it forwards the value it
//! received, whether the check passed or not, and attaches an error on
//! failure. Rules that transform values (`trim`, `min_value`) or read the
//! snapshot (`same_as`) implement [`Rule`](crate::foundation::Rule) by hand.
//!
//! # Examples
//!
//! ```rust,ignore
//! use fieldguard::rule;
//! use fieldguard::foundation::{FieldValue, ValidationError};
//!
//! // Unit rule (no fields)
//! rule! {
//!     pub NotNull;
//!     check(value) { !value.is_null() }
//!     error(value) { ValidationError::new("not_null", "must not be null") }
//!     fn not_null();
//! }
//!
//! // Struct with fields
//! rule! {
//!     #[derive(Copy, PartialEq, Eq, Hash)]
//!     pub MaxChars { max: usize };
//!     check(self, value) { value.as_str().is_none_or(|s| s.chars().count() <= self.max) }
//!     error(self, value) { ValidationError::new("max_chars", format!("at most {}", self.max)) }
//!     fn max_chars(max: usize);
//! }
//! ```

// ============================================================================
// RULE MACRO
// ============================================================================

/// Creates a complete check-only rule: struct definition, `Rule`
/// implementation, constructor, and factory function.
///
/// `#[derive(Debug, Clone)]` is always applied. Add extra derives via `#[derive(...)]`.
/// The `check` block receives the current value as `&FieldValue` and must
/// evaluate to `bool`; the `error` block builds the `ValidationError`. The
/// field name is attached to the error automatically.
///
/// # Variants
///
/// **Unit rule** (zero-sized, no fields):
/// ```rust,ignore
/// rule! {
///     pub NotNull;
///     check(value) { !value.is_null() }
///     error(value) { ValidationError::new("not_null", "must not be null") }
///     fn not_null();
/// }
/// ```
///
/// **Struct with fields** (auto `new` from all fields):
/// ```rust,ignore
/// rule! {
///     #[derive(Copy, PartialEq, Eq, Hash)]
///     pub MinChars { min: usize };
///     check(self, value) { value.as_str().is_none_or(|s| s.len() >= self.min) }
///     error(self, value) { ValidationError::new("min_chars", "too short") }
///     fn min_chars(min: usize);
/// }
/// ```
///
/// **Custom constructor** (overrides auto `new`):
/// ```rust,ignore
/// rule! {
///     pub Between { min: usize, max: usize };
///     check(self, value) { ... }
///     error(self, value) { ... }
///     new(min: usize, max: usize) { Self { min, max } }
///     fn between(min: usize, max: usize);
/// }
/// ```
#[macro_export]
macro_rules! rule {
    // ── Variant 1a: Unit rule (no fields) + factory fn ───────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($inp:ident) $check:block
        error($einp:ident) $err:block
        fn $factory:ident();
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name;
            check($inp) $check
            error($einp) $err
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit rule (no fields), no factory ────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident;
        check($inp:ident) $check:block
        error($einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name;

        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn apply(
                &self,
                field: &str,
                value: $crate::foundation::FieldValue,
                snapshot: &$crate::foundation::Snapshot,
            ) -> $crate::foundation::Step {
                let passed: bool = {
                    let $inp = &value;
                    $check
                };
                if passed {
                    $crate::foundation::Step::pass(value)
                } else {
                    let error: $crate::foundation::ValidationError = {
                        let $einp = &value;
                        $err
                    };
                    $crate::foundation::Step::fail(value, error.with_field(field.to_owned()))
                }
            }

            fn name(&self) -> &str {
                stringify!($name)
            }
        }
    };

    // ── Variant 3a: Struct with fields + custom new + factory fn ─────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            check($self_, $inp) $check
            error($self2, $einp) $err
            new($($narg: $naty),*) $new_body
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 3b: Struct with fields + custom new, no factory ──────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        error($self2:ident, $einp:ident) $err:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        #[allow(clippy::new_without_default)]
        impl $name {
            #[must_use]
            pub fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::rule!(@impl $name; check($self_, $inp) $check error($einp) $err);
    };

    // ── Variant 2a: Struct with fields + auto new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        error($self2:ident, $einp:ident) $err:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::rule! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ };
            check($self_, $inp) $check
            error($self2, $einp) $err
        }

        #[must_use]
        $vis fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Struct with fields + auto new, no factory ────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? };
        check($self_:ident, $inp:ident) $check:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        $crate::rule!(@impl $name; check($self_, $inp) $check error($einp) $err);
    };

    // ── Internal: `Rule` impl for structs with fields ────────────────────
    (@impl $name:ident; check($self_:ident, $inp:ident) $check:block error($einp:ident) $err:block) => {
        impl $crate::foundation::Rule for $name {
            #[allow(unused_variables)]
            fn apply(
                &$self_,
                field: &str,
                value: $crate::foundation::FieldValue,
                snapshot: &$crate::foundation::Snapshot,
            ) -> $crate::foundation::Step {
                let passed: bool = {
                    let $inp = &value;
                    $check
                };
                if passed {
                    $crate::foundation::Step::pass(value)
                } else {
                    let error: $crate::foundation::ValidationError = {
                        let $einp = &value;
                        $err
                    };
                    $crate::foundation::Step::fail(value, error.with_field(field.to_owned()))
                }
            }

            fn name(&self) -> &str {
                stringify!($name)
            }
        }
    };
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use crate::foundation::{FieldValue, Rule, Snapshot, ValidationError};

    fn run(rule: &impl Rule, value: impl Into<FieldValue>) -> crate::foundation::Step {
        rule.apply("field", value.into(), &Snapshot::new())
    }

    // Test 1: Unit rule (no fields)
    rule! {
        /// A test unit rule.
        TestNotNull;
        check(value) { !value.is_null() }
        error(value) { ValidationError::new("not_null", "must not be null") }
        fn test_not_null();
    }

    #[test]
    fn test_unit_rule() {
        assert!(run(&TestNotNull, "x").is_ok());
        assert!(!run(&TestNotNull, FieldValue::Null).is_ok());
    }

    #[test]
    fn test_unit_factory() {
        assert!(run(&test_not_null(), 1).is_ok());
        assert_eq!(test_not_null().name(), "TestNotNull");
    }

    rule! {
        #[derive(Copy, PartialEq, Eq, Default)]
        TestNonEmpty;
        check(value) { value.as_str().is_none_or(|s| !s.is_empty()) }
        error(value) { ValidationError::new("non_empty", "must not be empty") }
        fn test_non_empty();
    }

    #[test]
    fn test_unit_extra_derives() {
        let rule = test_non_empty();
        let copy = rule;
        assert_eq!(rule, TestNonEmpty::default());
        assert_eq!(copy, rule);
        assert!(!run(&rule, "").is_ok());
    }

    // Test 2: Struct with fields + auto new
    rule! {
        #[derive(Copy, PartialEq, Eq, Hash)]
        TestMinChars { min: usize };
        check(self, value) { value.as_str().is_none_or(|s| s.chars().count() >= self.min) }
        error(self, value) {
            ValidationError::new("min_chars", format!("need {} chars", self.min))
        }
        fn test_min_chars(min: usize);
    }

    #[test]
    fn test_struct_rule() {
        let rule = TestMinChars { min: 3 };
        assert!(run(&rule, "abc").is_ok());
        assert!(!run(&rule, "ab").is_ok());
        assert!(run(&rule, 5).is_ok());
    }

    #[test]
    fn test_struct_new_and_factory() {
        assert_eq!(TestMinChars::new(5), test_min_chars(5));
    }

    // Test 3: Custom constructor
    rule! {
        TestBetween { lo: f64, hi: f64 };
        check(self, value) {
            value.coerce_f64().is_ok_and(|n| n >= self.lo && n <= self.hi)
        }
        error(self, value) {
            ValidationError::new("between", format!("{} not in {}..{}", value, self.lo, self.hi))
        }
        new(lo: f64, hi: f64) { Self { lo: lo.min(hi), hi: hi.max(lo) } }
        fn test_between(lo: f64, hi: f64);
    }

    #[test]
    fn test_custom_new() {
        let rule = test_between(10.0, 1.0);
        assert_eq!(rule.lo, 1.0);
        assert!(run(&rule, 5).is_ok());
        assert!(!run(&rule, 11).is_ok());
    }

    // Test 4: Failing checks forward the original value
    #[test]
    fn test_failure_forwards_value() {
        let step = run(&TestMinChars::new(10), "short");
        assert_eq!(step.value, FieldValue::from("short"));
    }

    // Test 5: Error content and field attachment
    #[test]
    fn test_error_message_content() {
        let step = run(&TestMinChars::new(5), "hi");
        let err = step.error.unwrap();
        assert_eq!(err.code, "min_chars");
        assert_eq!(err.message, "need 5 chars");
        assert_eq!(err.field.as_deref(), Some("field"));
    }

    #[test]
    fn test_unit_error_message_content() {
        let err = run(&TestNotNull, FieldValue::Null).error.unwrap();
        assert_eq!(err.code, "not_null");
        assert_eq!(err.message, "must not be null");
    }

    // Test 6: Struct without factory fn
    rule! {
        TestMaxChars { max: usize };
        check(self, value) { value.as_str().is_none_or(|s| s.len() <= self.max) }
        error(self, value) {
            ValidationError::new("max_chars", format!("at most {}", self.max))
        }
    }

    #[test]
    fn test_struct_without_factory() {
        let rule = TestMaxChars::new(3);
        assert!(run(&rule, "abc").is_ok());
        assert!(!run(&rule, "abcd").is_ok());
    }
}
