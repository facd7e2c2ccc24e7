//! Rule chains
//!
//! A [`RuleChain`] is the ordered list of steps run for one field. Chains are
//! built by value:
//!
//! ```
//! use fieldguard::chain::rules;
//! use fieldguard::foundation::{FieldValue, Snapshot};
//!
//! let name = rules().required().trim().min_length(2).max_length(100);
//!
//! let outcome = name.execute("name", "  Alexandre  ".into(), &Snapshot::new());
//! assert!(outcome.is_ok());
//! assert_eq!(outcome.value, FieldValue::from("Alexandre"));
//! ```
//!
//! Execution never short-circuits: every step runs and receives whatever the
//! previous step forwarded, so one pass reports every problem of a field.

use std::fmt;
use std::sync::Arc;

use crate::foundation::{FieldValue, Rule, Snapshot, Step, ValidationError};
use crate::rules::{
    MaxLength, MinLength, email, max_length, max_value, min_length, min_value, number, required,
    same_as, trim,
};

// ============================================================================
// CHAIN OUTCOME
// ============================================================================

/// Result of running a chain on one value.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainOutcome {
    /// Value returned by the last step, or the input for an empty chain.
    pub value: FieldValue,
    /// Errors of every failed step, in step order.
    pub errors: Vec<ValidationError>,
}

impl ChainOutcome {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Error messages in step order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.errors.iter().map(|e| e.message.as_ref()).collect()
    }
}

// ============================================================================
// RULE CHAIN
// ============================================================================

/// An ordered sequence of rules for one field.
///
/// Builder methods consume the chain and return it with one more step.
/// Cloning shares the steps, which are immutable once added.
#[derive(Clone, Default)]
#[must_use = "a chain does nothing until it is executed or bound to a validator"]
pub struct RuleChain {
    steps: Vec<Arc<dyn Rule>>,
}

/// Starts an empty chain.
pub fn rules() -> RuleChain {
    RuleChain::new()
}

impl RuleChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends any rule.
    pub fn add<R: Rule + 'static>(mut self, rule: R) -> Self {
        self.steps.push(Arc::new(rule));
        self
    }

    /// Appends a closure rule.
    ///
    /// Same as [`add`](Self::add), with the signature spelled out so that
    /// closure arguments need no annotations.
    pub fn add_fn<F>(self, rule: F) -> Self
    where
        F: Fn(&str, FieldValue, &Snapshot) -> Step + Send + Sync + 'static,
    {
        self.add(rule)
    }

    pub fn required(self) -> Self {
        self.add(required())
    }

    pub fn trim(self) -> Self {
        self.add(trim())
    }

    pub fn email(self) -> Self {
        self.add(email())
    }

    pub fn number(self) -> Self {
        self.add(number())
    }

    pub fn min_value(self, min: f64) -> Self {
        self.add(min_value(min))
    }

    pub fn max_value(self, max: f64) -> Self {
        self.add(max_value(max))
    }

    /// Minimum length in chars.
    pub fn min_length(self, min: usize) -> Self {
        self.add(min_length(min))
    }

    /// Maximum length in chars.
    pub fn max_length(self, max: usize) -> Self {
        self.add(max_length(max))
    }

    pub fn min_length_bytes(self, min: usize) -> Self {
        self.add(MinLength::bytes(min))
    }

    pub fn max_length_bytes(self, max: usize) -> Self {
        self.add(MaxLength::bytes(max))
    }

    /// Requires the value to equal the original value of `other`.
    pub fn same_as(self, other: impl Into<String>) -> Self {
        self.add(same_as(other))
    }

    /// Runs every step on `value`.
    pub fn execute(&self, field: &str, value: FieldValue, snapshot: &Snapshot) -> ChainOutcome {
        let mut errors = Vec::new();
        let mut value = value;

        for step in &self.steps {
            let Step { value: next, error } = step.apply(field, value, snapshot);
            if let Some(error) = error {
                tracing::trace!(field, rule = step.name(), %error, "rule failed");
                errors.push(error);
            }
            value = next;
        }

        ChainOutcome { value, errors }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Names of the steps, in order.
    pub fn step_names(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().map(|step| step.name())
    }

    /// Fields read from the snapshot by any step.
    pub fn referenced_fields(&self) -> impl Iterator<Item = &str> {
        self.steps.iter().filter_map(|step| step.references())
    }
}

impl fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.step_names()).finish()
    }
}

// ============================================================================
// TESTS
// ============================================================================
