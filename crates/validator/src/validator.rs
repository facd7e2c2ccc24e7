//! The validator
//!
//! A [`Validator`] binds named [`RuleChain`]s to the fields of a [`Record`]
//! type and runs them as one pass:
//!
//! 1. every declared field is read into a [`Snapshot`];
//! 2. each chain runs on its field's snapshot value, with the snapshot
//!    available for cross-field rules;
//! 3. failing fields land in [`FieldErrors`], passing fields in the value map.
//!
//! Keys are resolved against [`Record::FIELDS`] once, in [`Validator::new`],
//! so an unknown field is reported before any record is seen.

use std::collections::BTreeMap;
use std::fmt;
use std::marker::PhantomData;

use serde::Serialize;

use crate::chain::RuleChain;
use crate::foundation::{
    FieldErrors, FieldValue, Record, RecordError, SchemaError, Snapshot, resolve_field,
};

// ============================================================================
// STATE
// ============================================================================

/// Observable state of a [`Validator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ValidatorState {
    /// No pass has run yet.
    #[default]
    Unvalidated,
    /// Results of the last pass are available.
    Validated,
}

// ============================================================================
// REPORT
// ============================================================================

/// Owned results of a validation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Report {
    pub errors: FieldErrors,
    pub values: BTreeMap<String, FieldValue>,
}

impl Report {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

// ============================================================================
// VALIDATOR
// ============================================================================

struct Binding {
    key: String,
    field: &'static str,
    chain: RuleChain,
}

/// Runs per-field rule chains against records of type `T`.
///
/// # Examples
///
/// ```
/// use fieldguard::chain::rules;
/// use fieldguard::{Record, Validator};
///
/// #[derive(Record)]
/// struct Signup {
///     name: String,
///     email: String,
/// }
///
/// let mut validator = Validator::<Signup>::builder()
///     .field("name", rules().required().trim().min_length(2))
///     .field("email", rules().required().email())
///     .build()
///     .unwrap();
///
/// let signup = Signup { name: "A".into(), email: "alexandre".into() };
/// assert!(!validator.validate(&signup).unwrap());
/// assert_eq!(validator.errors().messages("name"), vec!["minimum length must be 2"]);
/// ```
pub struct Validator<T: Record> {
    bindings: Vec<Binding>,
    snapshot: Snapshot,
    errors: FieldErrors,
    values: BTreeMap<String, FieldValue>,
    state: ValidatorState,
    _record: PhantomData<fn(&T)>,
}

impl<T: Record> Validator<T> {
    /// Binds every `(key, chain)` pair to a field of `T`.
    ///
    /// # Errors
    ///
    /// [`SchemaError::UnknownField`] when a key binds to no field, and
    /// [`SchemaError::DuplicateBinding`] when two keys bind to the same one.
    pub fn new<I, K>(chains: I) -> Result<Self, SchemaError>
    where
        I: IntoIterator<Item = (K, RuleChain)>,
        K: Into<String>,
    {
        let mut bindings: Vec<Binding> = Vec::new();

        for (key, chain) in chains {
            let key = key.into();
            let Some(field) = resolve_field(T::FIELDS, &key) else {
                return Err(SchemaError::UnknownField {
                    key,
                    record: std::any::type_name::<T>(),
                });
            };

            if let Some(first) = bindings.iter().find(|b| b.field == field) {
                return Err(SchemaError::DuplicateBinding {
                    first: first.key.clone(),
                    second: key,
                    field,
                });
            }

            bindings.push(Binding { key, field, chain });
        }

        for binding in &bindings {
            for target in binding.chain.referenced_fields() {
                if !bindings.iter().any(|b| b.key == target) {
                    tracing::warn!(
                        field = %binding.key,
                        referenced = target,
                        "cross-field rule refers to an undeclared field and will compare against null"
                    );
                }
            }
        }

        Ok(Self {
            bindings,
            snapshot: Snapshot::new(),
            errors: FieldErrors::new(),
            values: BTreeMap::new(),
            state: ValidatorState::Unvalidated,
            _record: PhantomData,
        })
    }

    /// Starts a fluent declaration.
    #[must_use]
    pub fn builder() -> ValidatorBuilder<T> {
        ValidatorBuilder::new()
    }

    /// Validates `record`. Returns `Ok(true)` when every field passed.
    ///
    /// Results of a previous pass are discarded.
    ///
    /// # Errors
    ///
    /// [`RecordError::UnreadableField`] when the record does not serve one
    /// of its own declared fields.
    pub fn validate(&mut self, record: &T) -> Result<bool, RecordError> {
        self.run(record, false)
    }

    /// Validates `record` and writes the final value of every passing field
    /// back into it. Failing fields are left untouched.
    ///
    /// # Errors
    ///
    /// [`RecordError::TypeMismatch`] when a final value does not fit its
    /// field's type. Every value is checked before the first write, so on
    /// error the record is unchanged and the validator holds no results.
    pub fn validate_into(&mut self, record: &mut T) -> Result<bool, RecordError> {
        let valid = self.run(record, true)?;

        let pending: Vec<(&'static str, FieldValue)> = self
            .bindings
            .iter()
            .filter_map(|b| self.values.get(&b.key).map(|v| (b.field, v.clone())))
            .collect();

        if let Err(err) = pending
            .iter()
            .try_for_each(|(field, value)| record.check_field(field, value))
        {
            self.errors.clear();
            self.values.clear();
            self.state = ValidatorState::Unvalidated;
            tracing::debug!(error = %err, "write-back rejected, record left unchanged");
            return Err(err);
        }

        for (field, value) in pending {
            record.write_field(field, value)?;
        }

        Ok(valid)
    }

    fn run(&mut self, record: &T, write_back: bool) -> Result<bool, RecordError> {
        self.errors.clear();
        self.values.clear();
        self.state = ValidatorState::Unvalidated;

        tracing::debug!(fields = self.bindings.len(), write_back, "validation pass started");

        self.snapshot = self
            .bindings
            .iter()
            .map(|b| {
                record
                    .read_field(b.field)
                    .map(|value| (b.key.as_str(), value))
                    .ok_or_else(|| RecordError::unreadable(b.field))
            })
            .collect::<Result<Snapshot, _>>()?;

        for binding in &self.bindings {
            let value = self
                .snapshot
                .get(&binding.key)
                .cloned()
                .unwrap_or(FieldValue::Null);
            let outcome = binding.chain.execute(&binding.key, value, &self.snapshot);

            tracing::trace!(
                field = %binding.key,
                steps = binding.chain.len(),
                errors = outcome.errors.len(),
                "field validated"
            );

            if outcome.is_ok() {
                self.values.insert(binding.key.clone(), outcome.value);
            } else {
                self.errors.insert(binding.key.clone(), outcome.errors);
            }
        }

        self.state = ValidatorState::Validated;
        tracing::debug!(
            fields = self.bindings.len(),
            failed = self.errors.len(),
            errors = self.errors.total(),
            "validation pass finished"
        );

        Ok(self.errors.is_empty())
    }

    /// Errors of the last pass, keyed by field.
    #[must_use]
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Final values of the fields that passed the last pass.
    #[must_use]
    pub fn values(&self) -> &BTreeMap<String, FieldValue> {
        &self.values
    }

    /// Original values read by the last pass.
    #[must_use]
    pub fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn state(&self) -> ValidatorState {
        self.state
    }

    #[must_use]
    pub fn is_validated(&self) -> bool {
        self.state == ValidatorState::Validated
    }

    /// Declared keys, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.bindings.iter().map(|b| b.key.as_str())
    }

    /// Copies the results of the last pass.
    #[must_use]
    pub fn report(&self) -> Report {
        Report {
            errors: self.errors.clone(),
            values: self.values.clone(),
        }
    }

    /// Takes the results of the last pass.
    #[must_use]
    pub fn into_report(self) -> Report {
        Report {
            errors: self.errors,
            values: self.values,
        }
    }
}

impl<T: Record> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("record", &std::any::type_name::<T>())
            .field("fields", &self.fields().collect::<Vec<_>>())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BUILDER
// ============================================================================

/// Fluent declaration of a [`Validator`].
#[must_use = "call `.build()` to get a validator"]
pub struct ValidatorBuilder<T: Record> {
    chains: Vec<(String, RuleChain)>,
    _record: PhantomData<fn(&T)>,
}

impl<T: Record> ValidatorBuilder<T> {
    pub fn new() -> Self {
        Self {
            chains: Vec::new(),
            _record: PhantomData,
        }
    }

    /// Declares the chain of `key`.
    pub fn field(mut self, key: impl Into<String>, chain: RuleChain) -> Self {
        self.chains.push((key.into(), chain));
        self
    }

    /// Resolves every key, see [`Validator::new`].
    ///
    /// # Errors
    ///
    /// Same as [`Validator::new`].
    pub fn build(self) -> Result<Validator<T>, SchemaError> {
        Validator::new(self.chains)
    }
}

impl<T: Record> Default for ValidatorBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// TESTS
// ============================================================================
