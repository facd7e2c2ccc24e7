//! Error types
//!
//! Two very different kinds of failure live here:
//!
//! - [`ValidationError`] / [`FieldErrors`]: bad user input. One error per
//!   failed rule step, collected per field and handed back to the caller.
//! - [`SchemaError`] / [`RecordError`]: a mis-declared validator or record.
//!   These are returned as `Err` and never mixed into [`FieldErrors`].
//!
//! All string fields of [`ValidationError`] use `Cow<'static, str>` so the
//! common case of a static code costs no allocation.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;

use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::foundation::record::TypeMismatch;

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// A single failed rule step.
///
/// # Examples
///
/// ```
/// use fieldguard::foundation::ValidationError;
///
/// let error = ValidationError::new("min_length", "minimum length must be 2")
///     .with_field("name")
///     .with_param("min", "2");
///
/// assert_eq!(error.to_string(), "minimum length must be 2");
/// assert_eq!(error.param("min"), Some("2"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Stable code for programmatic handling, e.g. `"required"`.
    pub code: Cow<'static, str>,

    /// Human-readable message, e.g. `"this field is required"`.
    pub message: Cow<'static, str>,

    /// Field the failing step ran on.
    pub field: Option<Cow<'static, str>>,

    /// Ordered parameters of the message, e.g. `[("min", "2")]`.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the field name.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a message parameter.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Converts the error to a JSON object with every attribute.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        let params: serde_json::Map<String, serde_json::Value> = self
            .params
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect();

        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "field": self.field,
            "params": params,
        })
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// FIELD ERRORS
// ============================================================================

/// Errors of one validation pass, keyed by field name.
///
/// Only fields with at least one failed step have an entry. Within an entry,
/// errors keep the order of the steps that produced them.
///
/// Serializes to `{"field": ["message", ...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<String, Vec<ValidationError>>,
}

impl FieldErrors {
    /// Creates an empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the errors of `field`. An empty list records nothing.
    pub fn insert(&mut self, field: impl Into<String>, errors: Vec<ValidationError>) {
        if !errors.is_empty() {
            self.errors.insert(field.into(), errors);
        }
    }

    /// Returns the errors recorded for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[ValidationError]> {
        self.errors.get(field).map(Vec::as_slice)
    }

    /// Returns the messages recorded for `field`, in step order.
    #[must_use]
    pub fn messages(&self, field: &str) -> Vec<&str> {
        self.get(field)
            .map(|errors| errors.iter().map(|e| e.message.as_ref()).collect())
            .unwrap_or_default()
    }

    /// Returns true if `field` failed.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.errors.contains_key(field)
    }

    /// Number of failing fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if no field failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Total number of failed steps across all fields.
    #[must_use]
    pub fn total(&self) -> usize {
        self.errors.values().map(Vec::len).sum()
    }

    /// Names of the failing fields, in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(String::as_str)
    }

    /// Iterates over `(field, errors)` pairs, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ValidationError])> {
        self.errors.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Drops every recorded error.
    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Flattens the map to plain messages.
    #[must_use]
    pub fn into_messages(self) -> BTreeMap<String, Vec<String>> {
        self.errors
            .into_iter()
            .map(|(field, errors)| {
                let messages = errors.into_iter().map(|e| e.message.into_owned()).collect();
                (field, messages)
            })
            .collect()
    }

    /// Renders the map as JSON: `{"field": ["message", ...]}`.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        // Map keys are strings and values are string lists: this cannot fail.
        serde_json::to_value(self).unwrap_or_else(|_| serde_json::json!({}))
    }

    /// Renders the map as a compact JSON string.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        self.to_json().to_string()
    }
}

impl Serialize for FieldErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        struct Messages<'a>(&'a [ValidationError]);

        impl Serialize for Messages<'_> {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
                for error in self.0 {
                    seq.serialize_element(error.message.as_ref())?;
                }
                seq.end()
            }
        }

        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, errors) in &self.errors {
            map.serialize_entry(field, &Messages(errors))?;
        }
        map.end()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "validation failed for {} field(s):", self.errors.len())?;
        for (field, errors) in &self.errors {
            for error in errors {
                writeln!(f, "  {field}: {error}")?;
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a FieldErrors {
    type Item = (&'a String, &'a Vec<ValidationError>);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Vec<ValidationError>>;

    fn into_iter(self) -> Self::IntoIter {
        self.errors.iter()
    }
}

// ============================================================================
// CONTRACT VIOLATIONS
// ============================================================================

/// A validator declaration that does not fit its record type.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum SchemaError {
    /// A chain key that binds to no field of the record.
    #[error("field '{key}' does not exist on record `{record}`")]
    UnknownField { key: String, record: &'static str },

    /// Two chain keys that bind to the same record field.
    #[error("fields '{first}' and '{second}' both bind to `{field}`")]
    DuplicateBinding {
        first: String,
        second: String,
        field: &'static str,
    },
}

/// A record that does not honour its own accessor table.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum RecordError {
    /// A field listed in `Record::FIELDS` that the record cannot read or write.
    #[error("record does not serve field `{field}`")]
    UnreadableField { field: String },

    /// A final value that does not fit the field's declared type.
    #[error("cannot write back field `{field}`: {source}")]
    TypeMismatch {
        field: String,
        #[source]
        source: TypeMismatch,
    },
}

impl RecordError {
    /// Creates an [`RecordError::UnreadableField`].
    pub fn unreadable(field: impl Into<String>) -> Self {
        Self::UnreadableField {
            field: field.into(),
        }
    }

    /// Creates an [`RecordError::TypeMismatch`].
    pub fn type_mismatch(field: impl Into<String>, source: TypeMismatch) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            source,
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
