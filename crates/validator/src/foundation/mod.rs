//! Core validation types and traits
//!
//! This module contains the fundamental building blocks of the validation system:
//!
//! - **Values**: [`FieldValue`], the closed set of scalar kinds a field can hold
//! - **Traits**: [`Rule`] (one step of a chain), [`Record`] and [`FieldType`]
//!   (name-based field access)
//! - **Snapshot**: [`Snapshot`], the original values visible to cross-field rules
//! - **Errors**: [`ValidationError`], [`FieldErrors`], [`SchemaError`], [`RecordError`]
//!
//! # Architecture
//!
//! ## 1. Values flow through every step
//!
//! A rule never short-circuits its chain. It returns a [`Step`] carrying the
//! value for the next rule and, optionally, an error:
//!
//! ```rust,ignore
//! fn apply(&self, field: &str, value: FieldValue, snapshot: &Snapshot) -> Step {
//!     if ok { Step::pass(value) } else { Step::fail(value, error) }
//! }
//! ```
//!
//! ## 2. Field access is a table, not reflection
//!
//! A [`Record`] lists its field names and serves reads and writes by name.
//! `#[derive(Record)]` writes the table for you.
//!
//! ## 3. Misconfiguration is not a validation failure
//!
//! User input errors end up in [`FieldErrors`]. An unknown field or a
//! write-back type mismatch is a [`SchemaError`] or [`RecordError`] returned
//! as `Err`.

pub mod error;
pub mod record;
pub mod snapshot;
pub mod traits;
pub mod value;

pub use error::{FieldErrors, RecordError, SchemaError, ValidationError};
pub use record::{FieldType, Record, TypeMismatch, resolve_field};
pub use snapshot::Snapshot;
pub use traits::{Rule, Step};
pub use value::{CoercionError, FieldValue};

