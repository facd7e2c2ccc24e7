//! Prelude module for convenient imports.
//!
//! Provides a single `use fieldguard::prelude::*;` import that brings in the
//! validator, chain builder, value and error types, and every built-in rule.
//!
//! # Examples
//!
//! ```
//! use fieldguard::prelude::*;
//!
//! let chain = rules().required().min_value(18.0);
//! let outcome = chain.execute("age", FieldValue::from(21), &Snapshot::new());
//! assert!(outcome.is_ok());
//! ```

// ============================================================================
// FOUNDATION: Values, traits, errors
// ============================================================================

pub use crate::foundation::{
    CoercionError, FieldErrors, FieldType, FieldValue, Record, RecordError, Rule, SchemaError,
    Snapshot, Step, ValidationError,
};

// ============================================================================
// RULES: All built-in rules
// ============================================================================

#[allow(clippy::wildcard_imports)]
pub use crate::rules::*;

// ============================================================================
// CHAIN AND VALIDATOR
// ============================================================================

pub use crate::chain::{ChainOutcome, RuleChain, rules};
pub use crate::validator::{Report, Validator, ValidatorBuilder, ValidatorState};

#[cfg(feature = "derive")]
pub use fieldguard_macros::Record;
