//! # fieldguard
//!
//! Declarative field validation for typed records.
//!
//! ## Quick Start
//!
//! ```
//! use fieldguard::prelude::*;
//!
//! #[derive(Record)]
//! struct Signup {
//!     name: String,
//!     email: String,
//!     password: String,
//!     password_validation: String,
//! }
//!
//! let mut validator = Validator::<Signup>::builder()
//!     .field("name", rules().required().trim().min_length(2).max_length(100))
//!     .field("email", rules().required().email())
//!     .field("password", rules().required().min_length(8))
//!     .field("passwordValidation", rules().required().same_as("password"))
//!     .build()?;
//!
//! let signup = Signup {
//!     name: "  Alexandre  ".into(),
//!     email: "alexandre@gmail.com".into(),
//!     password: "easypassword".into(),
//!     password_validation: "easypassword".into(),
//! };
//!
//! assert!(validator.validate(&signup)?);
//! assert_eq!(validator.values()["name"], FieldValue::from("Alexandre"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Writing Rules
//!
//! Use the [`rule!`] macro for check-only rules, implement
//! [`Rule`](foundation::Rule) by hand for rules that transform the value or
//! read other fields, or pass a closure to
//! [`RuleChain::add_fn`](chain::RuleChain::add_fn).
//!
//! ## Built-in Rules
//!
//! - **Presence**: [`Required`](rules::Required)
//! - **Transform**: [`Trim`](rules::Trim)
//! - **Content**: [`Email`](rules::Email), [`Number`](rules::Number)
//! - **Range**: [`MinValue`](rules::MinValue), [`MaxValue`](rules::MaxValue)
//! - **Length**: [`MinLength`](rules::MinLength), [`MaxLength`](rules::MaxLength)
//! - **Cross-field**: [`SameAs`](rules::SameAs)
//!
//! ## Features
//!
//! - `derive` (default): `#[derive(Record)]`, re-exported as [`Record`].

// ValidationError is returned by value from every rule step; boxing it
// would add an allocation per failed step.
#![allow(clippy::result_large_err)]

pub mod chain;
pub mod foundation;
mod macros;
pub mod prelude;
pub mod rules;
pub mod validator;

pub use chain::{ChainOutcome, RuleChain, rules};
pub use foundation::{FieldErrors, FieldValue, Record, RecordError, SchemaError, ValidationError};
pub use validator::{Report, Validator, ValidatorBuilder, ValidatorState};

#[cfg(feature = "derive")]
pub use fieldguard_macros::Record;
