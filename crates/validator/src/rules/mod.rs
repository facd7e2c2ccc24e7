//! Built-in rules
//!
//! Ready-to-use steps for a [`RuleChain`](crate::chain::RuleChain).
//!
//! # Categories
//!
//! - **Presence**: [`Required`]
//! - **Transform**: [`Trim`]
//! - **Content**: [`Email`], [`Number`]
//! - **Range**: [`MinValue`], [`MaxValue`] (forward the value as `f64`)
//! - **Length**: [`MinLength`], [`MaxLength`]
//! - **Cross-field**: [`SameAs`]
//!
//! # Examples
//!
//! ```
//! use fieldguard::foundation::{Rule, Snapshot};
//! use fieldguard::rules::*;
//!
//! let snapshot = Snapshot::new();
//! assert!(min_length(3).apply("name", "Ana".into(), &snapshot).is_ok());
//! assert!(!email().apply("email", "ana".into(), &snapshot).is_ok());
//! ```

pub mod content;
pub mod cross_field;
pub mod length;
pub mod presence;
pub mod range;
pub mod transform;

pub use content::{Email, Number, email, is_mailbox, number};
pub use cross_field::{SameAs, same_as};
pub use length::{LengthMode, MaxLength, MinLength, max_length, min_length};
pub use presence::{Required, required};
pub use range::{MaxValue, MinValue, max_value, min_value};
pub use transform::{Trim, trim};
