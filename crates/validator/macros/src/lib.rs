//! # fieldguard-macros
//!
//! Derive macros for [fieldguard](https://docs.rs/fieldguard).
//!
//! | Macro | Description |
//! |-------|-------------|
//! | [`Record`](derive@Record) | Implements the `Record` accessor table |
//!
//! Use them through the `fieldguard` crate (feature `derive`, on by default)
//! rather than depending on this crate directly.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

extern crate proc_macro;

use proc_macro::TokenStream;

mod record;
mod support;

/// Derive macro for the `Record` trait.
///
/// Every named field becomes an entry of `Record::FIELDS` and is read and
/// written through `FieldType`, so each field type must implement it.
///
/// # Attributes
///
/// ## Field attributes (`#[record(...)]`)
///
/// - `rename = "..."` - Bind the field under another name
/// - `skip` - Leave the field out of the table
///
/// # Example
///
/// ```ignore
/// #[derive(Record)]
/// pub struct Signup {
///     name: String,
///     #[record(rename = "passwordValidation")]
///     password_confirmation: String,
///     age: Option<u8>,
///     #[record(skip)]
///     session: SessionHandle,
/// }
/// ```
#[proc_macro_derive(Record, attributes(record))]
pub fn derive_record(input: TokenStream) -> TokenStream {
    record::derive(input)
}
