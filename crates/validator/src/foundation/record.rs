//! Record access
//!
//! A [`Record`] exposes its fields by name through a fixed accessor table,
//! usually generated with `#[derive(Record)]`. The validator never reflects on
//! a type: it reads and writes through this table only.
//!
//! ```rust,ignore
//! use fieldguard::Record;
//!
//! #[derive(Record)]
//! struct Signup {
//!     name: String,
//!     #[record(rename = "passwordValidation")]
//!     password_confirmation: String,
//!     age: Option<u8>,
//! }
//! ```

use crate::foundation::{FieldValue, RecordError};

// ============================================================================
// RECORD TRAIT
// ============================================================================

/// Name-based access to the fields of a typed record.
pub trait Record {
    /// Every field name served by [`read_field`](Record::read_field).
    const FIELDS: &'static [&'static str];

    /// Reads the current value of `name`, or `None` for an unknown name.
    fn read_field(&self, name: &str) -> Option<FieldValue>;

    /// Checks that `value` could be written into `name`, without writing it.
    ///
    /// Fails exactly when [`write_field`](Record::write_field) would.
    fn check_field(&self, name: &str, value: &FieldValue) -> Result<(), RecordError>;

    /// Overwrites `name` with `value`.
    ///
    /// Fails with [`RecordError::TypeMismatch`] when `value` does not fit the
    /// field's declared type, and with [`RecordError::UnreadableField`] for an
    /// unknown name.
    fn write_field(&mut self, name: &str, value: FieldValue) -> Result<(), RecordError>;
}

/// Finds the entry of `fields` that `key` binds to.
///
/// Names match after ASCII case folding and removal of `_` and `-`, so
/// `passwordValidation`, `password_validation` and `PasswordValidation`
/// all bind to the same field.
#[must_use]
pub fn resolve_field(fields: &'static [&'static str], key: &str) -> Option<&'static str> {
    fields
        .iter()
        .copied()
        .find(|field| same_binding(field, key))
}

fn same_binding(a: &str, b: &str) -> bool {
    let fold = |s: &str| {
        s.chars()
            .filter(|c| *c != '_' && *c != '-')
            .map(|c| c.to_ascii_lowercase())
            .collect::<String>()
    };
    fold(a) == fold(b)
}

// ============================================================================
// FIELD TYPE
// ============================================================================

/// A value's declared type did not accept the value written into it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected {expected}, found {found}")]
pub struct TypeMismatch {
    pub expected: &'static str,
    pub found: &'static str,
}

impl TypeMismatch {
    fn of<T: FieldType>(value: &FieldValue) -> Self {
        Self {
            expected: T::TYPE_NAME,
            found: value.type_name(),
        }
    }
}

/// A Rust type that can live in a [`Record`] field.
pub trait FieldType: Sized {
    /// Name reported in [`TypeMismatch`].
    const TYPE_NAME: &'static str;

    /// Reads the field into a [`FieldValue`].
    fn to_field_value(&self) -> FieldValue;

    /// Converts a chain's final value back into the field type.
    fn from_field_value(value: FieldValue) -> Result<Self, TypeMismatch>;
}

impl FieldType for String {
    const TYPE_NAME: &'static str = "string";

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Str(self.clone())
    }

    fn from_field_value(value: FieldValue) -> Result<Self, TypeMismatch> {
        match value {
            FieldValue::Str(s) => Ok(s),
            other => Err(TypeMismatch::of::<Self>(&other)),
        }
    }
}

impl FieldType for bool {
    const TYPE_NAME: &'static str = "bool";

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Bool(*self)
    }

    fn from_field_value(value: FieldValue) -> Result<Self, TypeMismatch> {
        match value {
            FieldValue::Bool(b) => Ok(b),
            other => Err(TypeMismatch::of::<Self>(&other)),
        }
    }
}

impl<T: FieldType> FieldType for Option<T> {
    const TYPE_NAME: &'static str = T::TYPE_NAME;

    fn to_field_value(&self) -> FieldValue {
        self.as_ref().map_or(FieldValue::Null, T::to_field_value)
    }

    fn from_field_value(value: FieldValue) -> Result<Self, TypeMismatch> {
        match value {
            FieldValue::Null => Ok(None),
            other => T::from_field_value(other).map(Some),
        }
    }
}

/// Integer view of a value: any integer kind, or a float with no fractional
/// part. Conversion into the target width is checked by the caller.
fn integral(value: &FieldValue) -> Option<i128> {
    match *value {
        FieldValue::I8(n) => Some(i128::from(n)),
        FieldValue::I16(n) => Some(i128::from(n)),
        FieldValue::I32(n) => Some(i128::from(n)),
        FieldValue::I64(n) => Some(i128::from(n)),
        FieldValue::U8(n) => Some(i128::from(n)),
        FieldValue::U16(n) => Some(i128::from(n)),
        FieldValue::U32(n) => Some(i128::from(n)),
        FieldValue::U64(n) => Some(i128::from(n)),
        FieldValue::F32(n) => integral_float(f64::from(n)),
        FieldValue::F64(n) => integral_float(n),
        FieldValue::Null | FieldValue::Bool(_) | FieldValue::Str(_) => None,
    }
}

fn integral_float(n: f64) -> Option<i128> {
    // Beyond 2^64 no target width can hold the value anyway.
    (n.is_finite() && n.fract() == 0.0 && n.abs() <= 1.8e19).then_some(n as i128)
}

macro_rules! impl_integer_field {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl FieldType for $ty {
                const TYPE_NAME: &'static str = stringify!($ty);

                fn to_field_value(&self) -> FieldValue {
                    FieldValue::from(*self)
                }

                fn from_field_value(value: FieldValue) -> Result<Self, TypeMismatch> {
                    if let FieldValue::$variant(n) = value {
                        return Ok(n);
                    }
                    integral(&value)
                        .and_then(|n| <$ty>::try_from(n).ok())
                        .ok_or_else(|| TypeMismatch::of::<Self>(&value))
                }
            }
        )+
    };
}

impl_integer_field! {
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
}

impl FieldType for isize {
    const TYPE_NAME: &'static str = "isize";

    fn to_field_value(&self) -> FieldValue {
        FieldValue::from(*self)
    }

    fn from_field_value(value: FieldValue) -> Result<Self, TypeMismatch> {
        integral(&value)
            .and_then(|n| Self::try_from(n).ok())
            .ok_or_else(|| TypeMismatch::of::<Self>(&value))
    }
}

impl FieldType for usize {
    const TYPE_NAME: &'static str = "usize";

    fn to_field_value(&self) -> FieldValue {
        FieldValue::from(*self)
    }

    fn from_field_value(value: FieldValue) -> Result<Self, TypeMismatch> {
        integral(&value)
            .and_then(|n| Self::try_from(n).ok())
            .ok_or_else(|| TypeMismatch::of::<Self>(&value))
    }
}

impl FieldType for f64 {
    const TYPE_NAME: &'static str = "f64";

    fn to_field_value(&self) -> FieldValue {
        FieldValue::F64(*self)
    }

    fn from_field_value(value: FieldValue) -> Result<Self, TypeMismatch> {
        if !value.is_numeric() {
            return Err(TypeMismatch::of::<Self>(&value));
        }
        value
            .coerce_f64()
            .map_err(|_| TypeMismatch::of::<Self>(&value))
    }
}

impl FieldType for f32 {
    const TYPE_NAME: &'static str = "f32";

    fn to_field_value(&self) -> FieldValue {
        FieldValue::F32(*self)
    }

    fn from_field_value(value: FieldValue) -> Result<Self, TypeMismatch> {
        match value {
            FieldValue::F32(n) => Ok(n),
            ref other if other.is_numeric() => other
                .coerce_f64()
                .map(|n| n as f32)
                .map_err(|_| TypeMismatch::of::<Self>(other)),
            other => Err(TypeMismatch::of::<Self>(&other)),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
