//! Dynamically-typed field values
//!
//! Every rule receives and returns a [`FieldValue`]: a closed union over the
//! scalar kinds a record field can hold. Keeping the set closed makes the
//! numeric coercion used by `min_value` / `max_value` exhaustive.

use std::fmt;

use serde::{Serialize, Serializer};

// ============================================================================
// FIELD VALUE
// ============================================================================

/// A scalar value read from, or written back to, a record field.
///
/// Equality is structural: `FieldValue::from("1") != FieldValue::from(1)`.
/// This is the equality `same_as` uses to compare sibling fields.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FieldValue {
    /// Absent value (`None` in an `Option` field).
    #[default]
    Null,
    Bool(bool),
    Str(String),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
}

impl FieldValue {
    /// Name of the concrete kind, used in coercion and type-mismatch messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Str(_) => "string",
            Self::I8(_) => "i8",
            Self::I16(_) => "i16",
            Self::I32(_) => "i32",
            Self::I64(_) => "i64",
            Self::U8(_) => "u8",
            Self::U16(_) => "u16",
            Self::U32(_) => "u32",
            Self::U64(_) => "u64",
            Self::F32(_) => "f32",
            Self::F64(_) => "f64",
        }
    }

    /// Returns true for [`FieldValue::Null`].
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the string payload, if this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns true for every integer and float kind.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, Self::Null | Self::Bool(_) | Self::Str(_))
    }

    /// Coerces the value to `f64` for magnitude comparisons.
    ///
    /// All integer widths and both float widths convert directly. Strings are
    /// parsed as `f64`. Booleans and `Null` cannot be coerced.
    ///
    /// # Examples
    ///
    /// ```
    /// use fieldguard::foundation::FieldValue;
    ///
    /// assert_eq!(FieldValue::from(9_u8).coerce_f64().unwrap(), 9.0);
    /// assert_eq!(FieldValue::from("11").coerce_f64().unwrap(), 11.0);
    /// assert!(FieldValue::from("eleven").coerce_f64().is_err());
    /// assert!(FieldValue::from(true).coerce_f64().is_err());
    /// ```
    pub fn coerce_f64(&self) -> Result<f64, CoercionError> {
        match self {
            Self::Str(s) => s.parse::<f64>().map_err(|_| CoercionError::NotANumber {
                input: s.clone(),
            }),
            Self::I8(n) => Ok(f64::from(*n)),
            Self::I16(n) => Ok(f64::from(*n)),
            Self::I32(n) => Ok(f64::from(*n)),
            Self::I64(n) => Ok(*n as f64),
            Self::U8(n) => Ok(f64::from(*n)),
            Self::U16(n) => Ok(f64::from(*n)),
            Self::U32(n) => Ok(f64::from(*n)),
            Self::U64(n) => Ok(*n as f64),
            Self::F32(n) => Ok(f64::from(*n)),
            Self::F64(n) => Ok(*n),
            Self::Null | Self::Bool(_) => Err(CoercionError::Unsupported {
                type_name: self.type_name(),
            }),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Str(s) => f.write_str(s),
            Self::I8(n) => write!(f, "{n}"),
            Self::I16(n) => write!(f, "{n}"),
            Self::I32(n) => write!(f, "{n}"),
            Self::I64(n) => write!(f, "{n}"),
            Self::U8(n) => write!(f, "{n}"),
            Self::U16(n) => write!(f, "{n}"),
            Self::U32(n) => write!(f, "{n}"),
            Self::U64(n) => write!(f, "{n}"),
            Self::F32(n) => write!(f, "{n}"),
            Self::F64(n) => write!(f, "{n}"),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null => serializer.serialize_none(),
            Self::Bool(b) => serializer.serialize_bool(*b),
            Self::Str(s) => serializer.serialize_str(s),
            Self::I8(n) => serializer.serialize_i8(*n),
            Self::I16(n) => serializer.serialize_i16(*n),
            Self::I32(n) => serializer.serialize_i32(*n),
            Self::I64(n) => serializer.serialize_i64(*n),
            Self::U8(n) => serializer.serialize_u8(*n),
            Self::U16(n) => serializer.serialize_u16(*n),
            Self::U32(n) => serializer.serialize_u32(*n),
            Self::U64(n) => serializer.serialize_u64(*n),
            Self::F32(n) => serializer.serialize_f32(*n),
            Self::F64(n) => serializer.serialize_f64(*n),
        }
    }
}

// ============================================================================
// CONVERSIONS
// ============================================================================

macro_rules! impl_from_scalar {
    ($($ty:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }
        )+
    };
}

impl_from_scalar! {
    bool => Bool,
    String => Str,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<&String> for FieldValue {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}

impl From<isize> for FieldValue {
    fn from(value: isize) -> Self {
        Self::I64(value as i64)
    }
}

impl From<usize> for FieldValue {
    fn from(value: usize) -> Self {
        Self::U64(value as u64)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

// ============================================================================
// COERCION ERROR
// ============================================================================

/// Why a value could not be coerced to a number.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum CoercionError {
    /// A string that does not parse as a float.
    #[error("cannot parse \"{input}\" as a number")]
    NotANumber { input: String },

    /// A kind with no numeric reading.
    #[error("unknown type {type_name}")]
    Unsupported { type_name: &'static str },
}

// ============================================================================
// TESTS
// ============================================================================
