//! Tests for the Record derive macro - successful cases.

use fieldguard::Record;
use fieldguard::foundation::FieldValue;

/// Every supported field type.
#[derive(Record)]
pub struct Everything {
    text: String,
    flag: bool,
    small: i8,
    medium: i32,
    large: u64,
    size: usize,
    ratio: f32,
    precise: f64,
    maybe: Option<String>,
}

/// Renamed and skipped fields.
#[derive(Record)]
pub struct Signup {
    name: String,
    #[record(rename = "passwordValidation")]
    password_confirmation: String,
    #[record(skip)]
    #[allow(dead_code)]
    session: std::time::Instant,
}

/// Generic records.
#[derive(Record)]
pub struct Wrapper<T: fieldguard::foundation::FieldType> {
    inner: T,
}

/// No fields at all.
#[derive(Record)]
pub struct Empty {}

fn main() {
    assert_eq!(Everything::FIELDS.len(), 9);
    assert_eq!(Signup::FIELDS, &["name", "passwordValidation"]);
    assert!(Empty::FIELDS.is_empty());

    let mut signup = Signup {
        name: "Ana".into(),
        password_confirmation: "secret".into(),
        session: std::time::Instant::now(),
    };
    assert_eq!(signup.read_field("passwordValidation"), Some(FieldValue::from("secret")));
    assert!(signup.write_field("name", FieldValue::from("Bea")).is_ok());
    assert_eq!(signup.name, "Bea");
    assert!(signup.write_field("name", FieldValue::from(1)).is_err());
    assert!(signup.write_field("session", FieldValue::Null).is_err());

    assert!(signup.check_field("name", &FieldValue::from("Cy")).is_ok());
    assert!(signup.check_field("name", &FieldValue::Null).is_err());
    assert_eq!(signup.name, "Bea");

    let wrapper = Wrapper { inner: 5_u8 };
    assert_eq!(wrapper.read_field("inner"), Some(FieldValue::U8(5)));
    assert!(wrapper.check_field("inner", &FieldValue::F64(300.0)).is_err());
}
