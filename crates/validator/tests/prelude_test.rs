//! Integration tests for the prelude module.
//!
//! Verifies that `use fieldguard::prelude::*` brings in everything a consumer
//! needs for common validation scenarios.

use fieldguard::prelude::*;
use serde_json::json;

#[derive(Record)]
struct Contact {
    email: String,
}

#[test]
fn prelude_provides_validator_and_derive() {
    let mut validator = Validator::<Contact>::new([("email", rules().required().email())]).unwrap();
    let contact = Contact {
        email: "Ana <ana@example.com>".into(),
    };
    assert!(validator.validate(&contact).unwrap());
}

#[test]
fn prelude_provides_rule_factories() {
    let snapshot = Snapshot::new();
    assert!(required().apply("f", "x".into(), &snapshot).is_ok());
    assert!(trim().apply("f", " x ".into(), &snapshot).is_ok());
    assert!(MinLength::bytes(1).apply("f", "x".into(), &snapshot).is_ok());
}

#[test]
fn field_errors_render_as_json() {
    let mut validator = Validator::<Contact>::new([("email", rules().required().email())]).unwrap();
    validator.validate(&Contact { email: String::new() }).unwrap();

    assert_eq!(
        validator.errors().to_json(),
        json!({ "email": ["this field is required", "must be a valid email address"] })
    );
    assert_eq!(
        validator.errors().to_json_string(),
        r#"{"email":["this field is required","must be a valid email address"]}"#
    );
}
