//! Validates a sign-up form and prints the outcome as JSON.
//!
//! Run with `cargo run --example registration`.

use fieldguard::prelude::*;

#[derive(Debug, Record)]
struct Registration {
    name: String,
    email: String,
    age: u8,
    password: String,
    password_validation: String,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let mut validator = Validator::<Registration>::builder()
        .field("name", rules().required().trim().min_length(2).max_length(100))
        .field("email", rules().required().trim().email())
        .field("age", rules().min_value(18.0).max_value(130.0))
        .field("password", rules().required().min_length(8))
        .field("passwordValidation", rules().required().same_as("password"))
        .build()?;

    let mut form = Registration {
        name: "  A ".into(),
        email: "alexandre".into(),
        age: 17,
        password: "easyp".into(),
        password_validation: "hardpassword".into(),
    };

    if validator.validate_into(&mut form)? {
        println!("valid: {form:?}");
    } else {
        let errors = validator.errors();
        println!("{}", errors.to_json_string());
        println!("{} failed checks:", errors.total());
        for (_, field_errors) in errors.iter() {
            for error in field_errors {
                println!("  {}", error.to_json_value());
            }
        }
    }

    form = Registration {
        name: "  Alexandre  ".into(),
        email: " alexandre@gmail.com ".into(),
        age: 30,
        password: "easypassword".into(),
        password_validation: "easypassword".into(),
    };

    if validator.validate_into(&mut form)? {
        println!("valid: {form:?}");
    }

    Ok(())
}
