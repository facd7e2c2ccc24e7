//! Compile-time tests for fieldguard-macros.
//!
//! These tests use trybuild to verify that the derive generates code that
//! compiles against the `fieldguard` traits.

#[test]
fn test_record_derive() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/record_pass.rs");
}
