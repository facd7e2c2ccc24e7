//! Internal support utilities for the derives.

pub mod attrs;
pub mod diag;
