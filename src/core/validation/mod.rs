//! Construction-time checks for records
//!
//! Records are validated when they are built, before a list controller or a
//! data provider ever sees them. Failures are reported as
//! [`ValidationError`](crate::core::error::ValidationError).

pub mod validators;

pub use validators::{date, required};
