//! Domain value objects and types.
//!
//! This module contains type-safe wrappers for the validated fields of a
//! contact record. These value objects check their format at construction and
//! assignment time and prevent invalid data from being represented in the
//! address book.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::{EmptyInputPolicy, ValidatedField};
pub use phone::Phone;
