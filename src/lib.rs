//! Address Book - an in-memory contact manager driven by line-based commands.
//!
//! This library validates contact fields, maintains the address book, and
//! exposes the command loop used by the `address-book` binary.
//!
//! # Architecture
//!
//! - **domain**: Validated field value objects (phone, birthday)
//! - **models**: Contact records and the address book collection
//! - **matching**: Fuzzy name and exact phone lookup
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **cli**: Command parsing, dispatch, rendering and the stdin loop

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;

pub use cli::{Command, Reply, Session};
pub use config::Config;
pub use domain::{Birthday, EmptyInputPolicy, Phone, ValidatedField, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use matching::{MatchResult, RecordMatcher};
pub use models::{
    AddOutcome, AddressBook, BirthdayCountdown, BirthdayUpdate, PhoneOperation, PhoneUpdate,
    Record,
};
