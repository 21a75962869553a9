//! Error types for the address book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on records and the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A field failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No record with this name
    #[error("Record with name {0} doesn't exist")]
    NotFound(String),

    /// The record exists but does not hold this phone
    #[error("Phone {phone} not found in the {name} record")]
    PhoneNotFound { name: String, phone: String },

    /// A record with this name already exists
    #[error("User with name {0} already exists")]
    Duplicate(String),

    /// Unrecognized update verb
    #[error("Unknown update operation '{0}', expected add, delete or change")]
    InvalidOperation(String),
}

/// Errors that can occur while parsing or running a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// First token is not a known command
    #[error("Wrong command: {0}")]
    Unknown(String),

    /// A required argument is missing
    #[error("Missing argument <{argument}> for '{command}'. Usage: {usage}")]
    MissingArgument {
        command: &'static str,
        argument: &'static str,
        usage: &'static str,
    },

    /// An argument could not be interpreted
    #[error("Invalid argument for '{command}': {reason}")]
    InvalidArgument {
        command: &'static str,
        reason: String,
    },

    /// The command ran and the book rejected it
    #[error(transparent)]
    Book(#[from] BookError),

    /// The book could not be rendered as JSON
    #[error("JSON serialization failed: {0}")]
    Serialization(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

impl From<ValidationError> for CommandError {
    fn from(err: ValidationError) -> Self {
        Self::Book(BookError::Validation(err))
    }
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BookError::NotFound("alice".to_string());
        assert_eq!(err.to_string(), "Record with name alice doesn't exist");

        let err = BookError::Duplicate("alice".to_string());
        assert_eq!(err.to_string(), "User with name alice already exists");

        let err = ConfigError::InvalidValue {
            var: "ADDRESS_BOOK_PAGE_SIZE".to_string(),
            reason: "Must be greater than zero".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid value for ADDRESS_BOOK_PAGE_SIZE: Must be greater than zero"
        );
    }

    #[test]
    fn test_validation_error_is_transparent() {
        let err: BookError = ValidationError::Empty.into();
        assert_eq!(err.to_string(), "Value cannot be empty");

        let err: CommandError = ValidationError::Empty.into();
        assert_eq!(err, CommandError::Book(BookError::Validation(ValidationError::Empty)));
    }

    #[test]
    fn test_phone_not_found_variant() {
        let err = BookError::PhoneNotFound {
            name: "alice".to_string(),
            phone: "0501234567".to_string(),
        };
        assert!(err.to_string().contains("0501234567"));
        assert!(err.to_string().contains("alice"));
    }
}
