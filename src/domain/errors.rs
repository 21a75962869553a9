//! Domain validation errors.

use thiserror::Error;

/// Errors that can occur during domain value object validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided value is empty or whitespace only.
    #[error("Value cannot be empty")]
    Empty,

    /// The provided record name is empty.
    #[error("Record name cannot be empty")]
    EmptyName,

    /// The provided phone number does not match the phone pattern.
    #[error("Invalid phone number: {0}\nWrong phone number format, try: {{+}}{{10-15 digits without spaces or other symbols}}")]
    InvalidPhone(String),

    /// The provided birthday does not match the `yyyy.mm.dd` pattern.
    #[error("Invalid birthday: {0}\nWrong birthday format, try: {{yyyy.mm.dd}}")]
    InvalidBirthday(String),

    /// The birthday's month and day never form a calendar date.
    #[error("Birthday {0} is not a real calendar date")]
    ImpossibleDate(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_hints() {
        let err = ValidationError::InvalidPhone("abc".to_string());
        assert!(err.to_string().contains("abc"));
        assert!(err.to_string().contains("{+}{10-15 digits"));

        let err = ValidationError::InvalidBirthday("1.2.3".to_string());
        assert!(err.to_string().ends_with("{yyyy.mm.dd}"));
    }
}
