//! Shared validation rules for string-backed field value objects.

use super::errors::ValidationError;
use regex::Regex;

/// A string value object guarded by a full-match pattern.
///
/// Input is trimmed before matching and the trimmed text is what gets stored.
/// Construction from empty input fails, while reassignment from empty input
/// keeps the current value and reports that nothing changed.
pub trait ValidatedField: Sized {
    /// Pattern the trimmed input must match in full.
    fn pattern() -> &'static Regex;

    /// Field-specific error for non-empty input that fails the pattern.
    fn rejection(raw: &str) -> ValidationError;

    /// Build the field from text that already passed [`ValidatedField::pattern`].
    fn from_validated(value: String) -> Result<Self, ValidationError>;

    /// Get the stored value as a string slice.
    fn as_str(&self) -> &str;

    /// Trim and check `raw`.
    ///
    /// Returns `Ok(None)` for empty input.
    fn validate(raw: &str) -> Result<Option<String>, ValidationError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        if !Self::pattern().is_match(trimmed) {
            return Err(Self::rejection(trimmed));
        }
        Ok(Some(trimmed.to_string()))
    }

    /// Create a new field, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::Empty` for empty input, or the field's
    /// rejection error when the pattern does not match.
    fn parse(raw: &str) -> Result<Self, ValidationError> {
        match Self::validate(raw)? {
            Some(value) => Self::from_validated(value),
            None => Err(ValidationError::Empty),
        }
    }

    /// Replace the stored value with `raw`.
    ///
    /// Returns `Ok(false)` and leaves the value untouched when `raw` is empty.
    /// On error the value is also left untouched.
    fn assign(&mut self, raw: &str) -> Result<bool, ValidationError> {
        match Self::validate(raw)? {
            Some(value) => {
                *self = Self::from_validated(value)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

/// What to do when a field is reassigned from empty input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptyInputPolicy {
    /// Keep the current value.
    #[default]
    Ignore,

    /// Unset the field.
    Clear,

    /// Fail with `ValidationError::Empty`.
    Reject,
}

impl std::str::FromStr for EmptyInputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ignore" => Ok(Self::Ignore),
            "clear" => Ok(Self::Clear),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "Must be one of ignore, clear, reject, got: {}",
                other
            )),
        }
    }
}
