//! Phone value object.

use super::errors::ValidationError;
use super::field::ValidatedField;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[+]?[0-9]{10,15}$").expect("phone pattern is valid"));

/// A type-safe wrapper for phone numbers.
///
/// # Validation Rules
///
/// - Surrounding whitespace is trimmed before matching
/// - Optional leading `+`
/// - 10 to 15 ASCII digits, nothing else
///
/// # Example
///
/// ```
/// use address_book::domain::{Phone, ValidatedField};
///
/// let phone = Phone::parse(" +380501234567 ").unwrap();
/// assert_eq!(phone.as_str(), "+380501234567");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl ValidatedField for Phone {
    fn pattern() -> &'static Regex {
        &PHONE_PATTERN
    }

    fn rejection(raw: &str) -> ValidationError {
        ValidationError::InvalidPhone(raw.to_string())
    }

    fn from_validated(value: String) -> Result<Self, ValidationError> {
        Ok(Self(value))
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

// Serde support - serialize as string
impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        let phone = Phone::parse("+15551234567").unwrap();
        assert_eq!(phone.as_str(), "+15551234567");
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(Phone::parse("0501234567").is_ok());
        assert!(Phone::parse("123456789012345").is_ok());
        assert!(Phone::parse("+1234567890").is_ok());

        assert!(Phone::parse("123456789").is_err());
        assert!(Phone::parse("1234567890123456").is_err());
        assert!(Phone::parse("++1234567890").is_err());
        assert!(Phone::parse("123-456-7890").is_err());
        assert!(Phone::parse("+1 555 123 4567").is_err());
        assert!(Phone::parse("abc").is_err());
    }

    #[test]
    fn test_phone_accepts_ascii_digits_only() {
        assert!(matches!(
            Phone::parse("٠١٢٣٤٥٦٧٨٩"),
            Err(ValidationError::InvalidPhone(_))
        ));
        assert!(matches!(
            Phone::parse("+０５０１２３４５６７"),
            Err(ValidationError::InvalidPhone(_))
        ));
    }

    #[test]
    fn test_phone_trims_whitespace() {
        let phone = Phone::parse("\t0501234567  ").unwrap();
        assert_eq!(phone.as_str(), "0501234567");
    }

    #[test]
    fn test_phone_empty_is_rejected_on_parse() {
        assert_eq!(Phone::parse(""), Err(ValidationError::Empty));
        assert_eq!(Phone::parse("   "), Err(ValidationError::Empty));
    }

    #[test]
    fn test_phone_invalid_carries_hint() {
        match Phone::parse("abc") {
            Err(ValidationError::InvalidPhone(raw)) => assert_eq!(raw, "abc"),
            other => panic!("Expected InvalidPhone, got: {:?}", other),
        }
    }

    #[test]
    fn test_phone_assign() {
        let mut phone = Phone::parse("0501234567").unwrap();

        assert_eq!(phone.assign(" 0679876543 "), Ok(true));
        assert_eq!(phone.as_str(), "0679876543");

        assert_eq!(phone.assign(""), Ok(false));
        assert_eq!(phone.as_str(), "0679876543");

        assert!(phone.assign("nope").is_err());
        assert_eq!(phone.as_str(), "0679876543");
    }

    #[test]
    fn test_phone_equality_by_value() {
        assert_eq!(
            Phone::parse("0501234567").unwrap(),
            Phone::parse(" 0501234567").unwrap()
        );
        assert_ne!(
            Phone::parse("0501234567").unwrap(),
            Phone::parse("+0501234567").unwrap()
        );
    }

    #[test]
    fn test_phone_serialization() {
        let phone = Phone::parse("+15551234567").unwrap();
        let json = serde_json::to_string(&phone).unwrap();
        assert_eq!(json, "\"+15551234567\"");
    }

    #[test]
    fn test_phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"555-1234\"");
        assert!(result.is_err());
    }
}
