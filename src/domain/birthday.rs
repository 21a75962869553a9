//! Birthday value object.

use super::errors::ValidationError;
use super::field::ValidatedField;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

static BIRTHDAY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[0-9]{4}\.[0-9]{2}\.[0-9]{2}$").expect("Failed to compile birthday regex")
});

/// A birthday in `yyyy.mm.dd` form.
///
/// The year, month and day components are decomposed from the stored text
/// whenever it is (re)assigned. Only the shape is checked here; whether the
/// month and day form a calendar date is checked by
/// [`Birthday::next_occurrence`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    value: String,
    year: u16,
    month: u8,
    day: u8,
}

impl ValidatedField for Birthday {
    fn pattern() -> &'static Regex {
        &BIRTHDAY_PATTERN
    }

    fn rejection(raw: &str) -> ValidationError {
        ValidationError::InvalidBirthday(raw.to_string())
    }

    fn from_validated(value: String) -> Result<Self, ValidationError> {
        let mut parts = value.split('.');
        let (Some(year), Some(month), Some(day), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(Self::rejection(&value));
        };

        let year = year.parse().map_err(|_| Self::rejection(&value))?;
        let month = month.parse().map_err(|_| Self::rejection(&value))?;
        let day = day.parse().map_err(|_| Self::rejection(&value))?;

        Ok(Self {
            value,
            year,
            month,
            day,
        })
    }

    fn as_str(&self) -> &str {
        &self.value
    }
}

impl Birthday {
    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }

    pub fn day(&self) -> u8 {
        self.day
    }

    /// The first date on or after `today` that falls on this birthday.
    ///
    /// Feb 29 falls on Feb 28 in non-leap years.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::ImpossibleDate` when the month and day never
    /// form a calendar date (`2000.13.01`, `2000.04.31`).
    pub fn next_occurrence(&self, today: NaiveDate) -> Result<NaiveDate, ValidationError> {
        let this_year = self.in_year(today.year())?;
        if this_year >= today {
            return Ok(this_year);
        }
        self.in_year(today.year() + 1)
    }

    fn in_year(&self, year: i32) -> Result<NaiveDate, ValidationError> {
        let (month, day) = (u32::from(self.month), u32::from(self.day));
        NaiveDate::from_ymd_opt(year, month, day)
            .or_else(|| {
                if month == 2 && day == 29 {
                    NaiveDate::from_ymd_opt(year, 2, 28)
                } else {
                    None
                }
            })
            .ok_or_else(|| ValidationError::ImpossibleDate(self.value.clone()))
    }
}

impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::parse(&s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
