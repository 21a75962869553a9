//! A single contact: a name, its phones, and an optional birthday.

use crate::domain::{Birthday, EmptyInputPolicy, Phone, ValidatedField, ValidationError};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// A contact record.
///
/// The name is fixed at construction. Phones keep insertion order and are not
/// deduplicated; deletion and replacement act on the first equal phone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Record {
    name: String,

    #[serde(skip_serializing_if = "Vec::is_empty")]
    phones: Vec<Phone>,

    #[serde(skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,
}

/// Phone mutation requested through [`crate::models::AddressBook::update_record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneOperation {
    Add(String),
    Delete(String),
    Change { old: String, new: String },
}

/// The verb of an `update` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateVerb {
    Add,
    Delete,
    Change,
}

impl FromStr for UpdateVerb {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "add" => Ok(Self::Add),
            "delete" => Ok(Self::Delete),
            "change" => Ok(Self::Change),
            _ => Err(BookError::InvalidOperation(s.to_string())),
        }
    }
}

/// Outcome of a successful phone mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PhoneUpdate {
    Added(Phone),
    Deleted(Phone),
    Changed { old: Phone, new: Phone },
}

/// Outcome of a birthday assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BirthdayUpdate {
    Set(Birthday),
    Unchanged,
    Cleared,
}

/// Time left until a record's next birthday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdayCountdown {
    Today,
    Days(u32),
    NotSet,
}

impl Record {
    /// Create a record with no phones and no birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyName` if the trimmed name is empty.
    pub fn new(name: impl Into<String>) -> Result<Self, ValidationError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        Ok(Self {
            name: name.to_string(),
            phones: Vec::new(),
            birthday: None,
        })
    }

    /// Create a record pre-seeded with phones.
    ///
    /// Every phone is validated before the record is built; the first invalid
    /// one fails the whole construction.
    pub fn with_phones<I, S>(name: impl Into<String>, phones: I) -> Result<Self, ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut record = Self::new(name)?;
        record.phones = phones
            .into_iter()
            .map(|raw| Phone::parse(raw.as_ref()))
            .collect::<Result<_, _>>()?;
        Ok(record)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    /// Whether any stored phone equals `phone`.
    pub fn has_phone(&self, phone: &Phone) -> bool {
        self.phones.contains(phone)
    }

    /// Validate and append a phone.
    pub fn add_phone(&mut self, raw: &str) -> BookResult<Phone> {
        let phone = Phone::parse(raw)?;
        self.phones.push(phone.clone());
        debug!(record = %self.name, %phone, "phone added");
        Ok(phone)
    }

    /// Remove the first stored phone equal to `raw`.
    ///
    /// # Errors
    ///
    /// `BookError::Validation` if `raw` is not a phone, `BookError::PhoneNotFound`
    /// if no stored phone equals it.
    pub fn delete_phone(&mut self, raw: &str) -> BookResult<Phone> {
        let phone = Phone::parse(raw)?;
        let index = self.position_of(&phone)?;
        let removed = self.phones.remove(index);
        debug!(record = %self.name, phone = %removed, "phone deleted");
        Ok(removed)
    }

    /// Replace the first stored phone equal to `old` with `new`.
    ///
    /// `old` is located before `new` is validated, and nothing is touched
    /// until both succeed, so on error the phone list is unchanged. The new
    /// phone takes the old one's position.
    pub fn change_phone(&mut self, old: &str, new: &str) -> BookResult<(Phone, Phone)> {
        let old = Phone::parse(old)?;
        let index = self.position_of(&old)?;
        let new = Phone::parse(new)?;

        self.phones[index] = new.clone();
        debug!(record = %self.name, %old, %new, "phone changed");
        Ok((old, new))
    }

    /// Run a phone operation against this record.
    pub fn apply(&mut self, operation: PhoneOperation) -> BookResult<PhoneUpdate> {
        match operation {
            PhoneOperation::Add(raw) => self.add_phone(&raw).map(PhoneUpdate::Added),
            PhoneOperation::Delete(raw) => self.delete_phone(&raw).map(PhoneUpdate::Deleted),
            PhoneOperation::Change { old, new } => self
                .change_phone(&old, &new)
                .map(|(old, new)| PhoneUpdate::Changed { old, new }),
        }
    }

    /// Validate and assign the birthday.
    ///
    /// Empty input is resolved by `policy`; non-empty input must match
    /// `yyyy.mm.dd` and replaces any previous birthday.
    pub fn set_birthday(
        &mut self,
        raw: &str,
        policy: EmptyInputPolicy,
    ) -> BookResult<BirthdayUpdate> {
        let update = match (Birthday::validate(raw)?, policy) {
            (Some(value), _) => {
                let birthday = Birthday::from_validated(value)?;
                self.birthday = Some(birthday.clone());
                BirthdayUpdate::Set(birthday)
            }
            (None, EmptyInputPolicy::Ignore) => BirthdayUpdate::Unchanged,
            (None, EmptyInputPolicy::Clear) => {
                self.birthday = None;
                BirthdayUpdate::Cleared
            }
            (None, EmptyInputPolicy::Reject) => return Err(ValidationError::Empty.into()),
        };

        debug!(record = %self.name, ?update, "birthday assigned");
        Ok(update)
    }

    /// Same as [`Record::set_birthday`] with the default empty-input policy.
    pub fn add_birthday(&mut self, raw: &str) -> BookResult<BirthdayUpdate> {
        self.set_birthday(raw, EmptyInputPolicy::default())
    }

    /// Days from `today` until the next birthday.
    ///
    /// # Errors
    ///
    /// `ValidationError::ImpossibleDate` if the stored month and day never
    /// form a calendar date.
    pub fn days_to_birthday(&self, today: NaiveDate) -> BookResult<BirthdayCountdown> {
        let Some(birthday) = &self.birthday else {
            return Ok(BirthdayCountdown::NotSet);
        };

        let next = birthday.next_occurrence(today)?;
        // next_occurrence never returns a date before today
        let days = u32::try_from((next - today).num_days()).unwrap_or(0);
        Ok(if days == 0 {
            BirthdayCountdown::Today
        } else {
            BirthdayCountdown::Days(days)
        })
    }

    /// [`Record::days_to_birthday`] against the local calendar date.
    pub fn days_to_birthday_from_now(&self) -> BookResult<BirthdayCountdown> {
        self.days_to_birthday(chrono::Local::now().date_naive())
    }

    fn position_of(&self, phone: &Phone) -> BookResult<usize> {
        self.phones
            .iter()
            .position(|stored| stored == phone)
            .ok_or_else(|| BookError::PhoneNotFound {
                name: self.name.clone(),
                phone: phone.to_string(),
            })
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}: phones [{}]", self.name, phones)?;
        match &self.birthday {
            Some(birthday) => write!(f, ", birthday {}", birthday),
            None => write!(f, ", birthday not set"),
        }
    }
}
