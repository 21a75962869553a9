//! The in-memory address book: records keyed by name.
//!
//! Records keep insertion order. Names are unique; a record can only be added
//! under a free name, and updates and deletions require the name to exist.

use super::record::{BirthdayCountdown, PhoneOperation, PhoneUpdate, Record};
use crate::error::{BookError, BookResult};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Result of [`AddressBook::add_record`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyExists,
}

/// One page of `(name, record)` pairs.
pub type Page<'a> = Vec<(&'a str, &'a Record)>;

/// Keyed, insertion-ordered collection of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AddressBook {
    records: Vec<Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.iter().find(|record| record.name() == name)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.iter_mut().find(|record| record.name() == name)
    }

    /// Insert `record` under its name unless the name is taken.
    ///
    /// On conflict the existing record is left as it was and `record` is
    /// dropped.
    pub fn add_record(&mut self, record: Record) -> AddOutcome {
        if self.contains(record.name()) {
            debug!(name = %record.name(), "record already exists");
            return AddOutcome::AlreadyExists;
        }

        debug!(name = %record.name(), "record added");
        self.records.push(record);
        AddOutcome::Added
    }

    /// [`AddressBook::add_record`] with the conflict reported as `BookError::Duplicate`.
    pub fn insert(&mut self, record: Record) -> BookResult<()> {
        let name = record.name().to_string();
        match self.add_record(record) {
            AddOutcome::Added => Ok(()),
            AddOutcome::AlreadyExists => Err(BookError::Duplicate(name)),
        }
    }

    /// Run a phone operation on the record named `name`.
    pub fn update_record(
        &mut self,
        name: &str,
        operation: PhoneOperation,
    ) -> BookResult<PhoneUpdate> {
        self.record_mut(name)?.apply(operation)
    }

    /// Remove and return the record named `name`.
    pub fn delete_record(&mut self, name: &str) -> BookResult<Record> {
        let index = self
            .position(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))?;
        let removed = self.records.remove(index);
        debug!(name = %removed.name(), "record deleted");
        Ok(removed)
    }

    /// Look up the record named `name`.
    pub fn show_phones(&self, name: &str) -> BookResult<&Record> {
        self.get(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// Mutable lookup of the record named `name`.
    pub fn record_mut(&mut self, name: &str) -> BookResult<&mut Record> {
        self.get_mut(name)
            .ok_or_else(|| BookError::NotFound(name.to_string()))
    }

    /// All records in insertion order.
    pub fn show_all(&self) -> impl Iterator<Item = &Record> {
        self.records.iter()
    }

    /// Pages of up to `page_size` consecutive `(name, record)` pairs.
    ///
    /// Paging starts at the first record on every call and stops after the
    /// last one. A `page_size` of zero yields no pages.
    pub fn iterate(&self, page_size: usize) -> Pages<'_> {
        Pages {
            remaining: &self.records,
            page_size,
        }
    }

    /// The zero-based page `index`, or `None` when it is past the end.
    pub fn page(&self, index: usize, page_size: usize) -> Option<Page<'_>> {
        self.iterate(page_size).nth(index)
    }

    /// Number of pages [`AddressBook::iterate`] yields for `page_size`.
    pub fn page_count(&self, page_size: usize) -> usize {
        if page_size == 0 {
            return 0;
        }
        self.records.len().div_ceil(page_size)
    }

    /// Records whose next birthday is at most `days` days after `today`,
    /// soonest first.
    ///
    /// Records without a birthday or with an impossible date are skipped.
    pub fn birthdays_within(&self, days: u32, today: NaiveDate) -> Vec<(&Record, u32)> {
        let mut upcoming: Vec<(&Record, u32)> = self
            .records
            .iter()
            .filter_map(|record| match record.days_to_birthday(today) {
                Ok(BirthdayCountdown::Today) => Some((record, 0)),
                Ok(BirthdayCountdown::Days(left)) if left <= days => Some((record, left)),
                _ => None,
            })
            .collect();

        upcoming.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.name().cmp(b.0.name())));
        upcoming
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.records.iter().position(|record| record.name() == name)
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.records.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Iterator returned by [`AddressBook::iterate`].
#[derive(Debug, Clone)]
pub struct Pages<'a> {
    remaining: &'a [Record],
    page_size: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = Page<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.page_size == 0 || self.remaining.is_empty() {
            return None;
        }

        let take = self.page_size.min(self.remaining.len());
        let (head, tail) = self.remaining.split_at(take);
        self.remaining = tail;
        Some(head.iter().map(|record| (record.name(), record)).collect())
    }
}
