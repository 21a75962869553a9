//! Command dispatch against a single address book.

use super::command::{self, Command};
use crate::config::Config;
use crate::error::{CommandError, CommandResult};
use crate::matching::RecordMatcher;
use crate::models::{
    AddOutcome, AddressBook, BirthdayCountdown, BirthdayUpdate, PhoneUpdate, Record,
};
use chrono::NaiveDate;
use tracing::{debug, warn};

/// Upper bound on `find` results.
const MAX_FIND_RESULTS: usize = 5;

/// Typed outcome of one command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    RecordAdded(Record),
    AlreadyExists(String),
    PhoneUpdated { name: String, update: PhoneUpdate },
    RecordDeleted(Record),
    BirthdayUpdated { name: String, update: BirthdayUpdate },
    Countdown { name: String, countdown: BirthdayCountdown },
    Phones(Record),
    All(Vec<Record>),
    /// `index` is zero-based.
    Page {
        index: usize,
        total: usize,
        records: Vec<Record>,
    },
    Matches(Vec<(Record, u8)>),
    Upcoming { within: u32, records: Vec<(Record, u32)> },
    Export(String),
    Help(String),
    Exit,
}

/// Rendered answer to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub text: String,
    pub exit: bool,
}

/// Owns the address book for the life of the process and runs commands on it.
pub struct Session {
    book: AddressBook,
    config: Config,
    matcher: RecordMatcher,
    clock: fn() -> NaiveDate,
}

fn local_today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

impl Session {
    /// Create a session with an empty book and the local calendar date.
    pub fn new(config: Config) -> Self {
        Self::with_clock(config, local_today)
    }

    /// Create a session whose notion of "today" comes from `clock`.
    pub fn with_clock(config: Config, clock: fn() -> NaiveDate) -> Self {
        Self {
            book: AddressBook::new(),
            config,
            matcher: RecordMatcher::default(),
            clock,
        }
    }

    pub fn book(&self) -> &AddressBook {
        &self.book
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Parse, run and render one input line.
    ///
    /// Returns `None` for a blank line. Errors are rendered into the response
    /// text; they never end the session.
    pub fn respond(&mut self, line: &str) -> Option<Response> {
        let result = Command::parse(line).and_then(|command| match command {
            Some(command) => self.execute(command).map(Some),
            None => Ok(None),
        });

        match result {
            Ok(None) => None,
            Ok(Some(reply)) => Some(Response {
                exit: reply == Reply::Exit,
                text: reply.to_string(),
            }),
            Err(err) => {
                warn!(line, error = %err, "command rejected");
                Some(Response {
                    text: err.to_string(),
                    exit: false,
                })
            }
        }
    }

    /// Run one parsed command.
    pub fn execute(&mut self, command: Command) -> CommandResult<Reply> {
        debug!(?command, "executing command");

        let reply = match command {
            Command::Add { name, phones } => {
                let record = Record::with_phones(name, &phones)?;
                match self.book.add_record(record.clone()) {
                    AddOutcome::Added => Reply::RecordAdded(record),
                    AddOutcome::AlreadyExists => Reply::AlreadyExists(record.name().to_string()),
                }
            }
            Command::Update { name, operation } => {
                let update = self.book.update_record(&name, operation)?;
                Reply::PhoneUpdated { name, update }
            }
            Command::Delete { name } => Reply::RecordDeleted(self.book.delete_record(&name)?),
            Command::Birthday { name, date } => {
                let policy = self.config.empty_input_policy;
                let update = self.book.record_mut(&name)?.set_birthday(&date, policy)?;
                Reply::BirthdayUpdated { name, update }
            }
            Command::Days { name } => {
                let countdown = self.book.show_phones(&name)?.days_to_birthday((self.clock)())?;
                Reply::Countdown { name, countdown }
            }
            Command::Phone { name } => Reply::Phones(self.book.show_phones(&name)?.clone()),
            Command::Show { page: None } => Reply::All(self.book.show_all().cloned().collect()),
            Command::Show { page: Some(number) } => self.show_page(number)?,
            Command::Find { query } => Reply::Matches(
                self.matcher
                    .find(&self.book, &query, MAX_FIND_RESULTS)
                    .into_iter()
                    .map(|m| (m.record.clone(), m.confidence))
                    .collect(),
            ),
            Command::Upcoming { days } => Reply::Upcoming {
                within: days,
                records: self
                    .book
                    .birthdays_within(days, (self.clock)())
                    .into_iter()
                    .map(|(record, left)| (record.clone(), left))
                    .collect(),
            },
            Command::Export => Reply::Export(
                serde_json::to_string_pretty(&self.book)
                    .map_err(|e| CommandError::Serialization(e.to_string()))?,
            ),
            Command::Help => Reply::Help(command::usage()),
            Command::Exit => Reply::Exit,
        };

        Ok(reply)
    }

    fn show_page(&self, number: usize) -> CommandResult<Reply> {
        let total = self.book.page_count(self.config.page_size);
        let out_of_range = || CommandError::InvalidArgument {
            command: "show",
            reason: format!("page {} out of range, {} page(s) available", number, total),
        };

        let index = number.checked_sub(1).ok_or_else(out_of_range)?;
        let page = self
            .book
            .page(index, self.config.page_size)
            .ok_or_else(out_of_range)?;

        Ok(Reply::Page {
            index,
            total,
            records: page.into_iter().map(|(_, record)| record.clone()).collect(),
        })
    }
}
