//! Text rendering of command replies.

use super::session::Reply;
use crate::models::{BirthdayCountdown, BirthdayUpdate, PhoneUpdate, Record};
use std::fmt;

impl fmt::Display for Reply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reply::RecordAdded(record) => write!(f, "{} has been added", record),
            Reply::AlreadyExists(name) => write!(f, "User with name {} already exists", name),
            Reply::PhoneUpdated { name, update } => match update {
                PhoneUpdate::Added(phone) => {
                    write!(f, "{} has been added to the {} record", phone, name)
                }
                PhoneUpdate::Deleted(phone) => {
                    write!(f, "{} has been deleted from the {} record", phone, name)
                }
                PhoneUpdate::Changed { old, new } => {
                    write!(f, "{} has been changed to {} in the {} record", old, new, name)
                }
            },
            Reply::RecordDeleted(record) => {
                write!(f, "Record {} has been deleted!", record.name())
            }
            Reply::BirthdayUpdated { name, update } => match update {
                BirthdayUpdate::Set(birthday) => {
                    write!(f, "{} birthday has been set to {}", name, birthday)
                }
                BirthdayUpdate::Unchanged => write!(f, "{} birthday left unchanged", name),
                BirthdayUpdate::Cleared => write!(f, "{} birthday has been cleared", name),
            },
            Reply::Countdown { name, countdown } => match countdown {
                BirthdayCountdown::Today => write!(f, "Happy birthday, {}!", name),
                BirthdayCountdown::Days(days) => write!(f, "Days until birthday: {}", days),
                BirthdayCountdown::NotSet => write!(f, "{} has no birthday set", name),
            },
            Reply::Phones(record) => write!(f, "{}", record),
            Reply::All(records) => write_records(f, records),
            Reply::Page {
                index,
                total,
                records,
            } => {
                writeln!(f, "Page {}/{}", index + 1, total)?;
                write_records(f, records)
            }
            Reply::Matches(matches) => {
                if matches.is_empty() {
                    return write!(f, "No matches found");
                }
                for (i, (record, confidence)) in matches.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{} ({}%)", record, confidence)?;
                }
                Ok(())
            }
            Reply::Upcoming { within, records } => {
                if records.is_empty() {
                    return write!(f, "No birthdays in the next {} days", within);
                }
                for (i, (record, days)) in records.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    match days {
                        0 => write!(f, "{}: today", record.name())?,
                        1 => write!(f, "{}: tomorrow", record.name())?,
                        n => write!(f, "{}: in {} days", record.name(), n)?,
                    }
                }
                Ok(())
            }
            Reply::Export(json) => write!(f, "{}", json),
            Reply::Help(usage) => write!(f, "{}", usage),
            Reply::Exit => write!(f, "Good bye!"),
        }
    }
}

fn write_records(f: &mut fmt::Formatter<'_>, records: &[Record]) -> fmt::Result {
    if records.is_empty() {
        return write!(f, "Address book is empty");
    }
    for (i, record) in records.iter().enumerate() {
        if i > 0 {
            writeln!(f)?;
        }
        write!(f, "{}", record)?;
    }
    Ok(())
}
