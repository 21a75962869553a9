//! Parsing of command lines into [`Command`] values.

use crate::error::{CommandError, CommandResult};
use crate::models::{PhoneOperation, UpdateVerb};

pub const ADD_USAGE: &str = "add {name} {phone}(optional, repeatable)";
pub const UPDATE_USAGE: &str = "update {name} add/delete/change {phone} {new phone}(change only)";
pub const DELETE_USAGE: &str = "delete {name}";
pub const BIRTHDAY_USAGE: &str = "birthday {name} {yyyy.mm.dd}";
pub const DAYS_USAGE: &str = "days {name}";
pub const PHONE_USAGE: &str = "phone {name}";
pub const SHOW_USAGE: &str = "show {page}(optional)";
pub const FIND_USAGE: &str = "find {name or phone}";
pub const UPCOMING_USAGE: &str = "upcoming {days}";

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add { name: String, phones: Vec<String> },
    Update { name: String, operation: PhoneOperation },
    Delete { name: String },
    /// An absent date reaches the record as empty input.
    Birthday { name: String, date: String },
    Days { name: String },
    Phone { name: String },
    /// `page` is one-based as typed by the user.
    Show { page: Option<usize> },
    Find { query: String },
    Upcoming { days: u32 },
    Export,
    Help,
    Exit,
}

impl Command {
    /// Parse a command line.
    ///
    /// The first token is matched case-insensitively; the remaining tokens are
    /// kept as typed. Returns `Ok(None)` for a blank line.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let Some(keyword) = tokens.next() else {
            return Ok(None);
        };
        let args: Vec<&str> = tokens.collect();

        let command = match keyword.to_lowercase().as_str() {
            "add" => Command::Add {
                name: required(&args, 0, "add", "name", ADD_USAGE)?,
                phones: args.iter().skip(1).map(|s| s.to_string()).collect(),
            },
            "update" => Self::parse_update(&args)?,
            "delete" => Command::Delete {
                name: required(&args, 0, "delete", "name", DELETE_USAGE)?,
            },
            "birthday" => Command::Birthday {
                name: required(&args, 0, "birthday", "name", BIRTHDAY_USAGE)?,
                date: args.get(1).map(|s| s.to_string()).unwrap_or_default(),
            },
            "days" => Command::Days {
                name: required(&args, 0, "days", "name", DAYS_USAGE)?,
            },
            "phone" => Command::Phone {
                name: required(&args, 0, "phone", "name", PHONE_USAGE)?,
            },
            "show" => Command::Show {
                page: args
                    .first()
                    .map(|raw| parse_number(raw, "show", "page"))
                    .transpose()?,
            },
            "find" => {
                if args.is_empty() {
                    return Err(missing("find", "query", FIND_USAGE));
                }
                Command::Find {
                    query: args.join(" "),
                }
            }
            "upcoming" => {
                let raw = args
                    .first()
                    .ok_or_else(|| missing("upcoming", "days", UPCOMING_USAGE))?;
                Command::Upcoming {
                    days: parse_number(raw, "upcoming", "days")?,
                }
            }
            "export" => Command::Export,
            "help" => Command::Help,
            "close" | "exit" | "quit" => Command::Exit,
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };

        Ok(Some(command))
    }

    fn parse_update(args: &[&str]) -> CommandResult<Self> {
        let name = required(args, 0, "update", "name", UPDATE_USAGE)?;
        let verb: UpdateVerb = required(args, 1, "update", "operation", UPDATE_USAGE)?.parse()?;
        let phone = required(args, 2, "update", "phone", UPDATE_USAGE)?;

        let operation = match verb {
            UpdateVerb::Add => PhoneOperation::Add(phone),
            UpdateVerb::Delete => PhoneOperation::Delete(phone),
            UpdateVerb::Change => PhoneOperation::Change {
                old: phone,
                new: required(args, 3, "update", "new phone", UPDATE_USAGE)?,
            },
        };

        Ok(Command::Update { name, operation })
    }
}

fn required(
    args: &[&str],
    index: usize,
    command: &'static str,
    argument: &'static str,
    usage: &'static str,
) -> CommandResult<String> {
    args.get(index)
        .map(|s| s.to_string())
        .ok_or_else(|| missing(command, argument, usage))
}

fn missing(command: &'static str, argument: &'static str, usage: &'static str) -> CommandError {
    CommandError::MissingArgument {
        command,
        argument,
        usage,
    }
}

fn parse_number<T: std::str::FromStr>(
    raw: &str,
    command: &'static str,
    argument: &str,
) -> CommandResult<T> {
    raw.parse().map_err(|_| CommandError::InvalidArgument {
        command,
        reason: format!("{} must be a non-negative number, got: {}", argument, raw),
    })
}

/// Usage text for the `help` command.
pub fn usage() -> String {
    [
        ADD_USAGE,
        UPDATE_USAGE,
        DELETE_USAGE,
        BIRTHDAY_USAGE,
        DAYS_USAGE,
        PHONE_USAGE,
        SHOW_USAGE,
        FIND_USAGE,
        UPCOMING_USAGE,
        "export",
        "help",
        "close/exit/quit",
    ]
    .join("\n")
}
