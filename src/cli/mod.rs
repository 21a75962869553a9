//! Line-based command interface.
//!
//! Parsing ([`Command`]), dispatch ([`Session`]), text rendering of replies,
//! and the async read/respond loop. The address book itself never prints;
//! everything user-facing is produced here.

pub mod command;
pub mod render;
pub mod repl;
pub mod session;

pub use command::Command;
pub use repl::{run, run_stdio};
pub use session::{Reply, Response, Session};
