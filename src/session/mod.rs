//! Interactive session
//!
//! [`Command`] classifies input, [`Session`] holds the recorded guesses and
//! applies commands, and [`Repl`] drives both from a text stream.

mod command;
mod repl;
mod state;

pub use command::{Command, CommandError};
pub use repl::Repl;
pub use state::{Reply, Session, SessionError, Status};
