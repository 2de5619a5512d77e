//! Line-oriented terminal front end for kibitz.

pub mod command;
pub mod error;
pub mod shell;

pub use command::{Command, ShellOption, parse_command};
pub use error::TermError;
pub use shell::{Shell, TermConfig};
