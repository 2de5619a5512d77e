//! Terminal front-end errors.

use kibitz_core::PlacementError;

/// Errors that can occur while reading or interpreting commands.
#[derive(Debug, thiserror::Error)]
pub enum TermError {
    /// A command was given without a required argument.
    #[error("{command}: missing argument")]
    MissingArgument {
        /// The command that needs the argument.
        command: &'static str,
    },

    /// A square was neither a name like `e2` nor a `row col` pair.
    #[error("invalid square: {value}")]
    InvalidSquare {
        /// The text that failed to parse.
        value: String,
    },

    /// The piece placement of a `position` command failed to parse.
    #[error("invalid placement \"{placement}\": {source}")]
    InvalidPlacement {
        /// The placement text.
        placement: String,
        /// Why it was rejected.
        #[source]
        source: PlacementError,
    },

    /// The side-to-move code was not `w` or `b`.
    #[error("invalid side to move: {value}")]
    InvalidColor {
        /// The text that failed to parse.
        value: String,
    },

    /// `set` named an option that does not exist.
    #[error("unknown option: {name}")]
    UnknownOption {
        /// The option name given.
        name: String,
    },

    /// `set` gave an option a value it cannot take.
    #[error("invalid value for {name}: {value}")]
    InvalidOptionValue {
        /// The option name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An I/O error occurred while reading input or writing output.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
