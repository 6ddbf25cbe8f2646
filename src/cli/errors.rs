//! CLI argument parsing errors.

/// Error parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    /// No interval values provided.
    MissingInterval,
    /// Unknown flag.
    UnknownFlag(String),
    /// Missing value for flag.
    MissingValue(String),
    /// Invalid value for flag.
    InvalidValue {
        /// The flag with the invalid value.
        flag: String,
        /// The invalid value that was provided.
        value: String,
    },
}

impl std::fmt::Display for CommandParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingInterval => {
                write!(f, "No interval provided. Use 'help' for usage.")
            }
            Self::UnknownFlag(flag) => write!(f, "Unknown flag: '{flag}'"),
            Self::MissingValue(flag) => write!(f, "Missing value for '{flag}'"),
            Self::InvalidValue { flag, value } => write!(f, "Invalid value '{value}' for '{flag}'"),
        }
    }
}

impl std::error::Error for CommandParseError {}
