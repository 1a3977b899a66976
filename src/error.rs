//! Crate-level error types.

use std::fmt;

/// Errors produced by the numplane crate.
#[derive(Debug)]
pub enum PlaneError {
    /// A half-range outside the configured limits, zero, or of the wrong
    /// sign was passed to a setter.
    InvalidRange {
        /// The rejected half-range.
        value: f64,
    },
    /// A non-finite offset or phase was passed to a setter.
    NonFinite {
        /// Which view parameter was rejected.
        parameter: &'static str,
    },
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// A plane value could not be parsed from text.
    ParseValue(String),
}

impl fmt::Display for PlaneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { value } => {
                write!(f, "invalid half-range: {value}")
            }
            Self::NonFinite { parameter } => {
                write!(f, "non-finite {parameter}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::ParseValue(text) => {
                write!(f, "not a real or complex number: {text:?}")
            }
        }
    }
}

impl std::error::Error for PlaneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlaneError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
