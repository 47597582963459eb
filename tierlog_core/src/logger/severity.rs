use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Verbosity rank of a message, or the ceiling a [`Logger`](super::Logger) emits up to.
///
/// A larger value is more verbose. A logger set to `level` emits a message of
/// severity `msg` iff `level >= msg`, so [`Severity::Fatal`] is always emitted.
#[derive(
    Deserialize, Serialize, Display, Default, Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Severity {
    #[display("fatal")]
    Fatal = 0,
    #[display("error")]
    Error = 1,
    #[default]
    #[display("info")]
    Info = 2,
    #[display("trace")]
    Trace = 3,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Fatal,
        Severity::Error,
        Severity::Info,
        Severity::Trace,
    ];

    /// Gate check: does a logger configured at `self` emit a `message`?
    pub fn enables(self, message: Severity) -> bool {
        self >= message
    }

    /// Line prefix, written before the tab separator.
    pub fn prefix(self) -> &'static str {
        match self {
            Severity::Fatal => "[FATAL]",
            Severity::Error => "[ERROR]",
            Severity::Info => "[INFO]",
            Severity::Trace => "[TRACE]",
        }
    }
}

impl From<Severity> for u8 {
    fn from(x: Severity) -> Self {
        x as u8
    }
}

impl TryFrom<u8> for Severity {
    type Error = SeverityParseError;
    fn try_from(value: u8) -> Result<Self, SeverityParseError> {
        match value {
            0 => Ok(Severity::Fatal),
            1 => Ok(Severity::Error),
            2 => Ok(Severity::Info),
            3 => Ok(Severity::Trace),
            _ => Err(SeverityParseError::OutOfRange(value)),
        }
    }
}

impl TryFrom<&str> for Severity {
    type Error = SeverityParseError;
    fn try_from(value: &str) -> Result<Self, SeverityParseError> {
        match value.trim().to_ascii_lowercase().as_str() {
            "fatal" => Ok(Severity::Fatal),
            "error" => Ok(Severity::Error),
            "info" => Ok(Severity::Info),
            "trace" => Ok(Severity::Trace),
            _ => Err(SeverityParseError::UnknownName(String::from(value))),
        }
    }
}

impl FromStr for Severity {
    type Err = SeverityParseError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Severity::try_from(s)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeverityParseError {
    #[error("Unknown severity '{0}', expected one of fatal, error, info, trace")]
    UnknownName(String),
    #[error("Severity must be in 0..=3, got {0}")]
    OutOfRange(u8),
}
