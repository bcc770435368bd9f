//! Diagnostics
//!
//! The eight structural violations an SRT file can contain, and the
//! line-tagged diagnostic carrying one of them.

use thiserror::Error;

/// Kind of structural violation found in an SRT file.
///
/// Display strings are stable: callers and test suites match on them.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A cue was closed without any text line
    #[error("No Content")]
    NoContent,

    /// Blank line where an index or timing line was expected
    #[error("Extra Space")]
    ExtraSpace,

    /// Index line is not a positive integer
    #[error("Invalid Count")]
    InvalidCount,

    /// Timing line is not `HH:MM:SS,mmm --> HH:MM:SS,mmm`
    #[error("Invalid Time Format")]
    InvalidTimeFormat,

    /// End time precedes start time within one cue
    #[error("end time should later than start time")]
    StartEnd,

    /// Start time precedes the previous cue's end time
    #[error("start time should later or equal than last end time")]
    TimeThanLast,

    /// First cue is not numbered 1
    #[error("Subtitle index should start from 1")]
    StartNum,

    /// Index does not increase by exactly one
    #[error("Subtitle index should increase 1")]
    InvalidNum,
}

impl ErrorKind {
    /// Stable identifier of the kind, e.g. `"TimeThanLast"`
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::NoContent => "NoContent",
            ErrorKind::ExtraSpace => "ExtraSpace",
            ErrorKind::InvalidCount => "InvalidCount",
            ErrorKind::InvalidTimeFormat => "InvalidTimeFormat",
            ErrorKind::StartEnd => "StartEnd",
            ErrorKind::TimeThanLast => "TimeThanLast",
            ErrorKind::StartNum => "StartNum",
            ErrorKind::InvalidNum => "InvalidNum",
        }
    }
}

/// A violation tagged with the 1-based line where it was detected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Diagnostic {
    pub line: usize,
    pub kind: ErrorKind,
}

impl Diagnostic {
    pub fn new(line: usize, kind: ErrorKind) -> Self {
        Self { line, kind }
    }

    pub fn message(&self) -> String {
        self.kind.to_string()
    }
}
