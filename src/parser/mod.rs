//! SRT Field Parser
//!
//! Per-line field parsers for the index and timing lines of a cue. Each
//! returns the parsed value or the [`ErrorKind`] the line violates. Lines are
//! expected to be trimmed already.

pub mod cue;
pub mod timestamp;

pub use cue::Cue;
pub use timestamp::Timestamp;

use crate::core::ErrorKind;

/// Separator between the start and end timestamps of a timing line
pub const TIMING_SEPARATOR: &str = " --> ";

/// Start and end of a cue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timing {
    pub start: Timestamp,
    pub end: Timestamp,
}

/// Parse a cue index line: a positive base-10 integer
pub fn parse_index(line: &str) -> Result<u32, ErrorKind> {
    if line.is_empty() {
        return Err(ErrorKind::ExtraSpace);
    }

    match line.parse::<u32>() {
        Ok(index) if index > 0 => Ok(index),
        _ => Err(ErrorKind::InvalidCount),
    }
}

/// Parse a timing line: `HH:MM:SS,mmm --> HH:MM:SS,mmm`
pub fn parse_timing(line: &str) -> Result<Timing, ErrorKind> {
    if line.is_empty() {
        return Err(ErrorKind::ExtraSpace);
    }

    let mut sides = line.split(TIMING_SEPARATOR);
    let (Some(start), Some(end), None) = (sides.next(), sides.next(), sides.next()) else {
        return Err(ErrorKind::InvalidTimeFormat);
    };

    // WebVTT-style `00:00:01.000` anywhere on the line
    if line.contains('.') {
        return Err(ErrorKind::InvalidTimeFormat);
    }

    let (Some(start), Some(end)) = (Timestamp::parse(start), Timestamp::parse(end)) else {
        return Err(ErrorKind::InvalidTimeFormat);
    };

    if end.is_before(&start) {
        return Err(ErrorKind::StartEnd);
    }

    Ok(Timing { start, end })
}
