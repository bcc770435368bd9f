//! Cue under construction

use super::{Timestamp, Timing};

/// One subtitle entry as declared by the file.
///
/// Fields are optional because a malformed index or timing line still
/// produces a cue, just one with the field missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cue {
    pub index: Option<u32>,
    pub timing: Option<Timing>,
    pub text: String,
}

impl Cue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start(&self) -> Option<Timestamp> {
        self.timing.map(|t| t.start)
    }

    pub fn end(&self) -> Option<Timestamp> {
        self.timing.map(|t| t.end)
    }

    /// Append a trimmed content line; lines are joined without separator
    pub fn push_text(&mut self, line: &str) {
        self.text.push_str(line);
    }

    pub fn has_content(&self) -> bool {
        !self.text.is_empty()
    }
}
