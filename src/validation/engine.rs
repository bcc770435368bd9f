//! Validation Engine
//!
//! Line-driven cue state machine. Each line is validated as soon as it is
//! consumed, and a cue is checked against its predecessor at the blank line
//! closing it. Only the previous and the current cue are ever held.

use std::io::BufRead;
use std::path::Path;

use anyhow::{Context, Result};

use super::rules::check_close;
use crate::core::source::{self, LineSource};
use crate::core::{Diagnostic, ErrorKind};
use crate::parser::{parse_index, parse_timing, Cue};

/// What the state machine expects from the next line of the current cue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    ExpectIndex,
    ExpectTiming,
    ExpectText,
}

/// Per-file parser state.
///
/// Errors never stall the machine: every line moves it forward
/// deterministically, so one malformed cue cannot hide problems further down.
#[derive(Debug, Default)]
pub struct CueStateMachine {
    phase: Phase,
    previous: Option<Cue>,
    current: Cue,
}

impl CueStateMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Last closed cue
    pub fn previous(&self) -> Option<&Cue> {
        self.previous.as_ref()
    }

    /// Cue under construction
    pub fn current(&self) -> &Cue {
        &self.current
    }

    /// Consume one physical line and return the violation it reveals, if any
    pub fn process(&mut self, line: &str) -> Option<ErrorKind> {
        let line = line.trim();

        match self.phase {
            Phase::ExpectIndex => self.expect_index(line),
            Phase::ExpectTiming => self.expect_timing(line),
            Phase::ExpectText => self.expect_text(line),
        }
    }

    fn expect_index(&mut self, line: &str) -> Option<ErrorKind> {
        match parse_index(line) {
            Ok(index) => {
                self.current.index = Some(index);
                self.phase = Phase::ExpectTiming;
                None
            }
            // Blank lines do not advance the phase
            Err(ErrorKind::ExtraSpace) => Some(ErrorKind::ExtraSpace),
            Err(kind) => {
                self.phase = Phase::ExpectTiming;
                Some(kind)
            }
        }
    }

    fn expect_timing(&mut self, line: &str) -> Option<ErrorKind> {
        match parse_timing(line) {
            Ok(timing) => {
                self.current.timing = Some(timing);
                self.phase = Phase::ExpectText;
                None
            }
            Err(ErrorKind::ExtraSpace) => Some(ErrorKind::ExtraSpace),
            Err(kind) => {
                self.phase = Phase::ExpectText;
                Some(kind)
            }
        }
    }

    fn expect_text(&mut self, line: &str) -> Option<ErrorKind> {
        if line.is_empty() {
            return self.close();
        }

        self.current.push_text(line);
        None
    }

    /// Validate the current cue against the previous one and start a new cue
    fn close(&mut self) -> Option<ErrorKind> {
        let result = check_close(self.previous.as_ref(), &self.current);
        log::trace!(
            "closed cue {:?}: {}",
            self.current.index,
            result.map_or("ok", |kind| kind.name())
        );

        self.previous = Some(std::mem::take(&mut self.current));
        self.phase = Phase::ExpectIndex;
        result
    }
}

/// Diagnostics collected over one file, in line order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LintReport {
    pub diagnostics: Vec<Diagnostic>,
}

impl LintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: usize, kind: ErrorKind) {
        self.diagnostics.push(Diagnostic::new(line, kind));
    }

    /// Record the outcome of one line
    fn record(&mut self, line: usize, outcome: Option<ErrorKind>) {
        if let Some(kind) = outcome {
            self.push(line, kind);
        }
    }

    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Diagnostic> {
        self.diagnostics.iter()
    }

    /// Kinds in report order, handy for assertions
    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.diagnostics.iter().map(|d| d.kind).collect()
    }
}

impl<'a> IntoIterator for &'a LintReport {
    type Item = &'a Diagnostic;
    type IntoIter = std::slice::Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lint an in-memory sequence of lines
pub fn lint_lines<I, S>(lines: I) -> LintReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut machine = CueStateMachine::new();
    let mut report = LintReport::new();

    for (line_idx, line) in lines.into_iter().enumerate() {
        report.record(line_idx + 1, machine.process(line.as_ref()));
    }

    report
}

/// Lint a whole document held in memory
pub fn validate_document(content: &str) -> LintReport {
    lint_lines(content.lines())
}

/// Lint everything a reader yields. A read failure aborts the lint.
pub fn lint_reader<R: BufRead>(reader: R) -> Result<LintReport> {
    lint_source(LineSource::new(reader))
}

/// Lint a file on disk
pub fn lint_file(path: &Path) -> Result<LintReport> {
    let source = source::open(path)?;
    lint_source(source).with_context(|| format!("Failed to lint {}", path.display()))
}

fn lint_source<R: BufRead>(source: LineSource<R>) -> Result<LintReport> {
    let mut machine = CueStateMachine::new();
    let mut report = LintReport::new();

    for (line_idx, line) in source.enumerate() {
        let line_num = line_idx + 1;
        let line = line.with_context(|| format!("Failed to read line {}", line_num))?;
        report.record(line_num, machine.process(&line));
    }

    log::debug!("lint finished with {} diagnostics", report.diagnostics.len());
    Ok(report)
}
