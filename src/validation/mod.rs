//! Validation Engine
//!
//! The cue state machine and the cross-cue rules it applies when a cue
//! closes.

pub mod engine;
pub mod rules;

pub use engine::{
    lint_file, lint_lines, lint_reader, validate_document, CueStateMachine, LintReport, Phase,
};
pub use rules::check_close;
