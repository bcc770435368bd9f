//! SRT Linter
//!
//! Structural validation of SubRip (`.srt`) subtitle files.
//!
//! This library provides:
//! - A line-driven cue state machine reporting line-tagged diagnostics
//! - File discovery and console rendering for the `srt lint` command
//! - An LSP server publishing the same diagnostics to editors
//! - Configuration management

pub mod config;
pub mod core;
pub mod discovery;
pub mod lsp;
pub mod parser;
pub mod report;
pub mod validation;

// Re-exports for clean public API
pub use config::Config;
pub use crate::core::{Diagnostic, ErrorKind};
pub use parser::{Cue, Timestamp};
pub use validation::{lint_file, lint_lines, lint_reader, validate_document, LintReport};
