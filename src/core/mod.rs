//! Core Types
//!
//! Diagnostic taxonomy and the line source feeding the linter.

pub mod diagnostics;
pub mod source;

pub use diagnostics::{Diagnostic, ErrorKind};
pub use source::LineSource;
