//! LSP Protocol Implementation
//!
//! Publishes lint diagnostics and a cue outline for open SRT documents.

pub mod backend;
pub mod document;
pub mod handlers;
pub mod server;

pub use backend::Backend;
