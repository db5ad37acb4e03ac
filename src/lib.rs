//! Husky - a git hooks manager
//!
//! Points git's `core.hooksPath` at a project-local folder, provisions the
//! shared shim every hook sources, and edits individual hook files.

/// Command-line interface
pub mod cli;
/// Shell completion generation
pub mod completions;
/// Runtime settings and build metadata
pub mod config;
/// Error types
pub mod error;
/// Git integration and installation
pub mod git;
/// Hook files and the shim script
pub mod hooks;
/// Diagnostic logging setup
pub mod logging;
/// Output formatting
pub mod output;

pub use config::*;
pub use error::HuskyError;
pub use hooks::*;
