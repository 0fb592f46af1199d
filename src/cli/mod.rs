//! Command-line interface for gapscan.
//!
//! This module provides the CLI argument parsing using clap's derive macros
//! and command implementations.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ScanArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
