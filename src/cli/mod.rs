//! Command-line interface for rehost.
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{Cli, Commands, CompletionsArgs, ResolveArgs, SetArgs, ShowArgs};
pub use commands::{Command, CommandDispatcher, CommandResult};
