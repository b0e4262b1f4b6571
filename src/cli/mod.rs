//! Command-line interface for envaudit.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations
//! - [`progress`] - Indicatif-backed scan observer

pub mod args;
pub mod commands;
pub mod progress;

pub use args::{Cli, Commands, ConfigAction, ConfigArgs, OutputFormat, ScanArgs, ToolsArgs};
pub use commands::{CommandDispatcher, CommandResult};
pub use progress::ProgressObserver;
