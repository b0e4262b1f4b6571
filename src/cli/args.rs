//! Argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::report::ReportFormat;

/// Audit installed development tools and environment configuration.
#[derive(Parser, Debug)]
#[command(name = "envaudit", version, about)]
pub struct Cli {
    /// Suppress progress output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Use an alternate configuration file
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run an environment scan and render the report (the default)
    Scan(ScanArgs),

    /// List the built-in tool catalog
    Tools(ToolsArgs),

    /// Inspect or edit the persisted configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Report format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Skip environment variable collection
    #[arg(long)]
    pub no_env: bool,

    /// Skip package-manager update checks
    #[arg(long)]
    pub no_updates: bool,

    /// Skip the filesystem sweep for portable installs
    #[arg(long)]
    pub no_fs_scan: bool,

    /// Override the filesystem sweep roots (repeatable)
    #[arg(long = "path", value_name = "DIR")]
    pub paths: Vec<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ToolsArgs {
    /// Emit the catalog as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration
    Show,

    /// Add a component identifier to the ignore-list
    Ignore { id: String },

    /// Remove a component identifier from the ignore-list
    Unignore { id: String },
}

/// Report format as exposed on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Markdown,
    Json,
    Html,
}

impl From<OutputFormat> for ReportFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Text => ReportFormat::Text,
            OutputFormat::Markdown => ReportFormat::Markdown,
            OutputFormat::Json => ReportFormat::Json,
            OutputFormat::Html => ReportFormat::Html,
        }
    }
}
