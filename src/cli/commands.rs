//! Command implementations.

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands, ConfigAction, ConfigArgs, ScanArgs, ToolsArgs};
use crate::cli::progress::ProgressObserver;
use crate::config::{self, AuditConfig};
use crate::error::Result;
use crate::report::ReportGenerator;
use crate::scan::catalog::TOOL_CATALOG;
use crate::scan::observer::{NullObserver, ScanObserver};
use crate::scan::scanner::EnvironmentScanner;

/// Outcome of a dispatched command.
pub struct CommandResult {
    pub exit_code: i32,
}

impl CommandResult {
    fn ok() -> Self {
        Self { exit_code: 0 }
    }
}

/// Routes parsed arguments to command implementations.
pub struct CommandDispatcher;

impl CommandDispatcher {
    pub fn dispatch(cli: &Cli) -> Result<CommandResult> {
        match &cli.command {
            Some(Commands::Scan(args)) => Self::run_scan(cli, args),
            Some(Commands::Tools(args)) => Self::list_tools(args),
            Some(Commands::Config(args)) => Self::manage_config(cli, args),
            // Bare `envaudit` runs a default scan.
            None => Self::run_scan(cli, &ScanArgs::default()),
        }
    }

    fn run_scan(cli: &Cli, args: &ScanArgs) -> Result<CommandResult> {
        let (config, _) = load_config(cli)?;
        let mut options = config.effective_scan_options();

        if args.no_env {
            options.scan_env_vars = false;
        }
        if args.no_updates {
            options.perform_update_checks = false;
        }
        if args.no_fs_scan {
            options.scan_paths.clear();
        } else if !args.paths.is_empty() {
            options.scan_paths = args.paths.clone();
        }

        let null = NullObserver;
        let progress = ProgressObserver::new();
        let observer: &dyn ScanObserver = if cli.quiet { &null } else { &progress };

        let scanner = EnvironmentScanner::new(options, TOOL_CATALOG, observer);
        let result = scanner.run_scan()?;
        if !cli.quiet {
            progress.finish();
        }

        let generator = ReportGenerator::new(&result);
        match &args.output {
            Some(path) => {
                generator.export(args.format.into(), path)?;
                if !cli.quiet {
                    eprintln!("Report written to {}", path.display());
                }
            }
            None => {
                println!("{}", generator.render(args.format.into())?);
            }
        }

        Ok(CommandResult::ok())
    }

    fn list_tools(args: &ToolsArgs) -> Result<CommandResult> {
        if args.json {
            let json =
                serde_json::to_string_pretty(TOOL_CATALOG).map_err(anyhow::Error::from)?;
            println!("{}", json);
        } else {
            for spec in TOOL_CATALOG {
                println!(
                    "{:<12} {:<22} {:<16} {}",
                    spec.id,
                    spec.name,
                    spec.category,
                    spec.candidates().join(", ")
                );
            }
        }
        Ok(CommandResult::ok())
    }

    fn manage_config(cli: &Cli, args: &ConfigArgs) -> Result<CommandResult> {
        let (mut config, path) = load_config(cli)?;
        match &args.action {
            ConfigAction::Show => {
                let json =
                    serde_json::to_string_pretty(&config).map_err(anyhow::Error::from)?;
                println!("{}", json);
            }
            ConfigAction::Ignore { id } => {
                config.add_ignored_identifier(id);
                config::save_config_to(&config, &path)?;
                println!("Added {} to the ignore-list", id);
            }
            ConfigAction::Unignore { id } => {
                config.remove_ignored_identifier(id);
                config::save_config_to(&config, &path)?;
                println!("Removed {} from the ignore-list", id);
            }
        }
        Ok(CommandResult::ok())
    }
}

fn load_config(cli: &Cli) -> Result<(AuditConfig, PathBuf)> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => config::config_file_path()?,
    };
    let config = config::load_config_from(&path)?;
    Ok((config, path))
}
