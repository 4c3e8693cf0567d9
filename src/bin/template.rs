//! Template CLI Binary
//!
//! Command-line client with layered profile configuration and multi-format output.

use clap::Parser;
use owo_colors::OwoColorize;
use std::io::IsTerminal;
use std::process;
use template_cli::cli::{command_name, map_error, Cli, GlobalArgs, RunContext};
use template_cli::config::ConfigLoader;
use template_cli::error::CliError;
use template_cli::logging::{init_logging, LoggingConfig};
use template_cli::prompt::{DefaultsPrompter, Prompter, TerminalPrompter};
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();
    let loader = ConfigLoader::from_environment();

    // Initialize logging early
    let logging_config = build_logging_config(&cli.global);
    if let Err(e) = init_logging(&logging_config, loader.env()) {
        let e = CliError::from(e);
        report(&e);
        process::exit(e.exit_code());
    }

    info!(command = command_name(&cli.command), "template starting");

    let context = match RunContext::new(loader, &cli.global) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Error resolving configuration: {}", e);
            report(&e);
            process::exit(e.exit_code());
        }
    };

    let mut prompter: Box<dyn Prompter> = if cli.global.no_interactive {
        Box::new(DefaultsPrompter)
    } else {
        Box::new(TerminalPrompter::new())
    };

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match context.execute(&cli.command, prompter.as_mut(), &mut out) {
        Ok(()) => info!("Command completed successfully"),
        Err(e) => {
            error!("Command failed: {}", e);
            report(&e);
            process::exit(e.exit_code());
        }
    }
}

fn report(e: &CliError) {
    let message = map_error(e);
    if std::io::stderr().is_terminal() {
        eprintln!("{} {}", "Error:".red().bold(), message);
    } else {
        eprintln!("Error: {}", message);
    }
}

/// Build logging configuration from CLI flags.
/// `--log-level` overrides `--verbose`, which overrides the default.
fn build_logging_config(global: &GlobalArgs) -> LoggingConfig {
    let mut config = LoggingConfig {
        color: std::io::stderr().is_terminal(),
        ..Default::default()
    };

    if global.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = global.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = global.log_format {
        config.format = format.clone();
    }

    config
}
