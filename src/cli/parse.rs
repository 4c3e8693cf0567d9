//! CLI parse: clap types for template. No behavior; definitions only.

use crate::cli::help::{BAR_EXAMPLES, CONFIG_EXAMPLES, FOO_EXAMPLES};
use crate::config::FlagOverrides;
use crate::output::OutputKind;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Template CLI - API client with layered profile configuration
#[derive(Parser, Debug)]
#[command(name = "template")]
#[command(about = "API client with layered profile configuration")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags accepted by every command
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Account identifier
    #[arg(long, global = true)]
    pub account: Option<String>,

    /// API access token
    #[arg(long, global = true)]
    pub access_token: Option<String>,

    /// API endpoint override
    #[arg(long, global = true, conflicts_with = "sandbox")]
    pub base_url: Option<String>,

    /// Use the sandbox environment
    #[arg(long, global = true)]
    pub sandbox: bool,

    /// Configuration profile
    #[arg(long, global = true)]
    pub profile: Option<String>,

    /// Configuration file path (overrides profile discovery)
    #[arg(short = 'c', long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Never prompt; use defaults for every question
    #[arg(long, global = true)]
    pub no_interactive: bool,

    /// Enable verbose logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

impl GlobalArgs {
    /// Flags that take part in configuration resolution.
    pub fn flags(&self) -> FlagOverrides {
        FlagOverrides {
            account: self.account.clone(),
            access_token: self.access_token.clone(),
            base_url: self.base_url.clone(),
            sandbox: self.sandbox,
            profile: self.profile.clone(),
            config_file: self.config_file.clone(),
        }
    }
}

/// Output selection for commands that render a result
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputKind>,

    /// JMESPath query applied to json and yaml output
    #[arg(short, long)]
    pub query: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List demo records, or show one record
    #[command(after_help = FOO_EXAMPLES)]
    Foo {
        /// Show the record with this ID
        #[arg(long)]
        id: Option<i64>,

        #[command(flatten)]
        output: OutputArgs,
    },
    /// Run the demo prompt sequence and print the answers
    #[command(after_help = BAR_EXAMPLES)]
    Bar {
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Configure the active profile interactively, or read and write single settings
    #[command(after_help = CONFIG_EXAMPLES)]
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
    /// Show version information
    Version {
        #[command(flatten)]
        output: OutputArgs,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective value of a setting
    Get {
        /// account, access-token, base-url, or sandbox
        key: String,
    },
    /// Validate a value and save it to the active config file
    Set {
        /// account, access-token, base-url, or sandbox
        key: String,
        value: String,
    },
    /// List every setting with its effective value
    List {
        #[command(flatten)]
        output: OutputArgs,
    },
}
