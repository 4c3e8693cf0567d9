//! CLI help text and command-name contract for logging.

use crate::cli::parse::{Commands, ConfigCommands};

pub const FOO_EXAMPLES: &str = "\
Examples:
  template foo
  template foo --output=json
  template foo --output=yaml
  template foo --output=json --query=\"[].id\"
  template foo --id 2";

pub const BAR_EXAMPLES: &str = "\
Examples:
  template bar
  template bar --output=json
  template bar --no-interactive --output=yaml";

pub const CONFIG_EXAMPLES: &str = "\
Examples:
  template config
  template config --profile work
  template config get account
  template config set sandbox true
  template config list --output=json";

/// Command name for logs (e.g. "foo", "config.set").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Foo { .. } => "foo",
        Commands::Bar { .. } => "bar",
        Commands::Config { command: None } => "config",
        Commands::Config {
            command: Some(command),
        } => config_command_name(command),
        Commands::Version { .. } => "version",
    }
}

fn config_command_name(command: &ConfigCommands) -> &'static str {
    match command {
        ConfigCommands::Get { .. } => "config.get",
        ConfigCommands::Set { .. } => "config.set",
        ConfigCommands::List { .. } => "config.list",
    }
}
