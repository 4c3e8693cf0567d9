//! CLI domain: parse, route, help, and output only.
//! Handlers borrow the resolved configuration from the run context.

mod help;
mod output;
mod parse;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands, ConfigCommands, GlobalArgs, OutputArgs};
pub use route::RunContext;
