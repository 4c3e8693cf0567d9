//! CLI route: single route table and run context. Dispatches to domain services and the formatter.

use crate::cli::command_name;
use crate::cli::parse::{Commands, ConfigCommands, GlobalArgs, OutputArgs};
use crate::config::{
    keys, profile_setup_pipeline, Config, ConfigCommandService, ConfigLoader, LoadedConfig,
    ProfileSetup,
};
use crate::error::CliError;
use crate::output::{FormatOptions, OutputFormatter, OutputKind, Renderable};
use crate::prompt::{PromptPipeline, PromptStep, Prompter};
use crate::views::{Foo, FooItem, FooList, VersionInfo};
use std::io::Write;
use tracing::{debug, info, warn};

/// Runtime context for CLI execution: the loader and the configuration it resolved.
///
/// The configuration is resolved once here and only ever borrowed by handlers.
pub struct RunContext {
    loader: ConfigLoader,
    loaded: LoadedConfig,
}

impl RunContext {
    /// Resolve configuration for `global`. Conflicts are checked per command.
    pub fn new(loader: ConfigLoader, global: &GlobalArgs) -> Result<Self, CliError> {
        let loaded = loader.load(&global.flags())?;
        debug!(config = ?loaded.config(), file = ?loaded.file(), "Configuration resolved");
        Ok(Self { loader, loaded })
    }

    pub fn config(&self) -> &Config {
        self.loaded.config()
    }

    /// Execute a CLI command via the single route table, writing results to `out`.
    pub fn execute(
        &self,
        command: &Commands,
        prompter: &mut dyn Prompter,
        out: &mut dyn Write,
    ) -> Result<(), CliError> {
        debug!(command = command_name(command), "Executing command");
        match command {
            Commands::Foo { id, output } => self.handle_foo(*id, output, out),
            Commands::Bar { output } => self.handle_bar(output, prompter, out),
            Commands::Config { command: None } => self.handle_config_setup(prompter, out),
            Commands::Config {
                command: Some(command),
            } => self.handle_config_command(command, out),
            Commands::Version { output } => {
                self.render(&VersionInfo::current(), output, OutputKind::Text, out)
            }
        }
    }

    fn handle_foo(
        &self,
        id: Option<i64>,
        output: &OutputArgs,
        out: &mut dyn Write,
    ) -> Result<(), CliError> {
        let config = self.loaded.validated()?;
        debug!(endpoint = config.api_base_url(), "Using API endpoint");

        let samples = Foo::samples();
        match id {
            Some(id) => {
                let foo = samples
                    .into_iter()
                    .find(|foo| foo.id == id)
                    .ok_or_else(|| CliError::Usage(format!("No foo with ID {}", id)))?;
                self.render(&FooItem(foo), output, OutputKind::Text, out)
            }
            None => self.render(&FooList(samples), output, OutputKind::Table, out),
        }
    }

    fn handle_bar(
        &self,
        output: &OutputArgs,
        prompter: &mut dyn Prompter,
        out: &mut dyn Write,
    ) -> Result<(), CliError> {
        self.loaded.validated()?;

        let answers = bar_pipeline().run(prompter)?;
        self.render(&answers, output, OutputKind::Text, out)
    }

    fn handle_config_setup(
        &self,
        prompter: &mut dyn Prompter,
        out: &mut dyn Write,
    ) -> Result<(), CliError> {
        self.report_conflict();
        let profile = self.config().profile();
        writeln!(out, "Configuring profile '{}'", profile)?;

        let answers = profile_setup_pipeline(self.config()).run(prompter)?;
        let setup = ProfileSetup::from_answers(&answers)?;
        let path = ConfigCommandService::write_profile(&setup, self.loader.paths(), profile)?;

        writeln!(out, "Saved profile '{}' to {}", profile, path.display())?;
        Ok(())
    }

    fn handle_config_command(
        &self,
        command: &ConfigCommands,
        out: &mut dyn Write,
    ) -> Result<(), CliError> {
        self.report_conflict();
        match command {
            ConfigCommands::Get { key } => {
                let value = ConfigCommandService::get(self.config(), key)?;
                writeln!(out, "{}", value)?;
            }
            ConfigCommands::Set { key, value } => {
                let target = self.loader.persist_path(&self.loaded)?;
                let result = ConfigCommandService::set(&target, key, value)?;
                info!(key = %result.key, config_path = %result.config_path.display(), "Setting saved");
            }
            ConfigCommands::List { output } => {
                let list = ConfigCommandService::list(self.config());
                self.render(&list, output, OutputKind::Table, out)?;
            }
        }
        Ok(())
    }

    /// Config commands run on an inconsistent config but still surface the conflict.
    fn report_conflict(&self) {
        if let Some(conflict) = self.loaded.conflict() {
            warn!(error = %conflict, "Effective configuration is inconsistent");
        }
    }

    /// Output kind: `--output`, then `TEMPLATE_OUTPUT`, then the command's default.
    /// Query: `--query`, then `TEMPLATE_QUERY`.
    fn format_options(
        &self,
        args: &OutputArgs,
        default: OutputKind,
    ) -> Result<FormatOptions, CliError> {
        let output = match args.output {
            Some(output) => output,
            None => match self.loader.env_value(keys::OUTPUT) {
                Some(raw) => raw
                    .parse::<OutputKind>()
                    .map_err(|e| CliError::Usage(format!("TEMPLATE_OUTPUT: {}", e)))?,
                None => default,
            },
        };

        let query = args
            .query
            .clone()
            .or_else(|| self.loader.env_value(keys::QUERY).map(str::to_string));

        Ok(FormatOptions { output, query })
    }

    fn render(
        &self,
        value: &dyn Renderable,
        args: &OutputArgs,
        default: OutputKind,
        out: &mut dyn Write,
    ) -> Result<(), CliError> {
        let opts = self.format_options(args, default)?;
        let bytes = OutputFormatter::format(value, &opts)?;
        out.write_all(&bytes)?;
        Ok(())
    }
}

/// Demo prompt sequence. The three confirmations share a name, so only the
/// last answer is kept.
fn bar_pipeline() -> PromptPipeline {
    PromptPipeline::new()
        .step(PromptStep::confirm(
            "confirmation",
            "Do you want to do it?",
            Some(false),
        ))
        .step(PromptStep::confirm(
            "confirmation",
            "Do you want to do it again?",
            Some(false),
        ))
        .step(PromptStep::confirm(
            "confirmation",
            "Do you want to do it again again?",
            Some(false),
        ))
        .step(PromptStep::select(
            "format",
            "File format",
            ["json", "yaml", "toml"],
            Some("yaml"),
        ))
        .step(PromptStep::text(
            "base-url",
            "Base URL",
            Some("https://example.com"),
        ))
}
