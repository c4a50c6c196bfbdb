//! Command trait and context for dispatching commands

use std::env;
use std::time::Instant;

use crate::cli::Cli;
use mdp_core::config::GlobalConfig;
use mdp_core::error::Result;
use mdp_core::format::OutputFormat;
use mdp_core::store::Store;

/// Shared context for command execution
pub struct CommandContext<'a> {
    pub cli: &'a Cli,
    pub start: Instant,
}

impl<'a> CommandContext<'a> {
    pub fn new(cli: &'a Cli, start: Instant) -> Self {
        Self { cli, start }
    }

    /// Open the project named by `--project-path`, or discover one from the current directory
    pub fn open_store(&self) -> Result<Store> {
        match &self.cli.project_path {
            Some(path) => Store::open(path),
            None => Store::discover(&env::current_dir()?),
        }
    }

    /// `--format` if given, else the global config default, else JSON
    pub fn output_format(&self) -> Result<OutputFormat> {
        if let Some(format) = self.cli.format {
            return Ok(format);
        }
        let global = GlobalConfig::load()?;
        Ok(global
            .and_then(|config| config.default_format())
            .unwrap_or_default())
    }
}

/// Trait for commands that can be executed
pub trait Command {
    fn execute(&self, ctx: &CommandContext) -> Result<()>;
}
