//! CLI definition and command handling

pub mod commands;
pub mod output;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use herald_core::config::load_settings_or_default;
use herald_core::{ConfigError, PublishSettings};

use commands::{ChangelogCommand, InitCommand, PublishCommand, RequirementsCommand};

/// Herald - publish plugin release announcements from readme metadata
#[derive(Debug, Parser)]
#[command(name = "herald")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Working directory
    #[arg(short = 'C', long, global = true)]
    pub directory: Option<PathBuf>,

    /// Configuration file (defaults to the nearest herald.toml)
    #[arg(long, global = true, env = "HERALD_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for CLI
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output
    #[default]
    Text,
    /// JSON output
    Json,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Publish a release announcement
    Publish(PublishCommand),

    /// Parse the changelog of a readme and print the HTML
    #[command(alias = "test-changelog")]
    Changelog(ChangelogCommand),

    /// Parse the minimum versions declared in a readme
    Requirements(RequirementsCommand),

    /// Write a starter herald.toml
    Init(InitCommand),
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub fn execute(&self) -> anyhow::Result<i32> {
        // Change to specified directory if provided
        if let Some(dir) = &self.directory {
            std::env::set_current_dir(dir)?;
        }

        match self.command {
            Commands::Publish(ref cmd) => cmd.execute(self),
            Commands::Changelog(ref cmd) => cmd.execute(self),
            Commands::Requirements(ref cmd) => cmd.execute(self),
            Commands::Init(ref cmd) => cmd.execute(self),
        }
    }

    /// Settings from the configuration file, if one is found
    pub fn file_settings(&self, cwd: &Path) -> Result<PublishSettings, ConfigError> {
        let (settings, _) = load_settings_or_default(self.config.as_deref(), cwd)?;
        Ok(settings)
    }
}
