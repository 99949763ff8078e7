//! Requirements command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use herald_core::config::DEFAULT_README;
use herald_readme::parse_requirements;

use crate::cli::output::{self, path_style};
use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Parse the minimum versions declared in a readme
#[derive(Debug, Args)]
pub struct RequirementsCommand {
    /// Readme to parse (default: readme.txt)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl RequirementsCommand {
    /// Execute the requirements command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        let path = self
            .file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_README));
        info!(path = %path.display(), "executing requirements command");

        let requirements = parse_requirements(Some(&path));

        match cli.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&requirements)?);
            }
            OutputFormat::Text => match &requirements {
                Some(reqs) => {
                    println!(
                        "{} {}",
                        output::header("Requirements for"),
                        path_style().apply_to(path.display())
                    );
                    if let Some(wp) = &reqs.platform_min_version {
                        println!("{}", output::key_value("Requires at least", wp));
                    }
                    if let Some(php) = &reqs.runtime_min_version {
                        println!("{}", output::key_value("Requires PHP", php));
                    }
                }
                None => output::warning("No requirements found"),
            },
        }

        Ok(exit_codes::SUCCESS)
    }
}
