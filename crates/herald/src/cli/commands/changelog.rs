//! Changelog command
//!
//! Runs only the changelog parser against a readme and prints the resulting
//! HTML, for checking a readme without publishing anything.

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use herald_core::config::DEFAULT_README;
use herald_readme::parse_changelog;

use crate::cli::output::{self, path_style};
use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Parse the changelog of a readme
#[derive(Debug, Args)]
pub struct ChangelogCommand {
    /// Readme to parse (default: readme.txt)
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

impl ChangelogCommand {
    /// The readme this command reads
    pub fn readme_path(&self) -> PathBuf {
        self.file
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_README))
    }

    /// Execute the changelog command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        let path = self.readme_path();
        info!(path = %path.display(), "executing changelog command");

        let html = parse_changelog(Some(&path));

        match cli.format {
            OutputFormat::Json => {
                let report = serde_json::json!({
                    "file": path,
                    "changelog": html,
                });
                println!("{}", serde_json::to_string_pretty(&report)?);
            }
            OutputFormat::Text => {
                if !cli.quiet {
                    output::info(&format!(
                        "Testing changelog parsing with: {}",
                        path_style().apply_to(path.display())
                    ));
                    println!();
                    println!("{}", output::header("=== Parsed Changelog HTML ==="));
                }
                println!("{}", html);
                if !cli.quiet {
                    println!("{}", output::header("============================="));
                }
            }
        }

        Ok(exit_codes::SUCCESS)
    }
}
