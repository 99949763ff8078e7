//! Publish command

use std::path::PathBuf;

use clap::Args;
use tracing::info;

use herald_core::{publish_release, HeraldError, PublishOptions, PublishOutcome, PublishSettings};

use crate::cli::output::{self, ConsoleReporter};
use crate::cli::{Cli, OutputFormat};
use crate::exit_codes;

/// Publish a release announcement to the release endpoint
#[derive(Debug, Args)]
pub struct PublishCommand {
    /// Release endpoint username
    #[arg(long, env = "WORDPRESS_USER", hide_env_values = true)]
    pub user: Option<String>,

    /// Release endpoint password
    #[arg(long, env = "WORDPRESS_PASS", hide_env_values = true)]
    pub password: Option<String>,

    /// Release endpoint URL
    #[arg(long, env = "WORDPRESS_RELEASE_URL")]
    pub endpoint: Option<String>,

    /// Download URL of the release asset
    #[arg(long, env = "ASSET_URL")]
    pub asset_url: Option<String>,

    /// Release archive file name
    #[arg(long, env = "FILE_NAME")]
    pub file_name: Option<String>,

    /// Release version
    #[arg(long = "release-version", value_name = "VERSION", env = "RELEASE_VERSION")]
    pub release_version: Option<String>,

    /// Readme to take requirements and changelog from
    #[arg(long, env = "README_FILE")]
    pub readme: Option<PathBuf>,

    /// Pre-release flag sent with the release (default: "false")
    #[arg(long, env = "PRE_RELEASE")]
    pub pre_release: Option<String>,

    /// Build and print the request without sending it
    #[arg(long)]
    pub dry_run: bool,
}

impl PublishCommand {
    /// Settings given on the command line or through the environment
    pub fn flag_settings(&self) -> PublishSettings {
        PublishSettings {
            user: self.user.clone(),
            password: self.password.clone(),
            endpoint: self.endpoint.clone(),
            asset_url: self.asset_url.clone(),
            file_name: self.file_name.clone(),
            version: self.release_version.clone(),
            readme: self.readme.clone(),
            pre_release: self.pre_release.clone(),
        }
    }

    /// Execute the publish command
    pub fn execute(&self, cli: &Cli) -> anyhow::Result<i32> {
        info!(dry_run = self.dry_run, "executing publish command");
        let cwd = std::env::current_dir()?;

        let file_settings = match cli.file_settings(&cwd) {
            Ok(settings) => settings,
            Err(e) => {
                output::error(&e.to_string());
                return Ok(exit_codes::CONFIG_ERROR);
            }
        };
        let settings = file_settings.merge(self.flag_settings());

        let options = PublishOptions {
            dry_run: self.dry_run,
        };
        let reporter = progress_reporter(cli);

        let runtime = tokio::runtime::Runtime::new()?;
        let result = runtime.block_on(publish_release(&settings, options, &reporter));

        match result {
            Ok(PublishOutcome::Published {
                release_id,
                response,
            }) => {
                if cli.format == OutputFormat::Json {
                    println!("{}", serde_json::to_string_pretty(response.body())?);
                }
                info!(release_id = %release_id, "publish complete");
                Ok(exit_codes::SUCCESS)
            }
            Ok(PublishOutcome::DryRun { request }) => {
                println!("{}", serde_json::to_string_pretty(&request)?);
                Ok(exit_codes::SUCCESS)
            }
            Err(e) => {
                report_failure(&e);
                Ok(exit_codes::for_error(&e))
            }
        }
    }
}

/// Progress goes quiet under `--format json` so stdout stays parseable
fn progress_reporter(cli: &Cli) -> ConsoleReporter {
    ConsoleReporter::new(cli.quiet || cli.format == OutputFormat::Json)
}

fn report_failure(error: &HeraldError) {
    match error {
        HeraldError::MissingReleaseId { response } => {
            output::error("No release ID in response.");
            eprintln!("{}", output::key_value("response", response));
        }
        HeraldError::Config(config) => output::error(&config.to_string()),
        other => output::error(&format!("Error: {}", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_json_format_silences_progress() {
        let cli = Cli::try_parse_from(["herald", "--format", "json", "publish", "--dry-run"]).unwrap();
        assert!(progress_reporter(&cli).is_quiet());
    }

    #[test]
    fn test_text_format_reports_progress() {
        let cli = Cli::try_parse_from(["herald", "publish", "--dry-run"]).unwrap();
        assert!(!progress_reporter(&cli).is_quiet());

        let cli = Cli::try_parse_from(["herald", "--quiet", "publish"]).unwrap();
        assert!(progress_reporter(&cli).is_quiet());
    }
}
