//! Release publish workflow
//!
//! validate settings → parse requirements → parse changelog → build request
//! → POST → check the release id.

use herald_api::{
    Credentials, PublishClient, PublishRequest, PublishRequestBuilder, PublishResponse,
    ReleasePublisher,
};
use herald_readme::{parse_changelog, parse_requirements};
use tracing::{debug, info, instrument};

use crate::config::{PublishConfig, PublishSettings};
use crate::error::{HeraldError, Result};

use super::progress::ProgressReporter;

/// Options for a publish run
#[derive(Debug, Clone, Default)]
pub struct PublishOptions {
    /// Build the request but don't send it
    pub dry_run: bool,
}

impl PublishOptions {
    /// Create options for a dry run
    pub fn dry_run() -> Self {
        Self { dry_run: true }
    }
}

/// How a publish run ended
#[derive(Debug, Clone)]
pub enum PublishOutcome {
    /// The endpoint created a release
    Published {
        release_id: String,
        response: PublishResponse,
    },
    /// Dry run; nothing was sent
    DryRun { request: PublishRequest },
}

/// Publishes one release announcement
pub struct PublishWorkflow<'a> {
    config: &'a PublishConfig,
    publisher: &'a dyn ReleasePublisher,
    options: PublishOptions,
}

impl<'a> PublishWorkflow<'a> {
    /// Create a new publish workflow
    pub fn new(
        config: &'a PublishConfig,
        publisher: &'a dyn ReleasePublisher,
        options: PublishOptions,
    ) -> Self {
        Self {
            config,
            publisher,
            options,
        }
    }

    /// Parse the readme and assemble the request body
    pub fn build_request(&self, reporter: &dyn ProgressReporter) -> PublishRequest {
        let readme = self.config.readme.as_deref();
        if let Some(path) = readme {
            reporter.info(&format!("Reading release notes from {}", path.display()));
        } else {
            reporter.warning("No readme configured; publishing without requirements or changelog");
        }

        let requirements = parse_requirements(readme);
        let changelog = parse_changelog(readme);
        if readme.is_some() && changelog.is_empty() {
            reporter.warning("No changelog entries found");
        }

        PublishRequestBuilder::new(
            &self.config.asset_url,
            &self.config.version,
            &self.config.file_name,
        )
        .pre_release(self.config.pre_release.clone())
        .changelog(changelog)
        .requirements(requirements)
        .build()
    }

    /// Execute the workflow
    #[instrument(skip(self, reporter), fields(version = %self.config.version, dry_run = self.options.dry_run))]
    pub async fn execute(&self, reporter: &dyn ProgressReporter) -> Result<PublishOutcome> {
        info!(endpoint = self.publisher.endpoint(), "executing publish workflow");
        let request = self.build_request(reporter);

        let requirements = match &request.requirements {
            Some(reqs) => serde_json::to_string(reqs)?,
            None => "none".to_string(),
        };
        reporter.info(&format!(
            "Version {} requirements: {}",
            request.version, requirements
        ));
        reporter.info(&format!("Deploying asset: {}", request.git_asset_url));

        if self.options.dry_run {
            reporter.info("Dry run: request not sent");
            return Ok(PublishOutcome::DryRun { request });
        }

        reporter.info(&format!("Publishing to {}", self.publisher.endpoint()));
        let credentials = Credentials::new(&self.config.user, &self.config.password);
        let response = self.publisher.publish(&request, &credentials).await?;

        reporter.info(&format!(
            "API response: {}",
            serde_json::to_string_pretty(response.body())?
        ));

        let Some(release_id) = response.release_id() else {
            return Err(HeraldError::MissingReleaseId {
                response: response.body().to_string(),
            });
        };

        debug!(release_id = %release_id, "release created");
        reporter.success(&format!("Successfully created release #{}", release_id));
        Ok(PublishOutcome::Published {
            release_id,
            response,
        })
    }
}

/// Validate settings and publish against the configured endpoint.
///
/// Missing settings fail before the readme is read or any request is made.
pub async fn publish_release(
    settings: &PublishSettings,
    options: PublishOptions,
    reporter: &dyn ProgressReporter,
) -> Result<PublishOutcome> {
    let config = settings.validate()?;
    let client = PublishClient::new(&config.endpoint)?;
    PublishWorkflow::new(&config, &client, options)
        .execute(reporter)
        .await
}
