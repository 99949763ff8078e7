//! Herald Core - configuration and workflow for release publishing
//!
//! This crate provides the error taxonomy, the configuration layer and the
//! publish workflow that ties readme parsing to the release endpoint.

pub mod config;
pub mod error;
pub mod workflow;

pub use config::{PublishConfig, PublishSettings, Setting};
pub use error::{ConfigError, HeraldError, Result};
pub use workflow::{
    publish_release, PublishOptions, PublishOutcome, PublishWorkflow, ProgressReporter,
    TracingReporter,
};
