//! Progress reporting
//!
//! Workflows announce each stage as it happens through a
//! [`ProgressReporter`]. The CLI renders these on the console; library callers
//! and tests can route them elsewhere.

use tracing::{info, warn};

/// Receiver for human-readable workflow progress
pub trait ProgressReporter: Send + Sync {
    /// A stage started or produced a result
    fn info(&self, message: &str);

    /// The workflow finished successfully
    fn success(&self, message: &str);

    /// Something degraded but the workflow continues
    fn warning(&self, message: &str);
}

/// Reporter that forwards progress to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl ProgressReporter for TracingReporter {
    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn success(&self, message: &str) {
        info!(outcome = "success", "{}", message);
    }

    fn warning(&self, message: &str) {
        warn!("{}", message);
    }
}
