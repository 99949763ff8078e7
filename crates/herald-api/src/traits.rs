//! Publisher trait

use crate::error::Result;
use crate::types::{Credentials, PublishRequest, PublishResponse};

/// Something that can submit a release announcement.
///
/// Implementations make exactly one attempt; retries are not part of the
/// contract.
#[async_trait::async_trait]
pub trait ReleasePublisher: Send + Sync {
    /// Endpoint the announcement is sent to, for display
    fn endpoint(&self) -> &str;

    /// Submit a release announcement
    async fn publish(
        &self,
        request: &PublishRequest,
        credentials: &Credentials,
    ) -> Result<PublishResponse>;
}
