//! HTTP client for the release endpoint
//!
//! One POST per release, JSON body, basic authentication. The full response
//! body is collected before it is decoded. There is no retry and no timeout
//! beyond what the transport applies on its own.

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use tracing::{debug, info, instrument, warn};
use url::Url;

use crate::error::{ApiError, Result};
use crate::traits::ReleasePublisher;
use crate::types::{Credentials, PublishRequest, PublishResponse};

/// Client for a single release endpoint
pub struct PublishClient {
    endpoint: Url,
    client: Client,
}

impl PublishClient {
    /// Create a client for `endpoint`, which must be an http(s) URL
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_client(endpoint, Client::new())
    }

    /// Create a client reusing an existing `reqwest::Client`
    pub fn with_client(endpoint: &str, client: Client) -> Result<Self> {
        let url = Url::parse(endpoint).map_err(|e| ApiError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ApiError::InvalidEndpoint {
                url: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(Self {
            endpoint: url,
            client,
        })
    }

    fn authorization(credentials: &Credentials) -> String {
        let token = BASE64.encode(format!("{}:{}", credentials.username, credentials.password));
        format!("Basic {}", token)
    }
}

#[async_trait]
impl ReleasePublisher for PublishClient {
    fn endpoint(&self) -> &str {
        self.endpoint.as_str()
    }

    #[instrument(skip(self, request, credentials), fields(endpoint = %self.endpoint, version = %request.version))]
    async fn publish(
        &self,
        request: &PublishRequest,
        credentials: &Credentials,
    ) -> Result<PublishResponse> {
        let payload = serde_json::to_vec(request)?;
        debug!(bytes = payload.len(), "posting release");

        // reqwest derives Content-Length from the byte body
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, Self::authorization(credentials))
            .body(payload)
            .send()
            .await?;

        let status = response.status();
        info!(status = status.as_u16(), "API response");

        let body = response.text().await?;

        if !status.is_success() {
            warn!(status = status.as_u16(), body = %body, "release request rejected");
            return Err(ApiError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        match serde_json::from_str(&body) {
            Ok(value) => Ok(PublishResponse::new(value)),
            Err(source) => {
                warn!(body = %body, "release response is not JSON");
                Err(ApiError::ResponseParse { source, body })
            }
        }
    }
}
