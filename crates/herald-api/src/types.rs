//! Request and response types for the release endpoint

use std::fmt;

use herald_readme::Requirements;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Pre-release flag sent when none is configured
pub const DEFAULT_PRE_RELEASE: &str = "false";

/// Body of a release announcement
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRequest {
    /// Download URL of the release asset
    pub git_asset_url: String,
    /// Release version
    pub version: String,
    /// Release archive file name
    pub file_name: String,
    /// Pre-release flag, passed through as a string
    pub pre_release: String,
    /// HTML changelog, possibly empty
    pub changelog: String,
    /// Minimum versions, omitted when the readme declares none
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requirements: Option<Requirements>,
}

/// Builder for [`PublishRequest`]
#[derive(Debug, Clone)]
pub struct PublishRequestBuilder {
    asset_url: String,
    version: String,
    file_name: String,
    pre_release: Option<String>,
    changelog: String,
    requirements: Option<Requirements>,
}

impl PublishRequestBuilder {
    /// Start a request from the three required release fields
    pub fn new(
        asset_url: impl Into<String>,
        version: impl Into<String>,
        file_name: impl Into<String>,
    ) -> Self {
        Self {
            asset_url: asset_url.into(),
            version: version.into(),
            file_name: file_name.into(),
            pre_release: None,
            changelog: String::new(),
            requirements: None,
        }
    }

    /// Set the pre-release flag; `None` falls back to `"false"`
    pub fn pre_release(mut self, flag: Option<String>) -> Self {
        self.pre_release = flag;
        self
    }

    /// Set the rendered changelog
    pub fn changelog(mut self, html: impl Into<String>) -> Self {
        self.changelog = html.into();
        self
    }

    /// Attach requirements when present
    pub fn requirements(mut self, requirements: Option<Requirements>) -> Self {
        self.requirements = requirements;
        self
    }

    /// Assemble the request
    pub fn build(self) -> PublishRequest {
        PublishRequest {
            git_asset_url: self.asset_url,
            version: self.version,
            file_name: self.file_name,
            pre_release: self
                .pre_release
                .unwrap_or_else(|| DEFAULT_PRE_RELEASE.to_string()),
            changelog: self.changelog,
            requirements: self.requirements,
        }
    }
}

/// Basic-auth credentials for the release endpoint
#[derive(Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// JSON returned by the release endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PublishResponse {
    body: Value,
}

impl PublishResponse {
    /// Wrap a decoded response body
    pub fn new(body: Value) -> Self {
        Self { body }
    }

    /// The decoded body
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Release id assigned by the server.
    ///
    /// `null`, `false`, `0` and `""` count as missing, as does any
    /// non-object body.
    pub fn release_id(&self) -> Option<String> {
        match self.body.get("id")? {
            Value::Null | Value::Bool(false) => None,
            Value::String(s) if s.is_empty() => None,
            Value::String(s) => Some(s.clone()),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            other => Some(other.to_string()),
        }
    }
}
