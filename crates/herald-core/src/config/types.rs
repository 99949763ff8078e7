//! Configuration types

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Settings as collected from files, environment and flags.
///
/// Every field is optional here; [`PublishSettings::validate`] turns them into
/// a [`PublishConfig`] once the required ones are known to be present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PublishSettings {
    /// Release endpoint username
    pub user: Option<String>,
    /// Release endpoint password
    pub password: Option<String>,
    /// Release endpoint URL
    pub endpoint: Option<String>,
    /// Download URL of the release asset
    pub asset_url: Option<String>,
    /// Release archive file name
    pub file_name: Option<String>,
    /// Release version
    pub version: Option<String>,
    /// Readme to read requirements and changelog from
    pub readme: Option<PathBuf>,
    /// Pre-release flag
    pub pre_release: Option<String>,
}

impl PublishSettings {
    /// Overlay `other` on top of `self`; present values in `other` win.
    ///
    /// Empty or whitespace-only values in `other` count as absent, so an empty
    /// environment variable never hides a value from the config file.
    pub fn merge(self, other: PublishSettings) -> Self {
        Self {
            user: present(other.user).or(self.user),
            password: present(other.password).or(self.password),
            endpoint: present(other.endpoint).or(self.endpoint),
            asset_url: present(other.asset_url).or(self.asset_url),
            file_name: present(other.file_name).or(self.file_name),
            version: present(other.version).or(self.version),
            readme: other
                .readme
                .filter(|path| !path.as_os_str().is_empty())
                .or(self.readme),
            pre_release: present(other.pre_release).or(self.pre_release),
        }
    }
}

fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Validated configuration for one publish run
#[derive(Clone, PartialEq, Eq)]
pub struct PublishConfig {
    pub user: String,
    pub password: String,
    pub endpoint: String,
    pub asset_url: String,
    pub file_name: String,
    pub version: String,
    pub readme: Option<PathBuf>,
    pub pre_release: Option<String>,
}

impl fmt::Debug for PublishConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PublishConfig")
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("asset_url", &self.asset_url)
            .field("file_name", &self.file_name)
            .field("version", &self.version)
            .field("readme", &self.readme)
            .field("pre_release", &self.pre_release)
            .finish()
    }
}

/// A required setting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Setting {
    User,
    Password,
    Endpoint,
    AssetUrl,
    FileName,
    Version,
}

impl Setting {
    /// All required settings, in reporting order
    pub const REQUIRED: [Setting; 6] = [
        Setting::User,
        Setting::Password,
        Setting::Endpoint,
        Setting::AssetUrl,
        Setting::FileName,
        Setting::Version,
    ];

    /// Environment variable the setting is read from
    pub fn env_var(&self) -> &'static str {
        match self {
            Setting::User => "WORDPRESS_USER",
            Setting::Password => "WORDPRESS_PASS",
            Setting::Endpoint => "WORDPRESS_RELEASE_URL",
            Setting::AssetUrl => "ASSET_URL",
            Setting::FileName => "FILE_NAME",
            Setting::Version => "RELEASE_VERSION",
        }
    }

    /// Human-readable description
    pub fn description(&self) -> &'static str {
        match self {
            Setting::User => "WordPress API username",
            Setting::Password => "WordPress API password",
            Setting::Endpoint => "WordPress release API endpoint",
            Setting::AssetUrl => "Release asset URL",
            Setting::FileName => "Release file name",
            Setting::Version => "Release version",
        }
    }
}

impl fmt::Display for Setting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.env_var(), self.description())
    }
}
