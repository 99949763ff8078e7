//! Configuration validation

use tracing::debug;

use crate::error::ConfigError;

use super::types::{PublishConfig, PublishSettings, Setting};

/// Treat empty and whitespace-only values as unset
fn present(value: &Option<String>) -> Option<String> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Required settings absent from `settings`, in reporting order
pub fn missing_settings(settings: &PublishSettings) -> Vec<Setting> {
    Setting::REQUIRED
        .into_iter()
        .filter(|setting| {
            let value = match setting {
                Setting::User => &settings.user,
                Setting::Password => &settings.password,
                Setting::Endpoint => &settings.endpoint,
                Setting::AssetUrl => &settings.asset_url,
                Setting::FileName => &settings.file_name,
                Setting::Version => &settings.version,
            };
            present(value).is_none()
        })
        .collect()
}

impl PublishSettings {
    /// Check that every required setting is present.
    ///
    /// Fails with [`ConfigError::Missing`] listing all absent settings, not
    /// just the first.
    pub fn validate(&self) -> Result<PublishConfig, ConfigError> {
        debug!("validating configuration");
        let missing = missing_settings(self);
        if !missing.is_empty() {
            return Err(ConfigError::Missing(missing));
        }

        let config = PublishConfig {
            user: present(&self.user).unwrap_or_default(),
            password: present(&self.password).unwrap_or_default(),
            endpoint: present(&self.endpoint).unwrap_or_default(),
            asset_url: present(&self.asset_url).unwrap_or_default(),
            file_name: present(&self.file_name).unwrap_or_default(),
            version: present(&self.version).unwrap_or_default(),
            readme: self
                .readme
                .clone()
                .filter(|p| !p.as_os_str().is_empty()),
            pre_release: present(&self.pre_release),
        };

        debug!("configuration validation passed");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn complete() -> PublishSettings {
        PublishSettings {
            user: Some("admin".to_string()),
            password: Some("secret".to_string()),
            endpoint: Some("https://example.com/wp-json/release".to_string()),
            asset_url: Some("https://example.com/plugin.zip".to_string()),
            file_name: Some("plugin.zip".to_string()),
            version: Some("1.0.0".to_string()),
            readme: None,
            pre_release: None,
        }
    }

    #[test]
    fn test_validate_complete_settings() {
        let config = complete().validate().unwrap();
        assert_eq!(config.user, "admin");
        assert_eq!(config.version, "1.0.0");
        assert!(config.readme.is_none());
        assert!(config.pre_release.is_none());
    }

    #[test]
    fn test_validate_lists_every_missing_setting() {
        let err = PublishSettings::default().validate().unwrap_err();
        match &err {
            ConfigError::Missing(missing) => assert_eq!(missing, &Setting::REQUIRED.to_vec()),
            other => panic!("unexpected error: {other}"),
        }

        let message = err.to_string();
        for setting in Setting::REQUIRED {
            assert!(message.contains(setting.env_var()), "{message}");
        }
        assert!(message.contains("  - WORDPRESS_USER (WordPress API username)"));
    }

    #[test]
    fn test_validate_single_missing_setting() {
        let mut settings = complete();
        settings.file_name = None;

        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ref m) if m == &vec![Setting::FileName]));
    }

    #[test]
    fn test_empty_values_count_as_missing() {
        let mut settings = complete();
        settings.password = Some(String::new());
        settings.endpoint = Some("   ".to_string());

        let err = settings.validate().unwrap_err();
        assert!(
            matches!(err, ConfigError::Missing(ref m) if m == &vec![Setting::Password, Setting::Endpoint])
        );
    }

    #[test]
    fn test_empty_optional_values_are_dropped() {
        let mut settings = complete();
        settings.pre_release = Some(String::new());
        settings.readme = Some(PathBuf::new());

        let config = settings.validate().unwrap();
        assert!(config.pre_release.is_none());
        assert!(config.readme.is_none());
    }

    #[test]
    fn test_merge_prefers_overlay() {
        let base = PublishSettings {
            version: Some("1.0.0".to_string()),
            file_name: Some("base.zip".to_string()),
            ..Default::default()
        };
        let overlay = PublishSettings {
            version: Some("2.0.0".to_string()),
            ..Default::default()
        };

        let merged = base.merge(overlay);
        assert_eq!(merged.version.as_deref(), Some("2.0.0"));
        assert_eq!(merged.file_name.as_deref(), Some("base.zip"));
    }

    #[test]
    fn test_merge_ignores_empty_overlay_values() {
        let base = PublishSettings {
            endpoint: Some("https://example.com/wp-json/release".to_string()),
            pre_release: Some("true".to_string()),
            readme: Some(PathBuf::from("readme.txt")),
            ..Default::default()
        };
        let overlay = PublishSettings {
            endpoint: Some(String::new()),
            pre_release: Some("  ".to_string()),
            readme: Some(PathBuf::new()),
            ..Default::default()
        };

        let merged = base.merge(overlay);
        assert_eq!(
            merged.endpoint.as_deref(),
            Some("https://example.com/wp-json/release")
        );
        assert_eq!(merged.pre_release.as_deref(), Some("true"));
        assert_eq!(merged.readme, Some(PathBuf::from("readme.txt")));
    }
}
