//! Readme types

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ReadmeError, Result};

/// A readme file loaded into memory
#[derive(Debug, Clone)]
pub struct ReadmeDocument {
    path: PathBuf,
    content: String,
}

impl ReadmeDocument {
    /// Read a readme from disk.
    ///
    /// Returns `Ok(None)` when nothing exists at `path`; a missing readme is a
    /// normal state, not an error.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            debug!(path = %path.display(), "readme not found");
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|source| ReadmeError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "readme loaded");
        Ok(Some(Self {
            path: path.to_path_buf(),
            content,
        }))
    }

    /// Path the document was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw document text
    pub fn content(&self) -> &str {
        &self.content
    }
}

/// Minimum versions declared in the readme header.
///
/// Serialized with the keys the release endpoint expects (`wp`, `php`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirements {
    /// Value of `Requires at least:`
    #[serde(rename = "wp", skip_serializing_if = "Option::is_none")]
    pub platform_min_version: Option<String>,
    /// Value of `Requires PHP:`
    #[serde(rename = "php", skip_serializing_if = "Option::is_none")]
    pub runtime_min_version: Option<String>,
}

impl Requirements {
    /// Combine the two optional fields, returning `None` when both are absent
    pub fn from_fields(
        platform_min_version: Option<String>,
        runtime_min_version: Option<String>,
    ) -> Option<Self> {
        if platform_min_version.is_none() && runtime_min_version.is_none() {
            return None;
        }
        Some(Self {
            platform_min_version,
            runtime_min_version,
        })
    }
}

/// Changelog entries of the newest version block
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChangelogMarkup {
    entries: Vec<String>,
}

impl ChangelogMarkup {
    /// Create markup from already-trimmed entries, dropping empty ones
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(Into::into)
                .filter(|e: &String| !e.is_empty())
                .collect(),
        }
    }

    /// Entries in document order
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    /// Whether there is nothing to render
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render as an HTML unordered list, or an empty string without entries
    pub fn render(&self) -> String {
        if self.entries.is_empty() {
            return String::new();
        }

        let items: Vec<String> = self
            .entries
            .iter()
            .map(|entry| format!("  <li>{}</li>", escape_html(entry)))
            .collect();

        format!("<ul>\n{}\n</ul>", items.join("\n"))
    }
}

/// Escape HTML special characters.
pub(crate) fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#039;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_readme() {
        let temp = TempDir::new().unwrap();
        let doc = ReadmeDocument::load(&temp.path().join("readme.txt")).unwrap();
        assert!(doc.is_none());
    }

    #[test]
    fn test_load_existing_readme() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("readme.txt");
        std::fs::write(&path, "=== Plugin ===\n").unwrap();

        let doc = ReadmeDocument::load(&path).unwrap().unwrap();
        assert_eq!(doc.path(), path.as_path());
        assert_eq!(doc.content(), "=== Plugin ===\n");
    }

    #[test]
    fn test_requirements_never_empty() {
        assert!(Requirements::from_fields(None, None).is_none());

        let reqs = Requirements::from_fields(None, Some("7.4".to_string())).unwrap();
        assert!(reqs.platform_min_version.is_none());
        assert_eq!(reqs.runtime_min_version.as_deref(), Some("7.4"));
    }

    #[test]
    fn test_requirements_serialize_only_present_keys() {
        let reqs = Requirements::from_fields(Some("6.0".to_string()), None).unwrap();
        let json = serde_json::to_value(&reqs).unwrap();
        assert_eq!(json, serde_json::json!({ "wp": "6.0" }));
    }

    #[test]
    fn test_render_empty_markup() {
        assert_eq!(ChangelogMarkup::default().render(), "");
        assert!(ChangelogMarkup::new(vec!["", ""]).is_empty());
    }

    #[test]
    fn test_render_escapes_entries() {
        let markup = ChangelogMarkup::new(vec!["Fixed <script> & \"quotes\" 'here'"]);
        assert_eq!(
            markup.render(),
            "<ul>\n  <li>Fixed &lt;script&gt; &amp; &quot;quotes&quot; &#039;here&#039;</li>\n</ul>"
        );
    }
}
