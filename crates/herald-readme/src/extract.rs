//! Line-prefixed field extraction
//!
//! Readme headers carry fields as `Label: value` lines. A [`LineField`] finds
//! the first line starting with its label (case-insensitive) and returns the
//! trimmed remainder. Anchors apply per line, not to the whole text.

use regex::{Regex, RegexBuilder};

use crate::error::Result;

/// A compiled matcher for one line-prefixed field
#[derive(Debug, Clone)]
pub struct LineField {
    label: String,
    pattern: Regex,
}

impl LineField {
    /// Compile a matcher for `label`, matched verbatim apart from case
    pub fn new(label: &str) -> Result<Self> {
        let pattern = RegexBuilder::new(&format!(r"^{}\s*(.+)$", regex::escape(label)))
            .case_insensitive(true)
            .multi_line(true)
            .build()?;

        Ok(Self {
            label: label.to_string(),
            pattern,
        })
    }

    /// The label this matcher looks for
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Trimmed value of the first matching line, if any
    pub fn extract(&self, text: &str) -> Option<String> {
        let caps = self.pattern.captures(text)?;
        let value = caps.get(1)?.as_str().trim();
        Some(value.to_string())
    }
}

/// Extract a single field without keeping the compiled matcher around
pub fn extract_field(text: &str, label: &str) -> Result<Option<String>> {
    Ok(LineField::new(label)?.extract(text))
}
