//! Changelog extraction
//!
//! Finds the `== Changelog ==` section, takes its first `**label**` version
//! block and turns the bullet lines of that block into [`ChangelogMarkup`].
//!
//! ```text
//! == Changelog ==
//!
//! **1.2.0** - 2024-05-01
//! * Added X
//! - Fixed Y
//!
//! **1.1.0**
//! * Older entry
//! ```

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, error, info, instrument, warn};

use crate::error::Result;
use crate::types::{ChangelogMarkup, ReadmeDocument};

/// Regex for the changelog section heading
static HEADING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?im)^==\s*Changelog\s*==").expect("Invalid regex"));

/// Regex for the start of the following section
static NEXT_SECTION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^==").expect("Invalid regex"));

/// Regex for a version block label line. Not multi-line: the block body is
/// bounded by the next `**` line or the true end of the section.
static VERSION_HEADER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*\*(?P<label>[^*]+)\*\*[^\n]*\n").expect("Invalid regex"));

/// One release's block inside the changelog section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VersionBlock<'a> {
    /// Text between the `**` markers
    pub label: &'a str,
    /// Everything after the label line up to the next `**` line
    pub body: &'a str,
}

impl<'a> VersionBlock<'a> {
    /// Bullet entries of this block, prefix and whitespace stripped
    pub fn entries(&self) -> Vec<String> {
        self.body
            .trim()
            .lines()
            .map(str::trim)
            .filter(|line| line.starts_with('*') || line.starts_with('-'))
            .map(|line| line[1..].trim().to_string())
            .filter(|entry| !entry.is_empty())
            .collect()
    }
}

/// Why no changelog could be produced from a document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Miss {
    NoSection,
    NoVersionBlock,
    NoBullets,
}

/// Text between the changelog heading and the next `==` line (or the end)
pub fn changelog_section(text: &str) -> Option<&str> {
    let heading = HEADING_REGEX.find(text)?;
    let remaining = &text[heading.end()..];

    let section = match NEXT_SECTION_REGEX.find(remaining) {
        Some(next) => &remaining[..next.start()],
        None => remaining,
    };
    Some(section)
}

/// The first version block of a changelog section
pub fn first_version_block(section: &str) -> Option<VersionBlock<'_>> {
    let caps = VERSION_HEADER_REGEX.captures(section)?;
    let header = caps.get(0)?;
    let label = caps.name("label")?.as_str();

    let rest = &section[header.end()..];
    let end = rest.find("\n**").unwrap_or(rest.len());

    Some(VersionBlock {
        label,
        body: &rest[..end],
    })
}

fn scan(text: &str) -> std::result::Result<ChangelogMarkup, Miss> {
    let section = changelog_section(text).ok_or(Miss::NoSection)?;
    let block = first_version_block(section).ok_or(Miss::NoVersionBlock)?;
    debug!(label = block.label, body = block.body.trim(), "parsed changelog block");

    let markup = ChangelogMarkup::new(block.entries());
    if markup.is_empty() {
        return Err(Miss::NoBullets);
    }
    Ok(markup)
}

impl ChangelogMarkup {
    /// Extract the newest changelog entries from readme text.
    ///
    /// Returns empty markup when there is no changelog section, no version
    /// block, or no bullet lines in the first block.
    pub fn from_text(text: &str) -> Self {
        match scan(text) {
            Ok(markup) => {
                debug!(entries = markup.entries().len(), "changelog entries found");
                markup
            }
            Err(Miss::NoSection) => {
                warn!("No changelog section found in readme");
                Self::default()
            }
            Err(Miss::NoVersionBlock) => {
                warn!("No version entries found in changelog");
                Self::default()
            }
            Err(Miss::NoBullets) => {
                warn!("No bullet points found in first changelog entry");
                Self::default()
            }
        }
    }
}

/// Parse the changelog, surfacing read errors.
///
/// A missing readme yields empty markup.
pub fn try_parse_changelog(path: &Path) -> Result<ChangelogMarkup> {
    let Some(doc) = ReadmeDocument::load(path)? else {
        return Ok(ChangelogMarkup::default());
    };
    Ok(ChangelogMarkup::from_text(doc.content()))
}

/// Parse the changelog of an optional readme into HTML.
///
/// Never fails; every problem degrades to an empty string.
#[instrument]
pub fn parse_changelog(path: Option<&Path>) -> String {
    let Some(path) = path.filter(|p| p.exists()) else {
        info!(
            path = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "undefined".to_string()),
            "No readme file found"
        );
        return String::new();
    };

    info!(path = %path.display(), "Parsing changelog");
    match try_parse_changelog(path) {
        Ok(markup) => markup.render(),
        Err(e) => {
            error!(error = %e, "Error parsing changelog");
            String::new()
        }
    }
}
