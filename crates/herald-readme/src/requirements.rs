//! Minimum version requirements from the readme header

use std::path::Path;
use std::sync::LazyLock;

use tracing::{debug, error, info, instrument};

use crate::error::Result;
use crate::extract::LineField;
use crate::types::{ReadmeDocument, Requirements};

/// Header label for the minimum platform version
pub const PLATFORM_LABEL: &str = "Requires at least:";

/// Header label for the minimum runtime version. Existing readmes use this
/// exact text, so it is matched literally.
pub const RUNTIME_LABEL: &str = "Requires PHP:";

static PLATFORM_FIELD: LazyLock<LineField> =
    LazyLock::new(|| LineField::new(PLATFORM_LABEL).expect("Invalid regex"));

static RUNTIME_FIELD: LazyLock<LineField> =
    LazyLock::new(|| LineField::new(RUNTIME_LABEL).expect("Invalid regex"));

impl Requirements {
    /// Extract requirements from readme text
    pub fn from_text(text: &str) -> Option<Self> {
        Self::from_fields(PLATFORM_FIELD.extract(text), RUNTIME_FIELD.extract(text))
    }
}

/// Parse requirements, surfacing read errors.
///
/// `Ok(None)` covers both a missing readme and a readme without either field.
pub fn try_parse_requirements(path: &Path) -> Result<Option<Requirements>> {
    let Some(doc) = ReadmeDocument::load(path)? else {
        return Ok(None);
    };
    Ok(Requirements::from_text(doc.content()))
}

/// Parse requirements from an optional readme path.
///
/// Never fails: a missing file, a read error or a header without either field
/// all yield `None`.
#[instrument]
pub fn parse_requirements(path: Option<&Path>) -> Option<Requirements> {
    let Some(path) = path.filter(|p| p.exists()) else {
        info!("No readme file found; no requirements to parse.");
        return None;
    };

    info!(path = %path.display(), "Parsing requirements");
    match try_parse_requirements(path) {
        Ok(Some(requirements)) => {
            debug!(
                wp = ?requirements.platform_min_version,
                php = ?requirements.runtime_min_version,
                "found requirements"
            );
            Some(requirements)
        }
        Ok(None) => {
            info!("No requirements found in readme");
            None
        }
        Err(e) => {
            error!(error = %e, "Error parsing requirements");
            None
        }
    }
}
