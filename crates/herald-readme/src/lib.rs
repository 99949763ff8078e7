//! Herald Readme - metadata extraction from plugin readme files
//!
//! This crate recovers the structured pieces of a release announcement from a
//! loosely formatted `readme.txt`: the minimum platform and runtime versions
//! from the header, and the newest changelog entry rendered as an HTML list.
//!
//! The top-level parsers never fail. A missing file, a missing section or an
//! empty version block all degrade to "nothing found" and are logged.

pub mod changelog;
pub mod error;
pub mod extract;
pub mod requirements;
pub mod types;

pub use changelog::{
    changelog_section, first_version_block, parse_changelog, try_parse_changelog, VersionBlock,
};
pub use error::{ReadmeError, Result};
pub use extract::{extract_field, LineField};
pub use requirements::{
    parse_requirements, try_parse_requirements, PLATFORM_LABEL, RUNTIME_LABEL,
};
pub use types::{ChangelogMarkup, ReadmeDocument, Requirements};
