//! Generation options shared by the OSCAL-producing conversions.
//!
//! The recognized set is closed: target schema version and the three
//! metadata overrides. Options shape document front-matter only; the
//! structural mapping never consults them.

use crate::oscal::{DEFAULT_OSCAL_VERSION, OscalMetadata};
use crate::types::Metadata;

/// Named generation options with documented defaults.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    /// OSCAL schema version stamped into generated metadata.
    pub oscal_version: String,
    /// Overrides the document title taken from source metadata.
    pub title: Option<String>,
    /// Overrides the document version string taken from source metadata.
    pub version: Option<String>,
    /// Overrides the last-modified timestamp taken from source metadata.
    pub last_modified: Option<String>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            oscal_version: DEFAULT_OSCAL_VERSION.to_string(),
            title: None,
            version: None,
            last_modified: None,
        }
    }
}

impl GenerateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_oscal_version(mut self, version: impl Into<String>) -> Self {
        self.oscal_version = version.into();
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    #[must_use]
    pub fn with_last_modified(mut self, timestamp: impl Into<String>) -> Self {
        self.last_modified = Some(timestamp.into());
        self
    }

    /// Resolve OSCAL front-matter from source metadata, with overrides
    /// applied. Absent values stay absent — nothing is invented, so output
    /// is identical across runs.
    pub(crate) fn resolve_metadata(&self, source: &Metadata) -> OscalMetadata {
        OscalMetadata {
            title: self.title.clone().unwrap_or_else(|| source.title.clone()),
            last_modified: self
                .last_modified
                .clone()
                .or_else(|| source.last_modified.clone()),
            version: self.version.clone().or_else(|| source.version.clone()),
            oscal_version: self.oscal_version.clone(),
        }
    }
}
