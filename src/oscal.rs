//! Typed model of the OSCAL 1.1.x Catalog and Profile document shapes.
//!
//! Only the subset of the schema the converters populate is modeled. Field
//! names follow OSCAL's kebab-case JSON spelling. `uuid` fields are optional
//! and left unset by the converters: a generated uuid cannot be derived
//! deterministically from the source document, and conversion output must be
//! byte-identical across runs.

use serde::{Deserialize, Serialize};

/// Default OSCAL schema version stamped into generated metadata.
pub const DEFAULT_OSCAL_VERSION: &str = "1.1.3";

// ─── Shared metadata ─────────────────────────────────────────────────────────

/// Document front-matter common to Catalog and Profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscalMetadata {
    pub title: String,
    #[serde(rename = "last-modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "oscal-version")]
    pub oscal_version: String,
}

// ─── Catalog ─────────────────────────────────────────────────────────────────

/// An OSCAL Catalog: groups of controls, each control carrying parts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscalCatalog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub metadata: OscalMetadata,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub groups: Vec<OscalGroup>,
}

/// A group of controls (mapped from a control family or guidance category).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscalGroup {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parts: Vec<OscalPart>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub controls: Vec<OscalControl>,
}

/// A single control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscalControl {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parts: Vec<OscalPart>,
}

/// A named prose part of a control or group.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscalPart {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prose: Option<String>,
}

// ─── Profile ─────────────────────────────────────────────────────────────────

/// An OSCAL Profile: a single import of a companion catalog plus merge
/// directives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscalProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    pub metadata: OscalMetadata,
    pub imports: Vec<OscalImport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merge: Option<OscalMerge>,
}

/// One import statement: the href is the caller-supplied catalog reference,
/// passed through verbatim.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscalImport {
    pub href: String,
    #[serde(rename = "include-controls", skip_serializing_if = "Vec::is_empty", default)]
    pub include_controls: Vec<OscalSelectControls>,
}

/// A selection of controls by identifier.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscalSelectControls {
    #[serde(rename = "with-ids", skip_serializing_if = "Vec::is_empty", default)]
    pub with_ids: Vec<String>,
}

/// Merge directive for resolved profile structure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscalMerge {
    #[serde(rename = "as-is", skip_serializing_if = "Option::is_none")]
    pub as_is: Option<bool>,
}

// ─── Document envelopes ──────────────────────────────────────────────────────

/// Top-level `{"catalog": …}` envelope required by the OSCAL JSON/YAML schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscalCatalogDocument {
    pub catalog: OscalCatalog,
}

/// Top-level `{"profile": …}` envelope.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OscalProfileDocument {
    pub profile: OscalProfile,
}
