use serde::{Deserialize, Serialize};

use crate::enums::AssessmentResult;

// ─── Shared front-matter ─────────────────────────────────────────────────────

/// Document front-matter shared by every Gemara layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(rename = "last-modified", skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
}

// ─── Layer 2: Control catalog ────────────────────────────────────────────────

/// A Layer 2 catalog: control families, each holding controls with
/// assessment requirements.
///
/// Identifiers are expected to be unique within their scope (control ids
/// within the catalog, requirement ids within the catalog). The converters
/// surface a [`MappingError`](crate::error::MappingError) when a collision
/// would break the one-to-one mapping into target identifiers.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    pub metadata: Metadata,
    #[serde(rename = "control-families", default)]
    pub control_families: Vec<ControlFamily>,
}

/// A named grouping of related controls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlFamily {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub controls: Vec<Control>,
}

/// A single control with its assessment requirements.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Control {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(default)]
    pub requirements: Vec<Requirement>,
}

/// An assessable requirement belonging to a control.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub id: String,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

// ─── Layer 1: Guidance document ──────────────────────────────────────────────

/// A Layer 1 guidance document: broader guidance categories whose guidelines
/// are realized as controls in an external catalog rather than embedded here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceDocument {
    pub metadata: Metadata,
    #[serde(default)]
    pub categories: Vec<GuidanceCategory>,
}

/// A guidance grouping.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuidanceCategory {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub guidelines: Vec<Guideline>,
}

/// A single guideline within a category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Guideline {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objective: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rationale: Option<String>,
}

// ─── Layer 4: Evaluation log ─────────────────────────────────────────────────

/// An ordered sequence of per-requirement assessment entries.
///
/// Entry order is significant: consumers diff scan reports, so the SARIF
/// conversion preserves it exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationLog {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default)]
    pub entries: Vec<AssessmentEntry>,
}

/// One assessment of one requirement.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentEntry {
    /// Identifier of the requirement this entry assessed.
    #[serde(rename = "requirement-id")]
    pub requirement_id: String,
    pub result: AssessmentResult,
    /// Where the assessment observed the subject: either a `path` or
    /// `path:line` file locator, or an absolute resource URI.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// Free-text explanation of the outcome.
    pub message: String,
}
