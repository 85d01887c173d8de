//! Evaluation Log → SARIF v2.1.0 conversion.

use std::collections::HashMap;

use tracing::debug;

use crate::enums::AssessmentResult;
use crate::error::{ConvertError, EncodingError};
use crate::sarif::{
    SARIF_SCHEMA, SARIF_VERSION, SarifArtifactLocation, SarifDriver, SarifKind, SarifLevel,
    SarifLocation, SarifLog, SarifMessage, SarifPhysicalLocation, SarifRegion, SarifResult,
    SarifRule, SarifRun, SarifTool,
};
use crate::types::{AssessmentEntry, Catalog, Control, EvaluationLog, Requirement};

const INFORMATION_URI: &str = "https://github.com/gemaraproj/gemara-conv-rs";

/// Convert an evaluation log into a serialized SARIF v2.1.0 log.
///
/// One rule is emitted per distinct requirement identifier in first-seen
/// order; one result per entry, preserving input order exactly. When a
/// catalog is supplied, rules are enriched with the matching requirement's
/// text; a lookup miss degrades to an identifier-only rule and is never an
/// error. Relative entry locations are resolved against `artifact_uri`; an
/// empty `artifact_uri` disables resolution.
///
/// An empty log produces a valid SARIF log with empty rule and result
/// arrays.
///
/// # Errors
///
/// [`ConvertError::Encoding`] when the constructed document fails JSON
/// serialization.
pub fn to_sarif(
    log: &EvaluationLog,
    artifact_uri: &str,
    catalog: Option<&Catalog>,
) -> Result<Vec<u8>, ConvertError> {
    let mut rules: Vec<SarifRule> = Vec::new();
    let mut rule_index: HashMap<String, usize> = HashMap::new();

    // Rule table: first-seen order over the entries.
    for entry in &log.entries {
        if rule_index.contains_key(&entry.requirement_id) {
            continue;
        }
        rule_index.insert(entry.requirement_id.clone(), rules.len());
        rules.push(build_rule(&entry.requirement_id, catalog));
    }

    // Result list: one per entry, input order.
    let results = log
        .entries
        .iter()
        .map(|entry| build_result(entry, rule_index[&entry.requirement_id], artifact_uri))
        .collect();

    let sarif = SarifLog {
        schema: SARIF_SCHEMA.to_string(),
        version: SARIF_VERSION.to_string(),
        runs: vec![SarifRun {
            tool: SarifTool {
                driver: SarifDriver {
                    name: env!("CARGO_PKG_NAME").to_string(),
                    version: env!("CARGO_PKG_VERSION").to_string(),
                    information_uri: INFORMATION_URI.to_string(),
                    rules,
                },
            },
            results,
        }],
    };

    serde_json::to_vec_pretty(&sarif).map_err(|e| {
        ConvertError::Encoding(EncodingError {
            message: format!("failed to serialize SARIF log: {e}"),
        })
    })
}

// ─── Rule construction ───────────────────────────────────────────────────────

fn build_rule(requirement_id: &str, catalog: Option<&Catalog>) -> SarifRule {
    let enrichment = catalog.and_then(|c| {
        let found = find_requirement(c, requirement_id);
        if found.is_none() {
            debug!(
                requirement = requirement_id,
                catalog = %c.metadata.id,
                "requirement not found in catalog, emitting identifier-only rule"
            );
        }
        found
    });

    match enrichment {
        Some((control, requirement)) => SarifRule {
            id: requirement_id.to_string(),
            name: Some(rule_name(&control.title)),
            short_description: Some(SarifMessage {
                text: requirement.text.clone(),
            }),
            help: Some(SarifMessage {
                text: requirement
                    .recommendation
                    .clone()
                    .unwrap_or_else(|| requirement.text.clone()),
            }),
        },
        None => SarifRule {
            id: requirement_id.to_string(),
            name: None,
            short_description: None,
            help: None,
        },
    }
}

fn find_requirement<'a>(
    catalog: &'a Catalog,
    requirement_id: &str,
) -> Option<(&'a Control, &'a Requirement)> {
    catalog
        .control_families
        .iter()
        .flat_map(|family| &family.controls)
        .find_map(|control| {
            control
                .requirements
                .iter()
                .find(|r| r.id == requirement_id)
                .map(|r| (control, r))
        })
}

/// PascalCase rule name derived from the owning control's title.
fn rule_name(title: &str) -> String {
    let mut name = String::with_capacity(title.len());
    for word in title.split(|c: char| !c.is_ascii_alphanumeric()) {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            name.extend(first.to_uppercase());
            name.push_str(chars.as_str());
        }
    }
    name
}

// ─── Result construction ─────────────────────────────────────────────────────

fn build_result(entry: &AssessmentEntry, rule_index: usize, artifact_uri: &str) -> SarifResult {
    let (kind, level) = outcome_to_sarif(entry.result);

    let text = match entry.result {
        AssessmentResult::Error => format!("assessment error: {}", entry.message),
        _ => entry.message.clone(),
    };

    SarifResult {
        rule_id: entry.requirement_id.clone(),
        rule_index,
        kind,
        level,
        message: SarifMessage { text },
        locations: entry
            .location
            .as_deref()
            .map(|loc| vec![build_location(loc, artifact_uri)])
            .unwrap_or_default(),
    }
}

/// Assessment outcome to SARIF (kind, level). Each outcome is assigned
/// deliberately; an assessment-machinery error stays distinguishable from an
/// ordinary failure via the message prefix.
fn outcome_to_sarif(result: AssessmentResult) -> (SarifKind, SarifLevel) {
    match result {
        AssessmentResult::Passed => (SarifKind::Pass, SarifLevel::None),
        AssessmentResult::Failed => (SarifKind::Fail, SarifLevel::Error),
        AssessmentResult::NeedsReview => (SarifKind::Review, SarifLevel::Warning),
        AssessmentResult::NotApplicable => (SarifKind::NotApplicable, SarifLevel::None),
        AssessmentResult::Error => (SarifKind::Fail, SarifLevel::Error),
    }
}

fn build_location(location: &str, artifact_uri: &str) -> SarifLocation {
    let (path, line) = split_line_suffix(location);
    SarifLocation {
        physical_location: SarifPhysicalLocation {
            artifact_location: SarifArtifactLocation {
                uri: resolve_uri(path, artifact_uri),
            },
            region: line.map(|start_line| SarifRegion { start_line }),
        },
    }
}

/// Split a trailing `:<line>` locator off a path. The suffix must parse as
/// a nonzero integer; otherwise the whole string is the path.
fn split_line_suffix(location: &str) -> (&str, Option<u64>) {
    if let Some((path, suffix)) = location.rsplit_once(':') {
        if !path.is_empty() && !suffix.is_empty() {
            if let Ok(line) = suffix.parse::<u64>() {
                if line > 0 {
                    return (path, Some(line));
                }
            }
        }
    }
    (location, None)
}

/// Resolve a relative path against the artifact base URI. Absolute URIs and
/// rooted paths pass through verbatim.
fn resolve_uri(path: &str, artifact_uri: &str) -> String {
    if artifact_uri.is_empty() || path.contains("://") || path.starts_with('/') {
        return path.to_string();
    }
    format!("{}/{}", artifact_uri.trim_end_matches('/'), path)
}
