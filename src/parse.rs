//! Source document loading from YAML or JSON text.
//!
//! Deserialization and type mapping only: structural mismatches fail here,
//! while semantic conformance of the document stays the caller's concern.
//! YAML is a superset of JSON, so both syntaxes load through the same path.

use serde::de::DeserializeOwned;

use crate::error::{ConvertError, InvalidInputError};
use crate::types::{Catalog, EvaluationLog, GuidanceDocument};

/// Parse a Layer 2 catalog from YAML or JSON text.
pub fn parse_catalog(input: &str) -> Result<Catalog, ConvertError> {
    parse_document(input, "catalog")
}

/// Parse a Layer 1 guidance document from YAML or JSON text.
pub fn parse_guidance(input: &str) -> Result<GuidanceDocument, ConvertError> {
    parse_document(input, "guidance document")
}

/// Parse an evaluation log from YAML or JSON text.
pub fn parse_evaluation_log(input: &str) -> Result<EvaluationLog, ConvertError> {
    parse_document(input, "evaluation log")
}

fn parse_document<T: DeserializeOwned>(input: &str, what: &str) -> Result<T, ConvertError> {
    if input.trim().is_empty() {
        return Err(InvalidInputError {
            message: format!("empty input, expected a {what}"),
        }
        .into());
    }

    // Deserialize via serde_json::Value as intermediate: YAML in, typed
    // document out, with one error path for both syntaxes.
    let value: serde_json::Value = serde_saphyr::from_str(input).map_err(|e| {
        ConvertError::InvalidInput(InvalidInputError {
            message: format!("malformed {what}: {e}"),
        })
    })?;

    if !value.is_object() {
        return Err(InvalidInputError {
            message: format!("{what} root must be a mapping"),
        }
        .into());
    }

    serde_json::from_value(value).map_err(|e| {
        ConvertError::InvalidInput(InvalidInputError {
            message: format!("malformed {what}: {e}"),
        })
    })
}
