//! Target document → JSON/YAML text.
//!
//! The OSCAL conversions return typed documents and leave encoding to the
//! caller; these helpers are that delegation target. Wrap a catalog or
//! profile in its [document envelope](crate::oscal::OscalCatalogDocument)
//! before serializing for schema-conformant output.

use serde::Serialize;

use crate::error::EncodingError;

/// Serialize a target document to pretty-printed JSON.
pub fn to_json<T: Serialize>(doc: &T) -> Result<String, EncodingError> {
    serde_json::to_string_pretty(doc).map_err(|e| EncodingError {
        message: format!("failed to serialize to JSON: {e}"),
    })
}

/// Serialize a target document to YAML.
pub fn to_yaml<T: Serialize>(doc: &T) -> Result<String, EncodingError> {
    // Convert to serde_json::Value first for consistent field ordering
    let value = serde_json::to_value(doc).map_err(|e| EncodingError {
        message: format!("failed to convert document to JSON value: {e}"),
    })?;

    serde_saphyr::to_string(&value).map_err(|e| EncodingError {
        message: format!("failed to serialize to YAML: {e}"),
    })
}
