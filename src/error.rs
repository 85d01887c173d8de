use serde::{Deserialize, Serialize};
use std::fmt;

/// A required input was absent or an empty string where content is required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvalidInputError {
    pub message: String,
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for InvalidInputError {}

/// A source identifier cannot be mapped to exactly one stable target
/// identifier — the source document is malformed, not the converter.
///
/// Carries the offending identifier and the conversion stage so the caller
/// can locate the input that produced it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingError {
    pub identifier: String,
    pub stage: String,
    pub message: String,
}

impl fmt::Display for MappingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:?} in {})", self.message, self.identifier, self.stage)
    }
}

impl std::error::Error for MappingError {}

/// The target format's serializer rejected a constructed document.
///
/// Should not occur for well-formed mappings; always surfaced, never
/// swallowed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodingError {
    pub message: String,
}

impl fmt::Display for EncodingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for EncodingError {}

/// Combined error type returned by every conversion entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConvertError {
    InvalidInput(InvalidInputError),
    Mapping(MappingError),
    Encoding(EncodingError),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::InvalidInput(e) => write!(f, "invalid input: {}", e),
            ConvertError::Mapping(e) => write!(f, "mapping error: {}", e),
            ConvertError::Encoding(e) => write!(f, "encoding error: {}", e),
        }
    }
}

impl std::error::Error for ConvertError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConvertError::InvalidInput(e) => Some(e),
            ConvertError::Mapping(e) => Some(e),
            ConvertError::Encoding(e) => Some(e),
        }
    }
}

impl From<InvalidInputError> for ConvertError {
    fn from(e: InvalidInputError) -> Self {
        ConvertError::InvalidInput(e)
    }
}

impl From<MappingError> for ConvertError {
    fn from(e: MappingError) -> Self {
        ConvertError::Mapping(e)
    }
}

impl From<EncodingError> for ConvertError {
    fn from(e: EncodingError) -> Self {
        ConvertError::Encoding(e)
    }
}
