//! Closed enumerations used throughout the Gemara source model.
//!
//! Only the defined variants are valid; unknown values fail deserialization.

use serde::{Deserialize, Serialize};

/// Outcome of assessing a single requirement.
///
/// The full set, not just pass/fail: `Error` records that the assessment
/// itself could not run to completion, which the SARIF conversion keeps
/// distinguishable from an ordinary failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentResult {
    Passed,
    Failed,
    NeedsReview,
    NotApplicable,
    Error,
}
