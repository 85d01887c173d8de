//! Deterministic derivation of OSCAL token identifiers from source
//! identifiers, and the per-document registry that keeps the derivation
//! one-to-one.

use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::error::{ConvertError, InvalidInputError, MappingError};

// OSCAL's token datatype: a letter or underscore, then letters, digits,
// dots, dashes, underscores.
static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9._\-]*$").unwrap());

/// Derive an OSCAL token from a source identifier.
///
/// An identifier already in token shape passes through verbatim, so the
/// target document keeps the source's naming. Otherwise each invalid
/// character maps to `-` and a leading non-letter gains a `_` prefix. Pure
/// function of its input: equal inputs always produce equal tokens, and
/// distinct source identifiers that sanitize to the same token are caught by
/// the converters' collision checks.
pub(crate) fn token(raw: &str) -> String {
    if TOKEN_RE.is_match(raw) {
        return raw.to_string();
    }

    let mut out = String::with_capacity(raw.len() + 1);
    for c in raw.chars() {
        if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
            out.push(c);
        } else {
            out.push('-');
        }
    }
    if !out.chars().next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_') {
        out.insert(0, '_');
    }
    out
}

// ─── Identifier registry ─────────────────────────────────────────────────────

/// Tracks every identifier handed out for one output document so that each
/// source identifier maps to exactly one target identifier. A collision is a
/// malformed source document, reported with the offending identifier.
pub(crate) struct IdRegistry {
    stage: &'static str,
    seen: HashSet<String>,
}

impl IdRegistry {
    pub(crate) fn new(stage: &'static str) -> Self {
        Self {
            stage,
            seen: HashSet::new(),
        }
    }

    /// Derive a token for `raw` and register it.
    pub(crate) fn claim(&mut self, raw: &str, what: &str) -> Result<String, ConvertError> {
        if raw.is_empty() {
            return Err(InvalidInputError {
                message: format!("{what} identifier must not be empty"),
            }
            .into());
        }
        let id = token(raw);
        self.register(raw, id, what)
    }

    /// Derive a suffixed token (e.g. a control's `_smt` statement part).
    pub(crate) fn claim_derived(
        &mut self,
        raw: &str,
        suffix: &str,
        what: &str,
    ) -> Result<String, ConvertError> {
        let id = format!("{}{}", token(raw), suffix);
        self.register(raw, id, what)
    }

    fn register(&mut self, raw: &str, id: String, what: &str) -> Result<String, ConvertError> {
        if !self.seen.insert(id.clone()) {
            return Err(MappingError {
                identifier: raw.to_string(),
                stage: self.stage.to_string(),
                message: format!("{what} maps to duplicate identifier {id:?}"),
            }
            .into());
        }
        Ok(id)
    }
}
