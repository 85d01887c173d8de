//! Conversion of [Gemara](https://github.com/gemaraproj) compliance
//! documents into standard interchange formats.
//!
//! Gemara expresses compliance data in layers: Layer 1 guidance documents,
//! Layer 2 control catalogs, and evaluation logs recording per-requirement
//! assessment outcomes. This crate converts each into a format consumable by
//! external tooling:
//!
//! ```text
//! catalog_to_oscal(catalog)        → OSCAL Catalog
//! guidance_to_oscal(guidance, href) → OSCAL Catalog + Profile
//! to_sarif(log, uri, catalog?)      → SARIF v2.1.0 bytes
//! ```
//!
//! Every conversion is a stateless pure function: identical input yields
//! byte-identical output, and distinct documents can be converted
//! concurrently without coordination.
//!
//! # Quick Start
//!
//! ```rust
//! use gemara_conv::{GenerateOptions, catalog_to_oscal, parse_catalog};
//!
//! let yaml = r#"
//! metadata:
//!   id: ac-catalog
//!   title: Access Control Catalog
//! control-families:
//!   - id: AC
//!     title: Access Control
//!     controls:
//!       - id: AC-1
//!         title: Access Control Policy
//!         requirements:
//!           - id: AC-1.1
//!             text: Policy documented
//! "#;
//!
//! let catalog = parse_catalog(yaml).expect("valid catalog");
//! let oscal = catalog_to_oscal(&catalog, &GenerateOptions::default()).expect("converts");
//! assert_eq!(oscal.groups[0].id, "AC");
//! ```
//!
//! # OSCAL and SARIF
//!
//! OSCAL (Open Security Controls Assessment Language) is a set of
//! standardized machine-readable formats for security controls and
//! assessments; the generated documents target the 1.1.x Catalog and
//! Profile schemas. SARIF (Static Analysis Results Interchange Format)
//! v2.1.0 is the scan-report format consumed by GitHub Code Scanning,
//! Azure DevOps, and similar platforms; evaluation logs become one SARIF
//! run with a rule per distinct requirement and a result per entry,
//! optionally enriched with requirement text from a supplied catalog.

pub mod catalog;
pub mod enums;
pub mod error;
pub mod evaluation;
pub mod guidance;
pub mod options;
pub mod oscal;
pub mod parse;
pub mod sarif;
pub mod serialize;
pub mod types;

pub(crate) mod ident;

pub use enums::*;
pub use error::*;
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use catalog::catalog_to_oscal;
pub use evaluation::to_sarif;
pub use guidance::guidance_to_oscal;
pub use options::GenerateOptions;
pub use parse::{parse_catalog, parse_evaluation_log, parse_guidance};
pub use serialize::{to_json, to_yaml};
