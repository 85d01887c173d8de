//! Layer 1 Guidance Document → OSCAL Catalog + Profile conversion.

use crate::error::{ConvertError, InvalidInputError};
use crate::ident::IdRegistry;
use crate::options::GenerateOptions;
use crate::oscal::{
    OscalCatalog, OscalControl, OscalGroup, OscalImport, OscalMerge, OscalPart, OscalProfile,
    OscalSelectControls,
};
use crate::types::{GuidanceDocument, Guideline};

/// Convert a guidance document into an OSCAL Catalog plus a Profile that
/// imports it.
///
/// Categories become groups and guidelines become controls, the same shape
/// as [`catalog_to_oscal`](crate::catalog::catalog_to_oscal) with guidance
/// entities as the source. The Profile holds a single import whose href is
/// the supplied string verbatim, selecting the control identifiers by id.
///
/// Catalog and Profile are generated in one pass: the control ids placed in
/// the Profile's selectors are the same strings assigned while building the
/// Catalog, never recomputed, so selector targets always resolve in the
/// companion document.
///
/// # Errors
///
/// [`ConvertError::InvalidInput`] when `href` is empty (any non-empty string
/// is accepted verbatim) or a category/guideline identifier is empty;
/// [`ConvertError::Mapping`] on identifier collisions.
pub fn guidance_to_oscal(
    guidance: &GuidanceDocument,
    href: &str,
    options: &GenerateOptions,
) -> Result<(OscalCatalog, OscalProfile), ConvertError> {
    if href.is_empty() {
        return Err(InvalidInputError {
            message: "guidance document href must not be empty".to_string(),
        }
        .into());
    }

    let mut ids = IdRegistry::new("guidance");
    let mut selected = Vec::new();

    let mut groups = Vec::with_capacity(guidance.categories.len());
    for category in &guidance.categories {
        let group_id = ids.claim(&category.id, "guidance category")?;

        let mut parts = Vec::new();
        if let Some(desc) = &category.description {
            parts.push(OscalPart {
                id: None,
                name: "overview".to_string(),
                prose: Some(desc.clone()),
            });
        }

        let mut controls = Vec::with_capacity(category.guidelines.len());
        for guideline in &category.guidelines {
            let control = convert_guideline(guideline, &mut ids)?;
            selected.push(control.id.clone());
            controls.push(control);
        }

        groups.push(OscalGroup {
            id: group_id,
            title: category.title.clone(),
            parts,
            controls,
        });
    }

    let metadata = options.resolve_metadata(&guidance.metadata);

    let catalog = OscalCatalog {
        uuid: None,
        metadata: metadata.clone(),
        groups,
    };

    let profile = OscalProfile {
        uuid: None,
        metadata,
        imports: vec![OscalImport {
            href: href.to_string(),
            include_controls: vec![OscalSelectControls { with_ids: selected }],
        }],
        merge: Some(OscalMerge { as_is: Some(true) }),
    };

    Ok((catalog, profile))
}

fn convert_guideline(
    guideline: &Guideline,
    ids: &mut IdRegistry,
) -> Result<OscalControl, ConvertError> {
    let control_id = ids.claim(&guideline.id, "guideline")?;

    let mut parts = Vec::new();
    if let Some(objective) = &guideline.objective {
        parts.push(OscalPart {
            id: Some(ids.claim_derived(&guideline.id, "_smt", "guideline statement")?),
            name: "statement".to_string(),
            prose: Some(objective.clone()),
        });
    }
    if let Some(rationale) = &guideline.rationale {
        parts.push(OscalPart {
            id: Some(ids.claim_derived(&guideline.id, "_gdn", "guideline rationale")?),
            name: "guidance".to_string(),
            prose: Some(rationale.clone()),
        });
    }

    Ok(OscalControl {
        id: control_id,
        title: guideline.title.clone(),
        parts,
    })
}
