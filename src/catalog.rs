//! Layer 2 Catalog → OSCAL Catalog conversion.

use crate::error::ConvertError;
use crate::ident::IdRegistry;
use crate::options::GenerateOptions;
use crate::oscal::{OscalCatalog, OscalControl, OscalGroup, OscalPart};
use crate::types::{Catalog, Control, Requirement};

/// Convert a Layer 2 catalog into an OSCAL Catalog.
///
/// Families become groups, controls become controls, and each assessment
/// requirement becomes an `assessment-objective` part whose prose is the
/// requirement text. Identifier derivation is a pure function of the source
/// identifiers, so re-running on unchanged input yields byte-identical
/// output. Options shape metadata only.
///
/// # Errors
///
/// [`ConvertError::InvalidInput`] when a family, control, or requirement
/// carries an empty identifier; [`ConvertError::Mapping`] when two source
/// identifiers derive the same target identifier.
pub fn catalog_to_oscal(
    catalog: &Catalog,
    options: &GenerateOptions,
) -> Result<OscalCatalog, ConvertError> {
    let mut ids = IdRegistry::new("catalog");

    let mut groups = Vec::with_capacity(catalog.control_families.len());
    for family in &catalog.control_families {
        let group_id = ids.claim(&family.id, "control family")?;

        let mut parts = Vec::new();
        if let Some(desc) = &family.description {
            parts.push(OscalPart {
                id: None,
                name: "overview".to_string(),
                prose: Some(desc.clone()),
            });
        }

        let mut controls = Vec::with_capacity(family.controls.len());
        for control in &family.controls {
            controls.push(convert_control(control, &mut ids)?);
        }

        groups.push(OscalGroup {
            id: group_id,
            title: family.title.clone(),
            parts,
            controls,
        });
    }

    Ok(OscalCatalog {
        uuid: None,
        metadata: options.resolve_metadata(&catalog.metadata),
        groups,
    })
}

fn convert_control(control: &Control, ids: &mut IdRegistry) -> Result<OscalControl, ConvertError> {
    let control_id = ids.claim(&control.id, "control")?;

    let mut parts = Vec::new();
    if let Some(objective) = &control.objective {
        parts.push(OscalPart {
            id: Some(ids.claim_derived(&control.id, "_smt", "control statement")?),
            name: "statement".to_string(),
            prose: Some(objective.clone()),
        });
    }
    for requirement in &control.requirements {
        parts.push(convert_requirement(requirement, ids)?);
    }

    Ok(OscalControl {
        id: control_id,
        title: control.title.clone(),
        parts,
    })
}

fn convert_requirement(
    requirement: &Requirement,
    ids: &mut IdRegistry,
) -> Result<OscalPart, ConvertError> {
    let part_id = ids.claim(&requirement.id, "requirement")?;
    Ok(OscalPart {
        id: Some(part_id),
        name: "assessment-objective".to_string(),
        prose: Some(requirement.text.clone()),
    })
}
