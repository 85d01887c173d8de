use std::collections::HashSet;

use gemara_conv::error::ConvertError;
use gemara_conv::guidance::guidance_to_oscal;
use gemara_conv::options::GenerateOptions;

use super::common::sample_guidance;

const HREF: &str = "https://example.com/catalogs/osps.json";

/// Every selector target in the profile exists as a control id in the
/// co-generated catalog.
#[test]
fn profile_selectors_resolve_in_catalog() {
    let (catalog, profile) =
        guidance_to_oscal(&sample_guidance(), HREF, &GenerateOptions::default())
            .expect("conversion should succeed");

    let catalog_ids: HashSet<&str> = catalog
        .groups
        .iter()
        .flat_map(|g| &g.controls)
        .map(|c| c.id.as_str())
        .collect();

    let selected: Vec<&str> = profile
        .imports
        .iter()
        .flat_map(|i| &i.include_controls)
        .flat_map(|s| &s.with_ids)
        .map(String::as_str)
        .collect();

    assert!(!selected.is_empty());
    for id in &selected {
        assert!(
            catalog_ids.contains(id),
            "selector {id:?} has no catalog counterpart"
        );
    }
    assert_eq!(selected.len(), catalog_ids.len(), "every control is selected");
}

/// The import href is the caller-supplied string, byte for byte.
#[test]
fn href_passes_through_verbatim() {
    let href = "relative/../path with spaces?query=1#frag";
    let (_, profile) = guidance_to_oscal(&sample_guidance(), href, &GenerateOptions::default())
        .expect("any non-empty href is accepted");

    assert_eq!(profile.imports.len(), 1);
    assert_eq!(profile.imports[0].href, href);
}

/// An empty href is rejected before any document is built.
#[test]
fn empty_href_is_invalid_input() {
    let err = guidance_to_oscal(&sample_guidance(), "", &GenerateOptions::default())
        .expect_err("empty href must not convert");
    assert!(matches!(err, ConvertError::InvalidInput(_)));
}

/// Categories map to groups, guidelines to controls with statement and
/// guidance parts.
#[test]
fn category_guideline_shape() {
    let (catalog, _) = guidance_to_oscal(&sample_guidance(), HREF, &GenerateOptions::default())
        .expect("conversion should succeed");

    assert_eq!(catalog.groups.len(), 1);
    let group = &catalog.groups[0];
    assert_eq!(group.id, "GV");
    assert_eq!(group.controls.len(), 2);

    let first = &group.controls[0];
    assert_eq!(first.id, "GV-01");
    assert_eq!(
        first
            .parts
            .iter()
            .find(|p| p.name == "statement")
            .and_then(|p| p.id.as_deref()),
        Some("GV-01_smt")
    );
    assert_eq!(
        first
            .parts
            .iter()
            .find(|p| p.name == "guidance")
            .and_then(|p| p.prose.as_deref()),
        Some("Contributors need to know who decides.")
    );

    // A guideline without objective or rationale is a bare control.
    assert!(group.controls[1].parts.is_empty());
}

/// The profile carries a merge as-is directive.
#[test]
fn profile_merges_as_is() {
    let (_, profile) = guidance_to_oscal(&sample_guidance(), HREF, &GenerateOptions::default())
        .expect("conversion should succeed");
    assert_eq!(profile.merge.and_then(|m| m.as_is), Some(true));
}

/// Selector ids stay byte-identical to catalog ids even when the source
/// identifier needed sanitizing.
#[test]
fn sanitized_ids_stay_linked() {
    let mut guidance = sample_guidance();
    guidance.categories[0].guidelines[0].id = "guideline one".to_string();

    let (catalog, profile) = guidance_to_oscal(&guidance, HREF, &GenerateOptions::default())
        .expect("conversion should succeed");

    let selected = &profile.imports[0].include_controls[0].with_ids;
    assert!(selected.contains(&"guideline-one".to_string()));
    assert_eq!(catalog.groups[0].controls[0].id, "guideline-one");
}

/// Duplicate guideline identifiers cannot map one-to-one.
#[test]
fn duplicate_guideline_id_is_a_mapping_error() {
    let mut guidance = sample_guidance();
    guidance.categories[0].guidelines[1].id = "GV-01".to_string();

    let err = guidance_to_oscal(&guidance, HREF, &GenerateOptions::default())
        .expect_err("duplicate ids must not convert");
    match err {
        ConvertError::Mapping(e) => assert_eq!(e.identifier, "GV-01"),
        other => panic!("expected Mapping error, got {other:?}"),
    }
}

/// Catalog and profile share the same resolved front-matter.
#[test]
fn catalog_and_profile_share_metadata() {
    let options = GenerateOptions::new().with_title("Pinned Title");
    let (catalog, profile) =
        guidance_to_oscal(&sample_guidance(), HREF, &options).expect("conversion should succeed");

    assert_eq!(catalog.metadata, profile.metadata);
    assert_eq!(catalog.metadata.title, "Pinned Title");
}
