use gemara_conv::catalog::catalog_to_oscal;
use gemara_conv::error::ConvertError;
use gemara_conv::options::GenerateOptions;
use gemara_conv::oscal::OscalCatalogDocument;
use gemara_conv::parse::{parse_catalog, parse_evaluation_log, parse_guidance};
use gemara_conv::serialize::{to_json, to_yaml};

const CATALOG_YAML: &str = r#"
metadata:
  id: ac-catalog
  title: Access Control Catalog
  version: "1.0.0"
control-families:
  - id: AC
    title: Access Control
    controls:
      - id: AC-1
        title: Access Control Policy
        requirements:
          - id: AC-1.1
            text: Policy documented
"#;

/// A YAML catalog loads and converts end to end.
#[test]
fn yaml_catalog_loads_and_converts() {
    let catalog = parse_catalog(CATALOG_YAML).expect("parse should succeed");
    assert_eq!(catalog.control_families[0].controls[0].requirements[0].id, "AC-1.1");

    let oscal =
        catalog_to_oscal(&catalog, &GenerateOptions::default()).expect("conversion should succeed");
    assert_eq!(oscal.groups[0].controls[0].id, "AC-1");
}

/// JSON is valid YAML: the same loader accepts a JSON catalog.
#[test]
fn json_catalog_loads_through_the_same_path() {
    let json = r#"{
        "metadata": {"id": "ac-catalog", "title": "Access Control Catalog"},
        "control-families": [
            {"id": "AC", "title": "Access Control", "controls": []}
        ]
    }"#;

    let catalog = parse_catalog(json).expect("parse should succeed");
    assert_eq!(catalog.control_families[0].id, "AC");
}

/// Empty input is rejected up front.
#[test]
fn empty_input_is_invalid() {
    let err = parse_catalog("  \n  ").expect_err("empty input must not parse");
    assert!(matches!(err, ConvertError::InvalidInput(_)));
}

/// A non-mapping root is rejected with a pointed message.
#[test]
fn non_mapping_root_is_invalid() {
    let err = parse_evaluation_log("- just\n- a\n- list\n").expect_err("list root must not parse");
    match err {
        ConvertError::InvalidInput(e) => assert!(e.message.contains("root must be a mapping")),
        other => panic!("expected InvalidInput, got {other:?}"),
    }
}

/// Structural mismatches surface the deserializer's message.
#[test]
fn missing_required_field_is_invalid() {
    let err = parse_guidance("metadata:\n  id: only-an-id\n").expect_err("title is required");
    assert!(matches!(err, ConvertError::InvalidInput(_)));
}

/// An unknown outcome value fails to load rather than mapping silently.
#[test]
fn unknown_outcome_is_invalid() {
    let input = r#"
entries:
  - requirement-id: R-1
    result: exploded
    message: what is this
"#;
    let err = parse_evaluation_log(input).expect_err("unknown variant must not parse");
    assert!(matches!(err, ConvertError::InvalidInput(_)));
}

/// The serialize helpers encode an enveloped document both ways.
#[test]
fn envelope_serializes_to_json_and_yaml() {
    let catalog = parse_catalog(CATALOG_YAML).expect("parse should succeed");
    let oscal =
        catalog_to_oscal(&catalog, &GenerateOptions::default()).expect("conversion should succeed");
    let doc = OscalCatalogDocument { catalog: oscal };

    let json = to_json(&doc).expect("json should serialize");
    let value: serde_json::Value = serde_json::from_str(&json).expect("round-trips");
    assert_eq!(value["catalog"]["metadata"]["oscal-version"], "1.1.3");
    assert_eq!(value["catalog"]["groups"][0]["id"], "AC");

    let yaml = to_yaml(&doc).expect("yaml should serialize");
    assert!(yaml.contains("catalog:"));
    assert!(yaml.contains("oscal-version:"));
}
