use proptest::prelude::*;

use gemara_conv::evaluation::to_sarif;
use gemara_conv::types::Catalog;

use super::strategies::{arb_catalog, arb_log};

fn result_rule_ids(bytes: &[u8]) -> Vec<String> {
    let doc: serde_json::Value = serde_json::from_slice(bytes).expect("valid SARIF JSON");
    doc["runs"][0]["results"]
        .as_array()
        .expect("results array")
        .iter()
        .map(|r| r["ruleId"].as_str().expect("ruleId").to_string())
        .collect()
}

proptest! {
    /// The result array mirrors the entry sequence exactly.
    #[test]
    fn results_preserve_entry_order(log in arb_log()) {
        let bytes = to_sarif(&log, "base", None).expect("converts");
        let expected: Vec<String> =
            log.entries.iter().map(|e| e.requirement_id.clone()).collect();
        prop_assert_eq!(result_rule_ids(&bytes), expected);
    }

    /// Enrichment never changes the result array: no catalog and a catalog
    /// with no matching requirement produce identical results.
    #[test]
    fn enrichment_is_additive_only(log in arb_log(), unrelated in arb_catalog()) {
        // Generated catalogs use F*C*R* identifiers, logs use R-*: no overlap.
        let without = to_sarif(&log, "base", None).expect("converts");
        let with_misses = to_sarif(&log, "base", Some(&unrelated)).expect("converts");

        let a: serde_json::Value = serde_json::from_slice(&without).expect("json");
        let b: serde_json::Value = serde_json::from_slice(&with_misses).expect("json");
        prop_assert_eq!(&a["runs"][0]["results"], &b["runs"][0]["results"]);
    }

    /// An empty catalog behaves exactly like no catalog at all.
    #[test]
    fn empty_catalog_equals_absent_catalog(log in arb_log()) {
        let empty = Catalog {
            metadata: gemara_conv::types::Metadata {
                id: "empty".to_string(),
                title: "Empty".to_string(),
                description: None,
                version: None,
                last_modified: None,
            },
            control_families: vec![],
        };

        let without = to_sarif(&log, "base", None).expect("converts");
        let with_empty = to_sarif(&log, "base", Some(&empty)).expect("converts");
        prop_assert_eq!(without, with_empty);
    }
}
