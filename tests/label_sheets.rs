//! # Label Sheet Tests
//!
//! Bulk barcode runs compiled all the way to printable HTML.

use billcanvas::BillcanvasError;
use billcanvas::ir::Op;
use billcanvas::print::{self, LabelRun};
use billcanvas::printer::LabelSheetConfig;
use pretty_assertions::assert_eq;
use std::collections::HashSet;

/// `base-NNN` with at least three digits.
fn is_derived_code(code: &str, base: &str) -> bool {
    code.strip_prefix(base)
        .and_then(|rest| rest.strip_prefix('-'))
        .is_some_and(|digits| digits.len() >= 3 && digits.chars().all(|c| c.is_ascii_digit()))
}

#[test]
fn test_fifty_labels_for_one_product() {
    let program = print::compile_labels("SKU1", 50).unwrap();

    let codes = program.label_codes();
    assert_eq!(codes.len(), 50);
    assert!(codes.iter().all(|c| is_derived_code(c, "SKU1")));

    let unique: HashSet<_> = codes.iter().collect();
    assert_eq!(unique.len(), 50);

    assert_eq!(program.page_count(), 4);
    let per_page: Vec<usize> = program.pages().iter().map(|p| p.len()).collect();
    assert_eq!(per_page, vec![15, 15, 15, 5]);
}

#[test]
fn test_page_breaks_in_html() {
    let html = print::compile_labels("SKU1", 31).unwrap().to_html();

    assert_eq!(html.matches("class=\"page page-break\"").count(), 2);
    assert_eq!(html.matches("class=\"label\"").count(), 31);
    assert!(html.contains("SKU1-031"));
    assert!(html.contains("#031"));
    assert!(html.contains("<svg"));
}

#[test]
fn test_break_precedes_sixteenth_label() {
    let program = print::compile_labels("P", 16).unwrap();
    let position = program
        .iter()
        .position(|op| matches!(op, Op::PageBreak))
        .unwrap();
    assert_eq!(position, 15);
    assert!(matches!(
        &program.ops[16],
        Op::Label { code, .. } if code == "P-016"
    ));
}

#[test]
fn test_blank_base_code_is_an_error() {
    for base in ["", "  ", "\t"] {
        let err = print::compile_labels(base, 5).unwrap_err();
        assert!(matches!(err, BillcanvasError::MissingBaseCode));
    }
}

#[test]
fn test_nonpositive_quantity_prints_one_label() {
    let program = print::compile_labels("SKU9", 0).unwrap();
    assert_eq!(program.label_codes(), vec!["SKU9-001"]);
    assert_eq!(program.page_count(), 1);
}

#[test]
fn test_precomputed_product_barcodes() {
    let run = LabelRun::new("SKU1", 3).with_codes(vec!["8901030865278".into()]);
    let program = run.compile().unwrap();
    assert_eq!(
        program.label_codes(),
        vec!["8901030865278", "SKU1-002", "SKU1-003"]
    );
}

#[test]
fn test_custom_sheet_pagination() {
    let sheet = LabelSheetConfig {
        labels_per_page: 10,
        ..LabelSheetConfig::LABEL_80X30
    };
    let program = LabelRun::new("A", 25).with_sheet(sheet).compile().unwrap();
    assert_eq!(program.page_count(), 3);
}

#[test]
fn test_huge_quantity_is_an_error() {
    let err = print::compile_labels("SKU1", i64::MAX).unwrap_err();
    assert!(matches!(err, BillcanvasError::InvalidInput(_)));

    let small = LabelSheetConfig {
        max_labels: 20,
        ..LabelSheetConfig::LABEL_80X30
    };
    assert!(LabelRun::new("SKU1", 21).with_sheet(small).compile().is_err());
    assert_eq!(
        LabelRun::new("SKU1", 20).with_sheet(small).compile().unwrap().page_count(),
        2
    );
}
