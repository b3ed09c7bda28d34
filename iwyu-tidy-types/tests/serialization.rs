//! Wire-shape tests for the summary document.

use iwyu_tidy_types::{
    DirectiveMap, FileChanges, FileReport, TidySummary, VerdictStatus, schema,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn sample_report() -> FileReport {
    let mut report = FileReport::new("gi/arg.cpp");
    report.to_add.insert("#include <vector>", "for vector");
    report.to_add.insert("#include <js/TypeDecls.h>", "");
    report.to_remove.insert("#include <map>", "lines 12-12");
    report
}

#[test]
fn empty_summary_passes() {
    let summary = TidySummary::new(vec![]);
    assert_eq!(summary.schema, schema::IWYU_TIDY_SUMMARY_V1);
    assert_eq!(summary.verdict.status, VerdictStatus::Pass);
    assert_eq!(summary.verdict.files_changed, 0);
}

#[test]
fn summary_with_changes_fails() {
    let summary = TidySummary::new(vec![FileChanges::from(&sample_report())]);
    assert_eq!(summary.verdict.status, VerdictStatus::Fail);
    assert_eq!(summary.verdict.files_changed, 1);
}

#[test]
fn file_changes_serialize_in_encounter_order() {
    let summary = TidySummary::new(vec![FileChanges::from(&sample_report())]);
    let value = serde_json::to_value(&summary).expect("serialize");

    assert_eq!(
        value,
        json!({
            "schema": "iwyu_tidy.summary.v1",
            "files": [{
                "file": "gi/arg.cpp",
                "add": [
                    { "directive": "#include <vector>", "why": "for vector" },
                    { "directive": "#include <js/TypeDecls.h>" }
                ],
                "remove": [
                    { "directive": "#include <map>", "why": "lines 12-12" }
                ]
            }],
            "verdict": { "status": "fail", "files_changed": 1 }
        })
    );
}

#[test]
fn empty_sections_are_omitted() {
    let mut report = FileReport::new("a.h");
    report.to_remove = [("#include <set>", "")].into_iter().collect::<DirectiveMap>();
    let value = serde_json::to_value(FileChanges::from(&report)).expect("serialize");
    assert_eq!(
        value,
        json!({ "file": "a.h", "remove": [{ "directive": "#include <set>" }] })
    );
}

#[test]
fn summary_deserializes_back() {
    let summary = TidySummary::new(vec![FileChanges::from(&sample_report())]);
    let s = serde_json::to_string(&summary).expect("serialize");
    let back: TidySummary = serde_json::from_str(&s).expect("deserialize");
    assert_eq!(back, summary);
}
