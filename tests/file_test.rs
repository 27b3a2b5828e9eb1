//! Integration tests for file-based loading and conversion.

use std::fs;
use std::io::Write;

use tempfile::{tempdir, NamedTempFile};
use unlayout::{
    build_file, build_file_with_options, detect_format_from_path, load_file, to_json, to_markdown,
    BuildOptions, Error, JsonFormat, OperationStatus, PayloadKind, Unlayout,
};

const ENVELOPE: &str = r#"{
    "status": "succeeded",
    "createdDateTime": "2024-08-01T10:00:00Z",
    "lastUpdatedDateTime": "2024-08-01T10:00:07Z",
    "analyzeResult": {
        "apiVersion": "2024-11-30",
        "modelId": "prebuilt-layout",
        "content": "Quarterly Report ...",
        "pages": [{"pageNumber": 1}],
        "paragraphs": [
            {"role": "pageHeader", "content": "ACME Corp"},
            {"role": "title", "content": "Quarterly Report"},
            {"role": "sectionHeading", "content": "Revenue"},
            {"content": "Revenue grew in every region."},
            {"role": "footnote", "content": "1 Unaudited figures."},
            {"role": "pageNumber", "content": "1"}
        ],
        "sections": [
            {"elements": ["/paragraphs/0", "/paragraphs/1", "/sections/1"]},
            {"elements": ["/paragraphs/2", "/paragraphs/3", "/tables/0", "/paragraphs/4", "/paragraphs/5"]}
        ],
        "tables": [{
            "rowCount": 2,
            "columnCount": 2,
            "cells": [
                {"rowIndex": 0, "columnIndex": 0, "kind": "columnHeader", "content": "Region"},
                {"rowIndex": 0, "columnIndex": 1, "kind": "columnHeader", "content": "Total"},
                {"rowIndex": 1, "columnIndex": 0, "content": "EMEA"},
                {"rowIndex": 1, "columnIndex": 1, "content": "12"}
            ]
        }]
    }
}"#;

fn write_temp(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_detect_from_path() {
    let file = write_temp(ENVELOPE);
    assert_eq!(
        detect_format_from_path(file.path()).unwrap(),
        PayloadKind::Operation
    );
}

#[test]
fn test_load_file_unwraps_envelope() {
    let file = write_temp(ENVELOPE);
    let result = load_file(file.path()).unwrap();
    assert_eq!(result.model_id.as_deref(), Some("prebuilt-layout"));
    assert_eq!(result.page_count(), 1);
    assert_eq!(result.paragraphs.len(), 6);
}

#[test]
fn test_build_file() {
    let file = write_temp(ENVELOPE);
    let page = build_file(file.path()).unwrap().unwrap();

    let paths: Vec<&str> = page.sections.iter().map(|s| s.path.as_str()).collect();
    assert_eq!(paths, vec!["/sections/0", "pageHeader", "footnote"]);

    let revenue = page.find("/sections/1").unwrap();
    assert_eq!(revenue.heading.as_deref(), Some("Revenue"));
    assert_eq!(revenue.paragraphs, vec!["Revenue grew in every region."]);
    assert_eq!(revenue.tables[0].rows[0].get("Total"), Some("12"));
}

#[test]
fn test_build_file_with_options() {
    let file = write_temp(ENVELOPE);
    let options = BuildOptions::new().strict_headers().sequential();
    let page = build_file_with_options(file.path(), &options).unwrap();
    assert!(page.is_some());
}

#[test]
fn test_to_markdown_from_file() {
    let file = write_temp(ENVELOPE);
    let markdown = to_markdown(file.path()).unwrap();

    assert!(markdown.contains("## Revenue"));
    assert!(markdown.contains("| Region | Total |"));
    assert!(markdown.contains("| EMEA | 12 |"));
    assert!(markdown.contains("---\n\n1 Unaudited figures."));
    assert!(!markdown.contains("ACME Corp"));
}

#[test]
fn test_to_json_from_file() {
    let file = write_temp(ENVELOPE);
    let json = to_json(file.path(), JsonFormat::Compact).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["sections"][0]["subSections"][0]["heading"], "Revenue");
}

#[test]
fn test_builder_keeps_envelope_details() {
    let file = write_temp(ENVELOPE);
    let result = Unlayout::new()
        .with_page_furniture()
        .parse(file.path())
        .unwrap();

    assert_eq!(result.kind, PayloadKind::Operation);
    assert_eq!(result.status, Some(OperationStatus::Succeeded));
    let elapsed = result.last_updated.unwrap() - result.created.unwrap();
    assert_eq!(elapsed.num_seconds(), 7);

    let markdown = result.to_markdown().unwrap();
    assert!(markdown.starts_with("<!-- pageHeader: ACME Corp -->"));
}

#[test]
fn test_running_operation_is_rejected() {
    let file = write_temp(r#"{"status": "running"}"#);
    let err = build_file(file.path()).unwrap_err();
    assert!(matches!(
        err,
        Error::OperationNotSucceeded(OperationStatus::Running)
    ));
}

#[test]
fn test_succeeded_without_result() {
    let file = write_temp(r#"{"status": "succeeded"}"#);
    assert!(matches!(
        load_file(file.path()),
        Err(Error::MissingAnalyzeResult)
    ));
}

#[test]
fn test_missing_file() {
    let dir = tempdir().unwrap();
    let err = build_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn test_convert_outputs_to_directory() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("report.json");
    fs::write(&input, ENVELOPE).unwrap();

    let result = Unlayout::new().parse(&input).unwrap();
    fs::write(dir.path().join("layout.md"), result.to_markdown().unwrap()).unwrap();
    fs::write(dir.path().join("layout.txt"), result.to_text().unwrap()).unwrap();

    let text = fs::read_to_string(dir.path().join("layout.txt")).unwrap();
    assert!(text.starts_with("Quarterly Report"));
    assert!(text.contains("Region\tTotal\nEMEA\t12"));
    assert!(text.ends_with("1 Unaudited figures."));
}
