use feedback_dashboard_rust::models::{FeedbackItem, OutputFormat};
use feedback_dashboard_rust::report::{render_report, write_feedback_to_file};
use feedback_dashboard_rust::store::demo_feedback;
use std::fs;

#[test]
fn test_txt_export() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feedback.txt");
    let items = demo_feedback();

    write_feedback_to_file(&items, OutputFormat::Txt, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    assert!(contents.contains("Sarah M."));
    assert!(contents.contains("[POSITIVE]"));
    assert!(contents.contains("[NEGATIVE]"));
}

#[test]
fn test_csv_export_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feedback.csv");
    let items = demo_feedback();

    write_feedback_to_file(&items, OutputFormat::Csv, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(&headers[0], "ID");
    assert_eq!(&headers[6], "Text");

    let rows: Vec<_> = reader.records().collect::<Result<_, _>>().unwrap();
    assert_eq!(rows.len(), items.len());
    assert_eq!(&rows[0][1], "Sarah M.");
    assert_eq!(&rows[0][3], "positive");
}

#[test]
fn test_json_export_deserializes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("feedback.json");
    let items = demo_feedback();

    write_feedback_to_file(&items, OutputFormat::Json, &path).unwrap();

    let contents = fs::read_to_string(&path).unwrap();
    let parsed: Vec<FeedbackItem> = serde_json::from_str(&contents).unwrap();
    assert_eq!(parsed.len(), items.len());
    assert_eq!(parsed[0].customer, "Sarah M.");
    assert_eq!(parsed[0].sentiment, items[0].sentiment);
}

#[test]
fn test_empty_collection_exports_are_valid() {
    let dir = tempfile::tempdir().unwrap();

    let txt = dir.path().join("empty.txt");
    write_feedback_to_file(&[], OutputFormat::Txt, &txt).unwrap();
    assert_eq!(fs::read_to_string(&txt).unwrap(), "");

    let json = dir.path().join("empty.json");
    write_feedback_to_file(&[], OutputFormat::Json, &json).unwrap();
    let parsed: Vec<FeedbackItem> =
        serde_json::from_str(&fs::read_to_string(&json).unwrap()).unwrap();
    assert!(parsed.is_empty());
}

#[test]
fn test_report_reflects_collection() {
    let items = demo_feedback();
    let report = render_report(&items).unwrap();

    assert!(report.contains("Total Feedback Items: 8"));
    assert!(report.contains("Average Rating:"));
    // Demo data has negative delivery feedback, so remediation advice appears
    assert!(report.contains("RECOMMENDED ACTIONS"));
    assert!(report.contains("mentions"));
}
