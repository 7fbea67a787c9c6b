//! Roster file tests.
//!
//! Tests cover: bare and wrapped JSON shapes, sparse fields, empty and
//! unreadable files, members JSON output.

use perfboard_core::{
    generate_performance_metrics,
    roster::{load_roster, members_to_json, parse_roster},
    MetricsError, MetricStatus,
};
use std::path::PathBuf;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn temp_roster(name: &str, content: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("perfboard-{}-{name}.json", std::process::id()));
    std::fs::write(&path, content).expect("write temp roster");
    path
}

const SAMPLE: &str = r#"[
    { "id": 1, "firstName": "Ann", "lastName": "Lee", "department": "HR",
      "role": "Recruiter", "recruitments": 6, "employeeSatisfaction": 3.8 },
    { "id": 2, "firstName": "Diego", "lastName": "Silva", "department": "Sales",
      "role": "Account Executive", "leadsClosed": 17, "salesAmount": 120000 },
    { "id": 3, "firstName": "Yuki", "lastName": "Kim" }
]"#;

#[test]
fn parses_bare_array() {
    init_logging();
    let records = parse_roster(SAMPLE).expect("parse roster");
    assert_eq!(records.len(), 3);
    assert_eq!(records[0].recruitments, Some(6.0));
    assert_eq!(records[0].request_processing, None);
    assert_eq!(records[1].sales_amount, Some(120_000.0));
    assert_eq!(records[2].department, "", "missing department defaults to empty");
}

#[test]
fn parses_wrapped_object() {
    let json = format!(r#"{{ "employees": {SAMPLE} }}"#);
    let records = parse_roster(&json).expect("parse wrapped roster");
    assert_eq!(records.len(), 3);
    assert_eq!(records[1].first_name, "Diego");
}

#[test]
fn rejects_malformed_json() {
    let err = parse_roster(r#"[{ "firstName": "No Id" }]"#).unwrap_err();
    assert!(matches!(err, MetricsError::Serialization(_)), "got {err:?}");
}

#[test]
fn duplicate_ids_are_kept() {
    init_logging();
    let json = r#"[
        { "id": 7, "firstName": "A", "lastName": "B", "department": "HR" },
        { "id": 7, "firstName": "C", "lastName": "D", "department": "HR" }
    ]"#;
    let records = parse_roster(json).expect("parse roster");
    assert_eq!(records.len(), 2);
}

#[test]
fn load_roster_from_file() {
    let path = temp_roster("load", SAMPLE);
    let records = load_roster(&path).expect("load roster");
    let _ = std::fs::remove_file(&path);

    let members = generate_performance_metrics(&records);
    assert_eq!(members[1].metrics[0].status, MetricStatus::OnTrack);
    assert_eq!(members[1].metrics[1].status, MetricStatus::Exceeded);
    let progress = members[1].metrics[1].progress;
    assert!((progress - 120.0).abs() < 1e-9, "got {progress}");
    assert_eq!(members[2].metrics[0].label, "Tasks Completed");
}

#[test]
fn empty_roster_file_is_an_error() {
    let path = temp_roster("empty", "[]");
    let err = load_roster(&path).unwrap_err();
    let _ = std::fs::remove_file(&path);
    assert!(matches!(err, MetricsError::EmptyRoster { .. }), "got {err:?}");
}

#[test]
fn missing_roster_file_is_an_io_error() {
    let err = load_roster("/nonexistent/perfboard/roster.json").unwrap_err();
    match err {
        MetricsError::Io { path, .. } => assert!(path.ends_with("roster.json")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn members_json_reads_back() {
    let records = parse_roster(SAMPLE).expect("parse roster");
    let members = generate_performance_metrics(&records);
    let json = members_to_json(&members).expect("serialize members");

    assert!(json.contains("\"avatar\": \"AL\""), "{json}");
    assert!(json.contains("\"status\": \"on-track\""), "{json}");

    let back: Vec<perfboard_core::PerformanceMember> =
        serde_json::from_str(&json).expect("deserialize members");
    assert_eq!(back.len(), members.len());
    for (b, m) in back.iter().zip(&members) {
        assert_eq!((&b.id, &b.avatar, &b.department), (&m.id, &m.avatar, &m.department));
        assert_eq!(b.metrics[0].status, m.metrics[0].status);
    }
}
