//! Member assembly tests.
//!
//! Tests cover: id/name/avatar mapping, ordering, empty input, JSON shape.

use perfboard_core::{
    generate_performance_metrics, EmployeeRecord, MetricField, MetricStatus,
};

#[test]
fn hr_recruiter_example() {
    let roster = vec![EmployeeRecord::new(1, "Ann", "Lee", "HR", "Recruiter")
        .with_field(MetricField::Recruitments, 6.0)];

    let members = generate_performance_metrics(&roster);
    assert_eq!(members.len(), 1);

    let ann = &members[0];
    assert_eq!(ann.id, "1");
    assert_eq!(ann.name, "Ann Lee");
    assert_eq!(ann.avatar, "AL");
    assert_eq!(ann.department, "HR");
    assert_eq!(ann.role, "Recruiter");
    assert_eq!(ann.metrics[0].label, "Recruitments");
    assert_eq!(ann.metrics[0].status, MetricStatus::Exceeded);
    assert_eq!(ann.metrics[0].progress, 100.0);
}

#[test]
fn output_preserves_input_order() {
    let roster: Vec<EmployeeRecord> = [(30, "Sales"), (4, "Legal"), (17, "Accounting"), (4, "HR")]
        .into_iter()
        .map(|(id, dept)| EmployeeRecord::new(id, "First", "Last", dept, "Role"))
        .collect();

    let members = generate_performance_metrics(&roster);
    let ids: Vec<&str> = members.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, ["30", "4", "17", "4"]);
    let depts: Vec<&str> = members.iter().map(|m| m.department.as_str()).collect();
    assert_eq!(depts, ["Sales", "Legal", "Accounting", "HR"]);
}

#[test]
fn empty_roster_yields_no_members() {
    assert!(generate_performance_metrics(&[]).is_empty());
}

#[test]
fn unknown_department_member_gets_placeholder_labels() {
    let roster: Vec<EmployeeRecord> = ["Sales", "Ops"]
        .iter()
        .enumerate()
        .map(|(i, dept)| EmployeeRecord::new(i as u64, "A", "B", *dept, "R"))
        .collect();
    let members = generate_performance_metrics(&roster);

    let ops = &members[1];
    assert_eq!(ops.department, "Ops");
    let labels: Vec<&str> = ops.metrics.iter().map(|m| m.label.as_str()).collect();
    assert_eq!(labels, ["Tasks Completed", "Performance Score", "Attendance Rate"]);
    assert!(
        ops.metrics.iter().all(|m| m.status == MetricStatus::BelowTarget && m.progress == 0.0),
        "placeholder metrics must be zeroed: {:?}",
        ops.metrics
    );
}

#[test]
fn blank_names_fall_back_to_placeholder_initial() {
    let roster = vec![
        EmployeeRecord::new(5, "", "Okafor", "Sales", "Account Executive"),
        EmployeeRecord::new(6, "Wei", "  ", "Sales", "Account Executive"),
    ];
    let members = generate_performance_metrics(&roster);
    assert_eq!(members[0].avatar, "?O");
    assert_eq!(members[0].name, "Okafor");
    assert_eq!(members[1].avatar, "W?");
    assert_eq!(members[1].name, "Wei");
}

#[test]
fn initials_keep_the_name_as_written() {
    let roster = vec![
        EmployeeRecord::new(9, "ann", "lee", "HR", "Recruiter"),
        EmployeeRecord::new(10, "ßtefan", "Lee", "HR", "Recruiter"),
    ];
    let members = generate_performance_metrics(&roster);
    assert_eq!(members[0].avatar, "al");
    assert_eq!(members[1].avatar, "ßL");
    for member in &members {
        assert_eq!(member.avatar.chars().count(), 2, "avatar {:?}", member.avatar);
    }
}

#[test]
fn member_json_uses_camel_case() {
    let roster = vec![EmployeeRecord::new(1, "Ann", "Lee", "HR", "Recruiter")
        .with_field(MetricField::Recruitments, 6.0)];
    let json = serde_json::to_value(generate_performance_metrics(&roster)).unwrap();

    let member = &json[0];
    assert_eq!(member["id"], "1");
    assert_eq!(member["avatar"], "AL");
    assert_eq!(member["metrics"].as_array().map(Vec::len), Some(3));
    assert_eq!(member["metrics"][0]["currentValue"], 6.0);
    assert_eq!(member["metrics"][0]["status"], "exceeded");
}
