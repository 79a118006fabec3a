use chrono::NaiveDate;
use taskctl_core::{is_valid_due_date, parse_due_date, Priority, Task};

#[test]
fn task_new_sets_defaults() {
    let task = Task::new("write report", Priority::Medium, "2025-12-31");

    assert_eq!(task.name, "write report");
    assert!(!task.done);
    assert_eq!(task.priority, Priority::Medium);
    assert_eq!(task.due_date, "2025-12-31");
}

#[test]
fn task_new_strips_surrounding_whitespace_from_name() {
    let task = Task::new("  buy milk  ", Priority::Low, "");

    assert_eq!(task.name, "buy milk");
}

#[test]
fn priority_parse_is_case_insensitive() {
    assert_eq!(Priority::parse("high"), Some(Priority::High));
    assert_eq!(Priority::parse(" MEDIUM "), Some(Priority::Medium));
    assert_eq!(Priority::parse("Low"), Some(Priority::Low));
}

#[test]
fn priority_parse_rejects_unknown_values() {
    assert_eq!(Priority::parse("urgent"), None);
    assert_eq!(Priority::parse(""), None);
}

#[test]
fn priority_weight_orders_high_before_low() {
    assert!(Priority::High.weight() < Priority::Medium.weight());
    assert!(Priority::Medium.weight() < Priority::Low.weight());
}

#[test]
fn due_date_validation_accepts_empty_and_calendar_dates() {
    assert!(is_valid_due_date(""));
    assert!(is_valid_due_date("2025-12-31"));
}

#[test]
fn due_date_validation_rejects_malformed_values() {
    assert!(!is_valid_due_date("31-12-2025"));
    assert!(!is_valid_due_date("2025-02-30"));
    assert!(!is_valid_due_date("soon"));
}

#[test]
fn due_date_validation_requires_canonical_layout() {
    assert!(is_valid_due_date("2025-01-01"));

    // Shapes the lenient parser accepts must still be re-prompted.
    assert!(!is_valid_due_date("2025-1-1"));
    assert!(!is_valid_due_date("25-01-01"));
    assert!(!is_valid_due_date("+2025-01-01"));
    assert!(!is_valid_due_date("-0001-01-01"));
}

#[test]
fn parse_due_date_returns_calendar_date_or_none() {
    let parsed = parse_due_date("2025-12-31").unwrap();
    assert_eq!(parsed, NaiveDate::from_ymd_opt(2025, 12, 31).unwrap());

    assert_eq!(parse_due_date(""), None);
    assert_eq!(parse_due_date("someday"), None);

    // Stored text from hand-edited files keeps parsing leniently.
    assert_eq!(
        parse_due_date("2025-1-1"),
        NaiveDate::from_ymd_opt(2025, 1, 1)
    );
}

#[test]
fn task_serialization_uses_expected_wire_fields() {
    let mut task = Task::new("ship release", Priority::High, "2025-11-01");
    task.done = true;

    let json = serde_json::to_value(&task).unwrap();
    assert_eq!(json["name"], "ship release");
    assert_eq!(json["done"], true);
    assert_eq!(json["priority"], "high");
    assert_eq!(json["dueDate"], "2025-11-01");

    let decoded: Task = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, task);
}

#[test]
fn deserialize_rejects_unknown_priority() {
    let value = serde_json::json!({
        "name": "mystery",
        "done": false,
        "priority": "urgent",
        "dueDate": ""
    });

    let err = serde_json::from_value::<Task>(value).unwrap_err();
    assert!(
        err.to_string().contains("unknown variant"),
        "unexpected error: {err}"
    );
}

#[test]
fn serialized_fields_keep_declaration_order() {
    let task = Task::new("ordered", Priority::Low, "2025-01-01");
    let body = serde_json::to_string_pretty(&task).unwrap();

    let name_at = body.find("\"name\"").unwrap();
    let done_at = body.find("\"done\"").unwrap();
    let priority_at = body.find("\"priority\"").unwrap();
    let due_at = body.find("\"dueDate\"").unwrap();
    assert!(name_at < done_at);
    assert!(done_at < priority_at);
    assert!(priority_at < due_at);
}
