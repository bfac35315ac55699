use super::*;

// =============================================================
// Helpers
// =============================================================

fn activity(max: u32, participants: &[&str]) -> Activity {
    Activity {
        description: "Learn strategies".to_owned(),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_owned(),
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

// =============================================================
// Activity
// =============================================================

#[test]
fn activity_deserializes_all_fields() {
    let value = serde_json::json!({
        "description": "Learn strategies",
        "schedule": "Fridays, 3:30 PM - 5:00 PM",
        "max_participants": 12,
        "participants": ["michael@mergington.edu", "daniel@mergington.edu"]
    });
    let parsed: Activity = serde_json::from_value(value).unwrap();
    assert_eq!(
        parsed,
        activity(12, &["michael@mergington.edu", "daniel@mergington.edu"])
    );
}

#[test]
fn activity_missing_participants_is_empty() {
    let value = serde_json::json!({
        "description": "d",
        "schedule": "s",
        "max_participants": 3
    });
    let parsed: Activity = serde_json::from_value(value).unwrap();
    assert!(parsed.participants.is_empty());
}

#[test]
fn activity_rejects_negative_capacity() {
    let value = serde_json::json!({
        "description": "d",
        "schedule": "s",
        "max_participants": -1,
        "participants": []
    });
    assert!(serde_json::from_value::<Activity>(value).is_err());
}

#[test]
fn spots_left_subtracts_participant_count() {
    assert_eq!(activity(12, &["a@x", "b@x"]).spots_left(), 10);
    assert_eq!(activity(2, &["a@x", "b@x"]).spots_left(), 0);
    assert_eq!(activity(0, &[]).spots_left(), 0);
}

#[test]
fn spots_left_goes_negative_when_overfilled() {
    assert_eq!(activity(1, &["a@x", "b@x", "c@x"]).spots_left(), -2);
}

// =============================================================
// Catalog
// =============================================================

#[test]
fn catalog_preserves_server_key_order() {
    let raw = r#"{
        "Programming Class": {"description": "p", "schedule": "s", "max_participants": 20, "participants": []},
        "Chess Club": {"description": "c", "schedule": "s", "max_participants": 12, "participants": []},
        "Art Club": {"description": "a", "schedule": "s", "max_participants": 15, "participants": []}
    }"#;
    let catalog: Catalog = serde_json::from_str(raw).unwrap();
    let names: Vec<&str> = catalog.names().collect();
    assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Club"]);
}

#[test]
fn catalog_duplicate_key_keeps_position_takes_last_value() {
    let raw = r#"{
        "Chess Club": {"description": "old", "schedule": "s", "max_participants": 1, "participants": []},
        "Art Club": {"description": "a", "schedule": "s", "max_participants": 1, "participants": []},
        "Chess Club": {"description": "new", "schedule": "s", "max_participants": 1, "participants": []}
    }"#;
    let catalog: Catalog = serde_json::from_str(raw).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.names().next(), Some("Chess Club"));
    assert_eq!(catalog.get("Chess Club").unwrap().description, "new");
}

#[test]
fn catalog_empty_object_is_empty() {
    let catalog: Catalog = serde_json::from_str("{}").unwrap();
    assert!(catalog.is_empty());
}

#[test]
fn catalog_rejects_non_object_payloads() {
    assert!(serde_json::from_str::<Catalog>("[]").is_err());
    assert!(serde_json::from_str::<Catalog>(r#""nope""#).is_err());
    assert!(serde_json::from_str::<Catalog>(r#"{"Chess Club": 3}"#).is_err());
}

#[test]
fn catalog_from_iter_matches_insert_semantics() {
    let catalog: Catalog = vec![
        ("A".to_owned(), activity(1, &[])),
        ("B".to_owned(), activity(2, &[])),
        ("A".to_owned(), activity(3, &[])),
    ]
    .into_iter()
    .collect();
    let rows: Vec<(&str, u32)> = catalog.iter().map(|(n, a)| (n, a.max_participants)).collect();
    assert_eq!(rows, vec![("A", 3), ("B", 2)]);
}

// =============================================================
// SignupAccepted
// =============================================================

#[test]
fn signup_accepted_reads_message() {
    let parsed: SignupAccepted =
        serde_json::from_str(r#"{"message": "Signed up a@b.com for Chess Club"}"#).unwrap();
    assert_eq!(parsed.message, "Signed up a@b.com for Chess Club");
}

#[test]
fn signup_accepted_without_message_defaults_to_empty() {
    let parsed: SignupAccepted = serde_json::from_str("{}").unwrap();
    assert!(parsed.message.is_empty());
}
