use contact_core::ContactMessage;

#[test]
fn new_record_has_every_field_unset() {
    let record = ContactMessage::new();

    assert_eq!(record.id(), None);
    assert_eq!(record.name(), None);
    assert_eq!(record.email(), None);
    assert_eq!(record.message(), None);
    assert!(!record.is_persisted());
}

#[test]
fn mutators_round_trip_values_untransformed() {
    let mut record = ContactMessage::new();

    record.set_name("Alice");
    record.set_email("a@example.com");
    record.set_message("hi");

    assert_eq!(record.name(), Some("Alice"));
    assert_eq!(record.email(), Some("a@example.com"));
    assert_eq!(record.message(), Some("hi"));
    assert_eq!(record.id(), None);
}

#[test]
fn setting_one_field_leaves_the_others_untouched() {
    let mut record = ContactMessage::new();
    record.set_name("Alice");
    record.set_email("a@example.com");
    record.set_message("hi");

    record.set_email("b@example.com");

    assert_eq!(record.name(), Some("Alice"));
    assert_eq!(record.email(), Some("b@example.com"));
    assert_eq!(record.message(), Some("hi"));
}

#[test]
fn mutators_overwrite_unconditionally() {
    let mut record = ContactMessage::new();

    record.set_message("first");
    record.set_message("");
    assert_eq!(record.message(), Some(""));

    record.set_message("  spaced  ");
    assert_eq!(record.message(), Some("  spaced  "));
}

#[test]
fn set_id_marks_record_persisted() {
    let mut record = ContactMessage::new();
    record.set_id(42);

    assert_eq!(record.id(), Some(42));
    assert!(record.is_persisted());
}

#[test]
fn serialization_uses_expected_wire_fields() {
    let mut record = ContactMessage::new();
    record.set_name("Alice");
    record.set_email("a@example.com");
    record.set_message("hi");

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["id"], serde_json::Value::Null);
    assert_eq!(json["name"], "Alice");
    assert_eq!(json["email"], "a@example.com");
    assert_eq!(json["message"], "hi");

    let decoded: ContactMessage = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn deserialization_accepts_null_fields() {
    let value = serde_json::json!({
        "id": 7,
        "name": null,
        "email": null,
        "message": "only a body"
    });

    let record: ContactMessage = serde_json::from_value(value).unwrap();
    assert_eq!(record.id(), Some(7));
    assert_eq!(record.name(), None);
    assert_eq!(record.email(), None);
    assert_eq!(record.message(), Some("only a body"));
}
