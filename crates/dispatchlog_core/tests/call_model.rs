use dispatchlog_core::{CallRecord, Service, ServiceSet};

#[test]
fn record_exposes_constructed_fields() {
    let services = ServiceSet::of(&[Service::Fire]);
    let record = CallRecord::new(
        "Jane Doe",
        "+447123456789",
        "House fire",
        services,
        1_700_000_000_000,
    );

    assert_eq!(record.caller_name(), "Jane Doe");
    assert_eq!(record.phone_number(), "+447123456789");
    assert_eq!(record.description(), "House fire");
    assert_eq!(record.services_required(), services);
    assert_eq!(record.recorded_at(), 1_700_000_000_000);
}

#[test]
fn requires_tracks_service_membership() {
    let record = CallRecord::new(
        "Jane Doe",
        "+447123456789",
        "House fire",
        ServiceSet::of(&[Service::Fire]),
        1_700_000_000_000,
    );

    assert!(record.requires(Service::Fire));
    assert!(!record.requires(Service::Police));
    assert!(!record.requires(Service::Ambulance));
}

#[test]
fn record_identity_is_structural_over_every_field() {
    let services = ServiceSet::of(&[Service::Fire, Service::Police]);
    let record = CallRecord::new("Jane Doe", "+447123456789", "Break-in", services, 42);
    let twin = CallRecord::new("Jane Doe", "+447123456789", "Break-in", services, 42);
    let later = CallRecord::new("Jane Doe", "+447123456789", "Break-in", services, 43);

    assert_eq!(record, twin);
    assert_ne!(record, later);
}

#[test]
fn service_set_equality_is_by_membership_not_insertion_order() {
    let forward = ServiceSet::of(&[Service::Fire, Service::Ambulance]);
    let backward = ServiceSet::of(&[Service::Ambulance, Service::Fire]);
    let duplicated = ServiceSet::of(&[Service::Fire, Service::Fire, Service::Ambulance]);

    assert_eq!(forward, backward);
    assert_eq!(forward, duplicated);
    assert_eq!(forward.len(), 2);
}

#[test]
fn record_serialization_uses_expected_wire_fields() {
    let record = CallRecord::new(
        "Jane Doe",
        "+447123456789",
        "House fire",
        ServiceSet::of(&[Service::Police, Service::Fire]),
        1_700_000_000_000,
    );

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["caller_name"], "Jane Doe");
    assert_eq!(json["phone_number"], "+447123456789");
    assert_eq!(json["description"], "House fire");
    assert_eq!(json["services_required"], serde_json::json!(["fire", "police"]));
    assert_eq!(json["recorded_at"], 1_700_000_000_000_i64);

    let decoded: CallRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, record);
}

#[test]
fn deserialization_collapses_duplicate_services() {
    let json = serde_json::json!({
        "caller_name": "Sam Hill",
        "phone_number": "+447000000001",
        "description": "Collision",
        "services_required": ["ambulance", "ambulance", "police"],
        "recorded_at": 7
    });

    let decoded: CallRecord = serde_json::from_value(json).unwrap();
    assert_eq!(
        decoded.services_required(),
        ServiceSet::of(&[Service::Police, Service::Ambulance])
    );
}

#[test]
fn record_display_is_the_one_line_report_shape() {
    let record = CallRecord::new(
        "Jane Doe",
        "+447123456789",
        "House fire",
        ServiceSet::of(&[Service::Fire, Service::Ambulance]),
        1_700_000_000_000,
    );

    assert_eq!(
        record.to_string(),
        "Caller: Jane Doe, Phone: +447123456789, Emergency: House fire, Services: Fire, Ambulance"
    );
}

#[test]
fn service_labels_and_parse_agree() {
    for service in Service::ALL {
        assert_eq!(Service::parse(service.label()), Some(service));
    }
}
