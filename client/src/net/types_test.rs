use super::*;

// =============================================================
// Users
// =============================================================

#[test]
fn user_deserializes_camel_case_fields() {
    let raw = serde_json::json!({
        "id": "u-1",
        "firstName": "Ada",
        "lastName": "Lovelace",
        "email": "ada@example.com",
        "phoneNumber": "7202880102",
        "address": { "street": "1 Main", "city": "Sandusky", "state": "OH", "zipCode": "44870" },
        "preferredContact": "CALL",
        "createdAt": "2024-01-01T00:00:00Z"
    });
    let user: User = serde_json::from_value(raw).unwrap();
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.address.zip_code, "44870");
    assert_eq!(user.preferred_contact, Some(PreferredContact::Call));
    assert_eq!(user.updated_at, None);
}

#[test]
fn update_user_drops_phone_number() {
    let new_user = NewUser {
        first_name: "Ada".to_owned(),
        phone_number: "7202880102".to_owned(),
        ..NewUser::default()
    };
    let body = serde_json::to_value(UpdateUser::from(new_user)).unwrap();
    assert!(body.get("phoneNumber").is_none());
    assert_eq!(body["firstName"], "Ada");
    assert_eq!(body["preferredContact"], "TEXT");
}

#[test]
fn address_one_line_format() {
    let addr = Address {
        street: "123 Main".to_owned(),
        city: "Sandusky".to_owned(),
        state: "OH".to_owned(),
        zip_code: "22212".to_owned(),
    };
    assert_eq!(addr.one_line(), "123 Main, Sandusky, OH 22212");
}

#[test]
fn preferred_contact_from_value_defaults_to_text() {
    assert_eq!(PreferredContact::from_value("call"), PreferredContact::Call);
    assert_eq!(PreferredContact::from_value("EMAIL"), PreferredContact::Text);
}

// =============================================================
// Drivers
// =============================================================

#[test]
fn new_driver_omits_missing_vehicle_year() {
    let body = serde_json::to_value(NewDriver::default()).unwrap();
    assert!(body.get("vehicleYear").is_none());
    assert_eq!(body["vehicleMake"], "");
}

// =============================================================
// Pickups
// =============================================================

#[test]
fn pickup_status_unknown_values_do_not_fail() {
    let status: PickupStatus = serde_json::from_str("\"on_hold\"").unwrap();
    assert_eq!(status, PickupStatus::Unknown);
    let status: PickupStatus = serde_json::from_str("\"in_progress\"").unwrap();
    assert_eq!(status, PickupStatus::InProgress);
}

#[test]
fn pickup_location_label_handles_string_and_object() {
    let mut pickup: Pickup = serde_json::from_value(serde_json::json!({
        "id": "p-1",
        "userId": "u-1",
        "status": "pending",
        "location": "Dock 4"
    }))
    .unwrap();
    assert_eq!(pickup.location_label(), "Dock 4");

    pickup.location = Some(serde_json::json!({ "lat": 1.5 }));
    assert_eq!(pickup.location_label(), "{\"lat\":1.5}");

    pickup.location = None;
    assert_eq!(pickup.location_label(), "");
}

#[test]
fn list_envelopes_default_to_empty() {
    let users: UserList = serde_json::from_str("{}").unwrap();
    assert!(users.users.is_empty());
    let pickups: PickupList = serde_json::from_str(r#"{"pickups": []}"#).unwrap();
    assert!(pickups.pickups.is_empty());
}

#[test]
fn health_check_is_healthy_only_for_exact_status() {
    let ok = HealthCheck { status: "healthy".to_owned(), message: None };
    let bad = HealthCheck { status: "degraded".to_owned(), message: None };
    assert!(ok.is_healthy());
    assert!(!bad.is_healthy());
}
