use super::*;

fn filled() -> PersonForm {
    let mut form = PersonForm::default();
    for (name, value) in [
        ("firstName", " Ada "),
        ("lastName", "Lovelace"),
        ("email", "ada@example.com"),
        ("phoneNumber", "(555) 123-4567"),
        ("address.street", "1 Main St"),
        ("address.city", "Springfield"),
        ("address.state", "il"),
        ("address.zipCode", "62701"),
        ("preferredContact", "CALL"),
    ] {
        assert!(form.set(name, value));
    }
    form
}

// =============================================================
// Mode
// =============================================================

#[test]
fn new_param_creates() {
    assert_eq!(FormMode::from_param(Some("new")), FormMode::Create);
    assert_eq!(FormMode::from_param(None), FormMode::Create);
    assert_eq!(FormMode::from_param(Some("42")), FormMode::Edit("42".to_owned()));
}

// =============================================================
// Field access
// =============================================================

#[test]
fn set_and_get_by_field_name() {
    let mut form = PersonForm::default();
    assert!(form.set("address.zipCode", "12345"));
    assert_eq!(form.get("address.zipCode"), "12345");
    assert!(!form.set("bogus", "x"));
    assert_eq!(form.get("bogus"), "");
}

#[test]
fn default_contact_is_text() {
    assert_eq!(PersonForm::default().get("preferredContact"), "TEXT");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn filled_form_is_valid() {
    assert!(filled().validate(FormKind::User, &FormMode::Create).is_empty());
}

#[test]
fn blank_form_reports_required_fields() {
    let errors = PersonForm::default().validate(FormKind::User, &FormMode::Create);
    for name in ["firstName", "lastName", "email", "phoneNumber", "address.state", "address.zipCode"] {
        assert!(errors.contains_key(name), "missing error for {name}");
    }
}

#[test]
fn phone_is_not_validated_on_edit() {
    let mut form = filled();
    form.set("phoneNumber", "");
    let errors = form.validate(FormKind::User, &FormMode::Edit("1".to_owned()));
    assert!(errors.is_empty());
}

#[test]
fn vehicle_year_checked_only_for_drivers_when_present() {
    let mut form = filled();
    assert!(form.validate(FormKind::Driver, &FormMode::Create).is_empty());
    form.set("vehicleYear", "1850");
    assert!(form.validate(FormKind::Driver, &FormMode::Create).contains_key("vehicleYear"));
    assert!(form.validate(FormKind::User, &FormMode::Create).is_empty());
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn new_user_normalizes_input() {
    let user = filled().to_new_user();
    assert_eq!(user.first_name, "Ada");
    assert_eq!(user.phone_number, "5551234567");
    assert_eq!(user.address.state, "IL");
    assert_eq!(user.preferred_contact, PreferredContact::Call);
}

#[test]
fn update_user_omits_phone() {
    let body = serde_json::to_value(filled().to_update_user()).unwrap();
    assert!(body.get("phoneNumber").is_none());
    assert_eq!(body["email"], "ada@example.com");
}

#[test]
fn driver_year_parses_or_is_omitted() {
    let mut form = filled();
    form.set("vehicleMake", "Ford");
    form.set("vehicleYear", "2020");
    assert_eq!(form.to_new_driver().vehicle_year, Some(2020));
    form.set("vehicleYear", "");
    let body = serde_json::to_value(form.to_update_driver()).unwrap();
    assert!(body.get("vehicleYear").is_none());
    assert_eq!(body["vehicleMake"], "Ford");
}

#[test]
fn round_trips_from_driver() {
    let driver = Driver {
        id: "d1".to_owned(),
        first_name: "Sam".to_owned(),
        last_name: "Hauler".to_owned(),
        email: "sam@example.com".to_owned(),
        phone_number: "5550001111".to_owned(),
        address: Address::default(),
        preferred_contact: None,
        vehicle_make: Some("Isuzu".to_owned()),
        vehicle_model: None,
        vehicle_year: Some(2019),
        created_at: None,
        updated_at: None,
    };
    let form = PersonForm::from_driver(&driver);
    assert_eq!(form.vehicle_year, "2019");
    assert_eq!(form.preferred_contact, "TEXT");
    assert_eq!(form.vehicle_model, "");
}
