use super::*;

// =============================================================
// Individual rules
// =============================================================

#[test]
fn email_requires_local_domain_and_tld() {
    assert!(is_email("a@b.co"));
    assert!(!is_email("a@b"));
    assert!(!is_email("@b.co"));
    assert!(!is_email("a b@c.co"));
    assert!(!is_email("a@@b.co"));
}

#[test]
fn phone_counts_digits_only() {
    assert!(is_phone("720-288-0102"));
    assert!(is_phone("(720) 288 0102"));
    assert!(!is_phone("288-0102"));
    assert!(!is_phone("1-720-288-0102"));
}

#[test]
fn zip_accepts_five_or_nine_digit_forms() {
    assert!(is_zip("22212"));
    assert!(is_zip("22212-1234"));
    assert!(!is_zip("2221"));
    assert!(!is_zip("22212-12"));
    assert!(!is_zip("abcde"));
}

#[test]
fn state_code_is_two_letters() {
    assert!(is_state_code("OH"));
    assert!(!is_state_code("Ohio"));
    assert!(!is_state_code("1A"));
}

#[test]
fn vehicle_year_bounds() {
    assert!(is_vehicle_year("2020", 2030));
    assert!(is_vehicle_year("1900", 2030));
    assert!(!is_vehicle_year("1899", 2030));
    assert!(!is_vehicle_year("2031", 2030));
    assert!(!is_vehicle_year("20", 2030));
}

#[test]
fn normalize_phone_strips_punctuation() {
    assert_eq!(normalize_phone("720-288-0102"), "7202880102");
}

// =============================================================
// Field dispatch
// =============================================================

#[test]
fn validate_field_reports_required_names() {
    assert_eq!(validate_field("firstName", "  "), Some("First name is required".to_owned()));
    assert_eq!(validate_field("lastName", ""), Some("Last name is required".to_owned()));
    assert_eq!(validate_field("firstName", "Ada"), None);
}

#[test]
fn validate_field_ignores_unknown_fields() {
    assert_eq!(validate_field("address.city", ""), None);
}

#[test]
fn update_errors_inserts_then_clears() {
    let mut errors = FieldErrors::new();
    update_errors(&mut errors, "email", "nope");
    assert_eq!(errors.get("email").map(String::as_str), Some("Invalid email address"));
    update_errors(&mut errors, "email", "ok@example.com");
    assert!(errors.is_empty());
}

#[test]
fn validate_all_collects_every_failure() {
    let errors = validate_all([
        ("firstName", ""),
        ("email", "x@y.z"),
        ("phoneNumber", "123"),
        ("address.zipCode", "99999"),
    ]);
    assert_eq!(errors.len(), 2);
    assert!(errors.contains_key("firstName"));
    assert!(errors.contains_key("phoneNumber"));
}
