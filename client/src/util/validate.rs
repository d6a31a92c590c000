//! Client-side form validation shared by the record forms.
//!
//! DESIGN
//! ======
//! Each rule returns `None` for valid input or the inline message to show next
//! to the field. Forms run every rule before submitting, so a record is never
//! sent while any field message is present.

#[cfg(test)]
#[path = "validate_test.rs"]
mod validate_test;

use std::collections::BTreeMap;

/// Field name -> inline error message.
pub type FieldErrors = BTreeMap<String, String>;

/// Validate a single named form field.
///
/// Unknown field names always pass.
pub fn validate_field(name: &str, value: &str) -> Option<String> {
    match name {
        "email" => (!is_email(value)).then(|| "Invalid email address".to_owned()),
        "phoneNumber" => (!is_phone(value)).then(|| "Phone number must be 10 digits".to_owned()),
        "address.zipCode" => (!is_zip(value)).then(|| "Invalid ZIP code".to_owned()),
        "address.state" => (!is_state_code(value)).then(|| "Use a 2-letter state code".to_owned()),
        "firstName" => value.trim().is_empty().then(|| "First name is required".to_owned()),
        "lastName" => value.trim().is_empty().then(|| "Last name is required".to_owned()),
        "vehicleYear" => (!is_vehicle_year(value, max_vehicle_year())).then(|| "Invalid vehicle year".to_owned()),
        _ => None,
    }
}

/// Re-validate `name` and insert or remove its entry in `errors`.
pub fn update_errors(errors: &mut FieldErrors, name: &str, value: &str) {
    match validate_field(name, value) {
        Some(msg) => {
            errors.insert(name.to_owned(), msg);
        }
        None => {
            errors.remove(name);
        }
    }
}

/// Validate every `(name, value)` pair and collect the failures.
pub fn validate_all<'a, I>(fields: I) -> FieldErrors
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut errors = FieldErrors::new();
    for (name, value) in fields {
        update_errors(&mut errors, name, value);
    }
    errors
}

/// `local@domain.tld` with no whitespace and exactly one `@`.
pub fn is_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Exactly ten digits once punctuation is stripped.
pub fn is_phone(value: &str) -> bool {
    value.chars().filter(char::is_ascii_digit).count() == 10
}

/// `12345` or `12345-6789`.
pub fn is_zip(value: &str) -> bool {
    let all_digits = |s: &str, n: usize| s.len() == n && s.bytes().all(|b| b.is_ascii_digit());
    match value.split_once('-') {
        Some((head, tail)) => all_digits(head, 5) && all_digits(tail, 4),
        None => all_digits(value, 5),
    }
}

pub fn is_state_code(value: &str) -> bool {
    value.len() == 2 && value.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Four-digit year between 1900 and `max_year` inclusive.
pub fn is_vehicle_year(value: &str, max_year: i32) -> bool {
    let trimmed = value.trim();
    if trimmed.len() != 4 {
        return false;
    }
    trimmed.parse::<i32>().is_ok_and(|y| (1900..=max_year).contains(&y))
}

/// Digits only, for submitting phone numbers in canonical form.
pub fn normalize_phone(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

fn max_vehicle_year() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        let year = i32::try_from(js_sys::Date::new_0().get_full_year()).unwrap_or(2099);
        year + 1
    }
    #[cfg(not(feature = "hydrate"))]
    {
        2100
    }
}
