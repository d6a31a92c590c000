//! Label formatting helpers shared by grids, notifications, and forms.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Capitalize the first letter of each whitespace-delimited word and
/// lowercase the rest (`"pickup request"` -> `"Pickup Request"`).
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;
    for ch in input.chars() {
        if ch.is_whitespace() {
            at_word_start = true;
            out.push(ch);
        } else if at_word_start {
            at_word_start = false;
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// Derive a column header from a camelCase field name
/// (`"phoneNumber"` -> `"Phone Number"`, `"id"` -> `"Id"`).
pub fn header_from_field(field: &str) -> String {
    let mut out = String::with_capacity(field.len() + 4);
    let mut prev_lower = false;
    for (i, ch) in field.chars().enumerate() {
        if ch == '_' {
            out.push(' ');
            prev_lower = false;
            continue;
        }
        if i == 0 {
            out.extend(ch.to_uppercase());
        } else if ch.is_uppercase() && prev_lower {
            out.push(' ');
            out.push(ch);
        } else {
            out.push(ch);
        }
        prev_lower = ch.is_lowercase() || ch.is_ascii_digit();
    }
    out
}
