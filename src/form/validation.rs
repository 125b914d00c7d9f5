//! Input validation for the personal details form.
//!
//! Every check writes into an [`ErrorMap`] keyed by field. Fields are checked
//! independently, so one failing field never hides another.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::{FieldRecord, FormField};

pub const NAME_REQUIRED: &str = "Name is required";
pub const EMAIL_REQUIRED: &str = "Email is required";
pub const EMAIL_INVALID: &str = "Please enter a valid email format";
pub const PHONE_REQUIRED: &str = "Phone number is required";
pub const PHONE_TOO_SHORT: &str = "Phone number must be at least 10 digits";

/// Minimum number of digit characters in a phone number.
pub const MIN_PHONE_DIGITS: usize = 10;

lazy_static! {
    static ref EMAIL_PATTERN: Regex =
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid");
}

/// Field name to error message. An empty map means the record is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorMap {
    errors: BTreeMap<FormField, String>,
}

impl ErrorMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an error for a field, replacing any earlier message for it.
    pub fn add(&mut self, field: FormField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn get(&self, field: FormField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Drop the error for one field, used when the user edits it.
    pub fn clear(&mut self, field: FormField) -> Option<String> {
        self.errors.remove(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Errors in form order.
    pub fn iter(&self) -> impl Iterator<Item = (FormField, &str)> {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    /// All messages on one line, for a single notification.
    pub fn summary(&self) -> String {
        self.errors
            .values()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("; ")
    }

    /// Ok if no errors, otherwise the map itself.
    pub fn into_result(self) -> Result<(), ErrorMap> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl fmt::Display for ErrorMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (field, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "[{}] {}", field, message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorMap {}

/// Validate a whole record. Rebuilds the map from scratch on every call.
pub fn validate(record: &FieldRecord) -> ErrorMap {
    let mut errors = ErrorMap::new();

    validate_required(&record.name, FormField::Name, NAME_REQUIRED, &mut errors);
    validate_email(&record.email, &mut errors);
    validate_phone(&record.phone, &mut errors);

    errors
}

/// Validate that a string is not empty after trimming.
pub fn validate_required(value: &str, field: FormField, message: &str, errors: &mut ErrorMap) {
    if value.trim().is_empty() {
        errors.add(field, message);
    }
}

/// Validate email presence and `local@domain.tld` shape.
pub fn validate_email(value: &str, errors: &mut ErrorMap) {
    if value.trim().is_empty() {
        errors.add(FormField::Email, EMAIL_REQUIRED);
        return;
    }

    // Shape is checked on the raw value, so surrounding spaces fail it.
    if !EMAIL_PATTERN.is_match(value) {
        errors.add(FormField::Email, EMAIL_INVALID);
    }
}

/// Validate phone presence and digit count. Separators are ignored.
pub fn validate_phone(value: &str, errors: &mut ErrorMap) {
    if value.trim().is_empty() {
        errors.add(FormField::Phone, PHONE_REQUIRED);
        return;
    }

    if count_digits(value) < MIN_PHONE_DIGITS {
        errors.add(FormField::Phone, PHONE_TOO_SHORT);
    }
}

fn count_digits(value: &str) -> usize {
    value.chars().filter(|c| c.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: &str, phone: &str) -> FieldRecord {
        FieldRecord {
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            ..FieldRecord::default()
        }
    }

    #[test]
    fn test_missing_name_only() {
        let errors = validate(&record("", "a@b.c", "1234567890"));
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.get(FormField::Name), Some(NAME_REQUIRED));
    }

    #[test]
    fn test_bad_email_and_short_phone() {
        let errors = validate(&record("Jo", "not-an-email", "123"));
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.get(FormField::Email), Some(EMAIL_INVALID));
        assert_eq!(errors.get(FormField::Phone), Some(PHONE_TOO_SHORT));
        assert!(!errors.contains(FormField::Name));
    }

    #[test]
    fn test_formatted_phone_is_valid() {
        let errors = validate(&record("Jo", "jo@x.com", "(220) 222-2000"));
        assert!(errors.is_empty());
    }

    #[test]
    fn test_whitespace_only_is_required_error() {
        let errors = validate(&record("   ", " \t", "\n"));
        assert_eq!(errors.get(FormField::Name), Some(NAME_REQUIRED));
        assert_eq!(errors.get(FormField::Email), Some(EMAIL_REQUIRED));
        assert_eq!(errors.get(FormField::Phone), Some(PHONE_REQUIRED));
    }

    #[test]
    fn test_email_shapes() {
        let cases = [
            ("a@b.c", true),
            ("first.last@sub.example.org", true),
            ("a@b", false),
            ("a@@b.c", false),
            ("a b@c.d", false),
            (" a@b.c", false),
            ("@b.c", false),
            ("a@.c", false),
        ];
        for (email, ok) in cases {
            let mut errors = ErrorMap::new();
            validate_email(email, &mut errors);
            assert_eq!(errors.is_empty(), ok, "email {:?}", email);
        }
    }

    #[test]
    fn test_phone_digit_threshold() {
        let mut errors = ErrorMap::new();
        validate_phone("123-456-789", &mut errors);
        assert_eq!(errors.get(FormField::Phone), Some(PHONE_TOO_SHORT));

        let mut errors = ErrorMap::new();
        validate_phone("+1 (234) 567-8901 ext 99", &mut errors);
        assert!(errors.is_empty());
    }

    #[test]
    fn test_optional_fields_never_fail() {
        let mut input = record("Jo", "jo@x.com", "1234567890");
        input.position = String::new();
        input.description = "   ".into();
        assert!(validate(&input).is_empty());
    }

    #[test]
    fn test_summary_and_display() {
        let errors = validate(&record("", "", ""));
        assert_eq!(
            errors.summary(),
            "Name is required; Email is required; Phone number is required"
        );
        assert!(errors.to_string().starts_with("[name] Name is required"));
    }

    #[test]
    fn test_serializes_as_object() {
        let errors = validate(&record("", "x@y.z", "1234567890"));
        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({ "name": "Name is required" }));
    }
}
