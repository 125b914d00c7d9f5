use personal_details::form::validation::{
    validate_email, validate_phone, validate_required, EMAIL_INVALID, NAME_REQUIRED,
    PHONE_TOO_SHORT,
};
use personal_details::{validate, ErrorMap, FieldRecord, FormField};

fn record(name: &str, email: &str, phone: &str) -> FieldRecord {
    FieldRecord {
        name: name.to_string(),
        email: email.to_string(),
        phone: phone.to_string(),
        position: String::new(),
        description: String::new(),
    }
}

#[test]
fn test_empty_name_is_the_only_error() {
    let errors = validate(&record("", "a@b.c", "1234567890"));
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(json, serde_json::json!({ "name": NAME_REQUIRED }));
}

#[test]
fn test_email_and_phone_errors_together() {
    let errors = validate(&record("Jo", "not-an-email", "123"));
    let json = serde_json::to_value(&errors).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "email": EMAIL_INVALID, "phone": PHONE_TOO_SHORT })
    );
}

#[test]
fn test_formatting_characters_are_ignored_in_phone() {
    assert!(validate(&record("Jo", "jo@x.com", "(220) 222-2000")).is_empty());
}

#[test]
fn test_valid_iff_all_rules_hold() {
    let names = ["", "  ", "Jo"];
    let emails = ["", "jo", "jo@x", "jo@x.com", "j o@x.com"];
    let phones = ["", "12345", "123-456-7890", "phone: 1 2 3 4 5 6 7 8 9"];

    for name in names {
        for email in emails {
            for phone in phones {
                let expected = !name.trim().is_empty()
                    && (email == "jo@x.com")
                    && phone.chars().filter(|c| c.is_ascii_digit()).count() >= 10;
                let errors = validate(&record(name, email, phone));
                assert_eq!(
                    errors.is_empty(),
                    expected,
                    "name={:?} email={:?} phone={:?} errors={}",
                    name,
                    email,
                    phone,
                    errors
                );
            }
        }
    }
}

#[test]
fn test_validation_is_repeatable() {
    let input = record("", "bad", "1");
    assert_eq!(validate(&input), validate(&input));
}

#[test]
fn test_single_field_helpers() {
    let mut errors = ErrorMap::new();
    validate_required("Jo", FormField::Name, NAME_REQUIRED, &mut errors);
    validate_email("jo@x.com", &mut errors);
    validate_phone("+62 812 3456 7890", &mut errors);
    assert!(errors.is_empty());

    validate_phone("12", &mut errors);
    assert_eq!(errors.iter().collect::<Vec<_>>(), vec![(FormField::Phone, PHONE_TOO_SHORT)]);
}
