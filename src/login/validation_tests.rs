use super::*;
use proptest::prelude::*;

fn form(email: &str, password: &str) -> LoginForm {
    LoginForm {
        email: email.to_string(),
        password: password.to_string(),
        remember_me: false,
    }
}

#[test]
fn test_valid_form() {
    assert_eq!(validate_form(&form("user@example.com", "x")), Ok(()));
}

#[test]
fn test_email_is_trimmed() {
    assert_eq!(validate_form(&form("  user@example.com ", "x")), Ok(()));
}

#[test]
fn test_empty_email() {
    assert_eq!(
        validate_form(&form("", "secret")),
        Err(ValidationError::EmptyEmail)
    );
    assert_eq!(
        validate_form(&form("   ", "secret")),
        Err(ValidationError::EmptyEmail)
    );
}

#[test]
fn test_empty_password() {
    assert_eq!(
        validate_form(&form("user@example.com", "")),
        Err(ValidationError::EmptyPassword)
    );
}

#[test]
fn test_malformed_email() {
    assert_eq!(
        validate_form(&form("not-an-email", "x")),
        Err(ValidationError::MalformedEmail)
    );
}

#[test]
fn test_is_valid_email_cases() {
    assert!(is_valid_email("a@b.co"));
    assert!(is_valid_email("first.last@alumni.example.org"));

    assert!(!is_valid_email("not-an-email"));
    assert!(!is_valid_email("@example.com"));
    assert!(!is_valid_email("user@"));
    assert!(!is_valid_email("user@example"));
    assert!(!is_valid_email("user@.com"));
    assert!(!is_valid_email("user@example."));
    assert!(!is_valid_email("us er@example.com"));
    assert!(!is_valid_email("a@b@example.com"));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ValidationError::MalformedEmail.to_string(),
        "Please enter a valid email address."
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_strings_without_at_are_rejected(email in "[a-z0-9.]{1,30}") {
        prop_assert!(!is_valid_email(&email));
    }

    #[test]
    fn prop_simple_addresses_are_accepted(
        local in "[a-z0-9]{1,12}",
        domain in "[a-z]{1,12}",
        tld in "[a-z]{2,6}",
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email));
    }
}
