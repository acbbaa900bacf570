//! Login form validation

use thiserror::Error;

use super::LoginForm;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter your email address.")]
    EmptyEmail,

    #[error("Please enter your password.")]
    EmptyPassword,

    #[error("Please enter a valid email address.")]
    MalformedEmail,
}

/// Check the form before anything leaves the page
pub fn validate_form(form: &LoginForm) -> Result<(), ValidationError> {
    let email = form.email.trim();

    if email.is_empty() {
        return Err(ValidationError::EmptyEmail);
    }
    if form.password.is_empty() {
        return Err(ValidationError::EmptyPassword);
    }
    if !is_valid_email(email) {
        return Err(ValidationError::MalformedEmail);
    }
    Ok(())
}

/// `local@domain.tld`: one `@`, no whitespace, and a dot inside the domain
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }

    match domain.rfind('.') {
        Some(dot) => dot > 0 && dot < domain.len() - 1,
        None => false,
    }
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod validation_tests;
