//! Login page controller
//!
//! Validates the form, simulates the sign-in round trip and records the
//! "remember me" choice in the key-value store. Feedback goes through a
//! blocking [`Alert`] for validation problems and toasts for everything else.

mod validation;

use std::time::Duration;

use crate::error::AppError;
use crate::notification::{Notifier, Outcome, ToastPrimitive};
use crate::storage::{EMAIL_KEY, KeyValueStore, REMEMBER_ME_KEY};

pub use validation::{ValidationError, is_valid_email, validate_form};

const SIGNING_IN_MESSAGE: &str = "Signing in...";
const INVALID_CREDENTIALS_ALERT: &str = "Invalid email or password";
const SAVE_FAILED_MESSAGE: &str = "Could not save your sign-in details.";

/// Blocking modal message, the `alert()` of the page
pub trait Alert {
    fn alert(&mut self, message: &str);
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    SignedIn,
    /// Form never left the page
    Rejected(ValidationError),
    /// Credentials were refused
    Denied,
}

pub type CredentialCheck = fn(&LoginForm) -> bool;

// TODO: replace with a real check against the backend login endpoint once it
// exists; until then every form that passes validation is accepted.
fn accept_validated(_form: &LoginForm) -> bool {
    true
}

pub struct LoginController<S: KeyValueStore, A: Alert> {
    store: S,
    alert: A,
    delay: Duration,
    credential_check: CredentialCheck,
}

impl<S: KeyValueStore, A: Alert> LoginController<S, A> {
    pub fn new(store: S, alert: A, delay: Duration) -> Self {
        Self {
            store,
            alert,
            delay,
            credential_check: accept_validated,
        }
    }

    pub fn with_credential_check(mut self, check: CredentialCheck) -> Self {
        self.credential_check = check;
        self
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn alert_sink(&self) -> &A {
        &self.alert
    }

    /// Email to pre-fill at page load, if the user asked to be remembered
    pub fn remembered_email(&self) -> Option<String> {
        match self.store.get(REMEMBER_ME_KEY).as_deref() {
            Some("true") => self.store.get(EMAIL_KEY),
            _ => None,
        }
    }

    /// Handle a form submission
    pub async fn submit<T: ToastPrimitive>(
        &mut self,
        form: &LoginForm,
        notifier: &mut Notifier<T>,
    ) -> Result<LoginOutcome, AppError> {
        if let Err(e) = validate_form(form) {
            log::debug!("Login form rejected: {}", e);
            self.alert.alert(&e.to_string());
            return Ok(LoginOutcome::Rejected(e));
        }

        let pending = notifier.loading(SIGNING_IN_MESSAGE, None);
        tokio::time::sleep(self.delay).await;

        if !(self.credential_check)(form) {
            notifier.dismiss(pending);
            self.alert.alert(INVALID_CREDENTIALS_ALERT);
            notifier.auth_invalid_credentials();
            return Ok(LoginOutcome::Denied);
        }

        if let Err(e) = self.remember(form) {
            notifier.resolve_loading(pending, Outcome::Error, SAVE_FAILED_MESSAGE);
            return Err(e);
        }

        notifier.dismiss(pending);
        notifier.auth_login_success();
        log::info!("Signed in as {}", form.email.trim());
        Ok(LoginOutcome::SignedIn)
    }

    fn remember(&mut self, form: &LoginForm) -> Result<(), AppError> {
        if form.remember_me {
            // The flag goes last so it never points at a missing email
            self.store.set(EMAIL_KEY, form.email.trim())?;
            self.store.set(REMEMBER_ME_KEY, "true")?;
        } else {
            self.store.remove(REMEMBER_ME_KEY)?;
            self.store.remove(EMAIL_KEY)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "login_tests.rs"]
mod login_tests;
