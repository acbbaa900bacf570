//! Named notifications with fixed messages
//!
//! Pure convenience over [`Notifier::show`]; nothing here validates input.

use super::category::{AuthVariant, Category, FeatureVariant, GradientVariant, NetworkVariant};
use super::notifier::Notifier;
use super::style::StyleOverrides;
use super::toast::{ToastId, ToastPrimitive};

const DEFAULT_COPIED_ITEM: &str = "Content";
const NAVIGATION_ICON: &str = "🧭";
const NAVIGATION_DURATION_MS: u64 = 2000;

impl<T: ToastPrimitive> Notifier<T> {
    fn auth(&mut self, variant: AuthVariant, message: &str) -> ToastId {
        self.show(Category::Auth(variant), message, None)
    }

    fn network(&mut self, variant: NetworkVariant, message: &str) -> ToastId {
        self.show(Category::Network(variant), message, None)
    }

    pub fn auth_login_success(&mut self) -> ToastId {
        self.auth(
            AuthVariant::Login,
            "Welcome back! You have signed in successfully.",
        )
    }

    pub fn auth_signup_success(&mut self) -> ToastId {
        self.auth(
            AuthVariant::Signup,
            "Account created! Welcome to the alumni network.",
        )
    }

    pub fn auth_logout(&mut self) -> ToastId {
        self.auth(AuthVariant::Logout, "You have been signed out. See you soon!")
    }

    pub fn auth_invalid_credentials(&mut self) -> ToastId {
        self.auth(
            AuthVariant::InvalidCredentials,
            "Invalid email or password. Please try again.",
        )
    }

    pub fn auth_user_not_found(&mut self) -> ToastId {
        self.auth(
            AuthVariant::UserNotFound,
            "No account found with that email address.",
        )
    }

    pub fn auth_verification_required(&mut self) -> ToastId {
        self.auth(
            AuthVariant::VerificationRequired,
            "Please verify your email address to continue.",
        )
    }

    pub fn network_offline(&mut self) -> ToastId {
        self.network(
            NetworkVariant::Offline,
            "You are offline. Check your internet connection.",
        )
    }

    pub fn network_online(&mut self) -> ToastId {
        self.network(
            NetworkVariant::Online,
            "Back online! Your connection has been restored.",
        )
    }

    pub fn network_server_error(&mut self) -> ToastId {
        self.network(
            NetworkVariant::ServerError,
            "Server error. Please try again in a moment.",
        )
    }

    /// "<item> copied to clipboard!", item defaults to "Content"
    pub fn copied(&mut self, item: Option<&str>) -> ToastId {
        let item = item.unwrap_or(DEFAULT_COPIED_ITEM);
        self.success(&format!("{item} copied to clipboard!"), None)
    }

    pub fn navigation(&mut self, destination: &str) -> ToastId {
        let overrides = StyleOverrides::new()
            .icon(NAVIGATION_ICON)
            .duration_ms(NAVIGATION_DURATION_MS);
        self.info(&format!("Navigating to {destination}..."), Some(&overrides))
    }

    /// Teaser for an unreleased feature; unknown variants use `info`
    pub fn feature_preview(&mut self, feature: &str, variant: &str) -> ToastId {
        self.feature_preview_variant(feature, FeatureVariant::from_key_or_default(variant))
    }

    pub fn feature_preview_variant(&mut self, feature: &str, variant: FeatureVariant) -> ToastId {
        self.show(
            Category::FeaturePreview(variant),
            &format!("{feature} is coming soon! Stay tuned."),
            None,
        )
    }

    pub fn gradient(&mut self, message: &str, variant: GradientVariant) -> ToastId {
        self.show(Category::Gradient(variant), message, None)
    }
}

#[cfg(test)]
#[path = "presets_tests.rs"]
mod presets_tests;
