//! Media upload service binding
//!
//! Only the credentials and a connectivity ping are handled here; uploads go
//! through the backend.

use serde::Deserialize;

use crate::error::AppError;

pub const CLOUD_NAME_VAR: &str = "CLOUDINARY_CLOUD_NAME";
pub const API_KEY_VAR: &str = "CLOUDINARY_API_KEY";
pub const API_SECRET_VAR: &str = "CLOUDINARY_API_SECRET";

pub const DEFAULT_API_BASE: &str = "https://api.cloudinary.com";

#[derive(Clone, PartialEq, Eq)]
pub struct MediaCredentials {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: String,
}

// Keep the secret out of logs
impl std::fmt::Debug for MediaCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaCredentials")
            .field("cloud_name", &self.cloud_name)
            .field("api_key", &self.api_key)
            .field("api_secret", &"***")
            .finish()
    }
}

impl MediaCredentials {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read each variable through `lookup`; missing or blank values are errors
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let require = |name: &'static str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or(AppError::MissingCredential(name))
        };

        Ok(Self {
            cloud_name: require(CLOUD_NAME_VAR)?,
            api_key: require(API_KEY_VAR)?,
            api_secret: require(API_SECRET_VAR)?,
        })
    }
}

#[derive(Deserialize)]
struct PingResponse {
    status: String,
}

#[derive(Debug, Clone)]
pub struct MediaClient {
    http: reqwest::Client,
    api_base: String,
    credentials: MediaCredentials,
}

impl MediaClient {
    pub fn new(credentials: MediaCredentials) -> Self {
        Self::with_api_base(credentials, DEFAULT_API_BASE)
    }

    pub fn with_api_base(credentials: MediaCredentials, api_base: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_base: api_base.trim_end_matches('/').to_string(),
            credentials,
        }
    }

    pub fn ping_url(&self) -> String {
        format!(
            "{}/v1_1/{}/ping",
            self.api_base, self.credentials.cloud_name
        )
    }

    /// Check that the service accepts the credentials
    pub async fn ping(&self) -> Result<(), AppError> {
        let response = self
            .http
            .get(self.ping_url())
            .basic_auth(
                &self.credentials.api_key,
                Some(&self.credentials.api_secret),
            )
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::MediaPing(format!("HTTP {}", status)));
        }

        let body: PingResponse = response.json().await?;
        if body.status != "ok" {
            return Err(AppError::MediaPing(format!("status {}", body.status)));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "media_tests.rs"]
mod media_tests;
